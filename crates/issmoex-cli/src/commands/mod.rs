mod endpoints;
mod login;

use issmoex_core::{
    fetch, ClientConfig, EndpointId, EndpointRequest, IssClient, Table,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::{Cli, Command, ProjectionArgs, RangeArgs, ScopeArgs};
use crate::error::CliError;

/// Runs the selected command and returns the JSON document to print.
pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    match build_request(&cli.command) {
        Some(request) => fetch_rows(cli, request).await,
        None => match cli.command {
            Command::Login => login::run(cli, &client(cli)?).await,
            _ => endpoints::run(),
        },
    }
}

async fn fetch_rows(cli: &Cli, request: EndpointRequest) -> Result<Value, CliError> {
    let client = client(cli)?;
    if requires_session(request.endpoint()) {
        login::ensure_session(cli, &client).await?;
    }

    let compiled = request.compile()?;
    debug!(url = %compiled.url(&client.config().base_url), "compiled request");

    let rows = fetch(&client, &compiled).await?;
    info!(endpoint = %compiled.endpoint, rows = rows.len(), "retrieved table");
    Ok(rows_to_value(rows))
}

fn client(cli: &Cli) -> Result<IssClient, CliError> {
    let mut config = ClientConfig::default()
        .with_base_url(cli.base_url.as_str())
        .with_timeout_ms(cli.timeout_ms);
    if let Some(cert) = &cli.passport_cert {
        config = config.with_passport_cert(cert.as_str());
    }
    Ok(IssClient::new(config)?)
}

fn requires_session(endpoint: EndpointId) -> bool {
    matches!(endpoint, EndpointId::TradeStats | EndpointId::OrderStats)
}

fn rows_to_value(rows: Table) -> Value {
    Value::Array(rows.into_iter().map(Value::Object).collect())
}

fn build_request(command: &Command) -> Option<EndpointRequest> {
    let request = match command {
        Command::Reference(args) => {
            EndpointRequest::new(EndpointId::Reference).table(args.placeholder.as_str())
        }
        Command::Search(args) => project(
            EndpointRequest::new(EndpointId::Securities).q(args.query.as_str()),
            &args.projection,
        ),
        Command::Describe(args) => project(
            EndpointRequest::new(EndpointId::SecurityDescription).security(args.security.as_str()),
            &args.projection,
        ),
        Command::CandleBorders(args) => {
            let request = match &args.board {
                Some(board) => {
                    EndpointRequest::new(EndpointId::BoardCandleBorders).board(board.as_str())
                }
                None => EndpointRequest::new(EndpointId::MarketCandleBorders),
            };
            scope(request.security(args.security.as_str()), &args.scope)
        }
        Command::Candles(args) => {
            let request = match &args.board {
                Some(board) => EndpointRequest::new(EndpointId::BoardCandles).board(board.as_str()),
                None => EndpointRequest::new(EndpointId::MarketCandles),
            };
            let request = request
                .security(args.security.as_str())
                .interval(args.interval);
            project(
                scope(range(request, &args.range), &args.scope),
                &args.projection,
            )
        }
        Command::Dates(args) => scope(
            EndpointRequest::new(EndpointId::BoardDates).board(args.board.as_str()),
            &args.scope,
        ),
        Command::Securities(args) => {
            let request = EndpointRequest::new(EndpointId::BoardSecurities)
                .table(args.table.as_str())
                .board(args.board.as_str());
            project(scope(request, &args.scope), &args.projection)
        }
        Command::History(args) => {
            let request = match &args.board {
                Some(board) => EndpointRequest::new(EndpointId::BoardHistory).board(board.as_str()),
                None => EndpointRequest::new(EndpointId::MarketHistory),
            };
            let request = request.security(args.security.as_str());
            project(
                scope(range(request, &args.range), &args.scope),
                &args.projection,
            )
        }
        Command::IndexTickers(args) => {
            let mut request =
                EndpointRequest::new(EndpointId::IndexTickers).index(args.index.as_str());
            if let Some(date) = &args.date {
                request = request.date(date.as_str());
            }
            project(request, &args.projection)
        }
        Command::Trades(args) => {
            let mut request = EndpointRequest::new(EndpointId::BoardTrades)
                .security(args.security.as_str())
                .board(args.board.as_str());
            if let Some(tradeno) = &args.tradeno {
                request = request.tradeno(tradeno.as_str());
            }
            project(scope(request, &args.scope), &args.projection)
        }
        Command::Tradestats(args) => project(
            range(
                EndpointRequest::new(EndpointId::TradeStats).security(args.security.as_str()),
                &args.range,
            ),
            &args.projection,
        ),
        Command::Orderstats(args) => project(
            range(
                EndpointRequest::new(EndpointId::OrderStats).security(args.security.as_str()),
                &args.range,
            ),
            &args.projection,
        ),
        Command::Login | Command::Endpoints => return None,
    };
    Some(request)
}

fn scope(mut request: EndpointRequest, args: &ScopeArgs) -> EndpointRequest {
    if let Some(engine) = &args.engine {
        request = request.engine(engine.as_str());
    }
    if let Some(market) = &args.market {
        request = request.market(market.as_str());
    }
    request
}

fn range(request: EndpointRequest, args: &RangeArgs) -> EndpointRequest {
    request.range(args.from.as_deref(), args.till.as_deref())
}

fn project(request: EndpointRequest, args: &ProjectionArgs) -> EndpointRequest {
    if args.all_columns {
        return request.all_columns();
    }
    match &args.columns {
        Some(columns) => request.columns(columns.iter().map(String::as_str)),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use issmoex_core::{Retrieval, WireValue};

    fn compile(args: &[&str]) -> issmoex_core::CompiledRequest {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        build_request(&cli.command)
            .expect("data command")
            .compile()
            .expect("request compiles")
    }

    #[test]
    fn session_commands_have_no_endpoint_request() {
        let cli = Cli::try_parse_from(["issmoex", "login"]).expect("valid arguments");
        assert!(build_request(&cli.command).is_none());
    }

    #[test]
    fn history_without_board_uses_market_endpoint() {
        let compiled = compile(&["issmoex", "history", "SBER", "--from", "2020-01-01"]);

        assert_eq!(compiled.endpoint, EndpointId::MarketHistory);
        assert_eq!(compiled.path, "/iss/history/engines/stock/markets/shares/securities/SBER.json");
        assert_eq!(compiled.strategy, Retrieval::Paginated);
        assert_eq!(
            compiled.query.get("from"),
            Some(&WireValue::from("2020-01-01"))
        );
        assert!(!compiled.query.contains("till"));
    }

    #[test]
    fn candles_with_board_and_engine_override() {
        let compiled = compile(&[
            "issmoex", "candles", "USD000UTSTOM", "--board", "CETS", "--engine", "currency",
            "--market", "selt", "--interval", "1h",
        ]);

        assert_eq!(compiled.endpoint, EndpointId::BoardCandles);
        assert_eq!(
            compiled.path,
            "/iss/engines/currency/markets/selt/boards/CETS/securities/USD000UTSTOM/candles.json"
        );
        assert_eq!(compiled.query.get("interval"), Some(&WireValue::Int(60)));
    }

    #[test]
    fn all_columns_drops_projection() {
        let compiled = compile(&["issmoex", "trades", "SBER", "--all-columns"]);

        assert_eq!(
            compiled.query.get("iss.only"),
            Some(&WireValue::from("trades,history.cursor"))
        );
        assert!(!compiled.query.contains("trades.columns"));
    }

    #[test]
    fn algopack_commands_need_a_session() {
        let cli = Cli::try_parse_from(["issmoex", "tradestats", "SBER"]).expect("valid arguments");
        assert!(requires_session(build_request(&cli.command).expect("data command").endpoint()));

        let cli = Cli::try_parse_from(["issmoex", "describe", "SBER"]).expect("valid arguments");
        assert!(!requires_session(build_request(&cli.command).expect("data command").endpoint()));
    }
}
