//! One function per catalog endpoint, with the catalog's default columns.
//!
//! Each function is a thin [`EndpointRequest`] preset; use the builder
//! directly for custom projections, engines or markets.

use crate::catalog::{EndpointId, EndpointRequest};
use crate::domain::Table;
use crate::error::IssError;
use crate::executor::fetch;
use crate::transport::TablesTransport;
use crate::CandleInterval;

async fn run(transport: &dyn TablesTransport, request: EndpointRequest) -> Result<Table, IssError> {
    let compiled = request.compile()?;
    fetch(transport, &compiled).await
}

/// Values for a URL placeholder such as `engines`, `markets`, `boards`,
/// `boardgroups`, `durations`, `securitytypes`, `securitygroups` or
/// `securitycollections`. An empty placeholder yields `IssError::MissingTable`.
pub async fn get_reference(
    transport: &dyn TablesTransport,
    placeholder: &str,
) -> Result<Table, IssError> {
    run(transport, EndpointRequest::new(EndpointId::Reference).table(placeholder)).await
}

/// Securities whose code, name, ISIN, issuer or registration number contains `query`.
pub async fn find_securities(
    transport: &dyn TablesTransport,
    query: &str,
) -> Result<Table, IssError> {
    run(transport, EndpointRequest::new(EndpointId::Securities).q(query)).await
}

pub async fn find_security_description(
    transport: &dyn TablesTransport,
    security: &str,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::SecurityDescription).security(security),
    )
    .await
}

/// Available candle intervals and their date ranges across all boards.
pub async fn get_market_candle_borders(
    transport: &dyn TablesTransport,
    security: &str,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::MarketCandleBorders).security(security),
    )
    .await
}

pub async fn get_board_candle_borders(
    transport: &dyn TablesTransport,
    security: &str,
    board: &str,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::BoardCandleBorders)
            .security(security)
            .board(board),
    )
    .await
}

/// Candles across every primary board; one interval may yield a candle per board.
pub async fn get_market_candles(
    transport: &dyn TablesTransport,
    security: &str,
    interval: CandleInterval,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::MarketCandles)
            .security(security)
            .interval(interval)
            .range(start, end),
    )
    .await
}

pub async fn get_board_candles(
    transport: &dyn TablesTransport,
    security: &str,
    board: &str,
    interval: CandleInterval,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::BoardCandles)
            .security(security)
            .board(board)
            .interval(interval)
            .range(start, end),
    )
    .await
}

/// Single row with the `from` and `till` dates of the board's history.
pub async fn get_board_dates(
    transport: &dyn TablesTransport,
    board: &str,
) -> Result<Table, IssError> {
    run(transport, EndpointRequest::new(EndpointId::BoardDates).board(board)).await
}

/// `table` is `securities` for the reference list or `marketdata` for today's trading results.
pub async fn get_board_securities(
    transport: &dyn TablesTransport,
    table: &str,
    board: &str,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::BoardSecurities)
            .table(table)
            .board(board),
    )
    .await
}

pub async fn get_market_history(
    transport: &dyn TablesTransport,
    security: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::MarketHistory)
            .security(security)
            .range(start, end),
    )
    .await
}

pub async fn get_board_history(
    transport: &dyn TablesTransport,
    security: &str,
    board: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::BoardHistory)
            .security(security)
            .board(board)
            .range(start, end),
    )
    .await
}

/// Index constituents; with `date`, only those used in that day's calculation.
pub async fn get_index_tickers(
    transport: &dyn TablesTransport,
    index: &str,
    date: Option<&str>,
) -> Result<Table, IssError> {
    let mut request = EndpointRequest::new(EndpointId::IndexTickers).index(index);
    if let Some(date) = date {
        request = request.date(date);
    }
    run(transport, request).await
}

/// Today's trades, optionally only those after trade number `tradeno`.
pub async fn get_board_today_trades(
    transport: &dyn TablesTransport,
    security: &str,
    board: &str,
    tradeno: Option<&str>,
) -> Result<Table, IssError> {
    let mut request = EndpointRequest::new(EndpointId::BoardTrades)
        .security(security)
        .board(board);
    if let Some(tradeno) = tradeno {
        request = request.tradeno(tradeno);
    }
    run(transport, request).await
}

/// AlgoPack trade statistics; requires an authenticated session.
pub async fn get_tradestats(
    transport: &dyn TablesTransport,
    security: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::TradeStats)
            .security(security)
            .range(start, end),
    )
    .await
}

/// AlgoPack order statistics; requires an authenticated session.
pub async fn get_orderstats(
    transport: &dyn TablesTransport,
    security: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Table, IssError> {
    run(
        transport,
        EndpointRequest::new(EndpointId::OrderStats)
            .security(security)
            .range(start, end),
    )
    .await
}
