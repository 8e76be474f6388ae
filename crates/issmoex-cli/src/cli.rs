//! CLI argument definitions for issmoex.
//!
//! # Commands
//!
//! | Command | Endpoint |
//! |---------|----------|
//! | `reference` | Placeholder values (`/iss/index.json`) |
//! | `search` | Security search |
//! | `describe` | Security description |
//! | `candle-borders` | Candle date ranges, market-wide or per board |
//! | `candles` | Candle series, market-wide or per board |
//! | `dates` | Board history date range |
//! | `securities` | Board security list or today's market data |
//! | `history` | Trading history, market-wide or per board |
//! | `index-tickers` | Index constituents |
//! | `trades` | Today's trades on a board |
//! | `tradestats` | AlgoPack trade statistics |
//! | `orderstats` | AlgoPack order statistics |
//! | `login` | Passport authentication check |
//! | `endpoints` | Catalog listing |
//!
//! # Global Options
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--base-url` | `ISSMOEX_BASE_URL` | `https://iss.moex.com` |
//! | `--timeout-ms` | `ISSMOEX_TIMEOUT_MS` | `30000` |
//! | `--username` | `ISSMOEX_USERNAME` | none |
//! | `--password` | `ISSMOEX_PASSWORD` | none |
//! | `--passport-cert` | `ISSMOEX_PASSPORT_CERT` | none |
//! | `--pretty` | | `false` |
//!
//! # Examples
//!
//! ```bash
//! issmoex history SBER --board TQBR --from 2020-01-01 --till 2020-01-10 --pretty
//! issmoex candles GAZP --interval 1h --from 2024-03-01 --columns begin,close
//! ISSMOEX_USERNAME=me ISSMOEX_PASSWORD=secret issmoex tradestats SBER --from 2024-03-01
//! ```

use clap::{Args, Parser, Subcommand};
use issmoex_core::config::DEFAULT_BASE_URL;
use issmoex_core::{CandleInterval, DEFAULT_BOARD};

/// Command-line client for the MOEX ISS market data API.
#[derive(Debug, Parser)]
#[command(name = "issmoex", author, version, about = "MOEX ISS market data client")]
pub struct Cli {
    /// ISS host, without a trailing path.
    #[arg(long, global = true, env = "ISSMOEX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-exchange timeout in milliseconds.
    #[arg(long, global = true, env = "ISSMOEX_TIMEOUT_MS", default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Passport login used before AlgoPack requests and by `login`.
    #[arg(long, global = true, env = "ISSMOEX_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "ISSMOEX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Previously issued MicexPassportCert cookie value.
    #[arg(long, global = true, env = "ISSMOEX_PASSPORT_CERT", hide_env_values = true)]
    pub passport_cert: Option<String>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List values of a URL placeholder (engines, markets, boards, ...).
    Reference(ReferenceArgs),
    /// Find securities by code, name, ISIN or registration number.
    Search(SearchArgs),
    /// Describe one security.
    Describe(SecurityArgs),
    /// Date ranges of available candles.
    CandleBorders(BordersArgs),
    /// Candle series.
    Candles(CandlesArgs),
    /// First and last history date of a board.
    Dates(DatesArgs),
    /// Securities traded on a board.
    Securities(BoardSecuritiesArgs),
    /// Daily trading history.
    History(HistoryArgs),
    /// Constituents of an index.
    IndexTickers(IndexTickersArgs),
    /// Today's trades on a board.
    Trades(TradesArgs),
    /// AlgoPack trade statistics (requires a subscription).
    Tradestats(AlgoPackArgs),
    /// AlgoPack order statistics (requires a subscription).
    Orderstats(AlgoPackArgs),
    /// Check passport credentials.
    Login,
    /// Print the endpoint catalog.
    Endpoints,
}

/// Engine and market overrides.
#[derive(Debug, Clone, Args)]
pub struct ScopeArgs {
    #[arg(long)]
    pub engine: Option<String>,

    #[arg(long)]
    pub market: Option<String>,
}

/// Column projection overrides.
#[derive(Debug, Clone, Args)]
pub struct ProjectionArgs {
    /// Comma-separated columns replacing the endpoint defaults.
    #[arg(long, value_delimiter = ',', conflicts_with = "all_columns")]
    pub columns: Option<Vec<String>>,

    /// Return every column the server provides.
    #[arg(long, default_value_t = false)]
    pub all_columns: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// First date, YYYY-MM-DD.
    #[arg(long)]
    pub from: Option<String>,

    /// Last date, YYYY-MM-DD.
    #[arg(long)]
    pub till: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReferenceArgs {
    #[arg(default_value = "boards")]
    pub placeholder: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct SecurityArgs {
    pub security: String,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct BordersArgs {
    pub security: String,

    /// Restrict to one board; market-wide when omitted.
    #[arg(long)]
    pub board: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Debug, Args)]
pub struct CandlesArgs {
    pub security: String,

    /// Restrict to one board; market-wide when omitted.
    #[arg(long)]
    pub board: Option<String>,

    /// Candle size: 1m, 10m, 1h, 1d, 1w, 1M, 1q or the ISS code.
    #[arg(long, default_value_t = CandleInterval::Day)]
    pub interval: CandleInterval,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct DatesArgs {
    #[arg(long, default_value = DEFAULT_BOARD)]
    pub board: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

#[derive(Debug, Args)]
pub struct BoardSecuritiesArgs {
    /// `securities` for the reference list, `marketdata` for today's results.
    #[arg(long, default_value = "securities")]
    pub table: String,

    #[arg(long, default_value = DEFAULT_BOARD)]
    pub board: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    pub security: String,

    /// Restrict to one board; market-wide when omitted.
    #[arg(long)]
    pub board: Option<String>,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct IndexTickersArgs {
    /// Index code, e.g. IMOEX.
    pub index: String,

    /// Only constituents used on this date.
    #[arg(long)]
    pub date: Option<String>,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct TradesArgs {
    pub security: String,

    #[arg(long, default_value = DEFAULT_BOARD)]
    pub board: String,

    /// Only trades after this trade number.
    #[arg(long)]
    pub tradeno: Option<String>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

#[derive(Debug, Args)]
pub struct AlgoPackArgs {
    pub security: String,

    #[command(flatten)]
    pub range: RangeArgs,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}
