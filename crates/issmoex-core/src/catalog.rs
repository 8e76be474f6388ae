//! Endpoint catalog.
//!
//! Every logical ISS request is one immutable [`EndpointDescriptor`] in
//! [`CATALOG`]. An [`EndpointRequest`] picks a descriptor, fills in path and
//! query inputs, and compiles to a [`CompiledRequest`] that
//! [`crate::executor::fetch`] runs. Paths are relative to the ISS host.
//!
//! | Endpoint | Table | Strategy |
//! |----------|-------|----------|
//! | `reference` | caller-chosen (`boards`) | single |
//! | `securities` | `securities` | single |
//! | `security-description` | `description` | single |
//! | `market-candle-borders` | `borders` | single |
//! | `board-candle-borders` | `borders` | single |
//! | `market-candles` | `candles` | paginated |
//! | `board-candles` | `candles` | paginated |
//! | `board-dates` | `dates` | single |
//! | `board-securities` | caller-chosen (`securities`) | single |
//! | `market-history` | `history` | paginated |
//! | `board-history` | `history` | paginated |
//! | `index-tickers` | `tickers` | single |
//! | `board-trades` | `trades` | single |
//! | `tradestats` | `data` | paginated |
//! | `orderstats` | `data` | paginated |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{IssError, ValidationError};
use crate::executor::Retrieval;
use crate::query::{QueryParams, WireQuery};
use crate::CandleInterval;

pub const DEFAULT_ENGINE: &str = "stock";
pub const DEFAULT_MARKET: &str = "shares";
pub const DEFAULT_BOARD: &str = "TQBR";
pub const INDEX_MARKET: &str = "index";

const CANDLE_COLUMNS: &[&str] = &["begin", "open", "close", "high", "low", "value", "volume"];

const HISTORY_COLUMNS: &[&str] = &["BOARDID", "TRADEDATE", "CLOSE", "VOLUME", "VALUE"];

const TRADE_COLUMNS: &[&str] = &[
    "TRADENO",
    "TRADETIME",
    "BOARDID",
    "SECID",
    "PRICE",
    "QUANTITY",
    "VALUE",
    "PERIOD",
    "TRADETIME_GRP",
    "SYSTIME",
    "BUYSELL",
    "DECIMALS",
    "TRADINGSESSION",
];

const TRADESTATS_COLUMNS: &[&str] = &[
    "tradedate",
    "tradetime",
    "secid",
    "pr_open",
    "pr_high",
    "pr_low",
    "pr_close",
    "pr_std",
    "vol",
    "val",
    "trades",
    "pr_vwap",
    "pr_change",
    "trades_b",
    "trades_s",
    "val_b",
    "val_s",
    "vol_b",
    "vol_s",
    "disb",
    "pr_vwap_b",
    "pr_vwap_s",
    "SYSTIME",
    "sec_pr_open",
    "sec_pr_high",
    "sec_pr_low",
    "sec_pr_close",
];

const ORDERSTATS_COLUMNS: &[&str] = &[
    "tradedate",
    "tradetime",
    "secid",
    "put_orders_b",
    "put_orders_s",
    "put_val_b",
    "put_val_s",
    "put_vol_b",
    "put_vol_s",
    "put_vwap_b",
    "put_vwap_s",
    "put_vol",
    "put_val",
    "put_orders",
    "cancel_orders_b",
    "cancel_orders_s",
    "cancel_val_b",
    "cancel_val_s",
    "cancel_vol_b",
    "cancel_vol_s",
    "cancel_vwap_b",
    "cancel_vwap_s",
    "cancel_vol",
    "cancel_val",
    "cancel_orders",
    "SYSTIME",
];

/// Logical ISS requests known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointId {
    Reference,
    Securities,
    SecurityDescription,
    MarketCandleBorders,
    BoardCandleBorders,
    MarketCandles,
    BoardCandles,
    BoardDates,
    BoardSecurities,
    MarketHistory,
    BoardHistory,
    IndexTickers,
    BoardTrades,
    TradeStats,
    OrderStats,
}

impl EndpointId {
    pub const ALL: [Self; 15] = [
        Self::Reference,
        Self::Securities,
        Self::SecurityDescription,
        Self::MarketCandleBorders,
        Self::BoardCandleBorders,
        Self::MarketCandles,
        Self::BoardCandles,
        Self::BoardDates,
        Self::BoardSecurities,
        Self::MarketHistory,
        Self::BoardHistory,
        Self::IndexTickers,
        Self::BoardTrades,
        Self::TradeStats,
        Self::OrderStats,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Securities => "securities",
            Self::SecurityDescription => "security-description",
            Self::MarketCandleBorders => "market-candle-borders",
            Self::BoardCandleBorders => "board-candle-borders",
            Self::MarketCandles => "market-candles",
            Self::BoardCandles => "board-candles",
            Self::BoardDates => "board-dates",
            Self::BoardSecurities => "board-securities",
            Self::MarketHistory => "market-history",
            Self::BoardHistory => "board-history",
            Self::IndexTickers => "index-tickers",
            Self::BoardTrades => "board-trades",
            Self::TradeStats => "tradestats",
            Self::OrderStats => "orderstats",
        }
    }

    pub fn descriptor(self) -> &'static EndpointDescriptor {
        &CATALOG[self as usize]
    }
}

impl Display for EndpointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or(ValidationError::InvalidEndpoint { value })
    }
}

/// Static protocol mapping for one logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub id: EndpointId,
    /// Path template with `{engine}`, `{market}`, `{board}`, `{security}`
    /// and `{index}` placeholders.
    pub path: &'static str,
    pub table: &'static str,
    /// Empty means "no projection".
    pub default_columns: &'static [&'static str],
    pub strategy: Retrieval,
    pub default_market: &'static str,
    /// Whether the query carries `iss.only` and the column projection.
    pub table_scoped: bool,
    /// Whether the caller may pick another table than `table`.
    pub table_selectable: bool,
}

impl EndpointDescriptor {
    const fn new(
        id: EndpointId,
        path: &'static str,
        table: &'static str,
        strategy: Retrieval,
    ) -> Self {
        Self {
            id,
            path,
            table,
            default_columns: &[],
            strategy,
            default_market: DEFAULT_MARKET,
            table_scoped: true,
            table_selectable: false,
        }
    }

    const fn columns(mut self, columns: &'static [&'static str]) -> Self {
        self.default_columns = columns;
        self
    }

    const fn unscoped(mut self) -> Self {
        self.table_scoped = false;
        self
    }

    const fn selectable(mut self) -> Self {
        self.table_selectable = true;
        self
    }

    const fn market(mut self, market: &'static str) -> Self {
        self.default_market = market;
        self
    }
}

/// Catalog indexed by `EndpointId as usize`.
pub static CATALOG: [EndpointDescriptor; 15] = [
    EndpointDescriptor::new(EndpointId::Reference, "/iss/index.json", "boards", Retrieval::Single)
        .unscoped()
        .selectable(),
    EndpointDescriptor::new(
        EndpointId::Securities,
        "/iss/securities.json",
        "securities",
        Retrieval::Single,
    )
    .columns(&["secid", "regnumber"]),
    EndpointDescriptor::new(
        EndpointId::SecurityDescription,
        "/iss/securities/{security}.json",
        "description",
        Retrieval::Single,
    )
    .columns(&["name", "title", "value"]),
    EndpointDescriptor::new(
        EndpointId::MarketCandleBorders,
        "/iss/engines/{engine}/markets/{market}/securities/{security}/candleborders.json",
        "borders",
        Retrieval::Single,
    )
    .unscoped(),
    EndpointDescriptor::new(
        EndpointId::BoardCandleBorders,
        "/iss/engines/{engine}/markets/{market}/boards/{board}/securities/{security}/candleborders.json",
        "borders",
        Retrieval::Single,
    )
    .unscoped(),
    EndpointDescriptor::new(
        EndpointId::MarketCandles,
        "/iss/engines/{engine}/markets/{market}/securities/{security}/candles.json",
        "candles",
        Retrieval::Paginated,
    )
    .columns(CANDLE_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::BoardCandles,
        "/iss/engines/{engine}/markets/{market}/boards/{board}/securities/{security}/candles.json",
        "candles",
        Retrieval::Paginated,
    )
    .columns(CANDLE_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::BoardDates,
        "/iss/history/engines/{engine}/markets/{market}/boards/{board}/dates.json",
        "dates",
        Retrieval::Single,
    )
    .unscoped(),
    EndpointDescriptor::new(
        EndpointId::BoardSecurities,
        "/iss/engines/{engine}/markets/{market}/boards/{board}/securities.json",
        "securities",
        Retrieval::Single,
    )
    .columns(&["SECID", "REGNUMBER", "LOTSIZE", "SHORTNAME"])
    .selectable(),
    EndpointDescriptor::new(
        EndpointId::MarketHistory,
        "/iss/history/engines/{engine}/markets/{market}/securities/{security}.json",
        "history",
        Retrieval::Paginated,
    )
    .columns(HISTORY_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::BoardHistory,
        "/iss/history/engines/{engine}/markets/{market}/boards/{board}/securities/{security}.json",
        "history",
        Retrieval::Paginated,
    )
    .columns(HISTORY_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::IndexTickers,
        "/iss/statistics/engines/{engine}/markets/{market}/analytics/{index}/tickers.json",
        "tickers",
        Retrieval::Single,
    )
    .columns(&["ticker", "from", "till", "tradingsession"])
    .market(INDEX_MARKET),
    EndpointDescriptor::new(
        EndpointId::BoardTrades,
        "/iss/engines/{engine}/markets/{market}/boards/{board}/securities/{security}/trades.json",
        "trades",
        Retrieval::Single,
    )
    .columns(TRADE_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::TradeStats,
        "/iss/datashop/algopack/eq/tradestats/{security}.json",
        "data",
        Retrieval::Paginated,
    )
    .columns(TRADESTATS_COLUMNS),
    EndpointDescriptor::new(
        EndpointId::OrderStats,
        "/iss/datashop/algopack/eq/orderstats/{security}.json",
        "data",
        Retrieval::Paginated,
    )
    .columns(ORDERSTATS_COLUMNS),
];

/// Values substituted into a descriptor's path template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    pub engine: Option<String>,
    pub market: Option<String>,
    pub board: Option<String>,
    pub security: Option<String>,
    pub index: Option<String>,
}

impl PathParams {
    /// Renders `descriptor.path`, falling back to the documented defaults
    /// for engine, market and board. An explicitly empty segment is an error.
    pub fn render(&self, descriptor: &EndpointDescriptor) -> Result<String, IssError> {
        let segments = [
            ("{engine}", "engine", Some(self.engine.as_deref().unwrap_or(DEFAULT_ENGINE))),
            (
                "{market}",
                "market",
                Some(self.market.as_deref().unwrap_or(descriptor.default_market)),
            ),
            ("{board}", "board", Some(self.board.as_deref().unwrap_or(DEFAULT_BOARD))),
            ("{security}", "security", self.security.as_deref()),
            ("{index}", "index", self.index.as_deref()),
        ];

        let mut path = descriptor.path.to_owned();
        for (placeholder, param, value) in segments {
            if !path.contains(placeholder) {
                continue;
            }
            let value = value
                .filter(|value| !value.is_empty())
                .ok_or(IssError::MissingPathParam {
                    endpoint: descriptor.id.as_str(),
                    param,
                })?;
            path = path.replace(placeholder, &urlencoding::encode(value));
        }

        Ok(path)
    }
}

/// A catalog request ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRequest {
    pub endpoint: EndpointId,
    pub path: String,
    pub query: WireQuery,
    pub table: String,
    pub strategy: Retrieval,
}

impl CompiledRequest {
    /// Absolute URL without the transport's own parameters.
    pub fn url(&self, base_url: &str) -> String {
        if self.query.is_empty() {
            format!("{base_url}{}", self.path)
        } else {
            format!("{base_url}{}?{}", self.path, self.query.to_query_string())
        }
    }
}

/// Builder for one logical request against a catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    endpoint: EndpointId,
    path: PathParams,
    params: QueryParams,
    table: Option<String>,
    columns: Option<Vec<String>>,
    tradeno: Option<String>,
}

impl EndpointRequest {
    pub fn new(endpoint: EndpointId) -> Self {
        Self {
            endpoint,
            path: PathParams::default(),
            params: QueryParams::default(),
            table: None,
            columns: None,
            tradeno: None,
        }
    }

    pub const fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.path.engine = Some(engine.into());
        self
    }

    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.path.market = Some(market.into());
        self
    }

    pub fn board(mut self, board: impl Into<String>) -> Self {
        self.path.board = Some(board.into());
        self
    }

    pub fn security(mut self, security: impl Into<String>) -> Self {
        self.path.security = Some(security.into());
        self
    }

    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.path.index = Some(index.into());
        self
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.params = self.params.q(q);
        self
    }

    pub fn interval(mut self, interval: CandleInterval) -> Self {
        self.params = self.params.candle_interval(interval);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.params = self.params.start(start);
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.params = self.params.end(end);
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.params = self.params.date(date);
        self
    }

    /// Date range where either bound may be open.
    pub fn range(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.params.start = start.map(str::to_owned);
        self.params.end = end.map(str::to_owned);
        self
    }

    /// Overrides the target table; ignored unless the endpoint is selectable.
    /// An empty name is kept and fails extraction.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Replaces the default projection. An empty list requests every column.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn all_columns(mut self) -> Self {
        self.columns = Some(Vec::new());
        self
    }

    /// Trade number to continue after; sent verbatim as `tradeno`.
    pub fn tradeno(mut self, tradeno: impl Into<String>) -> Self {
        self.tradeno = Some(tradeno.into());
        self
    }

    pub fn compile(&self) -> Result<CompiledRequest, IssError> {
        let descriptor = self.endpoint.descriptor();

        let table = match (&self.table, descriptor.table_selectable) {
            (Some(table), true) => table.clone(),
            _ => descriptor.table.to_owned(),
        };

        let path = self.path.render(descriptor)?;

        let mut params = self.params.clone();
        if descriptor.table_scoped {
            params.table = Some(table.clone());
            params.columns = Some(match &self.columns {
                Some(columns) => columns.clone(),
                None => descriptor
                    .default_columns
                    .iter()
                    .map(|column| (*column).to_owned())
                    .collect(),
            });
        }

        let mut query = params.encode();
        if let Some(tradeno) = self.tradeno.as_deref().filter(|t| !t.is_empty()) {
            query = query.with_param("tradeno", tradeno);
        }

        Ok(CompiledRequest {
            endpoint: self.endpoint,
            path,
            query,
            table,
            strategy: descriptor.strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::WireValue;

    #[test]
    fn catalog_is_indexed_by_endpoint_id() {
        for (position, id) in EndpointId::ALL.into_iter().enumerate() {
            assert_eq!(CATALOG[position].id, id, "catalog slot {position}");
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn endpoint_names_round_trip() {
        for id in EndpointId::ALL {
            assert_eq!(id.as_str().parse::<EndpointId>().expect("known name"), id);
        }
        assert!(matches!(
            "candles".parse::<EndpointId>(),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn series_endpoints_are_paginated() {
        let paginated: Vec<_> = CATALOG
            .iter()
            .filter(|d| d.strategy == Retrieval::Paginated)
            .map(|d| d.id)
            .collect();
        assert_eq!(
            paginated,
            vec![
                EndpointId::MarketCandles,
                EndpointId::BoardCandles,
                EndpointId::MarketHistory,
                EndpointId::BoardHistory,
                EndpointId::TradeStats,
                EndpointId::OrderStats,
            ]
        );
    }

    #[test]
    fn board_path_uses_defaults() {
        let compiled = EndpointRequest::new(EndpointId::BoardCandles)
            .security("GAZP")
            .compile()
            .expect("compiles");
        assert_eq!(
            compiled.path,
            "/iss/engines/stock/markets/shares/boards/TQBR/securities/GAZP/candles.json"
        );
    }

    #[test]
    fn index_endpoint_defaults_to_index_market() {
        let compiled = EndpointRequest::new(EndpointId::IndexTickers)
            .index("IMOEX")
            .date("2020-06-01")
            .compile()
            .expect("compiles");
        assert_eq!(
            compiled.path,
            "/iss/statistics/engines/stock/markets/index/analytics/IMOEX/tickers.json"
        );
        assert_eq!(compiled.query.get("date"), Some(&WireValue::from("2020-06-01")));
    }

    #[test]
    fn missing_security_is_reported() {
        let error = EndpointRequest::new(EndpointId::MarketHistory)
            .compile()
            .expect_err("security is required");
        assert!(matches!(
            error,
            IssError::MissingPathParam {
                endpoint: "market-history",
                param: "security"
            }
        ));
    }

    #[test]
    fn unscoped_endpoints_send_no_query() {
        for id in [
            EndpointId::Reference,
            EndpointId::MarketCandleBorders,
            EndpointId::BoardCandleBorders,
            EndpointId::BoardDates,
        ] {
            let compiled = EndpointRequest::new(id)
                .security("SBER")
                .columns(["x"])
                .compile()
                .expect("compiles");
            assert!(compiled.query.is_empty(), "{id} sent {:?}", compiled.query);
        }
    }

    #[test]
    fn reference_table_follows_placeholder() {
        let compiled = EndpointRequest::new(EndpointId::Reference)
            .table("engines")
            .compile()
            .expect("compiles");
        assert_eq!(compiled.table, "engines");
        assert_eq!(compiled.path, "/iss/index.json");
    }

    #[test]
    fn empty_reference_placeholder_is_kept() {
        let compiled = EndpointRequest::new(EndpointId::Reference)
            .table("")
            .compile()
            .expect("compiles");
        assert_eq!(compiled.table, "");
        assert!(compiled.query.is_empty());
    }

    #[test]
    fn empty_scope_segments_are_rejected() {
        let cases = [
            (EndpointRequest::new(EndpointId::BoardHistory).board(""), "board"),
            (EndpointRequest::new(EndpointId::BoardHistory).engine(""), "engine"),
            (EndpointRequest::new(EndpointId::BoardHistory).market(""), "market"),
        ];

        for (request, expected) in cases {
            let error = request
                .security("SBER")
                .compile()
                .expect_err("empty segment must not render");
            assert!(
                matches!(error, IssError::MissingPathParam { param, .. } if param == expected),
                "{expected}: {error:?}"
            );
        }
    }

    #[test]
    fn fixed_table_ignores_override() {
        let compiled = EndpointRequest::new(EndpointId::BoardHistory)
            .security("SBER")
            .table("marketdata")
            .compile()
            .expect("compiles");
        assert_eq!(compiled.table, "history");
    }

    #[test]
    fn board_securities_projection_follows_selected_table() {
        let compiled = EndpointRequest::new(EndpointId::BoardSecurities)
            .table("marketdata")
            .columns(["SECID", "LAST"])
            .compile()
            .expect("compiles");
        assert_eq!(
            compiled.query.get("iss.only"),
            Some(&WireValue::from("marketdata,history.cursor"))
        );
        assert_eq!(
            compiled.query.get("marketdata.columns"),
            Some(&WireValue::from("SECID,LAST"))
        );
    }

    #[test]
    fn all_columns_drops_projection_but_keeps_only() {
        let compiled = EndpointRequest::new(EndpointId::MarketCandles)
            .security("SBER")
            .all_columns()
            .compile()
            .expect("compiles");
        assert!(compiled.query.contains("iss.only"));
        assert!(!compiled.query.contains("candles.columns"));
        assert_eq!(compiled.query.get("interval"), None);
    }

    #[test]
    fn tradeno_is_appended_only_when_non_empty() {
        let with = EndpointRequest::new(EndpointId::BoardTrades)
            .security("SBER")
            .tradeno("7000000001")
            .compile()
            .expect("compiles");
        assert_eq!(with.query.get("tradeno"), Some(&WireValue::from("7000000001")));
        assert_eq!(with.strategy, Retrieval::Single);

        let without = EndpointRequest::new(EndpointId::BoardTrades)
            .security("SBER")
            .tradeno("")
            .compile()
            .expect("compiles");
        assert!(!without.query.contains("tradeno"));
    }

    #[test]
    fn algopack_endpoints_target_data_table() {
        for id in [EndpointId::TradeStats, EndpointId::OrderStats] {
            let compiled = EndpointRequest::new(id)
                .security("SBER")
                .compile()
                .expect("compiles");
            assert_eq!(compiled.table, "data");
            assert_eq!(
                compiled.query.get("iss.only"),
                Some(&WireValue::from("data,history.cursor"))
            );
            assert!(compiled.query.contains("data.columns"));
        }
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let compiled = EndpointRequest::new(EndpointId::SecurityDescription)
            .security("RU000A0JX0J2 ")
            .compile()
            .expect("compiles");
        assert_eq!(compiled.path, "/iss/securities/RU000A0JX0J2%20.json");
    }
}
