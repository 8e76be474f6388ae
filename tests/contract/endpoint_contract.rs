use issmoex_core::{EndpointId, EndpointRequest, Retrieval, CATALOG};

struct EndpointCase {
    id: EndpointId,
    path: &'static str,
    table: &'static str,
    strategy: Retrieval,
    projected_columns: usize,
}

#[rustfmt::skip]
fn endpoint_cases() -> Vec<EndpointCase> {
    use EndpointId::*;
    use Retrieval::*;

    vec![
        EndpointCase { id: Reference, path: "/iss/index.json", table: "boards", strategy: Single, projected_columns: 0 },
        EndpointCase { id: Securities, path: "/iss/securities.json", table: "securities", strategy: Single, projected_columns: 2 },
        EndpointCase { id: SecurityDescription, path: "/iss/securities/SBER.json", table: "description", strategy: Single, projected_columns: 3 },
        EndpointCase { id: MarketCandleBorders, path: "/iss/engines/stock/markets/shares/securities/SBER/candleborders.json", table: "borders", strategy: Single, projected_columns: 0 },
        EndpointCase { id: BoardCandleBorders, path: "/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER/candleborders.json", table: "borders", strategy: Single, projected_columns: 0 },
        EndpointCase { id: MarketCandles, path: "/iss/engines/stock/markets/shares/securities/SBER/candles.json", table: "candles", strategy: Paginated, projected_columns: 7 },
        EndpointCase { id: BoardCandles, path: "/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER/candles.json", table: "candles", strategy: Paginated, projected_columns: 7 },
        EndpointCase { id: BoardDates, path: "/iss/history/engines/stock/markets/shares/boards/TQBR/dates.json", table: "dates", strategy: Single, projected_columns: 0 },
        EndpointCase { id: BoardSecurities, path: "/iss/engines/stock/markets/shares/boards/TQBR/securities.json", table: "securities", strategy: Single, projected_columns: 4 },
        EndpointCase { id: MarketHistory, path: "/iss/history/engines/stock/markets/shares/securities/SBER.json", table: "history", strategy: Paginated, projected_columns: 5 },
        EndpointCase { id: BoardHistory, path: "/iss/history/engines/stock/markets/shares/boards/TQBR/securities/SBER.json", table: "history", strategy: Paginated, projected_columns: 5 },
        EndpointCase { id: IndexTickers, path: "/iss/statistics/engines/stock/markets/index/analytics/IMOEX/tickers.json", table: "tickers", strategy: Single, projected_columns: 4 },
        EndpointCase { id: BoardTrades, path: "/iss/engines/stock/markets/shares/boards/TQBR/securities/SBER/trades.json", table: "trades", strategy: Single, projected_columns: 13 },
        EndpointCase { id: TradeStats, path: "/iss/datashop/algopack/eq/tradestats/SBER.json", table: "data", strategy: Paginated, projected_columns: 27 },
        EndpointCase { id: OrderStats, path: "/iss/datashop/algopack/eq/orderstats/SBER.json", table: "data", strategy: Paginated, projected_columns: 26 },
    ]
}

#[test]
fn every_catalog_endpoint_has_a_contract_case() {
    let cases = endpoint_cases();
    assert_eq!(cases.len(), CATALOG.len());
    for (case, descriptor) in cases.iter().zip(CATALOG.iter()) {
        assert_eq!(case.id, descriptor.id);
    }
}

#[test]
fn default_requests_compile_to_fixed_paths_tables_and_strategies() {
    for case in endpoint_cases() {
        let compiled = EndpointRequest::new(case.id)
            .security("SBER")
            .index("IMOEX")
            .compile()
            .unwrap_or_else(|error| panic!("endpoint '{}' failed to compile: {error}", case.id));

        assert_eq!(compiled.path, case.path, "endpoint '{}': path", case.id);
        assert_eq!(compiled.table, case.table, "endpoint '{}': table", case.id);
        assert_eq!(compiled.strategy, case.strategy, "endpoint '{}': strategy", case.id);

        let projection_key = format!("{}.columns", case.table);
        let projected = compiled
            .query
            .get(&projection_key)
            .map(|value| value.to_string().split(',').count())
            .unwrap_or(0);
        assert_eq!(
            projected, case.projected_columns,
            "endpoint '{}': projected column count",
            case.id
        );
    }
}

#[test]
fn table_scoped_queries_always_request_the_cursor_table() {
    for descriptor in CATALOG.iter().filter(|descriptor| descriptor.table_scoped) {
        let compiled = EndpointRequest::new(descriptor.id)
            .security("SBER")
            .index("IMOEX")
            .compile()
            .expect("compiles");
        assert_eq!(
            compiled.query.get("iss.only").map(ToString::to_string),
            Some(format!("{},history.cursor", descriptor.table)),
            "endpoint '{}'",
            descriptor.id
        );
    }
}

#[test]
fn no_projection_key_without_a_table_scope() {
    for descriptor in CATALOG.iter().filter(|descriptor| !descriptor.table_scoped) {
        let compiled = EndpointRequest::new(descriptor.id)
            .security("SBER")
            .columns(["SECID"])
            .compile()
            .expect("compiles");
        assert!(
            compiled.query.iter().all(|(name, _)| !name.ends_with(".columns")),
            "endpoint '{}' leaked a projection",
            descriptor.id
        );
    }
}

#[test]
fn path_placeholders_accept_overrides() {
    let compiled = EndpointRequest::new(EndpointId::BoardHistory)
        .engine("currency")
        .market("selt")
        .board("CETS")
        .security("USD000UTSTOM")
        .compile()
        .expect("compiles");
    assert_eq!(
        compiled.path,
        "/iss/history/engines/currency/markets/selt/boards/CETS/securities/USD000UTSTOM.json"
    );
}
