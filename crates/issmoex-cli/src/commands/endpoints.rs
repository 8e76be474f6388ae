use issmoex_core::CATALOG;
use serde_json::{json, Value};

use crate::error::CliError;

/// Catalog listing with each endpoint's path template and defaults.
pub fn run() -> Result<Value, CliError> {
    let endpoints = CATALOG
        .iter()
        .map(|descriptor| {
            json!({
                "id": descriptor.id.as_str(),
                "path": descriptor.path,
                "table": descriptor.table,
                "strategy": descriptor.strategy.as_str(),
                "default_market": descriptor.default_market,
                "default_columns": descriptor.default_columns,
                "table_selectable": descriptor.table_selectable,
            })
        })
        .collect();
    Ok(Value::Array(endpoints))
}
