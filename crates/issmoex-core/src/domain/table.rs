use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// One record, columns in server order.
pub type Row = Map<String, Value>;

/// Rows of one named ISS table, in server order.
pub type Table = Vec<Row>;

/// Every table the server returned for one logical request, keyed by name.
pub type TablesResponse = BTreeMap<String, Table>;

/// Name of the auxiliary table ISS uses to describe pagination state.
pub const CURSOR_TABLE: &str = "history.cursor";

/// Appends every table of `block` onto the same-named table in `into`.
pub fn merge_tables(into: &mut TablesResponse, block: TablesResponse) {
    for (name, rows) in block {
        into.entry(name).or_default().extend(rows);
    }
}
