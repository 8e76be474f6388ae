//! # Domain Models
//!
//! Shapes of the data that flows through an ISS request.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CandleInterval`] | Candle size with its ISS wire code |
//! | [`Row`] | One record, columns in server order |
//! | [`Table`] | Ordered rows of one named table |
//! | [`TablesResponse`] | All tables of one response, keyed by name |
//!
//! Rows are kept as loosely typed JSON objects: the column set depends on the
//! endpoint and on the projection the caller asked for.

mod interval;
mod table;

pub use interval::CandleInterval;
pub use table::{merge_tables, Row, Table, TablesResponse, CURSOR_TABLE};
