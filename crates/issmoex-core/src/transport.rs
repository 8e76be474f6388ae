//! Table-level transport contract.
//!
//! The core never talks HTTP directly: it hands a catalog path and a
//! [`WireQuery`] to a [`TablesTransport`] and gets decoded tables back.
//! [`crate::IssClient`] is the production implementation.

use std::future::Future;
use std::pin::Pin;

use crate::domain::TablesResponse;
use crate::error::IssError;
use crate::query::WireQuery;

pub type TablesFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TablesResponse, IssError>> + Send + 'a>>;

/// Collaborator that performs ISS exchanges and decodes their tables.
pub trait TablesTransport: Send + Sync {
    /// One exchange; the decoded tables are returned as is.
    fn get<'a>(&'a self, path: &'a str, query: &'a WireQuery) -> TablesFuture<'a>;

    /// Repeats the exchange, advancing the server cursor, and concatenates
    /// same-named tables across blocks until the server reports no more data.
    fn get_all<'a>(&'a self, path: &'a str, query: &'a WireQuery) -> TablesFuture<'a>;
}
