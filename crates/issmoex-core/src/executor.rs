use std::fmt::{Display, Formatter};

use tracing::debug;

use crate::catalog::CompiledRequest;
use crate::domain::{Table, TablesResponse};
use crate::error::IssError;
use crate::extract::extract_table;
use crate::query::WireQuery;
use crate::transport::TablesTransport;

/// How many exchanges an endpoint needs to return its full result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retrieval {
    /// One exchange; the result is bounded by the server.
    Single,
    /// Exchanges repeated by the transport until the cursor is exhausted.
    Paginated,
}

impl Retrieval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Paginated => "paginated",
        }
    }
}

impl Display for Retrieval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calls exactly one transport operation, chosen by `strategy`.
pub async fn retrieve(
    transport: &dyn TablesTransport,
    path: &str,
    query: &WireQuery,
    strategy: Retrieval,
) -> Result<TablesResponse, IssError> {
    match strategy {
        Retrieval::Single => transport.get(path, query).await,
        Retrieval::Paginated => transport.get_all(path, query).await,
    }
}

/// Runs a compiled request and returns its target table.
pub async fn fetch(
    transport: &dyn TablesTransport,
    request: &CompiledRequest,
) -> Result<Table, IssError> {
    debug!(
        endpoint = %request.endpoint,
        strategy = %request.strategy,
        path = %request.path,
        table = %request.table,
        "fetching iss table"
    );

    let response = retrieve(transport, &request.path, &request.query, request.strategy).await?;
    extract_table(response, &request.table)
}
