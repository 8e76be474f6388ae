use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for user-facing identifiers parsed from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid candle interval '{value}', expected one of 1, 10, 60, 24, 7, 31, 4 or 1m, 10m, 1h, 1d, 1w, 1M, 1q")]
    InvalidInterval { value: String },

    #[error("unknown endpoint '{value}'")]
    InvalidEndpoint { value: String },
}

/// Top-level error type for ISS requests.
#[derive(Debug, Error)]
pub enum IssError {
    #[error("table '{table}' is missing from the ISS response")]
    MissingTable { table: String },

    #[error("endpoint '{endpoint}' requires the '{param}' path parameter")]
    MissingPathParam {
        endpoint: &'static str,
        param: &'static str,
    },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("ISS returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed ISS document: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IssError {
    pub fn missing_table(table: impl Into<String>) -> Self {
        Self::MissingTable {
            table: table.into(),
        }
    }

    /// Whether the error is the recoverable "server sent no such table" case.
    pub const fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }
}
