use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::auth;
use crate::config::ClientConfig;
use crate::domain::{merge_tables, Row, Table, TablesResponse, CURSOR_TABLE};
use crate::error::IssError;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};
use crate::query::WireQuery;
use crate::transport::{TablesFuture, TablesTransport};

/// ISS transport over an [`HttpClient`].
///
/// Every exchange asks for the `extended` JSON layout without metadata, so a
/// response body is `[{"charsetinfo": ...}, {"<table>": [{...}, ...], ...}]`.
#[derive(Clone)]
pub struct IssClient {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl IssClient {
    pub fn new(config: ClientConfig) -> Result<Self, IssError> {
        let http = ReqwestHttpClient::from_config(&config)?;
        Ok(Self::with_http_client(Arc::new(http), config))
    }

    pub fn with_http_client(http: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Logs in against the passport service with the shared HTTP session.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, IssError> {
        let accepted = auth::authenticate(
            self.http.as_ref(),
            &self.config.passport_url,
            username,
            password,
            self.config.timeout_ms,
        )
        .await?;
        Ok(accepted)
    }

    async fn fetch_block(
        &self,
        path: &str,
        query: &WireQuery,
        start: u64,
    ) -> Result<TablesResponse, IssError> {
        let mut params = WireQuery::new()
            .with_param("iss.json", "extended")
            .with_param("iss.meta", "off");
        for (name, value) in query.iter() {
            params = params.with_param(name, value.clone());
        }
        if start > 0 {
            params = params.with_param("start", start as i64);
        }

        let url = format!("{}?{}", self.url(path), params.to_query_string());
        debug!(url = %url, "iss request");

        let auth = match &self.config.passport_cert {
            Some(cert) => HttpAuth::Cookie(format!("MicexPassportCert={cert}")),
            None => HttpAuth::None,
        };
        let request = HttpRequest::get(url.as_str())
            .with_auth(&auth)
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http.execute(request).await?;
        if !response.is_success() {
            return Err(IssError::Status {
                status: response.status,
                url,
            });
        }

        decode_extended(&response.body)
    }

    async fn collect_all(&self, path: &str, query: &WireQuery) -> Result<TablesResponse, IssError> {
        let mut merged = TablesResponse::new();
        let mut start = 0_u64;

        loop {
            let mut block = self.fetch_block(path, query, start).await?;

            let next = match block.remove(CURSOR_TABLE) {
                Some(cursor_rows) => {
                    merge_tables(&mut merged, block);
                    Cursor::from_rows(&cursor_rows).and_then(Cursor::next_start)
                }
                None => {
                    let block_size = block.values().map(Vec::len).max().unwrap_or(0) as u64;
                    merge_tables(&mut merged, block);
                    (block_size > 0).then_some(start + block_size)
                }
            };

            debug!(path, start, next = ?next, "iss block merged");
            match next {
                Some(next) if next > start => start = next,
                _ => break,
            }
        }

        Ok(merged)
    }
}

impl TablesTransport for IssClient {
    fn get<'a>(&'a self, path: &'a str, query: &'a WireQuery) -> TablesFuture<'a> {
        Box::pin(self.fetch_block(path, query, 0))
    }

    fn get_all<'a>(&'a self, path: &'a str, query: &'a WireQuery) -> TablesFuture<'a> {
        Box::pin(self.collect_all(path, query))
    }
}

/// Position reported by the `history.cursor` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    index: u64,
    total: u64,
    page_size: u64,
}

impl Cursor {
    fn from_rows(rows: &[Row]) -> Option<Self> {
        let row = rows.first()?;
        Some(Self {
            index: row.get("INDEX").and_then(Value::as_u64)?,
            total: row.get("TOTAL").and_then(Value::as_u64)?,
            page_size: row.get("PAGESIZE").and_then(Value::as_u64)?,
        })
    }

    fn next_start(self) -> Option<u64> {
        let next = self.index + self.page_size;
        (next < self.total).then_some(next)
    }
}

/// Decodes an `iss.json=extended` body into its tables.
pub fn decode_extended(body: &str) -> Result<TablesResponse, IssError> {
    let document: Value = serde_json::from_str(body)?;
    let tables = match document {
        Value::Array(mut parts) if parts.len() == 2 => parts.pop(),
        _ => None,
    };
    let Some(Value::Object(tables)) = tables else {
        return Err(IssError::Decode(String::from(
            "expected a two-element array with a tables object",
        )));
    };

    let mut response = TablesResponse::new();
    for (name, rows) in tables {
        let rows: Table = serde_json::from_value(rows)
            .map_err(|e| IssError::Decode(format!("table '{name}' is not a list of rows: {e}")))?;
        response.insert(name, rows);
    }

    Ok(response)
}
