//! # issmoex core
//!
//! Request compilation and table extraction for the MOEX ISS JSON API.
//!
//! ## Overview
//!
//! A logical request ("daily candles for SBER between two dates") is turned
//! into an ISS path and query, dispatched through a [`TablesTransport`], and
//! the one table the caller asked for is pulled out of the multi-table
//! response.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Passport login with HTTP Basic credentials |
//! | [`catalog`] | Endpoint descriptors and the request builder |
//! | [`client`] | `IssClient`, the HTTP-backed transport with pagination |
//! | [`config`] | Client configuration |
//! | [`domain`] | Rows, tables and candle intervals |
//! | [`error`] | Core error types |
//! | [`executor`] | Retrieval strategies and the generic fetch routine |
//! | [`extract`] | Target table extraction |
//! | [`http_client`] | HTTP client abstraction |
//! | [`query`] | Wire parameter encoder |
//! | [`requests`] | One preset function per endpoint |
//! | [`transport`] | Table-level transport contract |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use issmoex_core::{requests, ClientConfig, IssClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IssClient::new(ClientConfig::default())?;
//!     let rows = requests::get_board_history(
//!         &client,
//!         "SBER",
//!         "TQBR",
//!         Some("2020-01-01"),
//!         Some("2020-01-10"),
//!     )
//!     .await?;
//!
//!     for row in &rows {
//!         println!("{} {}", row["TRADEDATE"], row["CLOSE"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ EndpointRequest  │  catalog descriptor + caller inputs
//! └────────┬─────────┘
//!          │ compile
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ CompiledRequest  │────▶│ QueryParams      │
//! │ path/query/table │     │ ::encode         │
//! └────────┬─────────┘     └──────────────────┘
//!          │ fetch
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ TablesTransport  │────▶│ HttpClient       │
//! │ get / get_all    │     │ (reqwest)        │
//! └────────┬─────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ extract_table    │
//! └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use issmoex_core::IssError;
//!
//! use issmoex_core::Table;
//!
//! fn rows_or_empty(result: Result<Table, IssError>) -> Result<Table, IssError> {
//!     match result {
//!         Err(IssError::MissingTable { .. }) => Ok(Vec::new()),
//!         other => other,
//!     }
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod executor;
pub mod extract;
pub mod http_client;
pub mod query;
pub mod requests;
pub mod transport;

pub use auth::authenticate;
pub use catalog::{
    CompiledRequest, EndpointDescriptor, EndpointId, EndpointRequest, PathParams, CATALOG,
    DEFAULT_BOARD, DEFAULT_ENGINE, DEFAULT_MARKET, INDEX_MARKET,
};
pub use client::{decode_extended, IssClient};
pub use config::ClientConfig;
pub use domain::{CandleInterval, Row, Table, TablesResponse, CURSOR_TABLE};
pub use error::{IssError, ValidationError};
pub use executor::{fetch, retrieve, Retrieval};
pub use extract::extract_table;
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use query::{QueryParams, WireQuery, WireValue};
pub use transport::{TablesFuture, TablesTransport};
