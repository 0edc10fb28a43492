//! Wrench Client - HTTP client for the receipt and order backends
//!
//! Typed endpoint calls with bearer authentication, bounded retry on
//! transient network errors, per-request cancellation, and DTO-to-model
//! mapping at the edge.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod receipts;
pub mod reconciliation;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use reconciliation::OrderReconciliationService;
