//! Client configuration

use crate::auth::AccessTokenProvider;
use std::sync::Arc;

/// Client configuration for the receipt/order backends
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Retries on transient network errors (connect failure, timeout);
    /// never on 4xx responses
    pub transient_retries: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            transient_retries: 1,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the transient-error retry budget
    pub fn with_transient_retries(mut self, retries: u32) -> Self {
        self.transient_retries = retries;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_client(&self, tokens: Arc<dyn AccessTokenProvider>) -> super::HttpClient {
        super::HttpClient::new(self, tokens)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
