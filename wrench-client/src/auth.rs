//! Access token seam
//!
//! The auth collaborator (OAuth2 token exchange, refresh, logout) lives
//! outside this crate. The client only needs the current bearer token; it
//! signals an unauthorized session through a watch channel and leaves the
//! actual logout to the collaborator.

use async_trait::async_trait;

/// Source of the current access token
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, or `None` when the session is signed out or
    /// the token has expired and could not be refreshed
    async fn access_token(&self) -> Option<String>;
}

/// Fixed-token provider for tests and simple setups
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider with no token; every authenticated call fails fast
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}
