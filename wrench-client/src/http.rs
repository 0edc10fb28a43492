//! HTTP client for network-based API calls

use crate::auth::AccessTokenProvider;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// HTTP client for making network requests to the receipt/order backends
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn AccessTokenProvider>,
    transient_retries: u32,
    unauthorized_tx: Arc<watch::Sender<u64>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");
        let (unauthorized_tx, _) = watch::channel(0u64);

        Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
            transient_retries: config.transient_retries,
            unauthorized_tx: Arc::new(unauthorized_tx),
        }
    }

    /// Watch channel that ticks whenever the backend rejects the session.
    ///
    /// The auth collaborator subscribes here and performs the logout; the
    /// client itself never does.
    pub fn unauthorized_signal(&self) -> watch::Receiver<u64> {
        self.unauthorized_tx.subscribe()
    }

    fn note_unauthorized(&self) {
        self.unauthorized_tx.send_modify(|ticks| *ticks += 1);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build the authorization header, failing fast without a round-trip
    /// when no token is available
    async fn auth_header(&self) -> ClientResult<String> {
        match self.tokens.access_token().await {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => {
                self.note_unauthorized();
                Err(ClientError::Unauthorized)
            }
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let auth = self.auth_header().await?;

        let response = self
            .send_with_retry(
                || self.client.get(&url).header(AUTHORIZATION, auth.as_str()),
                cancel,
            )
            .await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let auth = self.auth_header().await?;

        let response = self
            .send_with_retry(
                || {
                    self.client
                        .get(&url)
                        .query(query)
                        .header(AUTHORIZATION, auth.as_str())
                },
                cancel,
            )
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let auth = self.auth_header().await?;

        let response = self
            .send_with_retry(
                || {
                    self.client
                        .post(&url)
                        .json(body)
                        .header(AUTHORIZATION, auth.as_str())
                },
                cancel,
            )
            .await?;
        self.handle_response(response).await
    }

    /// Send a request, retrying transient network failures within the
    /// configured budget. The cancellation token aborts the attempt and the
    /// caller discards the result; 4xx responses are never retried here.
    async fn send_with_retry(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> ClientResult<reqwest::Response> {
        let mut attempt: u32 = 0;
        loop {
            let send = build().send();
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                result = send => result,
            };

            match result {
                Ok(response) => return Ok(response),
                Err(err) if is_transient(&err) && attempt < self.transient_retries => {
                    attempt += 1;
                    debug!(attempt, error = %err, "Transient network error, retrying");
                }
                Err(err) if err.is_timeout() => return Err(ClientError::Timeout),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => {
                    self.note_unauthorized();
                    Err(ClientError::Unauthorized)
                }
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}
