use reqwest::{header::ACCEPT, Client, StatusCode};
use std::time::Duration;

use crate::modules::kitty::schema::KittyResponse;

/// Upper bound for a single kitty request, independent of the poll delay.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to make HTTP request: {0}")]
    Network(String),
    #[error("unexpected HTTP response {0}")]
    Status(StatusCode),
    #[error("failed to parse JSON response: {0}")]
    Parse(String),
}

/// Lyf API client
/// Fetches a kitty from the public kitties endpoint, one request per call
pub struct LyfClient {
    client: Client,
    timeout: Duration,
}

impl LyfClient {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("lyf-exporter/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            timeout,
        }
    }

    /// Fetch and decode the kitty behind `url`.
    /// Anything but 200 is an error and the body is left unread.
    pub async fn fetch_kitty(&self, url: &str) -> Result<KittyResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    fn request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl Default for LyfClient {
    fn default() -> Self {
        Self::new()
    }
}
