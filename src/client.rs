//! Transfer sources.
//!
//! [`TransferSource`] is the seam between the view and the network.
//! [`GraphQlClient`] is the production source that POSTs the transfer
//! query to the indexer's graph route.

use crate::config::Config;
use crate::error::FetchError;
use crate::types::Transfer;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::future::Future;

/// Longest response body kept in a [`FetchError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Something that can produce the current list of transfers.
pub trait TransferSource: Send + Sync + 'static {
    /// Fetch every transfer, in whatever order the source returns them.
    fn fetch_transfers(&self) -> impl Future<Output = Result<Vec<Transfer>, FetchError>>;
}

/// GraphQL client for the indexer API server.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    config: Config,
}

impl GraphQlClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetchError::InvalidEndpoint(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl TransferSource for GraphQlClient {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, FetchError> {
        tracing::debug!("POST {}", self.config.endpoint);

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&self.config.request_body())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let head: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

/// A source that always returns the same result. Used by tests and by
/// callers that already hold the transfers.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    transfers: Vec<Transfer>,
}

impl StaticSource {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }
}

impl TransferSource for StaticSource {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, FetchError> {
        Ok(self.transfers.clone())
    }
}
