use anyhow::{anyhow, Result};
use serde::Serialize;
use std::env;
use std::time::Duration;
use url::Url;

/// GraphQL endpoint of the dashboard example indexer.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:29987/api/graph/fuel_examples";

/// Query selecting every transfer field the view needs.
pub const TRANSFER_QUERY: &str = "query { transfer { id contract_id receiver amount asset_id }}";

/// The indexer API requires a `params` field but ignores its value.
pub const DEFAULT_PARAMS: &str = "b";

/// Selector of the element the rendered table is mounted into.
pub const DEFAULT_CONTAINER_SELECTOR: &str = "#transfer-list";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the GraphQL endpoint
pub const ENDPOINT_ENV: &str = "TRANSFER_VIEW_ENDPOINT";

/// Environment variable overriding the request timeout (whole seconds)
pub const TIMEOUT_ENV: &str = "TRANSFER_VIEW_TIMEOUT_SECS";

/// JSON body POSTed to the indexer's graph route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub params: &'a str,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub query: String,
    pub params: String,
    pub container_selector: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            query: TRANSFER_QUERY.to_string(),
            params: DEFAULT_PARAMS.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build a config from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if `.env` files should be honored.
    pub fn from_env() -> Result<Self> {
        Self::with_overrides(env::var(ENDPOINT_ENV).ok(), env::var(TIMEOUT_ENV).ok())
    }

    /// Apply optional endpoint and timeout overrides on top of the defaults.
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid http(s) URL or the
    /// timeout is not a positive whole number of seconds.
    pub fn with_overrides(endpoint: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = endpoint.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            config.endpoint = parse_endpoint(raw)?;
        }

        if let Some(raw) = timeout_secs.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let secs: u64 = raw
                .parse()
                .map_err(|e| anyhow!("Invalid {} '{}': {}", TIMEOUT_ENV, raw, e))?;
            if secs == 0 {
                return Err(anyhow!("{} must be greater than zero", TIMEOUT_ENV));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn request_body(&self) -> GraphQlRequest<'_> {
        GraphQlRequest {
            query: &self.query,
            params: &self.params,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL");
        Self::new(endpoint)
    }
}

/// Parse an endpoint URL, accepting only http and https schemes.
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| anyhow!("Invalid endpoint '{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Unsupported endpoint scheme '{}' in '{}'", other, raw)),
    }
}
