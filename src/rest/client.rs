//! CoinGecko REST API client implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::endpoints::{COINGECKO_BASE_URL, DEFAULT_TIMEOUT};
use crate::rest::query::{Params, QueryCase, QueryParams, build_url_with_case};

/// Environment variable overriding the base URL in [`CoinGeckoClientBuilder::from_env`].
pub const BASE_URL_ENV: &str = "COINGECKO_BASE_URL";

/// Environment variable overriding the timeout (whole seconds).
pub const TIMEOUT_SECS_ENV: &str = "COINGECKO_TIMEOUT_SECS";

/// The CoinGecko REST API client.
///
/// Holds one pooled HTTP client and a fixed timeout. Clones share the pool.
/// Every call issues exactly one GET and returns the decoded JSON body as-is.
///
/// # Example
///
/// ```rust,no_run
/// use coingecko_api_client::rest::{CoinGeckoClient, PriceRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoClient::new()?;
///
///     let request = PriceRequest::new(["bitcoin", "ethereum"], ["usd"]);
///     let prices = client.get_price(&request).await?;
///     println!("{}", prices);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinGeckoClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    timeout: Duration,
    query_case: QueryCase,
}

impl CoinGeckoClient {
    /// Create a new client against the public API with default settings.
    pub fn new() -> Result<Self, CoinGeckoError> {
        Self::builder().build()
    }

    /// Create a new client against a different API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, CoinGeckoError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::new()
    }

    /// The API root every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an endpoint path and parameter set.
    pub fn url(&self, path: &str, params: &Params) -> String {
        build_url_with_case(&self.base_url, path, params, self.query_case)
    }

    /// GET an endpoint with no query parameters.
    pub async fn get(&self, path: &str) -> Result<Value, CoinGeckoError> {
        self.execute(&format!("{}{}", self.base_url, path)).await
    }

    /// GET an endpoint with query parameters.
    pub async fn get_with_params<Q>(&self, path: &str, params: &Q) -> Result<Value, CoinGeckoError>
    where
        Q: QueryParams + ?Sized,
    {
        let url = self.url(path, &params.to_params());
        self.execute(&url).await
    }

    /// Perform one GET against a fully built URL and decode the JSON body.
    ///
    /// 4xx and 5xx responses are returned as [`CoinGeckoError::Status`]; the body
    /// is never decoded in that case.
    pub async fn execute(&self, url: &str) -> Result<Value, CoinGeckoError> {
        tracing::debug!(%url, "GET");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(%url, %status, "failed to read error response body: {}", e);
                    String::new()
                }
            };
            tracing::warn!(%url, %status, "CoinGecko returned an error status");
            return Err(CoinGeckoError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let body = response.bytes().await?;
        tracing::trace!(%url, bytes = body.len(), "response received");
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("query_case", &self.query_case)
            .finish()
    }
}

/// Builder for [`CoinGeckoClient`].
#[derive(Debug, Clone)]
pub struct CoinGeckoClientBuilder {
    base_url: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    max_retries: u32,
    query_case: QueryCase,
}

impl CoinGeckoClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINGECKO_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            user_agent: None,
            max_retries: 0,
            query_case: QueryCase::default(),
        }
    }

    /// Create a builder from defaults overridden by the environment.
    ///
    /// Reads `COINGECKO_BASE_URL` and `COINGECKO_TIMEOUT_SECS`. Unset variables
    /// keep the defaults; an unparseable timeout is ignored.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder.base_url = url;
        }
        if let Ok(raw) = std::env::var(TIMEOUT_SECS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => builder.timeout = Duration::from_secs(secs),
                Err(e) => tracing::warn!(value = %raw, "ignoring {}: {}", TIMEOUT_SECS_ENV, e),
            }
        }
        builder
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a separate timeout for establishing connections.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Retry transient failures up to `retries` times.
    ///
    /// Defaults to 0: every failure is returned to the caller immediately.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Choose how letter case is treated in query strings.
    pub fn query_case(mut self, case: QueryCase) -> Self {
        self.query_case = case;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CoinGeckoClient, CoinGeckoError> {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut reqwest_builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout);
        if let Some(connect_timeout) = self.connect_timeout {
            reqwest_builder = reqwest_builder.connect_timeout(connect_timeout);
        }
        let reqwest_client = reqwest_builder.build().map_err(CoinGeckoError::Client)?;

        let mut client = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(CoinGeckoClient {
            http_client: client.build(),
            base_url: self.base_url,
            timeout: self.timeout,
            query_case: self.query_case,
        })
    }
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CoinGeckoClient::new().unwrap();
        assert_eq!(client.base_url(), COINGECKO_BASE_URL);
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_url_uses_query_case() {
        let params = Params::new().with("ids", vec!["Bitcoin"]);

        let client = CoinGeckoClient::with_base_url("http://localhost").unwrap();
        assert_eq!(client.url("/simple/price", &params), "http://localhost/simple/price?ids=bitcoin");

        let client = CoinGeckoClient::builder()
            .base_url("http://localhost")
            .query_case(QueryCase::PreserveValues)
            .build()
            .unwrap();
        assert_eq!(client.url("/simple/price", &params), "http://localhost/simple/price?ids=Bitcoin");
    }

    #[test]
    fn test_debug_output() {
        let client = CoinGeckoClient::with_base_url("http://localhost").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("http://localhost"));
    }
}
