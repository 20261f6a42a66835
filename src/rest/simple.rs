//! Ping and `/simple` endpoints.

use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints;
use crate::rest::query::{Params, QueryParams};

/// Optional fields attached to each price in a `/simple` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceInclusions {
    /// Include market capitalisation.
    pub market_cap: bool,
    /// Include 24h volume.
    pub vol_24h: bool,
    /// Include 24h change.
    pub change_24h: bool,
    /// Include the last update timestamp.
    pub last_updated_at: bool,
}

impl PriceInclusions {
    /// Every optional field enabled.
    pub fn all() -> Self {
        Self {
            market_cap: true,
            vol_24h: true,
            change_24h: true,
            last_updated_at: true,
        }
    }

    fn append_to(&self, params: &mut Params) {
        params.push("include_market_cap", self.market_cap);
        params.push("include_24hr_vol", self.vol_24h);
        params.push("include_24hr_change", self.change_24h);
        params.push("include_last_updated_at", self.last_updated_at);
    }
}

/// Request parameters for `/simple/price`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRequest {
    /// Coin ids (e.g. "bitcoin").
    pub ids: Vec<String>,
    /// Quote currencies (e.g. "usd").
    pub vs_currencies: Vec<String>,
    /// Optional fields to include.
    pub include: PriceInclusions,
}

impl PriceRequest {
    /// Create a new price request.
    pub fn new<I, V>(ids: I, vs_currencies: V) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            include: PriceInclusions::default(),
        }
    }

    /// Set the optional fields to include.
    pub fn include(mut self, include: PriceInclusions) -> Self {
        self.include = include;
        self
    }
}

impl QueryParams for PriceRequest {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("ids", self.ids.clone())
            .with("vs_currencies", self.vs_currencies.clone());
        self.include.append_to(&mut params);
        params
    }
}

/// Request parameters for `/simple/token_price/{platform}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPriceRequest {
    /// Asset platform id (e.g. "ethereum").
    pub platform_id: String,
    /// Token contract addresses.
    pub contract_addresses: Vec<String>,
    /// Quote currencies.
    pub vs_currencies: Vec<String>,
    /// Optional fields to include.
    pub include: PriceInclusions,
}

impl TokenPriceRequest {
    /// Create a new token price request.
    pub fn new<A, V>(platform_id: impl Into<String>, contract_addresses: A, vs_currencies: V) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            platform_id: platform_id.into(),
            contract_addresses: contract_addresses.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            include: PriceInclusions::default(),
        }
    }

    /// Set the optional fields to include.
    pub fn include(mut self, include: PriceInclusions) -> Self {
        self.include = include;
        self
    }
}

impl QueryParams for TokenPriceRequest {
    fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("contract_addresses", self.contract_addresses.clone())
            .with("vs_currencies", self.vs_currencies.clone());
        self.include.append_to(&mut params);
        params
    }
}

impl CoinGeckoClient {
    /// Check API server status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new()?;
    ///     let pong = client.ping().await?;
    ///     println!("{}", pong["gecko_says"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::PING).await
    }

    /// Get the current price of coins in one or more quote currencies.
    pub async fn get_price(&self, request: &PriceRequest) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::SIMPLE_PRICE, request).await
    }

    /// Get the current price of tokens by contract address.
    pub async fn get_token_price(
        &self,
        request: &TokenPriceRequest,
    ) -> Result<Value, CoinGeckoError> {
        let path = endpoints::simple_token_price(&request.platform_id);
        self.get_with_params(&path, request).await
    }

    /// Get the list of supported quote currencies.
    pub async fn get_supported_vs_currencies(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::SIMPLE_SUPPORTED_VS_CURRENCIES).await
    }
}
