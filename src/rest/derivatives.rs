//! Derivatives endpoints.

use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints;
use crate::rest::query::{Params, QueryParams};
use crate::types::{DerivativesExchangeOrder, IncludeTickers};

/// Request parameters for `/derivatives/exchanges`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivativesExchangesRequest {
    /// Sort order.
    pub order: Option<DerivativesExchangeOrder>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page number.
    pub page: Option<u32>,
}

impl QueryParams for DerivativesExchangesRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("order", self.order)
            .with("per_page", self.per_page)
            .with("page", self.page)
    }
}

impl CoinGeckoClient {
    /// List all derivative tickers.
    pub async fn get_derivatives(
        &self,
        include_tickers: Option<IncludeTickers>,
    ) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("include_tickers", include_tickers);
        self.get_with_params(endpoints::DERIVATIVES, &params).await
    }

    /// List derivative exchanges.
    pub async fn get_derivatives_exchanges(
        &self,
        request: &DerivativesExchangesRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::DERIVATIVES_EXCHANGES, request).await
    }

    /// Get a derivative exchange, optionally with its tickers.
    pub async fn get_derivatives_exchanges_by_id(
        &self,
        id: &str,
        include_tickers: Option<IncludeTickers>,
    ) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("include_tickers", include_tickers);
        self.get_with_params(&endpoints::derivatives_exchange(id), &params).await
    }

    /// List all derivative exchange ids and names.
    pub async fn get_derivatives_exchanges_list(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::DERIVATIVES_EXCHANGES_LIST).await
    }
}
