//! Global market, search, exchange rate and miscellaneous endpoints.

use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints;
use crate::rest::query::{Params, QueryParams};

/// Request parameters for `/status_updates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdatesRequest {
    /// Filter by category (e.g. "general", "milestone").
    pub category: Option<String>,
    /// Filter by project type ("coin", "market").
    pub project_type: Option<String>,
    /// Results per page.
    pub per_page: Option<u32>,
    /// Page number.
    pub page: Option<u32>,
}

impl QueryParams for StatusUpdatesRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("category", self.category.as_deref())
            .with("project_type", self.project_type.as_deref())
            .with("per_page", self.per_page)
            .with("page", self.page)
    }
}

impl CoinGeckoClient {
    /// List project status updates.
    pub async fn get_status_updates(
        &self,
        request: &StatusUpdatesRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::STATUS_UPDATES, request).await
    }

    /// Get BTC-to-currency exchange rates.
    pub async fn get_exchange_rates(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::EXCHANGE_RATES).await
    }

    /// Search for coins, categories and markets.
    ///
    /// The query is lowercased with the rest of the query string unless the
    /// client was built with [`QueryCase::PreserveValues`](crate::rest::QueryCase).
    pub async fn get_search(&self, query: &str) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("query", query);
        self.get_with_params(endpoints::SEARCH, &params).await
    }

    /// Get the top trending coins by search volume.
    pub async fn get_search_trending(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::SEARCH_TRENDING).await
    }

    /// Get global cryptocurrency data.
    pub async fn get_global(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::GLOBAL).await
    }

    /// Get global DeFi data.
    pub async fn get_global_decentralized_finance_defi(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::GLOBAL_DEFI).await
    }

    /// Get public companies' holdings of a coin ("bitcoin" or "ethereum").
    pub async fn get_companies_public_treasury_by_coin_id(
        &self,
        coin_id: &str,
    ) -> Result<Value, CoinGeckoError> {
        self.get(&endpoints::companies_public_treasury(coin_id)).await
    }
}
