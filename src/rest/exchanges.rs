//! Exchange and index endpoints.

use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints;
use crate::rest::query::{Params, QueryParams};
use crate::types::{Page, TickerOrder};

/// Request parameters for `/exchanges/{id}/tickers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeTickersRequest {
    /// Restrict to tickers of these coins.
    pub coin_ids: Vec<String>,
    /// Include exchange logos.
    pub include_exchange_logo: bool,
    /// Page number.
    pub page: Option<u32>,
    /// Include 2% order book depth.
    pub depth: bool,
    /// Sort order.
    pub order: Option<TickerOrder>,
}

impl ExchangeTickersRequest {
    /// Restrict to tickers of these coins.
    pub fn for_coins<I>(coin_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            coin_ids: coin_ids.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl QueryParams for ExchangeTickersRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("coin_ids", self.coin_ids.clone())
            .with("include_exchange_logo", self.include_exchange_logo)
            .with("page", self.page)
            .with("depth", self.depth)
            .with("order", self.order)
    }
}

impl CoinGeckoClient {
    /// List exchanges with trading volumes.
    pub async fn get_exchanges_list(&self, page: &Page) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::EXCHANGES, page).await
    }

    /// List all exchange ids and names.
    pub async fn get_exchanges_id_name_list(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::EXCHANGES_LIST).await
    }

    /// Get exchange volume in BTC and its top 100 tickers.
    pub async fn get_exchanges_by_id(&self, id: &str) -> Result<Value, CoinGeckoError> {
        self.get(&endpoints::exchange(id)).await
    }

    /// Get the tickers of an exchange (paginated, 100 per page).
    pub async fn get_exchange_tickers_by_id(
        &self,
        id: &str,
        request: &ExchangeTickersRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::exchange_tickers(id), request).await
    }

    /// Get status updates posted by an exchange.
    pub async fn get_exchanges_status_updates_by_id(
        &self,
        id: &str,
        page: &Page,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::exchange_status_updates(id), page).await
    }

    /// Get an exchange's BTC volume chart.
    pub async fn get_exchanges_volume_chart_by_id(
        &self,
        id: &str,
        days: u32,
    ) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("days", days);
        self.get_with_params(&endpoints::exchange_volume_chart(id), &params).await
    }

    // Indexes.

    /// List market indexes.
    pub async fn get_indexes(&self, page: &Page) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::INDEXES, page).await
    }

    /// Get one market index.
    pub async fn get_indexes_by_market_id_and_index_id(
        &self,
        market_id: &str,
        id: &str,
    ) -> Result<Value, CoinGeckoError> {
        self.get(&endpoints::index(market_id, id)).await
    }

    /// List all market index ids and names.
    pub async fn get_indexes_list(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::INDEXES_LIST).await
    }
}
