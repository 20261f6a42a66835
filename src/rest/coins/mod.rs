//! Coin, contract, category and asset platform endpoints.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoClient;
use crate::rest::endpoints;
use crate::rest::query::Params;
use crate::types::{CategoryOrder, Days, Page};

impl CoinGeckoClient {
    /// List all supported coins with id, name and symbol.
    ///
    /// # Arguments
    ///
    /// * `include_platform` - Include token contract addresses per platform.
    pub async fn get_coins_list(&self, include_platform: bool) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("include_platform", include_platform);
        self.get_with_params(endpoints::COINS_LIST, &params).await
    }

    /// Get price, market cap and volume for coins.
    pub async fn get_coins_markets(
        &self,
        request: &CoinsMarketsRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(endpoints::COINS_MARKETS, request).await
    }

    /// Get current data for a coin.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::{CoinGeckoClient, CoinRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoClient::new()?;
    ///     let coin = client.get_coin_by_id("bitcoin", &CoinRequest::minimal()).await?;
    ///     println!("{}", coin["name"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_coin_by_id(
        &self,
        id: &str,
        request: &CoinRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin(id), request).await
    }

    /// Get the tickers of a coin across exchanges (paginated, 100 per page).
    pub async fn get_coin_ticker_by_id(
        &self,
        id: &str,
        request: &CoinTickersRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_tickers(id), request).await
    }

    /// Get a coin's data as it was on a given date.
    pub async fn get_coin_history_by_id(
        &self,
        id: &str,
        request: &CoinHistoryRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_history(id), request).await
    }

    /// Get historical price, market cap and volume for a coin.
    pub async fn get_coin_market_chart_by_id(
        &self,
        id: &str,
        request: &MarketChartRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_market_chart(id), request).await
    }

    /// Get historical market data for a coin within a time range.
    pub async fn get_coin_market_chart_range(
        &self,
        id: &str,
        request: &MarketChartRangeRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_market_chart_range(id), request).await
    }

    /// Get OHLC candles for a coin.
    pub async fn get_coin_ohlc_by_id(
        &self,
        id: &str,
        request: &OhlcRequest,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_ohlc(id), request).await
    }

    /// Get project status updates for a coin.
    pub async fn get_coin_status_updates_by_id(
        &self,
        id: &str,
        page: &Page,
    ) -> Result<Value, CoinGeckoError> {
        self.get_with_params(&endpoints::coin_status_updates(id), page).await
    }

    // Contract lookups.

    /// Get coin data by token contract address.
    pub async fn get_coin_info_from_contract_address_by_id(
        &self,
        platform_id: &str,
        contract_address: &str,
    ) -> Result<Value, CoinGeckoError> {
        self.get(&endpoints::coin_contract(platform_id, contract_address)).await
    }

    /// Get historical market data by token contract address.
    pub async fn get_coin_market_chart_from_contract_address_by_id(
        &self,
        platform_id: &str,
        contract_address: &str,
        vs_currency: &str,
        days: Days,
    ) -> Result<Value, CoinGeckoError> {
        let params = Params::new()
            .with("vs_currency", vs_currency)
            .with("days", days);
        let path = endpoints::coin_contract_market_chart(platform_id, contract_address);
        self.get_with_params(&path, &params).await
    }

    /// Get historical market data by token contract address within a time range.
    pub async fn get_coin_market_chart_range_from_contract_address_by_id(
        &self,
        platform_id: &str,
        contract_address: &str,
        request: &MarketChartRangeRequest,
    ) -> Result<Value, CoinGeckoError> {
        let path = endpoints::coin_contract_market_chart_range(platform_id, contract_address);
        self.get_with_params(&path, request).await
    }

    // Platforms and categories.

    /// List all asset platforms (blockchain networks).
    pub async fn get_asset_platforms(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::ASSET_PLATFORMS).await
    }

    /// List all coin category ids and names.
    pub async fn get_coins_categories_list(&self) -> Result<Value, CoinGeckoError> {
        self.get(endpoints::COINS_CATEGORIES_LIST).await
    }

    /// List all coin categories with market data.
    pub async fn get_coins_categories(
        &self,
        order: Option<CategoryOrder>,
    ) -> Result<Value, CoinGeckoError> {
        let params = Params::new().with("order", order);
        self.get_with_params(endpoints::COINS_CATEGORIES, &params).await
    }
}
