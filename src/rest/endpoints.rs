//! CoinGecko REST API endpoint constants.
//!
//! Paths that take caller-supplied segments are built with plain string
//! interpolation. Segments are not escaped.

use std::time::Duration;

/// Base URL for the public CoinGecko v3 API.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Check API server status.
pub const PING: &str = "/ping";

// Simple
/// Prices of coins by id.
pub const SIMPLE_PRICE: &str = "/simple/price";
/// Supported quote currencies.
pub const SIMPLE_SUPPORTED_VS_CURRENCIES: &str = "/simple/supported_vs_currencies";

/// Prices of tokens by contract address on one platform.
pub fn simple_token_price(platform_id: &str) -> String {
    format!("/simple/token_price/{}", platform_id)
}

// Coins
/// All supported coins with id, name and symbol.
pub const COINS_LIST: &str = "/coins/list";
/// Market data for coins.
pub const COINS_MARKETS: &str = "/coins/markets";
/// All coin categories (id map).
pub const COINS_CATEGORIES_LIST: &str = "/coins/categories/list";
/// All coin categories with market data.
pub const COINS_CATEGORIES: &str = "/coins/categories";
/// All asset platforms.
pub const ASSET_PLATFORMS: &str = "/asset_platforms";

pub fn coin(id: &str) -> String {
    format!("/coins/{}", id)
}

pub fn coin_tickers(id: &str) -> String {
    format!("/coins/{}/tickers", id)
}

pub fn coin_history(id: &str) -> String {
    format!("/coins/{}/history", id)
}

pub fn coin_market_chart(id: &str) -> String {
    format!("/coins/{}/market_chart", id)
}

pub fn coin_market_chart_range(id: &str) -> String {
    format!("/coins/{}/market_chart/range", id)
}

pub fn coin_ohlc(id: &str) -> String {
    format!("/coins/{}/ohlc", id)
}

pub fn coin_status_updates(id: &str) -> String {
    format!("/coins/{}/status_updates", id)
}

/// Coin info looked up by token contract address.
pub fn coin_contract(platform_id: &str, contract_address: &str) -> String {
    format!("/coins/{}/contract/{}", platform_id, contract_address)
}

pub fn coin_contract_market_chart(platform_id: &str, contract_address: &str) -> String {
    format!("{}/market_chart", coin_contract(platform_id, contract_address))
}

pub fn coin_contract_market_chart_range(platform_id: &str, contract_address: &str) -> String {
    format!("{}/market_chart/range", coin_contract(platform_id, contract_address))
}

// Exchanges
/// All exchanges with market data.
pub const EXCHANGES: &str = "/exchanges";
/// All exchanges (id map).
pub const EXCHANGES_LIST: &str = "/exchanges/list";

pub fn exchange(id: &str) -> String {
    format!("/exchanges/{}", id)
}

pub fn exchange_tickers(id: &str) -> String {
    format!("/exchanges/{}/tickers", id)
}

pub fn exchange_status_updates(id: &str) -> String {
    format!("/exchanges/{}/status_updates", id)
}

pub fn exchange_volume_chart(id: &str) -> String {
    format!("/exchanges/{}/volume_chart", id)
}

// Indexes
/// All market indexes.
pub const INDEXES: &str = "/indexes";
/// All market indexes (id map).
pub const INDEXES_LIST: &str = "/indexes/list";

pub fn index(market_id: &str, id: &str) -> String {
    format!("/indexes/{}/{}", market_id, id)
}

// Derivatives
/// All derivative tickers.
pub const DERIVATIVES: &str = "/derivatives";
/// All derivative exchanges.
pub const DERIVATIVES_EXCHANGES: &str = "/derivatives/exchanges";
/// All derivative exchanges (id map).
pub const DERIVATIVES_EXCHANGES_LIST: &str = "/derivatives/exchanges/list";

pub fn derivatives_exchange(id: &str) -> String {
    format!("/derivatives/exchanges/{}", id)
}

// Misc
/// Project status updates.
pub const STATUS_UPDATES: &str = "/status_updates";
/// BTC-to-currency exchange rates.
pub const EXCHANGE_RATES: &str = "/exchange_rates";
/// Search for coins, categories and markets.
pub const SEARCH: &str = "/search";
/// Trending search coins.
pub const SEARCH_TRENDING: &str = "/search/trending";
/// Global cryptocurrency data.
pub const GLOBAL: &str = "/global";
/// Global DeFi data.
pub const GLOBAL_DEFI: &str = "/global/decentralized_finance_defi";

/// Public company treasury holdings of a coin.
pub fn companies_public_treasury(coin_id: &str) -> String {
    format!("/companies/public_treasury/{}", coin_id)
}
