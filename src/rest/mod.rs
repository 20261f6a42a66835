//! CoinGecko REST API client.
//!
//! Two layers make up every call:
//!
//! - [`query`] turns an endpoint path and a [`Params`] set into a URL.
//! - [`CoinGeckoClient::execute`] performs the GET and decodes the JSON body.
//!
//! The endpoint methods on [`CoinGeckoClient`] only pick a path and fill in
//! parameters; responses are returned as untyped [`serde_json::Value`]s.

mod client;
pub mod coins;
mod derivatives;
pub mod endpoints;
mod exchanges;
mod global;
pub mod query;
mod simple;

pub use client::{BASE_URL_ENV, CoinGeckoClient, CoinGeckoClientBuilder, TIMEOUT_SECS_ENV};
pub use coins::{
    CoinHistoryRequest, CoinRequest, CoinTickersRequest, CoinsMarketsRequest, MarketChartRangeRequest,
    MarketChartRequest, OhlcRequest,
};
pub use derivatives::DerivativesExchangesRequest;
pub use endpoints::{COINGECKO_BASE_URL, DEFAULT_TIMEOUT};
pub use exchanges::ExchangeTickersRequest;
pub use global::StatusUpdatesRequest;
pub use query::{
    ParamValue, Params, QueryCase, QueryParams, build_url, build_url_with_case, query_string,
};
pub use simple::{PriceInclusions, PriceRequest, TokenPriceRequest};
