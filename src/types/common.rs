//! Common query value types for the CoinGecko API.

use serde::{Deserialize, Serialize};

use crate::rest::{ParamValue, Params, QueryParams};

/// Length of a historical window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
    /// A fixed number of days back from now
    Count(u32),
    /// All available history
    Max,
}

impl std::fmt::Display for Days {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Days::Count(n) => write!(f, "{}", n),
            Days::Max => write!(f, "max"),
        }
    }
}

impl From<u32> for Days {
    fn from(days: u32) -> Self {
        Days::Count(days)
    }
}

impl From<Days> for ParamValue {
    fn from(days: Days) -> Self {
        match days {
            Days::Count(n) => ParamValue::Int(i64::from(n)),
            Days::Max => ParamValue::Str("max".to_string()),
        }
    }
}

/// Data point spacing for market charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartInterval {
    /// One point per day
    Daily,
    /// One point per hour
    Hourly,
}

impl std::fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartInterval::Daily => write!(f, "daily"),
            ChartInterval::Hourly => write!(f, "hourly"),
        }
    }
}

/// Sort order for `/coins/markets`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    VolumeDesc,
    VolumeAsc,
    IdDesc,
    IdAsc,
    GeckoDesc,
    GeckoAsc,
}

impl std::fmt::Display for MarketOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarketOrder::MarketCapDesc => "market_cap_desc",
            MarketOrder::MarketCapAsc => "market_cap_asc",
            MarketOrder::VolumeDesc => "volume_desc",
            MarketOrder::VolumeAsc => "volume_asc",
            MarketOrder::IdDesc => "id_desc",
            MarketOrder::IdAsc => "id_asc",
            MarketOrder::GeckoDesc => "gecko_desc",
            MarketOrder::GeckoAsc => "gecko_asc",
        };
        write!(f, "{}", s)
    }
}

/// Sort order for coin and exchange tickers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickerOrder {
    #[default]
    TrustScoreDesc,
    TrustScoreAsc,
    VolumeDesc,
}

impl std::fmt::Display for TickerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickerOrder::TrustScoreDesc => write!(f, "trust_score_desc"),
            TickerOrder::TrustScoreAsc => write!(f, "trust_score_asc"),
            TickerOrder::VolumeDesc => write!(f, "volume_desc"),
        }
    }
}

/// Sort order for `/coins/categories`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    NameDesc,
    NameAsc,
    #[serde(rename = "market_cap_change_24h_desc")]
    MarketCapChange24hDesc,
    #[serde(rename = "market_cap_change_24h_asc")]
    MarketCapChange24hAsc,
}

impl std::fmt::Display for CategoryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CategoryOrder::MarketCapDesc => "market_cap_desc",
            CategoryOrder::MarketCapAsc => "market_cap_asc",
            CategoryOrder::NameDesc => "name_desc",
            CategoryOrder::NameAsc => "name_asc",
            CategoryOrder::MarketCapChange24hDesc => "market_cap_change_24h_desc",
            CategoryOrder::MarketCapChange24hAsc => "market_cap_change_24h_asc",
        };
        write!(f, "{}", s)
    }
}

/// Sort order for `/derivatives/exchanges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivativesExchangeOrder {
    NameAsc,
    NameDesc,
    OpenInterestBtcAsc,
    OpenInterestBtcDesc,
    #[serde(rename = "trade_volume_24h_btc_asc")]
    TradeVolume24hBtcAsc,
    #[serde(rename = "trade_volume_24h_btc_desc")]
    TradeVolume24hBtcDesc,
}

impl std::fmt::Display for DerivativesExchangeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DerivativesExchangeOrder::NameAsc => "name_asc",
            DerivativesExchangeOrder::NameDesc => "name_desc",
            DerivativesExchangeOrder::OpenInterestBtcAsc => "open_interest_btc_asc",
            DerivativesExchangeOrder::OpenInterestBtcDesc => "open_interest_btc_desc",
            DerivativesExchangeOrder::TradeVolume24hBtcAsc => "trade_volume_24h_btc_asc",
            DerivativesExchangeOrder::TradeVolume24hBtcDesc => "trade_volume_24h_btc_desc",
        };
        write!(f, "{}", s)
    }
}

/// Which derivative tickers to embed in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeTickers {
    /// All tickers
    All,
    /// Unexpired tickers only
    Unexpired,
}

impl std::fmt::Display for IncludeTickers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncludeTickers::All => write!(f, "all"),
            IncludeTickers::Unexpired => write!(f, "unexpired"),
        }
    }
}

/// Pagination shared by list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Results per page.
    pub per_page: Option<u32>,
    /// 1-based page number.
    pub page: Option<u32>,
}

impl Page {
    /// Request a given page with a given page size.
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }
}

impl QueryParams for Page {
    fn to_params(&self) -> Params {
        Params::new()
            .with("per_page", self.per_page)
            .with("page", self.page)
    }
}

macro_rules! display_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Str(value.to_string())
                }
            }
        )*
    };
}

display_param!(
    ChartInterval,
    MarketOrder,
    TickerOrder,
    CategoryOrder,
    DerivativesExchangeOrder,
    IncludeTickers
);
