//! Request types for `/coins` endpoints.

use time::{Date, OffsetDateTime};

use crate::rest::query::{ParamValue, Params, QueryParams};
use crate::types::{ChartInterval, Days, MarketOrder, TickerOrder};

/// Render a flag whose server-side default is `true`.
///
/// A plain `false` would be dropped from the query and the server would fall
/// back to `true`, so disabled flags are sent as the literal string.
fn explicit_flag(enabled: bool) -> ParamValue {
    ParamValue::Str(enabled.to_string())
}

/// Request parameters for `/coins/markets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinsMarketsRequest {
    /// Quote currency (e.g. "usd").
    pub vs_currency: String,
    /// Restrict to these coin ids.
    pub ids: Vec<String>,
    /// Restrict to a category.
    pub category: Option<String>,
    /// Sort order.
    pub order: Option<MarketOrder>,
    /// Results per page (1..=250).
    pub per_page: Option<u32>,
    /// Page number.
    pub page: Option<u32>,
    /// Include 7 day sparkline data.
    pub sparkline: bool,
    /// Price change windows to include (e.g. "1h", "24h", "7d").
    pub price_change_percentage: Vec<String>,
}

impl CoinsMarketsRequest {
    /// Create a new markets request for a quote currency.
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Default::default()
        }
    }

    /// Restrict to these coin ids.
    pub fn ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: MarketOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set page size and page number.
    pub fn page(mut self, per_page: u32, page: u32) -> Self {
        self.per_page = Some(per_page);
        self.page = Some(page);
        self
    }

    /// Include sparkline data.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Include price change percentages for these windows.
    pub fn price_change_percentage<I>(mut self, windows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.price_change_percentage = windows.into_iter().map(Into::into).collect();
        self
    }
}

impl QueryParams for CoinsMarketsRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("vs_currency", &self.vs_currency)
            .with("ids", self.ids.clone())
            .with("category", self.category.as_deref())
            .with("order", self.order)
            .with("per_page", self.per_page)
            .with("page", self.page)
            .with("sparkline", self.sparkline)
            .with("price_change_percentage", self.price_change_percentage.clone())
    }
}

/// Sections to include in `/coins/{id}`.
///
/// Every section is included by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinRequest {
    /// Include localized names and descriptions.
    pub localization: bool,
    /// Include tickers.
    pub tickers: bool,
    /// Include market data.
    pub market_data: bool,
    /// Include community data.
    pub community_data: bool,
    /// Include developer data.
    pub developer_data: bool,
    /// Include 7 day sparkline data.
    pub sparkline: bool,
}

impl Default for CoinRequest {
    fn default() -> Self {
        Self {
            localization: true,
            tickers: true,
            market_data: true,
            community_data: true,
            developer_data: true,
            sparkline: true,
        }
    }
}

impl CoinRequest {
    /// Only the coin's own metadata: every optional section disabled.
    pub fn minimal() -> Self {
        Self {
            localization: false,
            tickers: false,
            market_data: false,
            community_data: false,
            developer_data: false,
            sparkline: false,
        }
    }
}

impl QueryParams for CoinRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("localization", explicit_flag(self.localization))
            .with("tickers", explicit_flag(self.tickers))
            .with("market_data", explicit_flag(self.market_data))
            .with("community_data", explicit_flag(self.community_data))
            .with("developer_data", explicit_flag(self.developer_data))
            .with("sparkline", self.sparkline)
    }
}

/// Request parameters for `/coins/{id}/tickers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinTickersRequest {
    /// Restrict to these exchanges.
    pub exchange_ids: Vec<String>,
    /// Include exchange logos.
    pub include_exchange_logo: bool,
    /// Page number.
    pub page: Option<u32>,
    /// Sort order.
    pub order: Option<TickerOrder>,
    /// Include 2% order book depth.
    pub depth: bool,
}

impl QueryParams for CoinTickersRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("exchange_ids", self.exchange_ids.clone())
            .with("include_exchange_logo", self.include_exchange_logo)
            .with("page", self.page)
            .with("order", self.order)
            .with("depth", self.depth)
    }
}

/// Request parameters for `/coins/{id}/history`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinHistoryRequest {
    /// Snapshot date (sent as `dd-mm-yyyy`).
    pub date: Date,
    /// Include localized names.
    pub localization: bool,
}

impl CoinHistoryRequest {
    /// Create a new history request for a date.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            localization: true,
        }
    }

    /// Include or skip localized names.
    pub fn localization(mut self, localization: bool) -> Self {
        self.localization = localization;
        self
    }

    fn formatted_date(&self) -> String {
        format!(
            "{:02}-{:02}-{}",
            self.date.day(),
            u8::from(self.date.month()),
            self.date.year()
        )
    }
}

impl QueryParams for CoinHistoryRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("date", self.formatted_date())
            .with("localization", explicit_flag(self.localization))
    }
}

/// Request parameters for market chart endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketChartRequest {
    /// Quote currency.
    pub vs_currency: String,
    /// How far back to go.
    pub days: Days,
    /// Data point spacing; automatic when unset.
    pub interval: Option<ChartInterval>,
}

impl MarketChartRequest {
    /// Create a new market chart request.
    pub fn new(vs_currency: impl Into<String>, days: impl Into<Days>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            days: days.into(),
            interval: None,
        }
    }

    /// Set the data point spacing.
    pub fn interval(mut self, interval: ChartInterval) -> Self {
        self.interval = Some(interval);
        self
    }
}

impl QueryParams for MarketChartRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("vs_currency", &self.vs_currency)
            .with("days", self.days)
            .with("interval", self.interval)
    }
}

/// Request parameters for market chart range endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketChartRangeRequest {
    /// Quote currency.
    pub vs_currency: String,
    /// Range start, UNIX seconds.
    pub from: i64,
    /// Range end, UNIX seconds.
    pub to: i64,
}

impl MarketChartRangeRequest {
    /// Create a new range request from UNIX timestamps.
    pub fn new(vs_currency: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            from,
            to,
        }
    }

    /// Create a new range request from two points in time.
    pub fn between(vs_currency: impl Into<String>, from: OffsetDateTime, to: OffsetDateTime) -> Self {
        Self::new(vs_currency, from.unix_timestamp(), to.unix_timestamp())
    }
}

impl QueryParams for MarketChartRangeRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("vs_currency", &self.vs_currency)
            .with("from", self.from)
            .with("to", self.to)
    }
}

/// Request parameters for `/coins/{id}/ohlc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcRequest {
    /// Quote currency.
    pub vs_currency: String,
    /// How far back to go.
    pub days: Days,
}

impl OhlcRequest {
    /// Create a new OHLC request.
    pub fn new(vs_currency: impl Into<String>, days: impl Into<Days>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            days: days.into(),
        }
    }
}

impl QueryParams for OhlcRequest {
    fn to_params(&self) -> Params {
        Params::new()
            .with("vs_currency", &self.vs_currency)
            .with("days", self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::query::{QueryCase, query_string};
    use time::macros::{date, datetime};

    fn render(params: &impl QueryParams) -> String {
        query_string(&params.to_params(), QueryCase::Lowercase)
    }

    #[test]
    fn test_coin_request_defaults() {
        assert_eq!(
            render(&CoinRequest::default()),
            "localization=true&tickers=true&market_data=true&community_data=true\
             &developer_data=true&sparkline=true"
        );
    }

    #[test]
    fn test_coin_request_minimal_sends_false_for_server_defaults() {
        assert_eq!(
            render(&CoinRequest::minimal()),
            "localization=false&tickers=false&market_data=false&community_data=false\
             &developer_data=false"
        );
    }

    #[test]
    fn test_markets_request() {
        let request = CoinsMarketsRequest::new("USD")
            .ids(["bitcoin"])
            .order(MarketOrder::VolumeDesc)
            .page(100, 2)
            .price_change_percentage(["1h", "24h"]);
        assert_eq!(
            render(&request),
            "vs_currency=usd&ids=bitcoin&order=volume_desc&per_page=100&page=2\
             &price_change_percentage=1h,24h"
        );
    }

    #[test]
    fn test_history_date_format() {
        let request = CoinHistoryRequest::new(date!(2021 - 03 - 07));
        assert_eq!(render(&request), "date=07-03-2021&localization=true");
    }

    #[test]
    fn test_market_chart_max() {
        let request = MarketChartRequest::new("usd", Days::Max).interval(ChartInterval::Daily);
        assert_eq!(render(&request), "vs_currency=usd&days=max&interval=daily");
    }

    #[test]
    fn test_range_between() {
        let request = MarketChartRangeRequest::between(
            "eur",
            datetime!(2021-01-01 0:00 UTC),
            datetime!(2021-01-02 0:00 UTC),
        );
        assert_eq!(render(&request), "vs_currency=eur&from=1609459200&to=1609545600");
    }

    #[test]
    fn test_ohlc_days() {
        assert_eq!(render(&OhlcRequest::new("usd", 14)), "vs_currency=usd&days=14");
    }
}
