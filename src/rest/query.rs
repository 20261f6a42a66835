//! URL construction for CoinGecko requests.
//!
//! A call is described by an endpoint path and an ordered [`Params`] set. The
//! set is rendered into a query string with a few fixed rules:
//!
//! - list values are comma-joined (`ids=bitcoin,ethereum`)
//! - falsy values (`false`, `0`, `""`, empty lists, unset options) are dropped
//! - the rendered query is lowercased
//! - no percent-escaping is applied
//!
//! ```rust
//! use coingecko_api_client::rest::{Params, build_url};
//!
//! let params = Params::new()
//!     .with("vs_currency", "USD")
//!     .with("days", "max");
//! let url = build_url(
//!     "https://api.example.com/api/v3",
//!     "/coins/bitcoin/market_chart",
//!     &params,
//! );
//! assert_eq!(
//!     url,
//!     "https://api.example.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=max"
//! );
//! ```

use std::fmt;

use time::OffsetDateTime;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Rendered as `true`; `false` is dropped.
    Bool(bool),
    /// Integer value; `0` is dropped.
    Int(i64),
    /// Floating point value; `0.0` is dropped.
    Float(f64),
    /// String value; the empty string is dropped.
    Str(String),
    /// Comma-joined list; an empty list is dropped.
    List(Vec<String>),
    /// No value. Always dropped.
    Unset,
}

impl ParamValue {
    /// Whether this value contributes to the query string.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Bool(b) => *b,
            ParamValue::Int(n) => *n != 0,
            ParamValue::Float(x) => *x != 0.0,
            ParamValue::Str(s) => !s.is_empty(),
            ParamValue::List(items) => !items.is_empty(),
            ParamValue::Unset => false,
        }
    }

    /// Render the value for the query string, or `None` if it is dropped.
    pub fn encode(&self) -> Option<String> {
        if !self.is_truthy() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::List(items) => f.write_str(&items.join(",")),
            ParamValue::Unset => Ok(()),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}

/// Timestamps are sent as UNIX seconds.
impl From<OffsetDateTime> for ParamValue {
    fn from(value: OffsetDateTime) -> Self {
        ParamValue::Int(value.unix_timestamp())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Unset, Into::into)
    }
}

/// An ordered set of named query parameters.
///
/// Parameters are rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Add a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Number of parameters, including falsy ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

/// Types that describe the query parameters of one endpoint call.
pub trait QueryParams {
    /// Build the parameter set for this request.
    fn to_params(&self) -> Params;
}

impl QueryParams for Params {
    fn to_params(&self) -> Params {
        self.clone()
    }
}

/// How letter case is treated in the rendered query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryCase {
    /// Lowercase the whole query string, names and values.
    ///
    /// This matches what the API has always been sent, but it mangles
    /// case-sensitive values such as mixed-case identifiers.
    #[default]
    Lowercase,
    /// Lowercase parameter names only and send values untouched.
    PreserveValues,
}

/// Render the query string for a parameter set, without the leading `?`.
///
/// Returns an empty string when no parameter survives the falsy filter.
pub fn query_string(params: &Params, case: QueryCase) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(name, value)| {
            let encoded = value.encode()?;
            Some(match case {
                QueryCase::Lowercase => format!("{}={}", name, encoded),
                QueryCase::PreserveValues => format!("{}={}", name.to_lowercase(), encoded),
            })
        })
        .collect();

    let joined = pairs.join("&");
    match case {
        QueryCase::Lowercase => joined.to_lowercase(),
        QueryCase::PreserveValues => joined,
    }
}

/// Build an absolute URL from a base URL, an endpoint path and parameters.
///
/// The query string is lowercased in full; see [`build_url_with_case`] to keep
/// values as given.
pub fn build_url(base_url: &str, path: &str, params: &Params) -> String {
    build_url_with_case(base_url, path, params, QueryCase::Lowercase)
}

/// Build an absolute URL with an explicit [`QueryCase`].
///
/// If every parameter is falsy the URL is `base_url + path` with no `?`.
pub fn build_url_with_case(base_url: &str, path: &str, params: &Params, case: QueryCase) -> String {
    let query = query_string(params, case);
    if query.is_empty() {
        format!("{}{}", base_url, path)
    } else {
        format!("{}{}?{}", base_url, path, query)
    }
}
