//! # CoinGecko Client
//!
//! An async Rust client library for the CoinGecko v3 public REST API.
//!
//! ## Features
//!
//! - Typed request parameters for coins, exchanges, derivatives and global data
//! - One pooled HTTP client per [`rest::CoinGeckoClient`] with a fixed timeout
//! - Responses passed through as [`serde_json::Value`] with no reshaping
//! - Distinct error variants for status, connection, timeout and decode failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new()?;
//!     let pong = client.ping().await?;
//!     println!("Ping: {}", pong);
//!     Ok(())
//! }
//! ```
//!
//! The client does not rate limit. The public API allows a limited number of
//! calls per minute; exceeding it yields [`CoinGeckoError::Status`] with HTTP 429.

pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::CoinGeckoError;
pub use rest::{CoinGeckoClient, CoinGeckoClientBuilder, ParamValue, Params};
pub use types::{Days, Page};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
