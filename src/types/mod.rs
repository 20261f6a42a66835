//! Common types used across the CoinGecko client library.

pub mod common;

pub use common::*;
