//! Example: Telling CoinGecko failure kinds apart.
//!
//! Run with: cargo run --example error_handling

use std::time::Duration;

use coingecko_api_client::CoinGeckoError;
use coingecko_api_client::rest::{CoinGeckoClient, OhlcRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = CoinGeckoClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let request = OhlcRequest::new("usd", 1);
    match client.get_coin_ohlc_by_id("not-a-coin", &request).await {
        Ok(candles) => println!("Unexpected data: {}", candles),
        Err(CoinGeckoError::Status { status, body, .. }) if status.is_client_error() => {
            if status.as_u16() == 429 {
                println!("Rate limited, slow down");
            } else {
                println!("Rejected with {}: {}", status, body);
            }
        }
        Err(CoinGeckoError::Timeout(e)) => println!("Timed out: {}", e),
        Err(CoinGeckoError::Connect(e)) => println!("Could not connect: {}", e),
        Err(e) => println!("Other failure: {}", e),
    }

    Ok(())
}
