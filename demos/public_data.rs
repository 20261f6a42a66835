//! Example: Fetching public market data from CoinGecko.
//!
//! Run with: cargo run --example public_data
//!
//! Set `RUST_LOG=coingecko_api_client=debug,reqwest_tracing=info` to see each request.

use coingecko_api_client::rest::{
    CoinGeckoClient, CoinRequest, CoinsMarketsRequest, MarketChartRequest, PriceInclusions,
    PriceRequest,
};
use coingecko_api_client::types::{Days, MarketOrder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CoinGeckoClient::new()?;

    println!("=== Ping ===");
    let pong = client.ping().await?;
    println!("{}", pong["gecko_says"]);

    println!("\n=== Simple Price ===");
    let request = PriceRequest::new(["bitcoin", "ethereum"], ["usd", "eur"])
        .include(PriceInclusions {
            change_24h: true,
            ..Default::default()
        });
    let prices = client.get_price(&request).await?;
    println!("{}", serde_json::to_string_pretty(&prices)?);

    println!("\n=== Top 5 by volume ===");
    let markets = client
        .get_coins_markets(
            &CoinsMarketsRequest::new("usd")
                .order(MarketOrder::VolumeDesc)
                .page(5, 1),
        )
        .await?;
    if let Some(coins) = markets.as_array() {
        for coin in coins {
            println!("{}: {}", coin["symbol"], coin["current_price"]);
        }
    }

    println!("\n=== Bitcoin ===");
    let coin = client
        .get_coin_by_id("bitcoin", &CoinRequest::minimal())
        .await?;
    println!("Name: {}, genesis: {}", coin["name"], coin["genesis_date"]);

    println!("\n=== Bitcoin 7d chart ===");
    let chart = client
        .get_coin_market_chart_by_id("bitcoin", &MarketChartRequest::new("usd", Days::Count(7)))
        .await?;
    let points = chart["prices"].as_array().map(Vec::len).unwrap_or_default();
    println!("{} price points", points);

    println!("\n=== Global ===");
    let global = client.get_global().await?;
    println!(
        "Active cryptocurrencies: {}",
        global["data"]["active_cryptocurrencies"]
    );

    Ok(())
}
