use std::time::Duration;

use coingecko_api_client::CoinGeckoClientBuilder;
use coingecko_api_client::rest::{BASE_URL_ENV, TIMEOUT_SECS_ENV};

// One test per binary: the environment is process-wide, so the cases run in sequence.
#[test]
fn test_from_env_overrides() {
    // SAFETY: this is the only test in this binary, so nothing else touches the environment.
    unsafe {
        std::env::set_var(BASE_URL_ENV, "http://x/api/v3");
        std::env::set_var(TIMEOUT_SECS_ENV, " 7 ");
    }
    let client = CoinGeckoClientBuilder::from_env().build().unwrap();
    assert_eq!(client.base_url(), "http://x/api/v3");
    assert_eq!(client.timeout(), Duration::from_secs(7));

    unsafe {
        std::env::set_var(TIMEOUT_SECS_ENV, "abc");
    }
    let client = CoinGeckoClientBuilder::from_env().build().unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(60));

    unsafe {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_SECS_ENV);
    }
    let client = CoinGeckoClientBuilder::from_env().build().unwrap();
    assert_eq!(client.base_url(), "https://api.coingecko.com/api/v3");
    assert_eq!(client.timeout(), Duration::from_secs(60));
}
