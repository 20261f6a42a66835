use std::time::Duration;

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coingecko_api_client::error::CoinGeckoError;
use coingecko_api_client::rest::{CoinGeckoClient, Params, PriceRequest};

fn build_client(server: &MockServer) -> CoinGeckoClient {
    CoinGeckoClient::builder()
        .base_url(format!("{}/api/v3", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_ping_returns_body_unchanged() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "gecko_says": "(V3) To the Moon!" });

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let pong = client.ping().await.unwrap();
    assert_eq!(pong, response);
}

#[tokio::test]
async fn test_get_price_builds_exact_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "bitcoin": { "usd": 50000 } });

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin,ethereum"))
        .and(query_param("vs_currencies", "usd"))
        .and(query_param_is_missing("include_market_cap"))
        .and(query_param_is_missing("include_24hr_vol"))
        .and(query_param_is_missing("include_24hr_change"))
        .and(query_param_is_missing("include_last_updated_at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PriceRequest::new(["bitcoin", "ethereum"], ["usd"]);
    let prices = client.get_price(&request).await.unwrap();
    assert_eq!(prices, response);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("ids=bitcoin,ethereum&vs_currencies=usd")
    );
}

#[tokio::test]
async fn test_query_is_lowercased() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "prices": [] })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = Params::new().with("vs_currency", "USD").with("days", "max");
    client
        .get_with_params("/coins/bitcoin/market_chart", &params)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("vs_currency=usd&days=max"));
}

#[tokio::test]
async fn test_all_falsy_params_send_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let list = client.get_coins_list(false).await.unwrap();
    assert_eq!(list, serde_json::json!([]));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.ping().await.unwrap_err();
    match err {
        CoinGeckoError::Status { status, url, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.ends_with("/api/v3/ping"));
            assert_eq!(body, "internal error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/global"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "status": { "error_code": 429, "error_message": "You've exceeded the Rate Limit." }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_global().await.unwrap_err();
    assert!(err.is_status());
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "gecko_says": "late" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(format!("{}/api/v3", server.uri()))
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(!err.is_connect());
}

#[tokio::test]
async fn test_unreachable_host_is_connect_error() {
    // Nothing listens on port 1.
    let client = CoinGeckoClient::builder()
        .base_url("http://127.0.0.1:1/api/v3")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(err.is_connect(), "expected connect error, got {err:?}");
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_timeout_after_retries_is_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "gecko_says": "late" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(format!("{}/api/v3", server.uri()))
        .timeout(Duration::from_millis(50))
        .max_retries(1)
        .build()
        .unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(!err.is_connect());
}

#[tokio::test]
async fn test_connect_failure_after_retries_is_connect_error() {
    let client = CoinGeckoClient::builder()
        .base_url("http://127.0.0.1:1/api/v3")
        .timeout(Duration::from_secs(5))
        .max_retries(1)
        .build()
        .unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(err.is_connect(), "expected connect error, got {err:?}");
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_server_error_is_retried_then_returned_as_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(3)
        .mount(&server)
        .await;

    let client = CoinGeckoClient::builder()
        .base_url(format!("{}/api/v3", server.uri()))
        .max_retries(2)
        .build()
        .unwrap();

    let err = client.ping().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_error_status_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get("/coins/unknown").await.unwrap_err();
    match err {
        CoinGeckoError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.is_empty());
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/exchange_rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_exchange_rates().await.unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {err:?}");
}

#[tokio::test]
async fn test_invalid_utf8_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/exchange_rates"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'"', 0xff, 0xfe, b'"']))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_exchange_rates().await.unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {err:?}");
}

#[tokio::test]
async fn test_scalar_body_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/supported_vs_currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[\"btc\",\"usd\"]"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let currencies = client.get_supported_vs_currencies().await.unwrap();
    assert_eq!(currencies, serde_json::json!(["btc", "usd"]));
}
