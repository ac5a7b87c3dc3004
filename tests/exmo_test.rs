mod common;

use coin_ticker_rs::{HttpMethod, TickerClient};
use common::{json_response, stub_client};
use serde_json::json;

#[test]
fn test_exmo_build_options_without_pair_downgrades_to_get() {
    let client = TickerClient::new();
    let options = client.build_options("exmo", None).unwrap();

    assert_eq!(options.method, HttpMethod::Get);
    assert!(options.params.is_empty());
}

#[test]
fn test_exmo_build_options_with_pair_posts_symbol_form() {
    let client = TickerClient::new();
    let options = client.build_options("exmo", Some("BTC_USD")).unwrap();

    assert_eq!(options.method, HttpMethod::Post);
    assert_eq!(options.params.get("symbol").map(String::as_str), Some("BTC_USD"));
}

#[test]
fn test_exmo_build_url_is_fixed() {
    let client = TickerClient::new();
    assert_eq!(
        client.build_url("exmo", Some("BTC_USD")).unwrap(),
        "https://api.exmo.com/v1/ticker"
    );
    assert_eq!(
        client.build_url("exmo", None).unwrap(),
        "https://api.exmo.com/v1/ticker"
    );
}

#[tokio::test]
async fn test_exmo_fetch_with_pair_selects_uppercased_key() {
    let body = json!({
        "BTC_USD": {"last_trade": "42000.1", "vol": "12.5"},
        "ETH_USD": {"last_trade": "2200", "vol": "80"},
    });
    let (client, log) = stub_client(json_response(&body));

    // Lowercase input still hits the uppercase key.
    let ticker = client.fetch_ticker("exmo", Some("btc_usd")).await.unwrap();

    assert_eq!(ticker, json!({"last_trade": 42000.1, "vol": 12.5}));

    let calls = log.lock().unwrap();
    assert_eq!(calls[0].1.method, HttpMethod::Post);
    assert_eq!(
        calls[0].1.params.get("symbol").map(String::as_str),
        Some("btc_usd")
    );
}

#[tokio::test]
async fn test_exmo_fetch_without_pair_returns_whole_normalized_map() {
    let body = json!({
        "BTC_USD": {"last_trade": "42000.1"},
        "ETH_USD": {"last_trade": "2200"},
    });
    let (client, log) = stub_client(json_response(&body));

    let ticker = client.fetch_ticker("exmo", None).await.unwrap();

    assert_eq!(
        ticker,
        json!({
            "BTC_USD": {"last_trade": 42000.1},
            "ETH_USD": {"last_trade": 2200.0},
        })
    );
    assert_eq!(log.lock().unwrap()[0].1.method, HttpMethod::Get);
}

#[tokio::test]
async fn test_exmo_fetch_unknown_pair_yields_null() {
    let body = json!({"BTC_USD": {"last_trade": "42000.1"}});
    let (client, _log) = stub_client(json_response(&body));

    let ticker = client.fetch_ticker("exmo", Some("XRP_USD")).await.unwrap();
    assert!(ticker.is_null());
}
