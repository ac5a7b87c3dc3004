mod common;

use std::time::Duration;

use coin_ticker_rs::{BitcoinAverage, ExchangeDescriptor, TickerClient};
use common::{json_response, stub_client};
use serde_json::json;

#[test]
fn test_bitcoinaverage_build_url_is_fixed() {
    let client = TickerClient::new();
    assert_eq!(
        client.build_url("bitcoinaverage", Some("USD")).unwrap(),
        "https://api.bitcoinaverage.com/ticker/global/all"
    );
}

#[test]
fn test_bitcoinaverage_documents_query_ceiling() {
    // Metadata only; nothing throttles on it.
    assert_eq!(
        BitcoinAverage.min_query_interval(),
        Some(Duration::from_secs(10))
    );
}

#[tokio::test]
async fn test_bitcoinaverage_fetch_with_pair_selects_timestamp_and_currency() {
    let body = json!({
        "timestamp": "Thu, 01 Jan 2015 12:00:00 -0000",
        "USD": {"last": "245.10", "ask": "245.50", "bid": "244.90"},
        "EUR": {"last": "210.00", "ask": "210.40", "bid": "209.70"},
    });
    let (client, _log) = stub_client(json_response(&body));

    // Lowercase input still selects the uppercase currency key.
    let ticker = client
        .fetch_ticker("bitcoinaverage", Some("usd"))
        .await
        .unwrap();

    assert_eq!(
        ticker,
        json!({
            "timestamp": "Thu, 01 Jan 2015 12:00:00 -0000",
            "USD": {"last": 245.10, "ask": 245.50, "bid": 244.90},
        })
    );
}

#[tokio::test]
async fn test_bitcoinaverage_fetch_without_pair_normalizes_whole_body() {
    let body = json!({
        "timestamp": "Thu, 01 Jan 2015 12:00:00 -0000",
        "USD": {"last": "245.10"},
        "EUR": {"last": "210.00"},
    });
    let (client, _log) = stub_client(json_response(&body));

    let ticker = client.fetch_ticker("bitcoinaverage", None).await.unwrap();

    assert_eq!(
        ticker,
        json!({
            "timestamp": "Thu, 01 Jan 2015 12:00:00 -0000",
            "USD": {"last": 245.10},
            "EUR": {"last": 210.00},
        })
    );
}

#[tokio::test]
async fn test_bitcoinaverage_unknown_currency_yields_timestamp_only() {
    let body = json!({
        "timestamp": "Thu, 01 Jan 2015 12:00:00 -0000",
        "USD": {"last": "245.10"},
    });
    let (client, _log) = stub_client(json_response(&body));

    let ticker = client
        .fetch_ticker("bitcoinaverage", Some("ZZZ"))
        .await
        .unwrap();

    assert_eq!(
        ticker,
        json!({"timestamp": "Thu, 01 Jan 2015 12:00:00 -0000"})
    );
}
