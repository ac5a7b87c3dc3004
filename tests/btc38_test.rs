mod common;

use coin_ticker_rs::{TickerClient, TickerError};
use common::{json_response, stub_client};
use serde_json::json;

#[test]
fn test_btc38_build_url_appends_lowercased_pair() {
    let client = TickerClient::new();
    let url = client.build_url("btc38", Some("DOGE")).unwrap();
    assert_eq!(url, "http://api.btc38.com/v1/ticker.php?c=doge");
}

#[tokio::test]
async fn test_btc38_fetch_extracts_and_normalizes_ticker() {
    let body = json!({"ticker": {"last": "0.0123", "high": "0.0130", "vol": "150000"}});
    let (client, log) = stub_client(json_response(&body));

    let ticker = client.fetch_ticker("btc38", Some("doge")).await.unwrap();

    assert_eq!(
        ticker,
        json!({"last": 0.0123, "high": 0.0130, "vol": 150000.0})
    );
    assert_eq!(
        log.lock().unwrap()[0].0,
        "http://api.btc38.com/v1/ticker.php?c=doge"
    );
}

#[tokio::test]
async fn test_btc38_missing_pair_mentions_example() {
    let (client, log) = stub_client(json_response(&json!({})));

    let result = client.fetch_ticker("btc38", None).await;
    match result {
        Err(TickerError::MissingPair(message)) => {
            assert!(message.contains("doge"), "got: {}", message);
        }
        other => panic!("expected MissingPair, got {:?}", other),
    }
    assert!(log.lock().unwrap().is_empty());
}
