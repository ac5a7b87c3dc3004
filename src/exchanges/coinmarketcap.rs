use serde_json::Value;

use crate::common::HttpMethod;
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const COINMARKETCAP_API_BASE: &str = "https://api.coinmarketcap.com/v1/ticker/";

/// CoinMarketCap v1 listings: a JSON array of per-asset records. Records are
/// handed back exactly as the API sent them, so numeric fields stay strings;
/// consumers of this feed rely on that.
pub struct CoinMarketCap;

impl ExchangeDescriptor for CoinMarketCap {
    fn id(&self) -> ExchangeId {
        ExchangeId::CoinMarketCap
    }

    fn base_url(&self) -> &str {
        COINMARKETCAP_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn pair_example(&self) -> Option<&str> {
        Some("BTC")
    }

    fn build_url(&self, _pair: Option<&str>) -> String {
        COINMARKETCAP_API_BASE.to_string()
    }

    // With a pair: first record whose `symbol` matches it exactly, case
    // sensitive. Without: the whole array.
    fn parse_ticker(&self, body: Value, pair: Option<&str>) -> Value {
        match (body, pair) {
            (Value::Array(records), Some(pair)) => records
                .into_iter()
                .find(|record| record.get("symbol").and_then(Value::as_str) == Some(pair))
                .unwrap_or(Value::Null),
            (body, _) => body,
        }
    }
}
