use serde_json::Value;

use crate::common::HttpMethod;
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const BTCE_API_BASE: &str = "https://btc-e.com/api/2";

/// BTC-E public API v2. The ticker lives at `<base>/<pair>/ticker` with a
/// lowercase pair.
pub struct Btce;

impl ExchangeDescriptor for Btce {
    fn id(&self) -> ExchangeId {
        ExchangeId::Btce
    }

    fn base_url(&self) -> &str {
        BTCE_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn pair_required(&self) -> bool {
        true
    }

    fn pair_example(&self) -> Option<&str> {
        Some("btc_usd")
    }

    fn build_url(&self, pair: Option<&str>) -> String {
        let pair = pair.unwrap_or_default().to_lowercase();
        format!("{}/{}/ticker", BTCE_API_BASE, pair)
    }

    // Body is {"ticker": {...}}; the feed already carries JSON numbers.
    fn parse_ticker(&self, body: Value, _pair: Option<&str>) -> Value {
        body.get("ticker").cloned().unwrap_or(Value::Null)
    }
}
