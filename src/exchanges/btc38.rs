use serde_json::Value;

use crate::common::{HttpMethod, normalize};
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const BTC38_API_BASE: &str = "http://api.btc38.com/v1/ticker.php?c=";

/// BTC38 ticker. The base URL already ends mid query string; the lowercased
/// coin code is appended straight onto it.
pub struct Btc38;

impl ExchangeDescriptor for Btc38 {
    fn id(&self) -> ExchangeId {
        ExchangeId::Btc38
    }

    fn base_url(&self) -> &str {
        BTC38_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn pair_required(&self) -> bool {
        true
    }

    fn pair_example(&self) -> Option<&str> {
        Some("doge")
    }

    fn build_url(&self, pair: Option<&str>) -> String {
        format!("{}{}", BTC38_API_BASE, pair.unwrap_or_default().to_lowercase())
    }

    // Body is {"ticker": {...}} with string-encoded numbers.
    fn parse_ticker(&self, body: Value, _pair: Option<&str>) -> Value {
        normalize(body.get("ticker").cloned().unwrap_or(Value::Null))
    }
}
