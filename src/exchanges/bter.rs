use serde_json::Value;

use crate::common::{HttpMethod, normalize};
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const BTER_API_BASE: &str = "http://data.bter.com/api/1/ticker";

/// Bter ticker. The body is flat price data with a `result` status field
/// mixed into the payload; the pair goes into the path exactly as given.
pub struct Bter;

impl ExchangeDescriptor for Bter {
    fn id(&self) -> ExchangeId {
        ExchangeId::Bter
    }

    fn base_url(&self) -> &str {
        BTER_API_BASE
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
        format!("{}/{}", BTER_API_BASE, pair.unwrap_or_default())
    }

    fn parse_ticker(&self, mut body: Value, _pair: Option<&str>) -> Value {
        if let Value::Object(map) = &mut body {
            map.remove("result");
        }
        normalize(body)
    }
}
