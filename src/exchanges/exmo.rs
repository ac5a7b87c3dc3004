use std::collections::HashMap;

use serde_json::Value;

use crate::common::{HttpMethod, OptionsOverride, normalize};
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const EXMO_API_BASE: &str = "https://api.exmo.com/v1/ticker";

/// Exmo ticker. One endpoint for every market, keyed by uppercase pair.
/// Asking for a single pair means a POST with a `symbol` form field; with no
/// pair the endpoint is queried with a plain GET and the whole book comes
/// back.
pub struct Exmo;

impl ExchangeDescriptor for Exmo {
    fn id(&self) -> ExchangeId {
        ExchangeId::Exmo
    }

    fn base_url(&self) -> &str {
        EXMO_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn pair_example(&self) -> Option<&str> {
        Some("BTC_USD")
    }

    fn build_url(&self, _pair: Option<&str>) -> String {
        EXMO_API_BASE.to_string()
    }

    fn parse_ticker(&self, body: Value, pair: Option<&str>) -> Value {
        let normalized = normalize(body);
        match pair {
            Some(pair) => normalized
                .get(pair.to_uppercase())
                .cloned()
                .unwrap_or(Value::Null),
            None => normalized,
        }
    }

    fn build_options(&self, pair: Option<&str>) -> Option<OptionsOverride> {
        Some(match pair {
            Some(pair) => OptionsOverride {
                params: Some(HashMap::from([("symbol".to_string(), pair.to_string())])),
                ..Default::default()
            },
            None => OptionsOverride {
                method: Some(HttpMethod::Get),
                ..Default::default()
            },
        })
    }
}
