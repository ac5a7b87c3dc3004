use std::collections::HashMap;

use serde_json::Value;

use crate::common::{HttpMethod, OptionsOverride, normalize};
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const KORBIT_API_BASE: &str = "https://api.korbit.co.kr/v1/ticker/detailed";
const KORBIT_PAIR: &str = "btc_krw";

/// Korbit detailed ticker. The endpoint serves the btc_krw market only, so
/// the options builder pins `currency_pair` to that market and whatever pair
/// the caller supplies never reaches the wire.
pub struct Korbit;

impl ExchangeDescriptor for Korbit {
    fn id(&self) -> ExchangeId {
        ExchangeId::Korbit
    }

    fn base_url(&self) -> &str {
        KORBIT_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn build_url(&self, _pair: Option<&str>) -> String {
        KORBIT_API_BASE.to_string()
    }

    fn parse_ticker(&self, body: Value, _pair: Option<&str>) -> Value {
        normalize(body)
    }

    fn build_options(&self, _pair: Option<&str>) -> Option<OptionsOverride> {
        Some(OptionsOverride {
            pair: Some(KORBIT_PAIR.to_string()),
            params: Some(HashMap::from([(
                "currency_pair".to_string(),
                KORBIT_PAIR.to_string(),
            )])),
            ..Default::default()
        })
    }
}
