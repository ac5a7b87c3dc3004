use std::time::Duration;

use serde_json::{Map, Value};

use crate::common::{HttpMethod, normalize};
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

const BITCOINAVERAGE_API_BASE: &str = "https://api.bitcoinaverage.com/ticker/global/all";

// Published API ceiling: at most one query every 10 seconds.
const BITCOINAVERAGE_MIN_QUERY_INTERVAL: Duration = Duration::from_secs(10);

/// BitcoinAverage global index. Every currency comes back in one body keyed
/// by uppercase currency code, next to a shared `timestamp` field.
pub struct BitcoinAverage;

impl ExchangeDescriptor for BitcoinAverage {
    fn id(&self) -> ExchangeId {
        ExchangeId::BitcoinAverage
    }

    fn base_url(&self) -> &str {
        BITCOINAVERAGE_API_BASE
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn pair_example(&self) -> Option<&str> {
        Some("USD")
    }

    fn min_query_interval(&self) -> Option<Duration> {
        Some(BITCOINAVERAGE_MIN_QUERY_INTERVAL)
    }

    fn build_url(&self, _pair: Option<&str>) -> String {
        BITCOINAVERAGE_API_BASE.to_string()
    }

    fn parse_ticker(&self, body: Value, pair: Option<&str>) -> Value {
        match pair {
            Some(pair) => {
                let key = pair.to_uppercase();
                let mut subset = Map::new();
                if let Some(timestamp) = body.get("timestamp") {
                    subset.insert("timestamp".to_string(), timestamp.clone());
                }
                if let Some(entry) = body.get(&key) {
                    subset.insert(key, entry.clone());
                }
                normalize(Value::Object(subset))
            }
            None => normalize(body),
        }
    }
}
