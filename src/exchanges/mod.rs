pub mod bitcoinaverage;
pub mod btc38;
pub mod btce;
pub mod bter;
pub mod coinmarketcap;
pub mod exmo;
pub mod korbit;
mod registry;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{HttpMethod, OptionsOverride, TickerError};

// Re-export
pub use bitcoinaverage::BitcoinAverage;
pub use btc38::Btc38;
pub use btce::Btce;
pub use bter::Bter;
pub use coinmarketcap::CoinMarketCap;
pub use exmo::Exmo;
pub use korbit::Korbit;
pub use registry::Registry;

// Common exchange enum definition

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExchangeId {
    Btce,
    Bter,
    Exmo,
    Korbit,
    Btc38,
    BitcoinAverage,
    CoinMarketCap,
}

impl ExchangeId {
    pub const ALL: [ExchangeId; 7] = [
        ExchangeId::Btce,
        ExchangeId::Bter,
        ExchangeId::Exmo,
        ExchangeId::Korbit,
        ExchangeId::Btc38,
        ExchangeId::BitcoinAverage,
        ExchangeId::CoinMarketCap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Btce => "btce",
            ExchangeId::Bter => "bter",
            ExchangeId::Exmo => "exmo",
            ExchangeId::Korbit => "korbit",
            ExchangeId::Btc38 => "btc38",
            ExchangeId::BitcoinAverage => "bitcoinaverage",
            ExchangeId::CoinMarketCap => "coinmarketcap",
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeId {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "btce" => Ok(ExchangeId::Btce),
            "bter" => Ok(ExchangeId::Bter),
            "exmo" => Ok(ExchangeId::Exmo),
            "korbit" => Ok(ExchangeId::Korbit),
            "btc38" => Ok(ExchangeId::Btc38),
            "bitcoinaverage" => Ok(ExchangeId::BitcoinAverage),
            "coinmarketcap" => Ok(ExchangeId::CoinMarketCap),
            _ => Err(TickerError::UnknownExchange(s.to_string())),
        }
    }
}

// Common exchange descriptor definition

/// One exchange's request/response contract: where its ticker endpoint lives,
/// how to address a pair, and how to reduce its body to a ticker value.
///
/// `build_url` and `parse_ticker` are pure. `build_options` exists only for
/// exchanges whose method or payload depends on the pair.
pub trait ExchangeDescriptor: Send + Sync {
    fn id(&self) -> ExchangeId;
    fn base_url(&self) -> &str;
    fn http_method(&self) -> HttpMethod;

    fn pair_required(&self) -> bool {
        false
    }

    /// Example pair for error messages.
    fn pair_example(&self) -> Option<&str> {
        None
    }

    /// Documented minimum interval between queries, where the exchange
    /// publishes one. Metadata only; nothing in this crate enforces it.
    fn min_query_interval(&self) -> Option<Duration> {
        None
    }

    fn build_url(&self, pair: Option<&str>) -> String;

    fn parse_ticker(&self, body: Value, pair: Option<&str>) -> Value;

    fn build_options(&self, pair: Option<&str>) -> Option<OptionsOverride> {
        let _ = pair;
        None
    }
}
