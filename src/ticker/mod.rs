mod dispatch;
mod request;
mod transport;

use std::sync::RwLock;

use futures::future::join_all;
use serde_json::Value;

use crate::common::{
    DefaultOptions, DefaultOptionsUpdate, RequestOptions, TickerError, get_timestamp_millis,
};
use crate::exchanges::{ExchangeId, Registry};

// Re-export
pub use dispatch::{RawResponse, RequestContext, handle_response};
pub use transport::{HttpTransport, Transport};

/// Result of one entry in a [`TickerClient::fetch_many`] batch.
#[derive(Debug)]
pub struct TickerSnapshot {
    pub exchange: String,
    pub pair: Option<String>,
    /// Milliseconds since the epoch, taken when the fetch completed.
    pub timestamp: u64,
    pub result: Result<Value, TickerError>,
}

/// Fetches tickers: validates the request, builds the URL and options from
/// the exchange's descriptor, performs one HTTP call, and dispatches the
/// response through the descriptor's parser.
///
/// One instance owns the default-options cell and the exchange registry;
/// concurrent fetches share both read-only.
pub struct TickerClient {
    transport: Box<dyn Transport>,
    defaults: RwLock<DefaultOptions>,
    registry: Registry,
}

impl TickerClient {
    pub fn new() -> Self {
        Self::with_transport(Box::new(HttpTransport::new()))
    }

    /// Client with a custom transport in place of the reqwest one.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            defaults: RwLock::new(DefaultOptions::default()),
            registry: Registry::with_defaults(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Snapshot of the current defaults.
    pub fn default_options(&self) -> DefaultOptions {
        self.defaults
            .read()
            .expect("default options lock poisoned")
            .clone()
    }

    /// Apply a partial update to the process-wide defaults. `None` fields
    /// keep their current value.
    pub fn update_default_options(&self, update: DefaultOptionsUpdate) {
        self.defaults
            .write()
            .expect("default options lock poisoned")
            .apply(update);
    }

    /// URL the given exchange would be queried at for `pair`.
    pub fn build_url(&self, exchange: &str, pair: Option<&str>) -> Result<String, TickerError> {
        let descriptor = self.registry.lookup(exchange.parse()?)?;
        request::validate(&*descriptor, pair)?;
        Ok(descriptor.build_url(pair))
    }

    /// Merged request options for the given exchange and pair, including any
    /// override the exchange's descriptor applies.
    pub fn build_options(
        &self,
        exchange: &str,
        pair: Option<&str>,
    ) -> Result<RequestOptions, TickerError> {
        let descriptor = self.registry.lookup(exchange.parse()?)?;
        request::validate(&*descriptor, pair)?;
        Ok(request::build_options(
            &*descriptor,
            &self.default_options(),
            pair,
        ))
    }

    /// Fetch the current ticker from one exchange.
    ///
    /// Validation failures ([`TickerError::UnknownExchange`],
    /// [`TickerError::MissingPair`]) surface before any network access.
    /// Transport and status failures come back through the same `Result`.
    pub async fn fetch_ticker(
        &self,
        exchange: &str,
        pair: Option<&str>,
    ) -> Result<Value, TickerError> {
        let descriptor = self.registry.lookup(exchange.parse()?)?;
        request::validate(&*descriptor, pair)?;

        let url = descriptor.build_url(pair);
        let options = request::build_options(&*descriptor, &self.default_options(), pair);
        let context = RequestContext {
            exchange: options.exchange,
            pair: options.pair.clone(),
        };

        let response = self.transport.send(&url, &options).await;
        handle_response(&*descriptor, response, &context)
    }

    /// Fetch several tickers concurrently. Failures are reported per entry;
    /// one bad exchange never sinks the batch.
    pub async fn fetch_many(&self, requests: &[(&str, Option<&str>)]) -> Vec<TickerSnapshot> {
        let futures: Vec<_> = requests
            .iter()
            .map(|(exchange, pair)| self.snapshot(exchange, *pair))
            .collect();
        join_all(futures).await
    }

    async fn snapshot(&self, exchange: &str, pair: Option<&str>) -> TickerSnapshot {
        let result = self.fetch_ticker(exchange, pair).await;
        TickerSnapshot {
            exchange: exchange.to_string(),
            pair: pair.map(str::to_owned),
            timestamp: get_timestamp_millis(),
            result,
        }
    }

    /// Ids of every exchange currently registered.
    pub fn supported_exchanges(&self) -> Vec<ExchangeId> {
        self.registry.ids()
    }
}

impl Default for TickerClient {
    fn default() -> Self {
        Self::new()
    }
}
