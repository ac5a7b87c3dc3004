//! `coin-ticker-rs`
//!
//! Fetch current ("ticker") prices from several cryptocurrency exchange APIs
//! and normalize the numeric fields in their heterogeneous JSON responses.
//!
//! ## Quickstart
//!
//! ```no_run
//! use coin_ticker_rs::TickerClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), coin_ticker_rs::TickerError> {
//! let client = TickerClient::new();
//! let ticker = client.fetch_ticker("btce", Some("btc_usd")).await?;
//! println!("{}", ticker);
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch fetch
//!
//! ```no_run
//! use coin_ticker_rs::TickerClient;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = TickerClient::new();
//! let snapshots = client
//!     .fetch_many(&[("btce", Some("btc_usd")), ("bitcoinaverage", Some("USD"))])
//!     .await;
//!
//! for snapshot in snapshots {
//!     match snapshot.result {
//!         Ok(ticker) => println!("{}: {}", snapshot.exchange, ticker),
//!         Err(e) => eprintln!("{}: {}", snapshot.exchange, e),
//!     }
//! }
//! # }
//! ```

pub mod common;
pub mod exchanges;
pub mod ticker;

// Re-export common types
pub use common::{
    DefaultOptions, DefaultOptionsUpdate, HttpMethod, OptionsOverride, RequestOptions, TickerError,
    normalize,
};

pub use exchanges::{
    BitcoinAverage, Btc38, Btce, Bter, CoinMarketCap, ExchangeDescriptor, ExchangeId, Exmo, Korbit,
    Registry,
};

pub use ticker::{
    HttpTransport, RawResponse, RequestContext, TickerClient, TickerSnapshot, Transport,
    handle_response,
};
