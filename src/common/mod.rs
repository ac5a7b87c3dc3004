pub mod client;
pub mod errors;
pub mod normalize;
pub mod options;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use errors::TickerError;
pub use normalize::normalize;
pub use options::{
    DefaultOptions, DefaultOptionsUpdate, HttpMethod, OptionsOverride, RequestOptions,
};
pub use utils::get_timestamp_millis;
