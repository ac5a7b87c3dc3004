#[derive(thiserror::Error, Debug)]
pub enum TickerError {
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Missing pair: {0}")]
    MissingPair(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("HTTP status {0}")]
    HttpStatusError(u16),

    #[error("Empty or unparseable response body")]
    EmptyResponse,
}
