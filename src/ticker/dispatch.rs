use serde_json::Value;

use crate::common::TickerError;
use crate::exchanges::{ExchangeDescriptor, ExchangeId};

/// Raw outcome of one HTTP exchange, as handed to the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Transport-level failure (DNS, TLS, timeout). Checked before the
    /// status, so a failed send wins regardless of what `status` holds.
    pub error: Option<String>,
}

/// The exchange and pair a response belongs to. The pair is the one from the
/// merged request options, which is what the descriptor's parser keys on.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub exchange: ExchangeId,
    pub pair: Option<String>,
}

/// Turn a completed response into a ticker value or a typed failure.
///
/// Only an exact 200 gets its body parsed; any other status is rejected
/// as-is. A 200 body that is not JSON, or parses to null, rejects with
/// [`TickerError::EmptyResponse`].
pub fn handle_response(
    descriptor: &dyn ExchangeDescriptor,
    response: RawResponse,
    context: &RequestContext,
) -> Result<Value, TickerError> {
    if let Some(message) = response.error {
        return Err(TickerError::TransportError(message));
    }

    if response.status != 200 {
        return Err(TickerError::HttpStatusError(response.status));
    }

    let body = match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Null) | Err(_) => return Err(TickerError::EmptyResponse),
        Ok(value) => value,
    };

    Ok(descriptor.parse_ticker(body, context.pair.as_deref()))
}
