use crate::common::{DefaultOptions, RequestOptions, TickerError};
use crate::exchanges::ExchangeDescriptor;

/// Check that a pair is present where the exchange demands one. An empty
/// string counts as absent.
pub(crate) fn validate(
    descriptor: &dyn ExchangeDescriptor,
    pair: Option<&str>,
) -> Result<(), TickerError> {
    if descriptor.pair_required() && pair.is_none_or(str::is_empty) {
        let mut message = format!("{} requires a currency pair", descriptor.id());
        if let Some(example) = descriptor.pair_example() {
            message.push_str(&format!(" (e.g. {})", example));
        }
        return Err(TickerError::MissingPair(message));
    }
    Ok(())
}

/// Merge the request options: defaults first, then the request fields, then
/// the descriptor's own override. Later sources win.
pub(crate) fn build_options(
    descriptor: &dyn ExchangeDescriptor,
    defaults: &DefaultOptions,
    pair: Option<&str>,
) -> RequestOptions {
    RequestOptions::merged(
        defaults,
        descriptor.id(),
        pair,
        descriptor.http_method(),
        descriptor.build_options(pair),
    )
}
