use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::exchanges::ExchangeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Process-wide request defaults. Read by every request, written only through
/// [`crate::TickerClient::update_default_options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultOptions {
    pub content_type: String,
    pub user_agent: String,
    /// Accept invalid TLS certificates.
    pub insecure: bool,
    /// Connection-reuse hint for the transport.
    pub keep_alive: bool,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            content_type: "application/x-www-form-urlencoded".to_string(),
            user_agent: "Mozilla/4.0 (compatible; coin-ticker-rs client)".to_string(),
            insecure: false,
            keep_alive: true,
        }
    }
}

/// Partial update for [`DefaultOptions`]; `None` fields keep the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultOptionsUpdate {
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub insecure: Option<bool>,
    pub keep_alive: Option<bool>,
}

impl DefaultOptions {
    pub fn apply(&mut self, update: DefaultOptionsUpdate) {
        if let Some(content_type) = update.content_type {
            self.content_type = content_type;
        }
        if let Some(user_agent) = update.user_agent {
            self.user_agent = user_agent;
        }
        if let Some(insecure) = update.insecure {
            self.insecure = insecure;
        }
        if let Some(keep_alive) = update.keep_alive {
            self.keep_alive = keep_alive;
        }
    }
}

/// Options for one request: the defaults, the request fields, and whatever
/// the descriptor's override applied on top, in that precedence order.
/// Lifetime: one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub exchange: ExchangeId,
    pub pair: Option<String>,
    pub method: HttpMethod,
    pub content_type: String,
    pub user_agent: String,
    pub insecure: bool,
    pub keep_alive: bool,
    /// Query params on GET, form body on POST.
    pub params: HashMap<String, String>,
}

/// Adjustments a descriptor may make to the merged options. Applied last, so
/// every field here wins over both the defaults and the request fields.
#[derive(Debug, Clone, Default)]
pub struct OptionsOverride {
    pub method: Option<HttpMethod>,
    pub pair: Option<String>,
    pub params: Option<HashMap<String, String>>,
}

impl RequestOptions {
    pub(crate) fn merged(
        defaults: &DefaultOptions,
        exchange: ExchangeId,
        pair: Option<&str>,
        method: HttpMethod,
        descriptor_override: Option<OptionsOverride>,
    ) -> Self {
        let mut options = RequestOptions {
            exchange,
            pair: pair.map(str::to_owned),
            method,
            content_type: defaults.content_type.clone(),
            user_agent: defaults.user_agent.clone(),
            insecure: defaults.insecure,
            keep_alive: defaults.keep_alive,
            params: HashMap::new(),
        };

        if let Some(overrides) = descriptor_override {
            if let Some(method) = overrides.method {
                options.method = method;
            }
            if let Some(pair) = overrides.pair {
                options.pair = Some(pair);
            }
            if let Some(params) = overrides.params {
                options.params = params;
            }
        }

        options
    }
}
