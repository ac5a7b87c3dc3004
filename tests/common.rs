use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coin_ticker_rs::{RawResponse, RequestOptions, TickerClient, Transport};

// Allow dead code warnings since different test files use different items from this module
#[allow(dead_code)]
pub type CallLog = Arc<Mutex<Vec<(String, RequestOptions)>>>;

/// Transport stub: records every send and answers with one canned response.
#[allow(dead_code)]
pub struct StubTransport {
    response: RawResponse,
    log: CallLog,
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> RawResponse {
        self.log
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));
        self.response.clone()
    }
}

/// Client wired to a stub transport, plus the log of every send it performs.
#[allow(dead_code)]
pub fn stub_client(response: RawResponse) -> (TickerClient, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let transport = StubTransport {
        response,
        log: log.clone(),
    };
    (TickerClient::with_transport(Box::new(transport)), log)
}

/// 200 response carrying the JSON encoding of `body`.
#[allow(dead_code)]
pub fn json_response(body: &serde_json::Value) -> RawResponse {
    RawResponse {
        status: 200,
        body: body.to_string(),
        error: None,
    }
}
