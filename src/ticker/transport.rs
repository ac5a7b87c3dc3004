use std::sync::RwLock;

use async_trait::async_trait;

use crate::common::{HttpMethod, RequestOptions, create_http_client};
use crate::ticker::dispatch::RawResponse;

/// One-shot HTTP send. Implementations resolve a built request into the raw
/// status/body form the dispatcher consumes; swapping the implementation out
/// keeps the rest of the pipeline off the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, options: &RequestOptions) -> RawResponse;
}

/// Production transport backed by reqwest.
pub struct HttpTransport {
    // Client keyed by the (insecure, keep_alive) hints it was built with;
    // rebuilt only when the hints change.
    client: RwLock<((bool, bool), reqwest::Client)>,
}

impl HttpTransport {
    pub fn new() -> Self {
        let hints = (false, true);
        Self {
            client: RwLock::new((hints, create_http_client(hints.0, hints.1))),
        }
    }

    fn client_for(&self, options: &RequestOptions) -> reqwest::Client {
        let hints = (options.insecure, options.keep_alive);
        {
            let cached = self.client.read().expect("transport lock poisoned");
            if cached.0 == hints {
                return cached.1.clone();
            }
        }
        let client = create_http_client(hints.0, hints.1);
        let mut cached = self.client.write().expect("transport lock poisoned");
        *cached = (hints, client.clone());
        client
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> RawResponse {
        let client = self.client_for(options);

        let request = match options.method {
            HttpMethod::Get => {
                let mut request = client.get(url);
                if !options.params.is_empty() {
                    request = request.query(&options.params);
                }
                request
            }
            HttpMethod::Post => client.post(url).form(&options.params),
        };

        let request = request
            .header(reqwest::header::CONTENT_TYPE, options.content_type.as_str())
            .header(reqwest::header::USER_AGENT, options.user_agent.as_str());

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                RawResponse {
                    status,
                    body,
                    error: None,
                }
            }
            Err(e) => RawResponse {
                status: 0,
                body: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}
