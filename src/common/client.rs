const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Build the underlying HTTP client. `insecure` disables certificate
/// verification; `keep_alive = false` turns off connection reuse.
pub fn create_http_client(insecure: bool, keep_alive: bool) -> reqwest::Client {
    let mut builder = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT);

    if insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }
    if !keep_alive {
        builder = builder.pool_max_idle_per_host(0);
    }

    builder.build().expect("Failed to create HTTP client")
}
