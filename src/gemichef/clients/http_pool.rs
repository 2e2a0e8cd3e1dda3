//! Shared HTTP clients, one per base URL.
//!
//! Every gateway operation goes to the same host, so the crate keeps a
//! singleton pool of `reqwest::Client` instances keyed by base URL. The
//! clients are configured for persistent connections: idle connections are
//! kept alive and TCP keepalive prevents silent closure, avoiding DNS and
//! TLS churn on every request.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use once_cell::sync::Lazy;

/// Global HTTP client pool, lazily initialized on first access.
static HTTP_CLIENT_POOL: Lazy<Mutex<HashMap<String, reqwest::Client>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Get or create the shared HTTP client for `base_url`.
pub fn get_http_client(base_url: &str) -> reqwest::Client {
    let mut pool = HTTP_CLIENT_POOL.lock().unwrap();
    pool.entry(base_url.to_string())
        .or_insert_with(build_client)
        .clone()
}

fn build_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .connect_timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}
