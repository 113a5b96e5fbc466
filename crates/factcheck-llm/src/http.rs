//! Shared HTTP client construction for consistent timeout and TLS configuration.

use std::time::Duration;

/// Create an HTTP client with the standard factcheck configuration.
///
/// Config: 30s connect timeout, `timeout_secs` request timeout, rustls TLS,
/// `factcheck/{version}` user-agent, redirect limit 10.
#[must_use]
pub fn default_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("factcheck/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("default HTTP client construction must not fail")
}
