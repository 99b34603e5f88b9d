//! HTTP fetcher
//!
//! One long-lived [`Client`] carries the browser-like identity and the
//! connection pool for the whole process; [`fetch_html`] wraps each GET in
//! bounded retry with linear backoff. No error ever crosses this boundary:
//! every failure mode collapses into `None`.

use crate::config::FetchConfig;
use reqwest::{header, Client, StatusCode};

/// Browser-like user agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Language preference sent with every request
pub const ACCEPT_LANGUAGE: &str = "tr-TR,tr;q=0.9,en;q=0.8";

/// Builds the HTTP client shared by all fetches
///
/// The user agent and language header are process-wide constants, not per-call
/// configuration. The client timeout acts as the read bound; the connect
/// timeout is separate and shorter.
pub fn build_http_client(fetch: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .connect_timeout(fetch.connect_timeout())
        .timeout(fetch.read_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body, or nothing
///
/// Attempts the request up to `max_retries + 1` times. An attempt succeeds
/// only when the status is exactly 200 AND the body is non-empty; any other
/// status, transport error, or empty body counts as a failed attempt. Between
/// attempts the task sleeps for `backoff_ms * (attempt + 1)` (linear, not
/// exponential). Callers treat the `None` result uniformly regardless of the
/// underlying cause.
pub async fn fetch_html(client: &Client, url: &str, fetch: &FetchConfig) -> Option<String> {
    for attempt in 0..=fetch.max_retries {
        match client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                match response.text().await {
                    Ok(body) if !body.is_empty() => return Some(body),
                    Ok(_) => tracing::debug!("Empty body from {}", url),
                    Err(e) => tracing::debug!("Body read failed for {}: {}", url, e),
                }
            }
            Ok(response) => tracing::debug!("HTTP {} from {}", response.status(), url),
            Err(e) => tracing::debug!("Request error for {}: {}", url, e),
        }

        if attempt < fetch.max_retries {
            tokio::time::sleep(fetch.backoff(attempt)).await;
        }
    }

    tracing::warn!(
        "Giving up on {} after {} attempts",
        url,
        fetch.max_retries + 1
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&FetchConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_is_browser_like() {
        assert!(USER_AGENT.starts_with("Mozilla/5.0"));
        assert!(ACCEPT_LANGUAGE.contains("tr-TR"));
    }

    // Retry and status handling are covered with wiremock in tests/fetch_tests.rs
}
