//! Integration tests for the HTTP fetcher
//!
//! These use wiremock servers to exercise the retry and status handling
//! end-to-end against a real socket.

use catcher::config::FetchConfig;
use catcher::{build_http_client, fetch_html};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fast retry settings so failure-path tests do not sleep for real
fn fast_fetch() -> FetchConfig {
    FetchConfig {
        max_retries: 2,
        backoff_ms: 10,
        ..FetchConfig::default()
    }
}

#[tokio::test]
async fn test_fetch_success_first_try() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetch = fast_fetch();
    let client = build_http_client(&fetch).unwrap();
    let body = fetch_html(&client, &format!("{}/page", server.uri()), &fetch).await;
    assert_eq!(body.as_deref(), Some("<html>ok</html>"));
}

#[tokio::test]
async fn test_fetch_retries_then_succeeds() {
    let server = MockServer::start().await;

    // First attempt hits the 500 mock, later attempts fall through to the 200
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
        .expect(1)
        .mount(&server)
        .await;

    let fetch = fast_fetch();
    let client = build_http_client(&fetch).unwrap();
    let body = fetch_html(&client, &format!("{}/flaky", server.uri()), &fetch).await;
    assert_eq!(body.as_deref(), Some("recovered"));
}

#[tokio::test]
async fn test_fetch_gives_up_after_all_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3) // initial attempt + 2 retries
        .mount(&server)
        .await;

    let fetch = fast_fetch();
    let client = build_http_client(&fetch).unwrap();
    let body = fetch_html(&client, &format!("{}/broken", server.uri()), &fetch).await;
    assert_eq!(body, None);
}

#[tokio::test]
async fn test_fetch_rejects_non_200_success_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/accepted"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .mount(&server)
        .await;

    let fetch = FetchConfig {
        max_retries: 0,
        backoff_ms: 10,
        ..FetchConfig::default()
    };
    let client = build_http_client(&fetch).unwrap();
    let body = fetch_html(&client, &format!("{}/accepted", server.uri()), &fetch).await;
    assert_eq!(body, None);
}

#[tokio::test]
async fn test_fetch_rejects_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(3)
        .mount(&server)
        .await;

    let fetch = fast_fetch();
    let client = build_http_client(&fetch).unwrap();
    let body = fetch_html(&client, &format!("{}/empty", server.uri()), &fetch).await;
    assert_eq!(body, None);
}
