//! Integration tests for the HTTP executor.
//!
//! These tests run requests against a local mock server and verify the
//! headers sent, body handling, and the contents of rejected-response errors.

use github_api::clients::{is_404, is_http_error, HttpClient, HttpError, HttpMethod, HttpRequest};
use github_api::{AccessToken, ApiConfig, BaseUrl};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that carry no `Authorization` header.
struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request
            .headers
            .iter()
            .any(|(name, _)| name.as_str().eq_ignore_ascii_case("authorization"))
    }
}

fn client_for(server: &MockServer, token: &str) -> HttpClient {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .token(AccessToken::new(token))
        .user_agent_prefix("test-bot")
        .build();
    HttpClient::new(&config)
}

// ============================================================================
// Request Headers
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "token secret-token"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "User-Agent",
            format!("test-bot | github-api-rust v{}", github_api::clients::SDK_VERSION).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "secret-token");
    let response = client.get(&client.url("/user")).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zen"))
        .and(NoAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_string("Keep it simple."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "");
    let text = client
        .get(&client.url("/zen"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(text, "Keep it simple.");
}

#[tokio::test]
async fn test_accept_override_replaces_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/r/pulls/1"))
        .and(header("Accept", "application/vnd.github.v3.diff"))
        .respond_with(ResponseTemplate::new(200).set_body_string("diff --git a/x b/x"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let diff = client
        .get_with_accept(&client.url("/repos/o/r/pulls/1"), "application/vnd.github.v3.diff")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(diff.starts_with("diff --git"));
}

// ============================================================================
// Request Bodies
// ============================================================================

#[tokio::test]
async fn test_patch_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/repos/o/r/issues/3"))
        .and(body_string(r#"{"assignee":"mona"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"number":3}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let value: serde_json::Value = client
        .patch(&client.url("/repos/o/r/issues/3"), r#"{"assignee":"mona"}"#)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(value["number"], 3);
}

#[tokio::test]
async fn test_body_on_get_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let request = HttpRequest::builder(HttpMethod::Get, client.url("/user"))
        .body("{}")
        .build();
    let result = match request {
        Ok(request) => client.request(request).await.map(|_| ()),
        Err(e) => Err(HttpError::from(e)),
    };

    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

// ============================================================================
// Rejected Responses
// ============================================================================

#[tokio::test]
async fn test_rejected_response_carries_both_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/o/r/git/refs"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"message":"Reference already exists"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let url = client.url("/repos/o/r/git/refs");
    let request_body = r#"{"ref":"refs/heads/x","sha":"abc"}"#;
    let error = client.post(&url, request_body).await.unwrap_err();

    let HttpError::Response(response_error) = &error else {
        panic!("expected a response error, got {error:?}");
    };
    assert_eq!(response_error.code, 422);
    assert_eq!(response_error.status, "422 Unprocessable Entity");
    assert_eq!(response_error.method, HttpMethod::Post);
    assert_eq!(response_error.url, url);
    assert_eq!(response_error.request_body, request_body);
    assert_eq!(
        response_error.response_body,
        r#"{"message":"Reference already exists"}"#
    );
    assert_eq!(
        error.to_string(),
        format!(
            "422 Unprocessable Entity\nPOST {url}\nRequest Body:\n{request_body}\nResponse Body:\n{{\"message\":\"Reference already exists\"}}"
        )
    );
    assert!(is_http_error(Some(&error), 422));
}

#[tokio::test]
async fn test_404_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let error = client.get(&client.url("/repos/o/missing")).await.unwrap_err();

    assert!(is_404(Some(&error)));
    assert!(!is_http_error(Some(&error), 500));
    assert_eq!(error.status_code(), Some(404));
}

#[tokio::test]
async fn test_redirect_status_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = client_for(&server, "t");
    let error = client.get(&client.url("/user")).await.unwrap_err();

    assert!(error.is_status(304));
}

// ============================================================================
// Transport Errors
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:0").unwrap())
        .build();
    let client = HttpClient::new(&config);

    let error = client.get(&client.url("/user")).await.unwrap_err();

    assert!(matches!(error, HttpError::Network(_)));
    assert!(!is_404(Some(&error)));
}

#[tokio::test]
async fn test_malformed_url_is_network_error() {
    let client = HttpClient::new(&ApiConfig::default());

    let error = client.get("not a url").await.unwrap_err();

    assert!(matches!(error, HttpError::Network(_)));
}
