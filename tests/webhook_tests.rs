//! Integration tests for webhook verification.
//!
//! These tests drive signed deliveries through the public API, from raw
//! headers and body stream to a classified, decoded payload.

use github_api::webhooks::{
    compute_signature, get_event_type, read_webhook_request, validate_event, PingEventPayload,
    PushEventPayload, WebhookError, WebhookEventType, WebhookRequest, HEADER_DELIVERY,
    HEADER_EVENT, HEADER_SIGNATURE,
};
use reqwest::header::{HeaderMap, HeaderValue};

const SECRET: &[u8] = b"It's a Secret to Everybody";

fn signed_headers(body: &[u8], event: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HEADER_SIGNATURE,
        HeaderValue::from_str(&compute_signature(SECRET, body)).unwrap(),
    );
    headers.insert(HEADER_EVENT, HeaderValue::from_static(event));
    headers.insert(
        HEADER_DELIVERY,
        HeaderValue::from_static("72d3162e-cc78-11e3-81ab-4c9367dc0958"),
    );
    headers
}

// ============================================================================
// End-to-end Deliveries
// ============================================================================

#[tokio::test]
async fn test_push_delivery_is_verified_and_decoded() {
    let body = br#"{"ref":"refs/heads/main","before":"0000","after":"a108","sender":{"login":"mona"},"repository":{"name":"r","owner":{"name":"mona"}}}"#;
    let request = WebhookRequest::new(signed_headers(body, "push"), &body[..]);

    assert_eq!(
        request.delivery_id(),
        Some("72d3162e-cc78-11e3-81ab-4c9367dc0958")
    );

    let (event, raw) = read_webhook_request(SECRET, request).await.unwrap();
    assert_eq!(event, WebhookEventType::Push);
    assert_eq!(raw, body);

    let push: PushEventPayload = serde_json::from_slice(&raw).unwrap();
    assert_eq!(push.git_ref, "refs/heads/main");
    assert_eq!(push.sender.login, "mona");
}

#[tokio::test]
async fn test_ping_delivery() {
    let body = br#"{"zen":"Practicality beats purity.","hook_id":7,"hook":{"id":7,"events":["*"]}}"#;
    let request = WebhookRequest::new(signed_headers(body, "ping"), &body[..]);

    let (event, raw) = read_webhook_request(SECRET, request).await.unwrap();
    let ping: PingEventPayload = serde_json::from_slice(&raw).unwrap();

    assert_eq!(event, WebhookEventType::Ping);
    assert_eq!(ping.hook_id, 7);
    assert_eq!(ping.hook.events, vec!["*"]);
}

#[tokio::test]
async fn test_unknown_event_is_preserved() {
    let body = b"{}";
    let request = WebhookRequest::new(signed_headers(body, "merge_group"), &body[..]);

    let (event, _) = read_webhook_request(SECRET, request).await.unwrap();

    assert_eq!(event, WebhookEventType::Other("merge_group".to_string()));
    assert_eq!(event.to_string(), "merge_group");
}

#[tokio::test]
async fn test_tampered_delivery_is_rejected() {
    let body = br#"{"action":"opened"}"#;
    let headers = signed_headers(body, "pull_request");
    let request = WebhookRequest::new(headers, &br#"{"action":"closed"}"#[..]);

    let error = read_webhook_request(SECRET, request).await.unwrap_err();

    assert!(matches!(error, WebhookError::SignatureMismatch));
}

#[tokio::test]
async fn test_wrong_secret_is_rejected() {
    let body = b"{}";
    let request = WebhookRequest::new(signed_headers(body, "push"), &body[..]);

    let error = read_webhook_request(b"another secret", request)
        .await
        .unwrap_err();

    assert!(matches!(error, WebhookError::SignatureMismatch));
}

#[tokio::test]
async fn test_missing_body_is_rejected() {
    let request = WebhookRequest::<&[u8]>::without_body(signed_headers(b"", "push"));

    let error = read_webhook_request(SECRET, request).await.unwrap_err();

    assert!(matches!(error, WebhookError::BodyAbsent));
}

// ============================================================================
// Header Handling
// ============================================================================

#[test]
fn test_empty_body_with_valid_signature_is_accepted() {
    let headers = signed_headers(b"", "ping");

    assert!(validate_event(SECRET, Some(b""), &headers).is_ok());
}

#[test]
fn test_signature_is_checked_before_event_type() {
    let body = b"{}";
    let mut headers = HeaderMap::new();
    headers.insert(HEADER_SIGNATURE, HeaderValue::from_static("sha1=00"));

    assert!(matches!(
        validate_event(SECRET, Some(body), &headers),
        Err(WebhookError::SignatureMismatch)
    ));
    assert!(matches!(
        get_event_type(&headers),
        Err(WebhookError::EventTypeNotFound)
    ));
}

#[test]
fn test_lowercase_header_names_are_found() {
    let body = b"payload";
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-hub-signature",
        HeaderValue::from_str(&compute_signature(SECRET, body)).unwrap(),
    );
    headers.insert("x-github-event", HeaderValue::from_static("issues"));

    assert!(validate_event(SECRET, Some(body), &headers).is_ok());
    assert_eq!(get_event_type(&headers).unwrap(), WebhookEventType::Issues);
}
