//! Inbound webhook verification for GitHub deliveries.
//!
//! GitHub signs each delivery with HMAC-SHA1 over the raw request body,
//! keyed by the hook's secret, and sends the result as
//! `X-Hub-Signature: sha1=<hex>`. The event kind travels in
//! `X-GitHub-Event`.
//!
//! # Overview
//!
//! - [`validate_event`]: checks the signature of a body against its headers
//! - [`get_event_type`]: classifies a delivery by its `X-GitHub-Event` header
//! - [`read_webhook_request`]: reads a body stream, validates it and classifies it
//! - [`compute_signature`]: produces the header value for a body, for tests and replays
//! - Payload structs such as [`PushEventPayload`] for decoding verified bodies
//!
//! # Example
//!
//! ```rust
//! use github_api::webhooks::{compute_signature, validate_event, get_event_type,
//!     WebhookEventType, HEADER_EVENT, HEADER_SIGNATURE};
//! use reqwest::header::{HeaderMap, HeaderValue};
//!
//! let secret = b"hook-secret";
//! let body = br#"{"zen":"Design for failure."}"#;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(HEADER_SIGNATURE, HeaderValue::from_str(&compute_signature(secret, body)).unwrap());
//! headers.insert(HEADER_EVENT, HeaderValue::from_static("ping"));
//!
//! assert!(validate_event(secret, Some(body), &headers).is_ok());
//! assert_eq!(get_event_type(&headers).unwrap(), WebhookEventType::Ping);
//! ```

mod errors;
mod payloads;
mod types;
mod verification;

pub use errors::WebhookError;
pub use payloads::{
    Hook, HookConfig, IssueCommentEventPayload, IssuesEventPayload, PingEventPayload,
    PullRequestEventPayload, PushCommit, PushCommitAuthor, PushEventPayload, RepositoryOwner,
    RepositorySummary,
};
pub use types::WebhookEventType;
pub use verification::{
    compute_signature, get_event_type, read_webhook_request, validate_event, WebhookRequest,
    HEADER_DELIVERY, HEADER_EVENT, HEADER_SIGNATURE, SIGNATURE_PREFIX,
};
