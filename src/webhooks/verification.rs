//! Webhook signature verification for the GitHub API client.
//!
//! GitHub signs every delivery with HMAC-SHA1 over the raw request body,
//! keyed with the secret configured on the hook, and sends the result as
//! `X-Hub-Signature: sha1=<hex>`.
//!
//! - [`read_webhook_request`]: reads the body, validates it and resolves the event type
//! - [`validate_event`]: validates an already-read body
//! - [`get_event_type`]: resolves the `X-GitHub-Event` header
//!
//! The two lower-level functions stay public so a receiver serving several
//! hooks can inspect the body before choosing which secret to check against.
//!
//! # Example
//!
//! ```rust
//! use github_api::webhooks::{compute_signature, read_webhook_request, WebhookEventType, WebhookRequest};
//! use reqwest::header::{HeaderMap, HeaderValue};
//!
//! # tokio_test::block_on(async {
//! let body: &[u8] = b"message";
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(
//!     "X-Hub-Signature",
//!     HeaderValue::from_str(&compute_signature(b"key", body)).unwrap(),
//! );
//! headers.insert("X-GitHub-Event", HeaderValue::from_static("push"));
//!
//! let (event, payload) = read_webhook_request(b"key", WebhookRequest::new(headers, body))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(event, WebhookEventType::Push);
//! assert_eq!(payload, b"message");
//! # });
//! ```
//!
//! # Security
//!
//! The computed and received MACs are compared in constant time. Neither the
//! secret nor either MAC is logged or retained.

use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use sha1::Sha1;
use subtle::ConstantTimeEq;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::webhooks::{WebhookError, WebhookEventType};

type HmacSha1 = Hmac<Sha1>;

/// HTTP header name for the HMAC-SHA1 signature.
pub const HEADER_SIGNATURE: &str = "X-Hub-Signature";

/// HTTP header name for the event type.
pub const HEADER_EVENT: &str = "X-GitHub-Event";

/// HTTP header name for the unique delivery identifier.
pub const HEADER_DELIVERY: &str = "X-GitHub-Delivery";

/// Prefix of the `X-Hub-Signature` value.
pub const SIGNATURE_PREFIX: &str = "sha1=";

/// An inbound webhook delivery whose body has not been read yet.
///
/// `B` is any async reader over the request body; an in-memory `&[u8]`
/// works as well as a streaming body from an HTTP server.
#[derive(Debug)]
pub struct WebhookRequest<B> {
    headers: HeaderMap,
    body: Option<B>,
}

impl<B> WebhookRequest<B> {
    /// Creates a request with a body.
    #[must_use]
    pub const fn new(headers: HeaderMap, body: B) -> Self {
        Self {
            headers,
            body: Some(body),
        }
    }

    /// Creates a request that carried no body at all.
    #[must_use]
    pub const fn without_body(headers: HeaderMap) -> Self {
        Self {
            headers,
            body: None,
        }
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the `X-GitHub-Delivery` identifier, if exactly one is present.
    #[must_use]
    pub fn delivery_id(&self) -> Option<&str> {
        single_header(&self.headers, HEADER_DELIVERY)
    }
}

/// Returns the value of `name` only if it occurs exactly once and is valid UTF-8.
fn single_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let mut values = headers.get_all(name).iter();
    let value = values.next()?;
    if values.next().is_some() {
        return None;
    }
    value.to_str().ok()
}

fn hmac_sha1(secret: &[u8]) -> HmacSha1 {
    HmacSha1::new_from_slice(secret).expect("HMAC can take key of any size")
}

/// Computes the `X-Hub-Signature` value for `body`.
///
/// Useful for senders and tests.
///
/// ```rust
/// use github_api::webhooks::compute_signature;
///
/// assert_eq!(
///     compute_signature(b"key", b"message"),
///     "sha1=2088df74d5f2146b48146caf4965377e9d0be3a4"
/// );
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(secret: &[u8], body: &[u8]) -> String {
    let mut mac = hmac_sha1(secret);
    mac.update(body);
    format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
}

/// Validates the signature of an already-read webhook body.
///
/// `body` is `None` when the request carried no body; `Some(&[])` is a
/// valid empty payload.
///
/// # Errors
///
/// Checked in this order:
/// - [`WebhookError::BodyAbsent`] if `body` is `None`
/// - [`WebhookError::SignatureNotFound`] unless exactly one `X-Hub-Signature` value is present
/// - [`WebhookError::SignatureMarkerNotFound`] if the value does not start with `sha1=`
/// - [`WebhookError::InvalidHex`] if the rest of the value is not hexadecimal
/// - [`WebhookError::SignatureMismatch`] if the MAC does not match
pub fn validate_event(
    secret: &[u8],
    body: Option<&[u8]>,
    headers: &HeaderMap,
) -> Result<(), WebhookError> {
    let body = body.ok_or(WebhookError::BodyAbsent)?;

    let signature =
        single_header(headers, HEADER_SIGNATURE).ok_or(WebhookError::SignatureNotFound)?;
    let encoded = signature
        .strip_prefix(SIGNATURE_PREFIX)
        .ok_or(WebhookError::SignatureMarkerNotFound)?;
    let received = hex::decode(encoded)?;

    let mut mac = hmac_sha1(secret);
    mac.update(body);
    let expected = mac.finalize().into_bytes();

    // ct_eq on slices of different lengths is false
    if bool::from(expected.as_slice().ct_eq(received.as_slice())) {
        Ok(())
    } else {
        Err(WebhookError::SignatureMismatch)
    }
}

/// Resolves the event type from the `X-GitHub-Event` header.
///
/// Header names are matched case-insensitively. Unknown event names are
/// returned as [`WebhookEventType::Other`].
///
/// # Errors
///
/// Returns [`WebhookError::EventTypeNotFound`] unless exactly one value is present.
pub fn get_event_type(headers: &HeaderMap) -> Result<WebhookEventType, WebhookError> {
    single_header(headers, HEADER_EVENT)
        .map(WebhookEventType::from)
        .ok_or(WebhookError::EventTypeNotFound)
}

/// Reads, validates and classifies one webhook delivery.
///
/// The body is read to the end before the signature is checked, and only
/// returned once it has been validated.
///
/// # Errors
///
/// - [`WebhookError::BodyAbsent`] if the request has no body
/// - [`WebhookError::BodyRead`] if reading the body fails
/// - any error from [`validate_event`], then from [`get_event_type`]
pub async fn read_webhook_request<B>(
    secret: &[u8],
    request: WebhookRequest<B>,
) -> Result<(WebhookEventType, Vec<u8>), WebhookError>
where
    B: AsyncRead + Unpin,
{
    let WebhookRequest { headers, body } = request;
    let mut reader = body.ok_or(WebhookError::BodyAbsent)?;

    let mut body = Vec::new();
    reader.read_to_end(&mut body).await?;

    validate_event(secret, Some(&body), &headers)?;
    let event_type = get_event_type(&headers)?;

    tracing::debug!(
        event = %event_type,
        delivery = single_header(&headers, HEADER_DELIVERY).unwrap_or(""),
        "accepted webhook delivery"
    );

    Ok((event_type, body))
}
