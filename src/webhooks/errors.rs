//! Webhook-specific error types for the GitHub API client.
//!
//! # Error Handling
//!
//! Validation failures are unit variants so callers match them by identity,
//! never by message text:
//!
//! - [`WebhookError::BodyAbsent`]: the request carried no body at all
//! - [`WebhookError::SignatureNotFound`]: zero or several `X-Hub-Signature` values
//! - [`WebhookError::SignatureMarkerNotFound`]: the signature lacks the `sha1=` prefix
//! - [`WebhookError::SignatureMismatch`]: the HMAC does not match the body
//! - [`WebhookError::EventTypeNotFound`]: zero or several `X-GitHub-Event` values
//!
//! Lower-level failures keep their original error as the source:
//! [`WebhookError::InvalidHex`] and [`WebhookError::BodyRead`].
//!
//! # Example
//!
//! ```rust
//! use github_api::webhooks::WebhookError;
//!
//! fn status_for(error: &WebhookError) -> u16 {
//!     match error {
//!         WebhookError::SignatureMismatch => 401,
//!         WebhookError::BodyRead(_) => 500,
//!         _ => 400,
//!     }
//! }
//!
//! assert_eq!(status_for(&WebhookError::SignatureMismatch), 401);
//! ```

use thiserror::Error;

/// Error type for inbound webhook validation.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The `X-Hub-Signature` header is missing or repeated.
    #[error("\"X-Hub-Signature\" header not found")]
    SignatureNotFound,

    /// The signature does not start with `sha1=`.
    #[error("\"sha1=\" marker not found")]
    SignatureMarkerNotFound,

    /// The `X-GitHub-Event` header is missing or repeated.
    #[error("\"X-GitHub-Event\" header not found")]
    EventTypeNotFound,

    /// The request carried no body.
    ///
    /// An empty body is still a body; this is only returned when there is
    /// nothing to read at all.
    #[error("HTTP request body is absent")]
    BodyAbsent,

    /// The signature does not match the HMAC of the body.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The signature after `sha1=` is not valid hexadecimal.
    #[error("invalid signature encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_sentinel_messages() {
        assert_eq!(
            WebhookError::SignatureNotFound.to_string(),
            "\"X-Hub-Signature\" header not found"
        );
        assert_eq!(
            WebhookError::SignatureMarkerNotFound.to_string(),
            "\"sha1=\" marker not found"
        );
        assert_eq!(
            WebhookError::EventTypeNotFound.to_string(),
            "\"X-GitHub-Event\" header not found"
        );
        assert_eq!(WebhookError::SignatureMismatch.to_string(), "signature mismatch");
    }

    #[test]
    fn test_mismatch_message_does_not_leak_material() {
        let message = WebhookError::SignatureMismatch.to_string();
        assert!(!message.contains("key"));
        assert!(!message.contains("secret"));
    }

    #[test]
    fn test_wrapped_errors_keep_their_source() {
        let io = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "too large");
        let error = WebhookError::from(io);
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "too large");

        let hex_error = hex::decode("zz").unwrap_err();
        let error = WebhookError::from(hex_error.clone());
        assert!(matches!(error, WebhookError::InvalidHex(e) if e == hex_error));
    }
}
