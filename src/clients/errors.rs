//! HTTP-specific error types for the GitHub API client.
//!
//! # Error Handling
//!
//! Failures are kept apart by how far the call got:
//!
//! - [`HttpError::Network`]: the request could not be executed (DNS, connect,
//!   TLS, malformed URL). The `reqwest` error is carried unchanged.
//! - [`HttpError::Response`]: the request was executed but rejected with a
//!   status code of 300 or above. See [`HttpResponseError`].
//! - [`HttpError::Decode`]: a successful response body was not the JSON the
//!   caller expected.
//! - [`HttpError::InvalidRequest`]: the request failed validation before sending.
//!
//! Callers test rejections by exact status code rather than by message text:
//!
//! ```rust,ignore
//! use github_api::clients::is_404;
//!
//! match api.repository.get().await {
//!     Ok(repo) => println!("{}", repo.full_name),
//!     Err(e) if is_404(Some(&e)) => println!("no such repository"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::resources::ApiError;

/// Error returned when an HTTP request receives a status code of 300 or above.
///
/// Carries enough of the exchange to debug the failing call without
/// re-executing it. The response body has already been drained.
///
/// # Rendering
///
/// `Display` produces a stable multi-line layout that existing tooling parses:
///
/// ```rust
/// use github_api::clients::{HttpMethod, HttpResponseError};
///
/// let error = HttpResponseError::new(
///     "404 Not Found",
///     404,
///     HttpMethod::Post,
///     "http://example.org",
///     r#"{ id: "1" }"#,
///     r#"{ message: "not found" }"#,
/// );
///
/// assert_eq!(
///     error.to_string(),
///     "404 Not Found\nPOST http://example.org\nRequest Body:\n{ id: \"1\" }\nResponse Body:\n{ message: \"not found\" }"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponseError {
    /// The status line, e.g. `"404 Not Found"`.
    pub status: String,
    /// The numeric HTTP status code.
    pub code: u16,
    /// The HTTP method of the failed request.
    pub method: HttpMethod,
    /// The fully resolved request URL.
    pub url: String,
    /// The request body text; empty when the request had no body.
    pub request_body: String,
    /// The response body text; empty if it could not be read.
    pub response_body: String,
    /// An optional clarifying message attached by a higher layer.
    pub message: Option<String>,
}

impl HttpResponseError {
    /// Creates a new error from the parts of a rejected exchange.
    #[must_use]
    pub fn new(
        status: impl Into<String>,
        code: u16,
        method: HttpMethod,
        url: impl Into<String>,
        request_body: impl Into<String>,
        response_body: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            code,
            method,
            url: url.into(),
            request_body: request_body.into(),
            response_body: response_body.into(),
            message: None,
        }
    }

    /// Attaches a human-readable hint, e.g. a permission explanation for a 403.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for HttpResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headline = format!("{} {}", self.status, self.message.as_deref().unwrap_or(""));
        write!(
            f,
            "{}\n{} {}\nRequest Body:\n{}\nResponse Body:\n{}",
            headline.trim(),
            self.method,
            self.url,
            self.request_body,
            self.response_body
        )
    }
}

impl StdError for HttpResponseError {}

/// Error returned when an HTTP request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body was supplied for a method that does not take one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method that forbids a body.
        method: HttpMethod,
    },

    /// A POST, PATCH or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: HttpMethod,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A status code of 300 or above was returned.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request could not be executed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be decoded as the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code if this is a rejected-response error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns `true` if this is a rejected-response error with exactly `code`.
    #[must_use]
    pub fn is_status(&self, code: u16) -> bool {
        self.status_code() == Some(code)
    }
}

/// Returns `true` if `error` is a rejected-response error with exactly
/// `status_code`.
///
/// Any other kind of error, a different status code, or `None` yields
/// `false`. Wrapping errors are looked through via [`std::error::Error::source`].
///
/// # Example
///
/// ```rust
/// use github_api::clients::{is_http_error, HttpError, HttpMethod, HttpResponseError};
///
/// let error: HttpError = HttpResponseError::new(
///     "409 Conflict", 409, HttpMethod::Get, "http://example.org", "", "",
/// ).into();
///
/// assert!(is_http_error(Some(&error), 409));
/// assert!(!is_http_error(Some(&error), 404));
/// assert!(!is_http_error(None, 409));
/// ```
#[must_use]
pub fn is_http_error(error: Option<&(dyn StdError + 'static)>, status_code: u16) -> bool {
    let mut current = error;
    while let Some(error) = current {
        if let Some(e) = error.downcast_ref::<HttpResponseError>() {
            return e.code == status_code;
        }
        if let Some(e) = error.downcast_ref::<HttpError>() {
            return e.is_status(status_code);
        }
        if let Some(e) = error.downcast_ref::<ApiError>() {
            return e.is_status(status_code);
        }
        current = error.source();
    }
    false
}

/// Returns `true` if `error` is a rejected-response error with status 404.
#[must_use]
pub fn is_404(error: Option<&(dyn StdError + 'static)>) -> bool {
    is_http_error(error, 404)
}
