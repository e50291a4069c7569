//! Error type for resource operations.
//!
//! Every resource facade returns [`ApiError`]. Rejected responses stay
//! wrapped in [`ApiError::Http`] so callers can still test the status code:
//!
//! ```rust,ignore
//! use github_api::resources::ApiError;
//!
//! match api.pull_request.merge(42, MergeMethod::Squash).await {
//!     Ok(result) => println!("merged as {}", result.sha),
//!     Err(e) if e.is_status(405) => println!("not mergeable"),
//!     Err(ApiError::Http(e)) => println!("request failed: {e}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use github_api::resources::ApiError;
///
/// let error = ApiError::ForkTimeout {
///     owner: "octocat".to_string(),
///     repo: "hello-world".to_string(),
///     timeout: Duration::from_secs(5),
/// };
/// assert_eq!(
///     error.to_string(),
///     "timed out after 5s waiting for fork of octocat/hello-world"
/// );
/// assert!(!error.is_status(404));
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request failed or its response could not be decoded.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Base64 content could not be decoded.
    #[error("Failed to decode content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// A fork did not become ready before the timeout.
    #[error("timed out after {timeout:?} waiting for fork of {owner}/{repo}")]
    ForkTimeout {
        /// Owner of the forked repository.
        owner: String,
        /// Name of the forked repository.
        repo: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

impl ApiError {
    /// Returns the HTTP status code if the server rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the server rejected the request with exactly `code`.
    #[must_use]
    pub fn is_status(&self, code: u16) -> bool {
        self.status_code() == Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{is_404, is_http_error, HttpMethod, HttpResponseError};

    fn rejected(code: u16) -> ApiError {
        HttpError::from(HttpResponseError::new(
            format!("{code} Status"),
            code,
            HttpMethod::Get,
            "https://api.github.com/repos/o/r",
            "",
            "{}",
        ))
        .into()
    }

    #[test]
    fn test_status_code_is_exposed_through_wrapper() {
        let error = rejected(409);
        assert_eq!(error.status_code(), Some(409));
        assert!(error.is_status(409));
        assert!(is_http_error(Some(&error), 409));
        assert!(!is_404(Some(&error)));
    }

    #[test]
    fn test_http_variant_renders_transparently() {
        let error = rejected(404);
        assert!(is_404(Some(&error)));
        assert!(error
            .to_string()
            .starts_with("404 Status\nGET https://api.github.com/repos/o/r\n"));
    }

    #[test]
    fn test_non_http_variants_have_no_status() {
        let error: ApiError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(error, ApiError::Serialize(_)));
        assert_eq!(error.status_code(), None);
    }
}
