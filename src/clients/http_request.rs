//! HTTP request types for the GitHub API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the API.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP PUT method for replacing resources or triggering actions.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods whose requests carry a body.
    #[must_use]
    pub const fn takes_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single request to the API.
///
/// The URL is fully resolved (base URL prepended, placeholders substituted).
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use github_api::clients::{HttpRequest, HttpMethod};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.github.com/user")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://api.github.com/repos/o/r/labels")
///     .body(r#"{"name":"bug","color":"f29513"}"#)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The fully resolved URL.
    pub url: String,
    /// The JSON request body text, if any.
    pub body: Option<String>,
    /// Replacement for the default `Accept` header, if any.
    pub accept: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Get` or `Delete` but `body` is `Some`
    /// - `http_method` is `Post`, `Patch` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.takes_body(), self.body.is_some()) {
            (false, true) => Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method,
            }),
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method,
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<String>,
    accept: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            accept: None,
        }
    }

    /// Sets the request body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Overrides the `Accept` header, e.g. to opt into a preview media type.
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            accept: self.accept.filter(|accept| !accept.is_empty()),
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://baseurl.org/user")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "http://baseurl.org/user");
        assert!(request.body.is_none());
        assert!(request.accept.is_none());
    }

    #[test]
    fn test_builder_creates_valid_patch_request() {
        let request = HttpRequest::builder(HttpMethod::Patch, "http://baseurl.org/x")
            .body("expected body")
            .build()
            .unwrap();

        assert_eq!(request.body.as_deref(), Some("expected body"));
    }

    #[test]
    fn test_empty_body_is_a_body() {
        let request = HttpRequest::builder(HttpMethod::Post, "http://baseurl.org/forks")
            .body("")
            .build()
            .unwrap();

        assert_eq!(request.body.as_deref(), Some(""));
    }

    #[test]
    fn test_verify_requires_body_for_post_patch_put() {
        for method in [HttpMethod::Post, HttpMethod::Patch, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "http://baseurl.org/x").build();
            assert_eq!(result.unwrap_err(), InvalidHttpRequestError::MissingBody { method });
        }
    }

    #[test]
    fn test_verify_rejects_body_for_get_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let result = HttpRequest::builder(method, "http://baseurl.org/x")
                .body("{}")
                .build();
            assert_eq!(
                result.unwrap_err(),
                InvalidHttpRequestError::BodyNotAllowed { method }
            );
        }
    }

    #[test]
    fn test_accept_override() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://baseurl.org/x")
            .accept("application/vnd.github.mercy-preview+json")
            .build()
            .unwrap();
        assert_eq!(
            request.accept.as_deref(),
            Some("application/vnd.github.mercy-preview+json")
        );

        let request = HttpRequest::builder(HttpMethod::Get, "http://baseurl.org/x")
            .accept("")
            .build()
            .unwrap();
        assert!(request.accept.is_none());
    }
}
