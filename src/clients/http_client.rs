//! HTTP client for GitHub API communication.
//!
//! This module provides the [`HttpClient`] type that performs one
//! authenticated request and normalizes its outcome.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiConfig, BaseUrl};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Media type requesting the v3 REST representation.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - Default headers (`Accept`, `Content-Type`, `User-Agent`)
/// - The `Authorization: token ...` header, only when a token is configured
/// - Classification of responses: below 300 is success, anything else
///   becomes an [`HttpResponseError`] with both bodies captured
///
/// No retries, rate-limit handling or connection pooling policy live here;
/// pooling and timeouts belong to the injected `reqwest::Client`.
///
/// # Thread Safety
///
/// `HttpClient` is `Clone + Send + Sync`; clones share the connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use github_api::{ApiConfig, AccessToken, HttpClient};
///
/// let config = ApiConfig::builder()
///     .token(AccessToken::new("ghp_example"))
///     .build();
/// let client = HttpClient::new(&config);
///
/// let response = client.get(&client.url("/user")).await?;
/// let user: serde_json::Value = response.json().await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API base URL every path is appended to.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client with its own `reqwest::Client`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(config, client)
    }

    /// Creates a new HTTP client around an existing `reqwest::Client`.
    ///
    /// Use this to share a connection pool or to configure timeouts and
    /// proxies on the transport.
    #[must_use]
    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}github-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), DEFAULT_ACCEPT.to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        // Omitted entirely when there is no token; never sent empty.
        if let Some(token) = config.token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("token {}", token.as_ref()),
            );
        }

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Appends `path` to the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        self.base_url.join(path)
    }

    /// Sends one request to the API.
    ///
    /// On a status below 300 the live response is returned and the caller
    /// reads its body. On any other status the body is drained first and
    /// returned inside [`HttpError::Response`], so callers never need to
    /// read a remaining body on failure.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be executed, including malformed URLs (`Network`)
    /// - A status of 300 or above is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(accept) = &request.accept {
            headers.insert("Accept".to_string(), accept.clone());
        }

        let mut req_builder = self
            .client
            .request(request.http_method.into(), &request.url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        tracing::debug!(method = %request.http_method, url = %request.url, "sending API request");
        let res = req_builder.send().await?;

        let status = res.status();
        if status.as_u16() < 300 {
            return Ok(HttpResponse::new(res));
        }

        let status_line = status.canonical_reason().map_or_else(
            || status.as_str().to_string(),
            |reason| format!("{} {reason}", status.as_str()),
        );
        let response_body = res.text().await.unwrap_or_default();

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            code = status.as_u16(),
            "API request rejected"
        );

        Err(HttpError::Response(HttpResponseError::new(
            status_line,
            status.as_u16(),
            request.http_method,
            request.url,
            request.body.unwrap_or_default(),
            response_body,
        )))
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Get, url).build()?)
            .await
    }

    /// Sends a GET request with a replacement `Accept` header.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get_with_accept(&self, url: &str, accept: &str) -> Result<HttpResponse, HttpError> {
        self.request(
            HttpRequest::builder(HttpMethod::Get, url)
                .accept(accept)
                .build()?,
        )
        .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Delete, url).build()?)
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn patch(&self, url: &str, body: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Patch, url).body(body).build()?)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(&self, url: &str, body: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Post, url).body(body).build()?)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(&self, url: &str, body: impl Into<String>) -> Result<HttpResponse, HttpError> {
        self.request(HttpRequest::builder(HttpMethod::Put, url).body(body).build()?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_config(token: &str) -> ApiConfig {
        ApiConfig::builder()
            .base_url(BaseUrl::new("http://baseurl.org").unwrap())
            .token(AccessToken::new(token))
            .build()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config("test_authtoken"));

        assert_eq!(client.base_url().as_ref(), "http://baseurl.org");
        assert_eq!(client.url("/suffix"), "http://baseurl.org/suffix");
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&create_test_config("test_authtoken"));
        let headers = client.default_headers();

        assert_eq!(
            headers.get("Accept"),
            Some(&"application/vnd.github.v3+json".to_string())
        );
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            headers.get("Authorization"),
            Some(&"token test_authtoken".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_when_token_empty() {
        let client = HttpClient::new(&create_test_config(""));

        assert!(client.default_headers().get("Authorization").is_none());
        assert!(!client
            .default_headers()
            .keys()
            .any(|key| key.eq_ignore_ascii_case("authorization")));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config("t"));
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert_eq!(user_agent, &format!("github-api-rust v{SDK_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ApiConfig::builder().user_agent_prefix("MyBot/1.0").build();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyBot/1.0 | "));
        assert!(user_agent.contains("github-api-rust"));
    }

    #[test]
    fn test_with_client_uses_injected_transport() {
        let transport = reqwest::Client::new();
        let client = HttpClient::with_client(&create_test_config("t"), transport);
        assert_eq!(client.base_url().as_ref(), "http://baseurl.org");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
