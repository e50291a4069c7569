//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// A validated API base URL.
///
/// Accepts absolute `http` or `https` URLs. A trailing `/` is stripped so
/// that request paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use github_api::BaseUrl;
///
/// let url = BaseUrl::new("https://ghe.example.com/api/v3/").unwrap();
/// assert_eq!(url.as_ref(), "https://ghe.example.com/api/v3");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "ghe.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }

    /// Appends `path` to the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: 5,
            host_end: DEFAULT_BASE_URL.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// An API access token sent as `Authorization: token <value>`.
///
/// An empty token is allowed and means "unauthenticated": no
/// `Authorization` header is sent at all.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// ```rust
/// use github_api::AccessToken;
///
/// let token = AccessToken::new("ghp_secret");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if no token value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.github.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.github.com");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("http://localhost:8080/api/v3").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.join("/user"), "http://localhost:8080/api/v3/user");
    }

    #[test]
    fn test_base_url_rejects_invalid_urls() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.github.com").is_err());
        assert!(BaseUrl::new("ftp://api.github.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new(":/noscheme").is_err());
    }

    #[test]
    fn test_base_url_default_is_public_api() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), DEFAULT_BASE_URL);
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.github.com");
        assert_eq!(url, BaseUrl::new(DEFAULT_BASE_URL).unwrap());
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token");
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_access_token_empty() {
        assert!(AccessToken::new("").is_empty());
        assert!(AccessToken::default().is_empty());
        assert!(!AccessToken::new("t").is_empty());
    }
}
