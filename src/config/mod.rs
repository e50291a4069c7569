//! Configuration types for the GitHub API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: Endpoint credentials (base URL and access token)
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`RepositoryCoordinates`]: The owner/repository pair used to resolve templated paths
//! - [`BaseUrl`]: A validated API base URL
//! - [`AccessToken`]: An access token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use github_api::{ApiConfig, AccessToken, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://ghe.example.com/api/v3").unwrap())
//!     .token(AccessToken::new("ghp_example"))
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://ghe.example.com/api/v3");
//! ```

mod newtypes;
mod validators;

pub use newtypes::{AccessToken, BaseUrl, DEFAULT_BASE_URL};
pub use validators::{validate_owner_name, validate_repo_name, MAX_OWNER_LEN, MAX_REPO_LEN};

use crate::error::ConfigError;

/// Endpoint credentials for API calls.
///
/// Immutable after construction and cheap to clone; every resource facade
/// built from one root holds its own copy.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use github_api::{ApiConfig, AccessToken};
///
/// let config = ApiConfig::builder()
///     .token(AccessToken::new("ghp_example"))
///     .user_agent_prefix("my-bot/1.0")
///     .build();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.github.com");
/// assert!(config.token().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    base_url: BaseUrl,
    token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the access token, if a non-empty one is configured.
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`ApiConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.github.com`
/// - `token`: `None` (unauthenticated)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the access token.
    ///
    /// An empty token is the same as not setting one.
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`].
    #[must_use]
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_default(),
            token: self.token.filter(|token| !token.is_empty()),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

/// The `(owner, repository)` pair a repository-scoped facade operates on.
///
/// # Example
///
/// ```rust
/// use github_api::RepositoryCoordinates;
///
/// let coordinates = RepositoryCoordinates::new("rust-lang", "rust");
/// assert_eq!(
///     coordinates.resolve("/repos/:owner/:repo/pulls"),
///     "/repos/rust-lang/rust/pulls"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinates {
    owner: String,
    repo: String,
}

impl RepositoryCoordinates {
    /// Creates coordinates without validating the names.
    ///
    /// Use [`RepositoryCoordinates::validated`] to reject names the platform
    /// would never accept.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Creates coordinates after validating both names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOwnerName`] or [`ConfigError::InvalidRepoName`].
    pub fn validated(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, ConfigError> {
        let coordinates = Self::new(owner, repo);
        validate_owner_name(&coordinates.owner)?;
        validate_repo_name(&coordinates.repo)?;
        Ok(coordinates)
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Substitutes the first `:owner` and the first `:repo` placeholder in `template`.
    #[must_use]
    pub fn resolve(&self, template: &str) -> String {
        template
            .replacen(":owner", &self.owner, 1)
            .replacen(":repo", &self.repo, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiConfig::builder().build();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.token().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ApiConfig::builder()
            .base_url(BaseUrl::new("http://baseurl.org").unwrap())
            .token(AccessToken::new("test_authtoken"))
            .user_agent_prefix("MyApp/1.0")
            .build();

        assert_eq!(config.base_url().as_ref(), "http://baseurl.org");
        assert_eq!(config.token().unwrap().as_ref(), "test_authtoken");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_empty_token_is_treated_as_absent() {
        let config = ApiConfig::builder().token(AccessToken::new("")).build();
        assert!(config.token().is_none());
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = ApiConfig::builder()
            .token(AccessToken::new("very-secret"))
            .build();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ApiConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_coordinates_resolve_first_placeholders_only() {
        let coordinates = RepositoryCoordinates::new("test_owner", "test_repository");

        assert_eq!(
            coordinates.resolve("/:owner/:repo/suffix"),
            "/test_owner/test_repository/suffix"
        );
        assert_eq!(coordinates.resolve("/:owner/:owner"), "/test_owner/:owner");
        assert_eq!(coordinates.resolve("/no/placeholders"), "/no/placeholders");
    }

    #[test]
    fn test_validated_coordinates() {
        assert!(RepositoryCoordinates::validated("octo-org", "hello.world").is_ok());
        assert!(matches!(
            RepositoryCoordinates::validated("octo--org", "hello"),
            Err(ConfigError::InvalidOwnerName { .. })
        ));
        assert!(matches!(
            RepositoryCoordinates::validated("octo-org", "hello.git"),
            Err(ConfigError::InvalidRepoName { .. })
        ));
    }
}
