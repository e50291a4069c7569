//! Repository-scoped request helpers.

use crate::clients::http_client::HttpClient;
use crate::config::RepositoryCoordinates;

/// An [`HttpClient`] bound to one repository.
///
/// Resolves templated paths such as `/repos/:owner/:repo/pulls` against the
/// repository coordinates and prefixes the base URL.
///
/// # Example
///
/// ```rust
/// use github_api::{ApiConfig, HttpClient, RepositoryCoordinates};
/// use github_api::clients::RepositoryContext;
///
/// let client = HttpClient::new(&ApiConfig::default());
/// let context = RepositoryContext::new(client, RepositoryCoordinates::new("octocat", "hello"));
///
/// assert_eq!(
///     context.url("/repos/:owner/:repo/labels"),
///     "https://api.github.com/repos/octocat/hello/labels"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RepositoryContext {
    client: HttpClient,
    coordinates: RepositoryCoordinates,
}

// Verify RepositoryContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RepositoryContext>();
};

impl RepositoryContext {
    /// Binds `client` to the repository at `coordinates`.
    #[must_use]
    pub const fn new(client: HttpClient, coordinates: RepositoryCoordinates) -> Self {
        Self {
            client,
            coordinates,
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the repository coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> &RepositoryCoordinates {
        &self.coordinates
    }

    /// Resolves `template` and prefixes the base URL.
    #[must_use]
    pub fn url(&self, template: &str) -> String {
        self.client.url(&self.coordinates.resolve(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, BaseUrl};

    #[test]
    fn test_url_substitutes_coordinates_and_base() {
        let config = ApiConfig::builder()
            .base_url(BaseUrl::new("http://baseurl.org").unwrap())
            .build();
        let context = RepositoryContext::new(
            HttpClient::new(&config),
            RepositoryCoordinates::new("test_owner", "test_repository"),
        );

        assert_eq!(
            context.url("/:owner/:repo/suffix"),
            "http://baseurl.org/test_owner/test_repository/suffix"
        );
        assert_eq!(context.coordinates().owner(), "test_owner");
    }
}
