//! User resources.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_api::{ApiConfig, AccessToken, HttpClient};
//! use github_api::resources::UserApi;
//!
//! let config = ApiConfig::builder().token(AccessToken::new("ghp_example")).build();
//! let users = UserApi::new(HttpClient::new(&config));
//!
//! let me = users.get_authenticated_user().await?;
//! let scopes = users.get_oauth_scopes().await?;
//! println!("{} has scopes {:?}", me.login, scopes);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::resources::{ApiError, OrganizationSummary};

/// Response header listing the scopes granted to the token.
pub const HEADER_OAUTH_SCOPES: &str = "x-oauth-scopes";

/// A user as embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// The login name.
    pub login: String,
    /// The numeric user ID.
    pub id: u64,
    /// The avatar image URL.
    pub avatar_url: String,
    /// The API URL of this user.
    pub url: String,
    /// The web URL of this user.
    pub html_url: String,
    /// `"User"`, `"Organization"` or `"Bot"`.
    #[serde(rename = "type")]
    pub user_type: String,
    /// Whether the user is a site administrator.
    pub site_admin: bool,
    /// The LDAP distinguished name (Enterprise only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_dn: Option<String>,
}

/// Full profile information for a user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    /// The summary fields shared with [`User`].
    #[serde(flatten)]
    pub user: User,
    /// The display name.
    pub name: Option<String>,
    /// The company.
    pub company: Option<String>,
    /// The blog or website URL.
    pub blog: Option<String>,
    /// The location.
    pub location: Option<String>,
    /// The public email address.
    pub email: Option<String>,
    /// Whether the user is available for hire.
    pub hireable: Option<bool>,
    /// The profile biography.
    pub bio: Option<String>,
    /// Number of public repositories.
    pub public_repos: u64,
    /// Number of public gists.
    pub public_gists: u64,
    /// Number of followers.
    pub followers: u64,
    /// Number of followed users.
    pub following: u64,
    /// When the account was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The authenticated user, including private account details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuthenticatedUser {
    /// The public profile fields.
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Number of private repositories visible to the user.
    pub total_private_repos: u64,
    /// Number of private repositories owned by the user.
    pub owned_private_repos: u64,
    /// Number of private gists.
    pub private_gists: u64,
    /// Disk usage in kilobytes.
    pub disk_usage: u64,
    /// Number of collaborators.
    pub collaborators: u64,
    /// The billing plan, if visible.
    pub plan: Option<Plan>,
}

/// A billing plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Plan {
    /// The plan name.
    pub name: String,
    /// Storage space.
    pub space: u64,
    /// Number of private repositories allowed.
    pub private_repos: u64,
    /// Number of collaborators allowed.
    pub collaborators: u64,
}

/// Facade for user endpoints.
#[derive(Clone, Debug)]
pub struct UserApi {
    client: HttpClient,
}

impl UserApi {
    /// Creates a new user facade.
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_authenticated_user(&self) -> Result<AuthenticatedUser, ApiError> {
        let response = self.client.get(&self.client.url("/user")).await?;
        Ok(response.json().await?)
    }

    /// Returns the OAuth scopes granted to the token.
    ///
    /// Read from the `X-OAuth-Scopes` response header of `GET /user`.
    /// Entries are trimmed and empty entries dropped, so a token without
    /// scopes yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn get_oauth_scopes(&self) -> Result<Vec<String>, ApiError> {
        let response = self.client.get(&self.client.url("/user")).await?;
        let scopes = parse_scopes(response.header(HEADER_OAUTH_SCOPES).unwrap_or(""));
        response.discard().await?;
        Ok(scopes)
    }

    /// Returns a user's profile by login name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_user(&self, login: &str) -> Result<UserProfile, ApiError> {
        let url = self.client.url(&format!("/users/{login}"));
        let response = self.client.get(&url).await?;
        Ok(response.json().await?)
    }

    /// Lists the organizations a user is a public member of.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_public_organizations(
        &self,
        login: &str,
    ) -> Result<Vec<OrganizationSummary>, ApiError> {
        let url = self.client.url(&format!("/users/{login}/orgs"));
        let response = self.client.get(&url).await?;
        Ok(response.json().await?)
    }
}

fn parse_scopes(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scopes_trims_and_drops_empty() {
        assert_eq!(
            parse_scopes("repo, user ,, admin:org"),
            vec!["repo", "user", "admin:org"]
        );
        assert!(parse_scopes("").is_empty());
        assert!(parse_scopes(" , ").is_empty());
    }

    #[test]
    fn test_user_deserializes_with_missing_fields() {
        let user: User = serde_json::from_str(r#"{"login":"octocat","id":1,"type":"User"}"#).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.user_type, "User");
        assert!(!user.site_admin);
        assert!(user.ldap_dn.is_none());
    }

    #[test]
    fn test_profile_flattens_user_fields() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"login":"octocat","id":1,"name":"The Octocat","followers":20,"created_at":"2011-01-25T18:44:36Z"}"#,
        )
        .unwrap();
        assert_eq!(profile.user.login, "octocat");
        assert_eq!(profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(profile.followers, 20);
        assert!(profile.created_at.is_some());
    }
}
