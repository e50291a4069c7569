//! Organization resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpClient;
use crate::resources::{ApiError, Plan};

/// Summary information about an organization, as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationSummary {
    /// The organization login.
    pub login: String,
    /// The numeric organization ID.
    pub id: u64,
    /// The API URL of this organization.
    pub url: String,
    /// The API URL listing its repositories.
    pub repos_url: String,
    /// The API URL listing its events.
    pub events_url: String,
    /// The API URL listing its hooks.
    pub hooks_url: String,
    /// The API URL listing its issues.
    pub issues_url: String,
    /// The API URL template listing its members.
    pub members_url: String,
    /// The API URL template listing its public members.
    pub public_members_url: String,
    /// The avatar image URL.
    pub avatar_url: String,
    /// The description.
    pub description: Option<String>,
}

/// Full information about an organization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Organization {
    /// The fields shared with [`OrganizationSummary`].
    #[serde(flatten)]
    pub summary: OrganizationSummary,
    /// The display name.
    pub name: Option<String>,
    /// The web URL of this organization.
    pub html_url: String,
    /// Number of public repositories.
    pub public_repos: u64,
    /// Number of public gists.
    pub public_gists: u64,
    /// Number of followers.
    pub followers: u64,
    /// Number of followed accounts.
    pub following: u64,
    /// Always `"Organization"`.
    #[serde(rename = "type")]
    pub org_type: String,
    /// When the organization was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the organization was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of private repositories (visible to members only).
    pub total_private_repos: Option<u64>,
    /// Number of owned private repositories (visible to owners only).
    pub owned_private_repos: Option<u64>,
    /// Number of private gists (visible to owners only).
    pub private_gists: Option<u64>,
    /// Disk usage in kilobytes (visible to owners only).
    pub disk_usage: Option<u64>,
    /// Number of collaborators (visible to owners only).
    pub collaborators: Option<u64>,
    /// The billing email (visible to owners only).
    pub billing_email: Option<String>,
    /// The billing plan (visible to owners only).
    pub plan: Option<Plan>,
}

/// Facade for organization endpoints.
///
/// Bound to one organization for [`OrganizationApi::get`]; the listing
/// endpoint is global.
#[derive(Clone, Debug)]
pub struct OrganizationApi {
    client: HttpClient,
    organization: String,
}

impl OrganizationApi {
    /// Creates a facade for `organization`.
    #[must_use]
    pub fn new(client: HttpClient, organization: impl Into<String>) -> Self {
        Self {
            client,
            organization: organization.into(),
        }
    }

    /// Returns the organization this facade is bound to.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Lists all organizations in creation order, starting after the
    /// organization with ID `since`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn list_organizations(&self, since: u64) -> Result<Vec<OrganizationSummary>, ApiError> {
        let url = self.client.url(&format!("/organizations?since={since}"));
        let response = self.client.get(&url).await?;
        Ok(response.json().await?)
    }

    /// Returns the organization this facade is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get(&self) -> Result<Organization, ApiError> {
        let url = self.client.url(&format!("/orgs/{}", self.organization));
        let response = self.client.get(&url).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_flattens_summary() {
        let org: Organization = serde_json::from_str(
            r#"{"login":"github","id":1,"type":"Organization","public_repos":2,"description":null}"#,
        )
        .unwrap();
        assert_eq!(org.summary.login, "github");
        assert_eq!(org.org_type, "Organization");
        assert_eq!(org.public_repos, 2);
        assert!(org.summary.description.is_none());
        assert!(org.plan.is_none());
    }
}
