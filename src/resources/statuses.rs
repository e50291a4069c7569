//! Commit status resources.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RepositoryContext;
use crate::resources::{to_body, ApiError, Repository, User};

/// The state of a commit status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// The check has not finished.
    #[default]
    Pending,
    /// The check passed.
    Success,
    /// The check could not run.
    Error,
    /// The check failed.
    Failure,
}

impl StatusState {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status reported on a commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommitStatus {
    /// The numeric status ID.
    pub id: u64,
    /// The API URL of this status.
    pub url: String,
    /// The state.
    pub state: StatusState,
    /// A URL with details about the status.
    pub target_url: Option<String>,
    /// A short description.
    pub description: Option<String>,
    /// Identifies the system reporting the status.
    pub context: String,
    /// The account that reported the status.
    pub creator: Option<User>,
    /// When the status was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the status was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The combined status of a ref: the latest status per context plus an overall state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CombinedStatus {
    /// `failure` if any context failed or errored, `pending` if any is
    /// pending or none exist, otherwise `success`.
    pub state: StatusState,
    /// The commit SHA the ref resolved to.
    pub sha: String,
    /// Number of contexts.
    pub total_count: u64,
    /// The latest status of each context.
    pub statuses: Vec<CommitStatus>,
    /// The repository.
    pub repository: Option<Repository>,
    /// The API URL of the commit.
    pub commit_url: String,
    /// The API URL of this combined status.
    pub url: String,
}

#[derive(Serialize)]
struct StatusBody<'a> {
    state: StatusState,
    target_url: &'a str,
    description: &'a str,
    context: &'a str,
}

/// Facade for commit status endpoints.
#[derive(Clone, Debug)]
pub struct StatusApi {
    context: RepositoryContext,
}

impl StatusApi {
    /// Creates a status facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    /// Reports a status on the commit `sha`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn set_status(
        &self,
        sha: &str,
        state: StatusState,
        target_url: &str,
        description: &str,
        status_context: &str,
    ) -> Result<CommitStatus, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/statuses/{sha}"));
        let body = to_body(&StatusBody {
            state,
            target_url,
            description,
            context: status_context,
        })?;
        let response = self.context.client().post(&url, body).await?;
        Ok(response.json().await?)
    }

    /// Lists the statuses of `git_ref` (a SHA, branch or tag), newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_list(&self, git_ref: &str) -> Result<Vec<CommitStatus>, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/commits/{git_ref}/statuses"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }

    /// Returns the combined status of `git_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_combined(&self, git_ref: &str) -> Result<CombinedStatus, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/commits/{git_ref}/status"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_serialization() {
        let body = to_body(&StatusBody {
            state: StatusState::Failure,
            target_url: "https://ci.example.org/1",
            description: "2 tests failed",
            context: "ci/tests",
        })
        .unwrap();
        assert_eq!(
            body,
            r#"{"state":"failure","target_url":"https://ci.example.org/1","description":"2 tests failed","context":"ci/tests"}"#
        );
    }

    #[test]
    fn test_combined_status_deserialization() {
        let combined: CombinedStatus = serde_json::from_str(
            r#"{"state":"success","sha":"abc","total_count":1,
                "statuses":[{"id":1,"state":"success","context":"ci","target_url":null}]}"#,
        )
        .unwrap();
        assert_eq!(combined.state, StatusState::Success);
        assert_eq!(combined.statuses[0].context, "ci");
        assert!(combined.statuses[0].target_url.is_none());
        assert_eq!(StatusState::Error.to_string(), "error");
    }
}
