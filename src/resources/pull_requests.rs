//! Pull request resources.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_api::resources::{MergeMethod, NewPullRequest};
//!
//! let created = api
//!     .pull_request
//!     .create(&NewPullRequest {
//!         head: "octocat:feature".to_string(),
//!         base: "main".to_string(),
//!         title: "Add feature".to_string(),
//!         body: "Implements the feature".to_string(),
//!         maintainer_can_modify: true,
//!     })
//!     .await?;
//!
//! let result = api.pull_request.merge(created.number, MergeMethod::Squash).await?;
//! assert!(result.merged);
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, RepositoryContext};
use crate::resources::{
    collect_pages, to_body, ApiError, GitCommit, Milestone, ObjectPointer, PageEnd, Repository,
    User,
};

/// Message attached to a 403 returned when merging.
pub const MERGE_FORBIDDEN_HINT: &str = "(the token may lack permission to merge)";

/// How a pull request is merged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit.
    #[default]
    Merge,
    /// Squash all commits into one.
    Squash,
    /// Rebase the commits onto the base branch.
    Rebase,
}

impl MergeMethod {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Squash => "squash",
            Self::Rebase => "rebase",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `action` of a `pull_request` webhook event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    /// A user was assigned.
    Assigned,
    /// A user was unassigned.
    Unassigned,
    /// A label was added.
    Labeled,
    /// A label was removed.
    Unlabeled,
    /// The pull request was opened.
    Opened,
    /// The pull request was closed, merged or not.
    Closed,
    /// The pull request was reopened.
    Reopened,
    /// The head branch received new commits.
    Synchronize,
    /// The title or body was edited.
    Edited,
    /// Any other action.
    #[serde(other)]
    Other,
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PullRequestBranch {
    /// `owner:branch`.
    pub label: String,
    /// The branch name.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// The tip commit SHA.
    pub sha: String,
    /// The owner of the repository.
    pub user: Option<User>,
    /// The repository; absent when a fork has been deleted.
    pub repo: Option<Repository>,
}

/// A pull request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PullRequest {
    /// The numeric pull request ID.
    pub id: u64,
    /// The API URL of this pull request.
    pub url: String,
    /// The web URL of this pull request.
    pub html_url: String,
    /// The diff URL.
    pub diff_url: String,
    /// The patch URL.
    pub patch_url: String,
    /// The API URL of the matching issue.
    pub issue_url: String,
    /// The number within the repository.
    pub number: u64,
    /// `open` or `closed`.
    pub state: String,
    /// Whether the conversation is locked.
    pub locked: bool,
    /// The title.
    pub title: String,
    /// The author.
    pub user: User,
    /// The body text.
    pub body: Option<String>,
    /// When the pull request was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the pull request was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the pull request was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the pull request was merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// The merge commit SHA, or the test merge commit while open.
    pub merge_commit_sha: Option<String>,
    /// The primary assignee.
    pub assignee: Option<User>,
    /// All assignees.
    pub assignees: Vec<User>,
    /// The milestone.
    pub milestone: Option<Milestone>,
    /// The head branch.
    pub head: PullRequestBranch,
    /// The base branch.
    pub base: PullRequestBranch,
    /// Whether the pull request has been merged.
    pub merged: bool,
    /// Whether it can be merged; `None` while still being computed.
    pub mergeable: Option<bool>,
    /// `clean`, `dirty`, `blocked`, `unstable`, ...
    pub mergeable_state: Option<String>,
    /// The user who merged it.
    pub merged_by: Option<User>,
    /// Number of conversation comments.
    pub comments: u64,
    /// Number of review comments.
    pub review_comments: u64,
    /// Number of commits.
    pub commits: u64,
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
    /// Number of changed files.
    pub changed_files: u64,
}

/// Result of a merge attempt.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MergeResult {
    /// The merge commit SHA.
    pub sha: String,
    /// Whether the pull request was merged.
    pub merged: bool,
    /// The server's message.
    pub message: String,
}

/// Parameters for opening a pull request.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewPullRequest {
    /// The branch with the changes, `owner:branch` for cross-repository requests.
    pub head: String,
    /// The branch to merge into.
    pub base: String,
    /// The title.
    pub title: String,
    /// The body text.
    pub body: String,
    /// Whether maintainers of the base repository may push to the head branch.
    pub maintainer_can_modify: bool,
}

/// A commit listed on a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PullRequestCommit {
    /// The commit SHA.
    pub sha: String,
    /// The git-level details.
    pub commit: GitCommit,
    /// The author's account, if it could be matched.
    pub author: Option<User>,
    /// The committer's account, if it could be matched.
    pub committer: Option<User>,
    /// The parent commits.
    pub parents: Vec<ObjectPointer>,
}

/// A review submitted on a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PullRequestReview {
    /// The numeric review ID.
    pub id: u64,
    /// The GraphQL node ID.
    pub node_id: String,
    /// The reviewer.
    pub user: Option<User>,
    /// The review text.
    pub body: Option<String>,
    /// The commit the review applies to.
    pub commit_id: String,
    /// `APPROVED`, `CHANGES_REQUESTED`, `COMMENTED`, ...
    pub state: String,
    /// When the review was submitted.
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A comment on a pull request's unified diff.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PullRequestReviewComment {
    /// The numeric comment ID.
    pub id: u64,
    /// The GraphQL node ID.
    pub node_id: String,
    /// The review this comment belongs to.
    pub pull_request_review_id: Option<u64>,
    /// The diff hunk the comment applies to.
    pub diff_hunk: String,
    /// The file path.
    pub path: String,
    /// The line index in the diff.
    pub position: Option<u64>,
    /// The line index in the original diff.
    pub original_position: Option<u64>,
    /// The commit the comment applies to.
    pub commit_id: String,
    /// The original commit the comment applied to.
    pub original_commit_id: String,
    /// The comment this one replies to.
    pub in_reply_to_id: Option<u64>,
    /// The author.
    pub user: Option<User>,
    /// The comment text.
    pub body: String,
    /// When the comment was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the comment was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// The web URL of this comment.
    pub html_url: String,
}

#[derive(Serialize)]
struct MergeBody {
    merge_method: MergeMethod,
}

/// Facade for pull request endpoints.
#[derive(Clone, Debug)]
pub struct PullRequestApi {
    context: RepositoryContext,
}

impl PullRequestApi {
    /// Creates a pull request facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    /// Lists pull requests in `state` (`open`, `closed` or `all`).
    ///
    /// Pages are requested until one comes back empty or without a `Link` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if any page request fails.
    pub async fn list(&self, state: &str) -> Result<Vec<PullRequest>, ApiError> {
        collect_pages(self.context.client(), PageEnd::EmptyOrUnlinked, |page| {
            self.context
                .url(&format!("/repos/:owner/:repo/pulls?state={state}&page={page}"))
        })
        .await
    }

    /// Returns a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get(&self, number: u64) -> Result<PullRequest, ApiError> {
        let url = self.context.url(&format!("/repos/:owner/:repo/pulls/{number}"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }

    /// Merges a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails. A 403 carries the
    /// [`MERGE_FORBIDDEN_HINT`] message.
    pub async fn merge(&self, number: u64, method: MergeMethod) -> Result<MergeResult, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/pulls/{number}/merge"));
        let body = to_body(&MergeBody {
            merge_method: method,
        })?;

        let response = self
            .context
            .client()
            .put(&url, body)
            .await
            .map_err(|e| match e {
                HttpError::Response(e) if e.code == 403 => {
                    HttpError::Response(e.with_message(MERGE_FORBIDDEN_HINT))
                }
                other => other,
            })?;
        Ok(response.json().await?)
    }

    /// Opens a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn create(&self, new_pull_request: &NewPullRequest) -> Result<PullRequest, ApiError> {
        let url = self.context.url("/repos/:owner/:repo/pulls");
        let response = self
            .context
            .client()
            .post(&url, to_body(new_pull_request)?)
            .await?;
        Ok(response.json().await?)
    }

    /// Lists the commits of a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if any page request fails.
    pub async fn get_commits(&self, number: u64) -> Result<Vec<PullRequestCommit>, ApiError> {
        collect_pages(self.context.client(), PageEnd::EmptyOrUnlinked, |page| {
            self.context
                .url(&format!("/repos/:owner/:repo/pulls/{number}/commits?page={page}"))
        })
        .await
    }

    /// Lists the reviews of a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if any page request fails.
    pub async fn list_reviews(&self, number: u64) -> Result<Vec<PullRequestReview>, ApiError> {
        collect_pages(self.context.client(), PageEnd::EmptyOrUnlinked, |page| {
            self.context
                .url(&format!("/repos/:owner/:repo/pulls/{number}/reviews?page={page}"))
        })
        .await
    }

    /// Lists the diff comments of a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if any page request fails.
    pub async fn list_review_comments(
        &self,
        number: u64,
    ) -> Result<Vec<PullRequestReviewComment>, ApiError> {
        collect_pages(self.context.client(), PageEnd::EmptyOrUnlinked, |page| {
            self.context
                .url(&format!("/repos/:owner/:repo/pulls/{number}/comments?page={page}"))
        })
        .await
    }
}
