//! Typed facades over the GitHub REST v3 resources.
//!
//! Each facade wraps an [`HttpClient`], and the repository-scoped ones also
//! carry the [`RepositoryCoordinates`] their `:owner`/`:repo` path
//! placeholders resolve to. [`GitHubApi`] bundles one of each for a single
//! repository.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_api::{AccessToken, ApiConfig, GitHubApi};
//! use github_api::resources::StatusState;
//!
//! let config = ApiConfig::builder().token(AccessToken::new("ghp_example")).build();
//! let api = GitHubApi::new(&config, "octocat", "hello-world");
//!
//! let pulls = api.pull_request.list("open").await?;
//! for pull in &pulls {
//!     api.status
//!         .set_status(&pull.head.sha, StatusState::Pending, "", "queued", "ci/build")
//!         .await?;
//! }
//! ```
//!
//! # Pagination
//!
//! List endpoints that return every item request `?page=1`, `?page=2`, ...
//! in order and concatenate the results. Labels stop at the first empty
//! page; pull request listings additionally stop at the first page without
//! a `Link` header.

mod branches;
mod contents;
mod errors;
mod issues;
mod organizations;
mod pagination;
mod pull_requests;
mod refs;
mod repositories;
mod statuses;
mod users;

pub use branches::{Branch, BranchApi, BranchLinks};
pub use contents::{Contents, ContentsApi};
pub use errors::ApiError;
pub use issues::{Issue, IssueApi, IssueComment, IssuePullRequestLinks, Label, Milestone};
pub use organizations::{Organization, OrganizationApi, OrganizationSummary};
pub use pull_requests::{
    MergeMethod, MergeResult, NewPullRequest, PullRequest, PullRequestAction, PullRequestApi,
    PullRequestBranch, PullRequestCommit, PullRequestReview, PullRequestReviewComment,
    MERGE_FORBIDDEN_HINT,
};
pub use refs::{GitObject, GitRef, RefsApi};
pub use repositories::{
    Commit, CommitFile, CommitStats, GitActor, GitCommit, ObjectPointer, Repository,
    RepositoryApi, RepositoryCommit, RepositoryPermissions, Verification, FORK_POLL_INTERVAL,
};
pub use statuses::{CombinedStatus, CommitStatus, StatusApi, StatusState};
pub use users::{AuthenticatedUser, Plan, User, UserApi, UserProfile, HEADER_OAUTH_SCOPES};

pub(crate) use pagination::{collect_pages, to_body, PageEnd};

use crate::clients::{HttpClient, RepositoryContext};
use crate::config::{ApiConfig, RepositoryCoordinates};

/// Every resource facade, bound to one repository.
///
/// The organization facade is bound to the repository owner.
#[derive(Clone, Debug)]
pub struct GitHubApi {
    /// User endpoints.
    pub user: UserApi,
    /// Organization endpoints.
    pub organization: OrganizationApi,
    /// Repository endpoints.
    pub repository: RepositoryApi,
    /// Issue endpoints.
    pub issue: IssueApi,
    /// Pull request endpoints.
    pub pull_request: PullRequestApi,
    /// Commit status endpoints.
    pub status: StatusApi,
    /// Branch endpoints.
    pub branch: BranchApi,
    /// Contents endpoint.
    pub contents: ContentsApi,
    /// Git reference endpoints.
    pub refs: RefsApi,
}

// Verify GitHubApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GitHubApi>();
    assert_send_sync::<ApiError>();
};

impl GitHubApi {
    /// Builds a client from `config` and binds every facade to `owner/repo`.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized. See [`HttpClient::new`].
    #[must_use]
    pub fn new(config: &ApiConfig, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::from_client(HttpClient::new(config), owner, repo)
    }

    /// Binds every facade to `owner/repo` using an existing client.
    ///
    /// # Example
    ///
    /// ```rust
    /// use github_api::{ApiConfig, GitHubApi, HttpClient};
    ///
    /// let client = HttpClient::new(&ApiConfig::default());
    /// let api = GitHubApi::from_client(client, "octocat", "hello-world");
    ///
    /// assert_eq!(api.organization.organization(), "octocat");
    /// assert_eq!(api.coordinates().repo(), "hello-world");
    /// ```
    #[must_use]
    pub fn from_client(
        client: HttpClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        let coordinates = RepositoryCoordinates::new(owner, repo);
        let context = RepositoryContext::new(client.clone(), coordinates.clone());

        Self {
            user: UserApi::new(client.clone()),
            organization: OrganizationApi::new(client, coordinates.owner()),
            repository: RepositoryApi::new(context.clone()),
            issue: IssueApi::new(context.clone()),
            pull_request: PullRequestApi::new(context.clone()),
            status: StatusApi::new(context.clone()),
            branch: BranchApi::new(context.clone()),
            contents: ContentsApi::new(context.clone()),
            refs: RefsApi::new(context),
        }
    }

    /// Returns the repository the facades are bound to.
    #[must_use]
    pub const fn coordinates(&self) -> &RepositoryCoordinates {
        self.repository.coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facades_share_coordinates() {
        let api = GitHubApi::new(&ApiConfig::default(), "octocat", "hello-world");
        assert_eq!(api.coordinates().owner(), "octocat");
        assert_eq!(api.organization.organization(), "octocat");
    }
}
