//! Repository resources: metadata, forks, commits and labels.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use github_api::GitHubApi;
//!
//! let api = GitHubApi::new(&config, "octocat", "hello-world");
//!
//! if !api.repository.exists().await? {
//!     println!("no such repository");
//! }
//!
//! // Fork and wait until the fork can serve commits
//! let fork = api.repository.fork(Duration::from_secs(30)).await?;
//! println!("forked to {}", fork.full_name);
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::{interval_at, sleep_until, Instant};

use crate::clients::{is_404, is_http_error, RepositoryContext};
use crate::config::RepositoryCoordinates;
use crate::resources::{collect_pages, to_body, ApiError, Label, PageEnd, User};

/// Interval between readiness checks while waiting for a fork.
pub const FORK_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Repository metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Repository {
    /// The numeric repository ID.
    pub id: u64,
    /// The owning user or organization.
    pub owner: User,
    /// The repository name.
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// The description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// The API URL of this repository.
    pub url: String,
    /// The web URL of this repository.
    pub html_url: String,
    /// HTTPS clone URL.
    pub clone_url: String,
    /// `git://` clone URL.
    pub git_url: String,
    /// SSH clone URL.
    pub ssh_url: String,
    /// The homepage URL.
    pub homepage: Option<String>,
    /// The primary language.
    pub language: Option<String>,
    /// Number of forks.
    pub forks_count: u64,
    /// Number of stars.
    pub stargazers_count: u64,
    /// Number of watchers.
    pub watchers_count: u64,
    /// Size in kilobytes.
    pub size: u64,
    /// The default branch name.
    pub default_branch: String,
    /// Number of open issues and pull requests.
    pub open_issues_count: u64,
    /// Whether issues are enabled.
    pub has_issues: bool,
    /// Whether the wiki is enabled.
    pub has_wiki: bool,
    /// Whether Pages is enabled.
    pub has_pages: bool,
    /// Whether downloads are enabled.
    pub has_downloads: bool,
    /// When the last push happened.
    pub pushed_at: Option<DateTime<Utc>>,
    /// When the repository was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the repository was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// The token's permissions on this repository, if authenticated.
    pub permissions: Option<RepositoryPermissions>,
}

/// Permissions of the authenticated user on a repository.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryPermissions {
    /// Administrative access.
    pub admin: bool,
    /// Write access.
    pub push: bool,
    /// Read access.
    pub pull: bool,
}

/// Name, email and date of a git author or committer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GitActor {
    /// The name.
    pub name: String,
    /// The email address.
    pub email: String,
    /// The authored or committed date.
    pub date: Option<DateTime<Utc>>,
}

/// A `(sha, url)` pointer to a git object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ObjectPointer {
    /// The object SHA.
    pub sha: String,
    /// The API URL of the object.
    pub url: String,
}

/// Signature verification details of a commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Verification {
    /// Whether the signature was verified.
    pub verified: bool,
    /// The reason for the verification result.
    pub reason: String,
    /// The signature.
    pub signature: Option<String>,
    /// The signed payload.
    pub payload: Option<String>,
}

/// The git-level part of a commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GitCommit {
    /// The API URL of the git commit.
    pub url: String,
    /// The author.
    pub author: Option<GitActor>,
    /// The committer.
    pub committer: Option<GitActor>,
    /// The commit message.
    pub message: String,
    /// The root tree.
    pub tree: ObjectPointer,
    /// Number of comments on the commit.
    pub comment_count: u64,
    /// Signature verification details.
    pub verification: Option<Verification>,
}

/// A commit as returned by the commit listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryCommit {
    /// The commit SHA.
    pub sha: String,
    /// The API URL of this commit.
    pub url: String,
    /// The web URL of this commit.
    pub html_url: String,
    /// The API URL of its comments.
    pub comments_url: String,
    /// The git-level details.
    pub commit: GitCommit,
    /// The author's account, if it could be matched.
    pub author: Option<User>,
    /// The committer's account, if it could be matched.
    pub committer: Option<User>,
    /// The parent commits.
    pub parents: Vec<ObjectPointer>,
}

/// Line counts of a commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommitStats {
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
    /// Lines changed.
    pub total: u64,
}

/// One file changed by a commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommitFile {
    /// The file path.
    pub filename: String,
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
    /// Lines changed.
    pub changes: u64,
    /// `added`, `modified`, `removed`, `renamed`, ...
    pub status: String,
    /// The raw file URL.
    pub raw_url: String,
    /// The blob URL.
    pub blob_url: String,
    /// The unified diff, absent for binary or very large files.
    pub patch: Option<String>,
}

/// A single commit with its stats and changed files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Commit {
    /// The fields shared with [`RepositoryCommit`].
    #[serde(flatten)]
    pub summary: RepositoryCommit,
    /// Line counts.
    pub stats: Option<CommitStats>,
    /// Changed files.
    pub files: Vec<CommitFile>,
}

#[derive(Serialize)]
struct LabelBody<'a> {
    name: &'a str,
    color: &'a str,
}

/// Facade for repository endpoints.
#[derive(Clone, Debug)]
pub struct RepositoryApi {
    context: RepositoryContext,
}

impl RepositoryApi {
    /// Creates a repository facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    /// Returns the repository this facade is bound to.
    #[must_use]
    pub const fn coordinates(&self) -> &RepositoryCoordinates {
        self.context.coordinates()
    }

    /// Returns the repository metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get(&self) -> Result<Repository, ApiError> {
        let response = self
            .context
            .client()
            .get(&self.context.url("/repos/:owner/:repo"))
            .await?;
        Ok(response.json().await?)
    }

    /// Returns `true` if the repository exists.
    ///
    /// A 404 means "does not exist"; any other failure is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for failures other than 404.
    pub async fn exists(&self) -> Result<bool, ApiError> {
        match self.get().await {
            Ok(_) => Ok(true),
            Err(e) if is_404(Some(&e)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Starts forking the repository into the authenticated user's account.
    ///
    /// Forking happens asynchronously; use [`RepositoryApi::is_ready`] on the
    /// fork, or [`RepositoryApi::fork`], to wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn fork_async(&self) -> Result<Repository, ApiError> {
        let response = self
            .context
            .client()
            .post(&self.context.url("/repos/:owner/:repo/forks"), "")
            .await?;
        Ok(response.json().await?)
    }

    /// Returns `true` once the repository can serve commits.
    ///
    /// A freshly forked repository answers the commit listing with 409
    /// until the fork has completed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for failures other than 409.
    pub async fn is_ready(&self) -> Result<bool, ApiError> {
        match self.get_commits(1).await {
            Ok(_) => Ok(true),
            Err(e) if is_http_error(Some(&e), 409) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Forks the repository and waits until it is ready.
    ///
    /// Readiness is checked once per [`FORK_POLL_INTERVAL`] until `timeout`
    /// has elapsed since the call started.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ForkTimeout`] if the fork is not ready in time,
    /// or any error from [`RepositoryApi::fork_async`] and
    /// [`RepositoryApi::is_ready`].
    pub async fn fork(&self, timeout: Duration) -> Result<Repository, ApiError> {
        let deadline = Instant::now() + timeout;
        let fork = self.fork_async().await?;

        let mut ticker = interval_at(Instant::now() + FORK_POLL_INTERVAL, FORK_POLL_INTERVAL);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.is_ready().await? {
                        return Ok(fork);
                    }
                }
                () = sleep_until(deadline) => {
                    let coordinates = self.context.coordinates();
                    tracing::debug!(
                        owner = coordinates.owner(),
                        repo = coordinates.repo(),
                        "timed out waiting for fork"
                    );
                    return Err(ApiError::ForkTimeout {
                        owner: coordinates.owner().to_string(),
                        repo: coordinates.repo().to_string(),
                        timeout,
                    });
                }
            }
        }
    }

    /// Returns one page of commits, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_commits(&self, page: u32) -> Result<Vec<RepositoryCommit>, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/commits?page={page}"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }

    /// Returns a single commit with its stats and files.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_commit(&self, sha: &str) -> Result<Commit, ApiError> {
        let url = self.context.url(&format!("/repos/:owner/:repo/commits/{sha}"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }

    /// Creates a label. `color` is a six-digit hex code without the leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn create_label(&self, name: &str, color: &str) -> Result<(), ApiError> {
        let body = to_body(&LabelBody { name, color })?;
        let url = self.context.url("/repos/:owner/:repo/labels");
        self.context.client().post(&url, body).await?.discard().await?;
        Ok(())
    }

    /// Renames and recolors the label currently named `current_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn update_label(
        &self,
        current_name: &str,
        name: &str,
        color: &str,
    ) -> Result<(), ApiError> {
        let body = to_body(&LabelBody { name, color })?;
        let url = self.context.url(&format!(
            "/repos/:owner/:repo/labels/{}",
            urlencoding::encode(current_name)
        ));
        self.context.client().patch(&url, body).await?.discard().await?;
        Ok(())
    }

    /// Returns every label of the repository.
    ///
    /// Pages are requested until one comes back empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if any page request fails.
    pub async fn get_labels(&self) -> Result<Vec<Label>, ApiError> {
        collect_pages(self.context.client(), PageEnd::Empty, |page| {
            self.context
                .url(&format!("/repos/:owner/:repo/labels?page={page}"))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_body_serialization() {
        let body = to_body(&LabelBody {
            name: "bug",
            color: "f29513",
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"bug","color":"f29513"}"#);
    }

    #[test]
    fn test_commit_flattens_summary() {
        let commit: Commit = serde_json::from_str(
            r#"{
                "sha": "6dcb09b",
                "commit": {"message": "Fix all the bugs", "tree": {"sha": "abc"}},
                "author": null,
                "parents": [{"sha": "7638417", "url": "u"}],
                "stats": {"additions": 104, "deletions": 4, "total": 108},
                "files": [{"filename": "file1.txt", "status": "added"}]
            }"#,
        )
        .unwrap();

        assert_eq!(commit.summary.sha, "6dcb09b");
        assert_eq!(commit.summary.commit.message, "Fix all the bugs");
        assert!(commit.summary.author.is_none());
        assert_eq!(commit.summary.parents.len(), 1);
        assert_eq!(commit.stats.unwrap().total, 108);
        assert!(commit.files[0].patch.is_none());
    }
}
