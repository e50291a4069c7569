//! Webhook event type identifiers.
//!
//! The `X-GitHub-Event` header names the kind of event a delivery describes.
//! [`WebhookEventType`] covers the kinds this crate knows about and carries
//! any other value verbatim in [`WebhookEventType::Other`].
//!
//! # Example
//!
//! ```rust
//! use github_api::webhooks::WebhookEventType;
//!
//! let event: WebhookEventType = "pull_request".parse().unwrap();
//! assert_eq!(event, WebhookEventType::PullRequest);
//! assert_eq!(event.as_str(), "pull_request");
//!
//! let unknown = WebhookEventType::from("workflow_run");
//! assert_eq!(unknown, WebhookEventType::Other("workflow_run".to_string()));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The kind of event carried by a webhook delivery.
///
/// See <https://docs.github.com/en/webhooks/webhook-events-and-payloads>.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WebhookEventType {
    /// A commit is commented on.
    CommitComment,
    /// A branch or tag is created.
    Create,
    /// A branch or tag is deleted.
    Delete,
    /// A deployment is created from the API.
    Deployment,
    /// A deployment has a status update from the API.
    DeploymentStatus,
    /// A repository is forked.
    Fork,
    /// A wiki page is updated.
    Gollum,
    /// An issue or pull request is commented on.
    IssueComment,
    /// An issue is opened, closed, assigned, labeled, and so on.
    Issues,
    /// A label is created, edited, or deleted.
    Label,
    /// A collaborator is added to or removed from a repository.
    Member,
    /// A user is added to or removed from a team. Organization hooks only.
    Membership,
    /// A milestone is created, closed, opened, edited, or deleted.
    Milestone,
    /// A Pages site is built.
    PageBuild,
    /// A repository changes from private to public.
    Public,
    /// A comment on a pull request diff is created, edited, or deleted.
    PullRequestReviewComment,
    /// A pull request review is submitted.
    PullRequestReview,
    /// A pull request is opened, closed, synchronized, and so on.
    PullRequest,
    /// A push to a repository, including tag and branch updates.
    Push,
    /// A repository is created. Organization hooks only.
    Repository,
    /// A release is published.
    Release,
    /// A commit status is updated from the API.
    Status,
    /// A team is created, deleted, or modified. Organization hooks only.
    Team,
    /// A team is added to a repository.
    TeamAdd,
    /// A user stars a repository.
    Watch,
    /// Sent once when a webhook is created.
    Ping,
    /// Any event name not listed above, kept exactly as received.
    Other(String),
}

impl WebhookEventType {
    /// Returns the event name as sent in the `X-GitHub-Event` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CommitComment => "commit_comment",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Deployment => "deployment",
            Self::DeploymentStatus => "deployment_status",
            Self::Fork => "fork",
            Self::Gollum => "gollum",
            Self::IssueComment => "issue_comment",
            Self::Issues => "issues",
            Self::Label => "label",
            Self::Member => "member",
            Self::Membership => "membership",
            Self::Milestone => "milestone",
            Self::PageBuild => "page_build",
            Self::Public => "public",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::PullRequestReview => "pull_request_review",
            Self::PullRequest => "pull_request",
            Self::Push => "push",
            Self::Repository => "repository",
            Self::Release => "release",
            Self::Status => "status",
            Self::Team => "team",
            Self::TeamAdd => "team_add",
            Self::Watch => "watch",
            Self::Ping => "ping",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for event names this crate does not know.
    #[must_use]
    pub const fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<&str> for WebhookEventType {
    fn from(name: &str) -> Self {
        match name {
            "commit_comment" => Self::CommitComment,
            "create" => Self::Create,
            "delete" => Self::Delete,
            "deployment" => Self::Deployment,
            "deployment_status" => Self::DeploymentStatus,
            "fork" => Self::Fork,
            "gollum" => Self::Gollum,
            "issue_comment" => Self::IssueComment,
            "issues" => Self::Issues,
            "label" => Self::Label,
            "member" => Self::Member,
            "membership" => Self::Membership,
            "milestone" => Self::Milestone,
            "page_build" => Self::PageBuild,
            "public" => Self::Public,
            "pull_request_review_comment" => Self::PullRequestReviewComment,
            "pull_request_review" => Self::PullRequestReview,
            "pull_request" => Self::PullRequest,
            "push" => Self::Push,
            "repository" => Self::Repository,
            "release" => Self::Release,
            "status" => Self::Status,
            "team" => Self::Team,
            "team_add" => Self::TeamAdd,
            "watch" => Self::Watch,
            "ping" => Self::Ping,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for WebhookEventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
