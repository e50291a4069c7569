//! Typed bodies of the most common webhook events.
//!
//! Payloads are decoded from the bytes returned by
//! [`read_webhook_request`](crate::webhooks::read_webhook_request), after the
//! signature has been checked:
//!
//! ```rust,ignore
//! use github_api::webhooks::{read_webhook_request, PushEventPayload, WebhookEventType};
//!
//! let (event, body) = read_webhook_request(secret, request).await?;
//! if event == WebhookEventType::Push {
//!     let push: PushEventPayload = serde_json::from_slice(&body)?;
//!     println!("{} pushed to {}", push.sender.login, push.git_ref);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::resources::{Issue, IssueComment, PullRequest, PullRequestAction, User};

/// Owner of the repository an event refers to.
///
/// Push events carry only `name` and `email`; every other event carries a
/// full user with `login`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryOwner {
    /// The login name, absent in push events.
    pub login: Option<String>,
    /// The numeric account ID, absent in push events.
    pub id: Option<u64>,
    /// The display name, present in push events.
    pub name: Option<String>,
    /// The email address, present in push events.
    pub email: Option<String>,
}

/// The repository an event refers to.
///
/// Timestamps are left out because push events encode them as Unix seconds
/// while other events use RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RepositorySummary {
    /// The numeric repository ID.
    pub id: u64,
    /// The repository name.
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// The owner.
    pub owner: RepositoryOwner,
    /// Whether the repository is private.
    pub private: bool,
    /// The web URL.
    pub html_url: String,
    /// The description.
    pub description: Option<String>,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// The API URL.
    pub url: String,
    /// HTTPS clone URL.
    pub clone_url: String,
    /// SSH clone URL.
    pub ssh_url: String,
    /// The default branch name.
    pub default_branch: String,
}

/// Delivery settings of a hook.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HookConfig {
    /// `json` or `form`.
    pub content_type: String,
    /// `"0"` or `"1"`.
    pub insecure_ssl: String,
    /// The delivery URL.
    pub url: String,
}

/// The hook a ping event was sent for.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Hook {
    /// `Repository`, `Organization` or `App`.
    #[serde(rename = "type")]
    pub hook_type: String,
    /// The numeric hook ID.
    pub id: u64,
    /// Always `web`.
    pub name: String,
    /// Whether deliveries are enabled.
    pub active: bool,
    /// The subscribed events.
    pub events: Vec<String>,
    /// Delivery settings.
    pub config: HookConfig,
}

/// Body of a `ping` event, sent when a hook is created.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PingEventPayload {
    /// A random piece of GitHub zen.
    pub zen: String,
    /// The hook ID.
    pub hook_id: u64,
    /// The hook.
    pub hook: Hook,
    /// The repository, for repository hooks.
    pub repository: Option<RepositorySummary>,
    /// The user who created the hook.
    pub sender: User,
}

/// Author or committer of a pushed commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PushCommitAuthor {
    /// The git name.
    pub name: String,
    /// The git email.
    pub email: String,
    /// The matching GitHub login, if any.
    pub username: Option<String>,
}

/// A commit included in a push.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PushCommit {
    /// The commit SHA.
    pub id: String,
    /// Whether the commit is new to the repository.
    pub distinct: bool,
    /// The commit message.
    pub message: String,
    /// The commit timestamp as sent.
    pub timestamp: String,
    /// The web URL.
    pub url: String,
    /// The author.
    pub author: PushCommitAuthor,
    /// The committer.
    pub committer: PushCommitAuthor,
    /// Added paths.
    pub added: Vec<String>,
    /// Removed paths.
    pub removed: Vec<String>,
    /// Modified paths.
    pub modified: Vec<String>,
}

/// Body of a `push` event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PushEventPayload {
    /// The full ref that was pushed, such as `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// The SHA before the push.
    pub before: String,
    /// The SHA after the push.
    pub after: String,
    /// Whether the push created the ref.
    pub created: bool,
    /// Whether the push deleted the ref.
    pub deleted: bool,
    /// Whether the push was forced.
    pub forced: bool,
    /// The base ref, for pushes that create a tag from a branch.
    pub base_ref: Option<String>,
    /// Comparison URL between `before` and `after`.
    pub compare: String,
    /// The pushed commits, oldest first.
    pub commits: Vec<PushCommit>,
    /// The new tip commit; absent when the ref was deleted.
    pub head_commit: Option<PushCommit>,
    /// The repository.
    pub repository: RepositorySummary,
    /// The user who pushed.
    pub sender: User,
}

/// Body of a `pull_request` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestEventPayload {
    /// What happened.
    pub action: PullRequestAction,
    /// The pull request number.
    #[serde(default)]
    pub number: u64,
    /// The pull request after the action.
    pub pull_request: PullRequest,
    /// The repository.
    #[serde(default)]
    pub repository: RepositorySummary,
    /// The user who triggered the event.
    #[serde(default)]
    pub sender: User,
}

/// Body of an `issue_comment` event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IssueCommentEventPayload {
    /// `created`, `edited` or `deleted`.
    pub action: String,
    /// The issue or pull request commented on.
    pub issue: Issue,
    /// The comment.
    pub comment: IssueComment,
    /// The repository.
    pub repository: RepositorySummary,
    /// The user who triggered the event.
    pub sender: User,
}

/// Body of an `issues` event.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IssuesEventPayload {
    /// `opened`, `edited`, `closed`, `labeled`, ...
    pub action: String,
    /// The issue after the action.
    pub issue: Issue,
    /// The label added or removed, for `labeled` and `unlabeled`.
    pub label: Option<crate::resources::Label>,
    /// The user assigned or unassigned, for `assigned` and `unassigned`.
    pub assignee: Option<User>,
    /// The repository.
    pub repository: RepositorySummary,
    /// The user who triggered the event.
    pub sender: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_payload_with_name_only_owner() {
        let payload: PushEventPayload = serde_json::from_str(
            r#"{
                "ref": "refs/heads/main",
                "before": "0000000",
                "after": "a10867b",
                "created": true,
                "base_ref": null,
                "commits": [{"id": "a10867b", "message": "Initial", "author": {"name": "Mona", "email": "m@example.org", "username": "mona"}}],
                "head_commit": {"id": "a10867b"},
                "repository": {
                    "id": 35129377,
                    "name": "public-repo",
                    "full_name": "baxterthehacker/public-repo",
                    "owner": {"name": "baxterthehacker", "email": "baxter@example.org"},
                    "created_at": 1430869212,
                    "pushed_at": 1430869217
                },
                "sender": {"login": "baxterthehacker", "id": 6752317}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.git_ref, "refs/heads/main");
        assert!(payload.created);
        assert_eq!(payload.commits[0].author.username.as_deref(), Some("mona"));
        assert_eq!(payload.head_commit.unwrap().id, "a10867b");
        assert_eq!(payload.repository.owner.name.as_deref(), Some("baxterthehacker"));
        assert!(payload.repository.owner.login.is_none());
        assert_eq!(payload.sender.login, "baxterthehacker");
    }

    #[test]
    fn test_pull_request_payload() {
        let payload: PullRequestEventPayload = serde_json::from_str(
            r#"{
                "action": "synchronize",
                "number": 7,
                "pull_request": {"number": 7, "head": {"ref": "feature", "sha": "abc"}, "base": {"ref": "main"}},
                "repository": {"name": "r", "owner": {"login": "o", "id": 1}},
                "sender": {"login": "o"}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.action, PullRequestAction::Synchronize);
        assert_eq!(payload.pull_request.head.git_ref, "feature");
        assert_eq!(payload.repository.owner.login.as_deref(), Some("o"));
    }

    #[test]
    fn test_ping_payload() {
        let payload: PingEventPayload = serde_json::from_str(
            r#"{"zen":"Keep it logically awesome.","hook_id":42,
                "hook":{"type":"Repository","id":42,"name":"web","active":true,"events":["push","pull_request"],
                        "config":{"content_type":"json","insecure_ssl":"0","url":"https://example.org/hook"}},
                "sender":{"login":"octocat"}}"#,
        )
        .unwrap();

        assert_eq!(payload.hook.events, vec!["push", "pull_request"]);
        assert_eq!(payload.hook.config.content_type, "json");
        assert!(payload.repository.is_none());
    }

    #[test]
    fn test_issue_comment_payload() {
        let payload: IssueCommentEventPayload = serde_json::from_str(
            r#"{"action":"created","issue":{"number":3,"labels":[{"name":"bug"}]},
                "comment":{"id":99,"body":"/retest","user":{"login":"mona"}}}"#,
        )
        .unwrap();

        assert_eq!(payload.action, "created");
        assert_eq!(payload.issue.label_names().collect::<Vec<_>>(), vec!["bug"]);
        assert_eq!(payload.comment.body, "/retest");
    }
}
