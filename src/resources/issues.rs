//! Issue resources: issues, comments, assignees and labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RepositoryContext;
use crate::resources::{to_body, ApiError, User};

/// A label on an issue or repository.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Label {
    /// The numeric label ID.
    pub id: u64,
    /// The API URL of this label.
    pub url: String,
    /// The label name.
    pub name: String,
    /// Six-digit hex color without the leading `#`.
    pub color: String,
    /// Whether this is one of the repository's default labels.
    pub default: bool,
    /// The description.
    pub description: Option<String>,
}

/// A milestone.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Milestone {
    /// The API URL of this milestone.
    pub url: String,
    /// The web URL of this milestone.
    pub html_url: String,
    /// The numeric milestone ID.
    pub id: u64,
    /// The milestone number within the repository.
    pub number: u64,
    /// `open` or `closed`.
    pub state: String,
    /// The title.
    pub title: String,
    /// The description.
    pub description: Option<String>,
    /// The user who created the milestone.
    pub creator: Option<User>,
    /// Number of open issues.
    pub open_issues: u64,
    /// Number of closed issues.
    pub closed_issues: u64,
    /// When the milestone was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the milestone was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the milestone was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// The due date.
    pub due_on: Option<DateTime<Utc>>,
}

/// Links present when an issue is a pull request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IssuePullRequestLinks {
    /// The API URL of the pull request.
    pub url: String,
    /// The web URL of the pull request.
    pub html_url: String,
    /// The diff URL.
    pub diff_url: String,
    /// The patch URL.
    pub patch_url: String,
}

/// An issue. Pull requests are issues too.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Issue {
    /// The numeric issue ID.
    pub id: u64,
    /// The API URL of this issue.
    pub url: String,
    /// The API URL of the repository.
    pub repository_url: String,
    /// The web URL of this issue.
    pub html_url: String,
    /// The issue number within the repository.
    pub number: u64,
    /// `open` or `closed`.
    pub state: String,
    /// The title.
    pub title: String,
    /// The body text.
    pub body: Option<String>,
    /// The user who opened the issue.
    pub user: User,
    /// Applied labels.
    pub labels: Vec<Label>,
    /// The primary assignee.
    pub assignee: Option<User>,
    /// All assignees.
    pub assignees: Vec<User>,
    /// The milestone.
    pub milestone: Option<Milestone>,
    /// Whether the conversation is locked.
    pub locked: bool,
    /// Number of comments.
    pub comments: u64,
    /// Present when the issue is a pull request.
    pub pull_request: Option<IssuePullRequestLinks>,
    /// When the issue was closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// When the issue was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the issue was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// The user who closed the issue.
    pub closed_by: Option<User>,
}

impl Issue {
    /// Returns the names of the applied labels.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}

/// A comment on an issue or pull request conversation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IssueComment {
    /// The numeric comment ID.
    pub id: u64,
    /// The API URL of this comment.
    pub url: String,
    /// The web URL of this comment.
    pub html_url: String,
    /// The comment text.
    pub body: String,
    /// The author.
    pub user: User,
    /// When the comment was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the comment was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct AssigneeBody<'a> {
    assignee: &'a str,
}

#[derive(Serialize)]
struct LabelsBody<'a> {
    labels: &'a [String],
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// Facade for issue endpoints.
#[derive(Clone, Debug)]
pub struct IssueApi {
    context: RepositoryContext,
}

impl IssueApi {
    /// Creates an issue facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    fn issue_url(&self, number: u64) -> String {
        self.context
            .url(&format!("/repos/:owner/:repo/issues/{number}"))
    }

    fn comment_url(&self, comment_id: u64) -> String {
        self.context
            .url(&format!("/repos/:owner/:repo/issues/comments/{comment_id}"))
    }

    /// Returns an issue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_issue(&self, number: u64) -> Result<Issue, ApiError> {
        let response = self.context.client().get(&self.issue_url(number)).await?;
        Ok(response.json().await?)
    }

    /// Returns an issue comment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_issue_comment(&self, comment_id: u64) -> Result<IssueComment, ApiError> {
        let response = self
            .context
            .client()
            .get(&self.comment_url(comment_id))
            .await?;
        Ok(response.json().await?)
    }

    /// Deletes an issue comment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn delete_issue_comment(&self, comment_id: u64) -> Result<(), ApiError> {
        self.context
            .client()
            .delete(&self.comment_url(comment_id))
            .await?
            .discard()
            .await?;
        Ok(())
    }

    /// Adds a comment to an issue or pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn create_comment(&self, number: u64, body: &str) -> Result<IssueComment, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/issues/{number}/comments"));
        let response = self
            .context
            .client()
            .post(&url, to_body(&CommentBody { body })?)
            .await?;
        Ok(response.json().await?)
    }

    /// Sets the issue's assignee.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn update_issue_assignee(&self, number: u64, assignee: &str) -> Result<Issue, ApiError> {
        self.update_issue(number, to_body(&AssigneeBody { assignee })?)
            .await
    }

    /// Replaces the issue's labels with `labels`.
    ///
    /// See [`IssueApi::add_label`] and [`IssueApi::remove_label`] to change
    /// a single label.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn update_issue_labels(&self, number: u64, labels: &[String]) -> Result<Issue, ApiError> {
        self.update_issue(number, to_body(&LabelsBody { labels })?)
            .await
    }

    /// Adds `label` to the issue, keeping its other labels.
    ///
    /// Does nothing if the label is already applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if reading or updating the issue fails.
    pub async fn add_label(&self, number: u64, label: &str) -> Result<(), ApiError> {
        let issue = self.get_issue(number).await?;
        if issue.label_names().any(|name| name == label) {
            return Ok(());
        }

        let mut labels: Vec<String> = issue.label_names().map(str::to_string).collect();
        labels.push(label.to_string());
        self.update_issue_labels(number, &labels).await?;
        Ok(())
    }

    /// Removes `label` from the issue, keeping its other labels.
    ///
    /// Does nothing if the label is not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if reading or updating the issue fails.
    pub async fn remove_label(&self, number: u64, label: &str) -> Result<(), ApiError> {
        let issue = self.get_issue(number).await?;
        if !issue.label_names().any(|name| name == label) {
            return Ok(());
        }

        let labels: Vec<String> = issue
            .label_names()
            .filter(|name| *name != label)
            .map(str::to_string)
            .collect();
        self.update_issue_labels(number, &labels).await?;
        Ok(())
    }

    async fn update_issue(&self, number: u64, body: String) -> Result<Issue, ApiError> {
        let response = self
            .context
            .client()
            .patch(&self.issue_url(number), body)
            .await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_label_names() {
        let issue: Issue = serde_json::from_str(
            r#"{"number":1,"labels":[{"name":"bug"},{"name":"help wanted"}],"milestone":null}"#,
        )
        .unwrap();

        assert_eq!(issue.label_names().collect::<Vec<_>>(), vec!["bug", "help wanted"]);
        assert!(issue.milestone.is_none());
        assert!(issue.pull_request.is_none());
    }

    #[test]
    fn test_update_bodies() {
        assert_eq!(
            to_body(&AssigneeBody { assignee: "octocat" }).unwrap(),
            r#"{"assignee":"octocat"}"#
        );
        assert_eq!(
            to_body(&LabelsBody { labels: &[] }).unwrap(),
            r#"{"labels":[]}"#
        );
    }
}
