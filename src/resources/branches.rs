//! Branch resources.

use serde::{Deserialize, Serialize};

use crate::clients::RepositoryContext;
use crate::resources::{ApiError, RepositoryCommit};

/// Links of a branch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BranchLinks {
    /// The web URL of the branch.
    pub html: String,
    /// The API URL of the branch.
    #[serde(rename = "self")]
    pub self_url: String,
}

/// A branch and its tip commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Branch {
    /// The branch name.
    pub name: String,
    /// The tip commit.
    pub commit: RepositoryCommit,
    /// Whether the branch is protected.
    pub protected: bool,
    /// Links to the branch.
    #[serde(rename = "_links")]
    pub links: Option<BranchLinks>,
}

/// Facade for branch endpoints.
#[derive(Clone, Debug)]
pub struct BranchApi {
    context: RepositoryContext,
}

impl BranchApi {
    /// Creates a branch facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    /// Returns the branch `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_branch(&self, name: &str) -> Result<Branch, ApiError> {
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/branches/{name}"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }
}
