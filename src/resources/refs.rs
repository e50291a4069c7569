//! Git reference resources.
//!
//! Reference names are given without the `refs/` prefix when addressing an
//! existing reference (`heads/main`) and with it when creating one
//! (`refs/heads/feature`).

use serde::{Deserialize, Serialize};

use crate::clients::RepositoryContext;
use crate::resources::{to_body, ApiError};

/// The object a reference points to.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GitObject {
    /// `commit`, `tag` or `tree`.
    #[serde(rename = "type")]
    pub object_type: String,
    /// The object SHA.
    pub sha: String,
    /// The API URL of the object.
    pub url: String,
}

/// A git reference.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GitRef {
    /// The full reference name, such as `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// The API URL of this reference.
    pub url: String,
    /// The object it points to.
    pub object: GitObject,
}

#[derive(Serialize)]
struct CreateRefBody<'a> {
    #[serde(rename = "ref")]
    git_ref: &'a str,
    sha: &'a str,
}

#[derive(Serialize)]
struct UpdateRefBody<'a> {
    sha: &'a str,
    force: bool,
}

/// Facade for git reference endpoints.
#[derive(Clone, Debug)]
pub struct RefsApi {
    context: RepositoryContext,
}

impl RefsApi {
    /// Creates a refs facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    fn ref_url(&self, git_ref: &str) -> String {
        self.context
            .url(&format!("/repos/:owner/:repo/git/refs/{git_ref}"))
    }

    /// Creates the fully qualified reference `git_ref` pointing at `sha`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn create(&self, git_ref: &str, sha: &str) -> Result<GitRef, ApiError> {
        let url = self.context.url("/repos/:owner/:repo/git/refs");
        let body = to_body(&CreateRefBody { git_ref, sha })?;
        let response = self.context.client().post(&url, body).await?;
        Ok(response.json().await?)
    }

    /// Returns the reference `git_ref`, such as `heads/main`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get(&self, git_ref: &str) -> Result<GitRef, ApiError> {
        let response = self.context.client().get(&self.ref_url(git_ref)).await?;
        Ok(response.json().await?)
    }

    /// Moves `git_ref` to `sha`. Without `force` only fast-forwards are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn update(&self, git_ref: &str, sha: &str, force: bool) -> Result<GitRef, ApiError> {
        let body = to_body(&UpdateRefBody { sha, force })?;
        let response = self
            .context
            .client()
            .patch(&self.ref_url(git_ref), body)
            .await?;
        Ok(response.json().await?)
    }

    /// Deletes `git_ref`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails.
    pub async fn delete(&self, git_ref: &str) -> Result<(), ApiError> {
        self.context
            .client()
            .delete(&self.ref_url(git_ref))
            .await?
            .discard()
            .await?;
        Ok(())
    }
}
