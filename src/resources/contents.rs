//! Repository file contents.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::clients::RepositoryContext;
use crate::resources::ApiError;

/// A file or directory entry in a repository.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Contents {
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// The content encoding, `base64` for files.
    pub encoding: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// The entry name.
    pub name: String,
    /// The path within the repository.
    pub path: String,
    /// The encoded content, wrapped at 60 columns.
    pub content: Option<String>,
    /// The blob SHA.
    pub sha: String,
    /// The API URL of this entry.
    pub url: String,
    /// The git blob URL.
    pub git_url: Option<String>,
    /// The web URL.
    pub html_url: Option<String>,
    /// The raw download URL.
    pub download_url: Option<String>,
}

impl Contents {
    /// Decodes the base64 `content`.
    ///
    /// Line breaks inserted by the server are ignored. An entry without
    /// content decodes to an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the content is not valid base64.
    pub fn decoded(&self) -> Result<Vec<u8>, ApiError> {
        let Some(content) = &self.content else {
            return Ok(Vec::new());
        };
        let compact: String = content.split_whitespace().collect();
        Ok(STANDARD.decode(compact)?)
    }
}

/// Facade for the contents endpoint.
#[derive(Clone, Debug)]
pub struct ContentsApi {
    context: RepositoryContext,
}

impl ContentsApi {
    /// Creates a contents facade.
    #[must_use]
    pub const fn new(context: RepositoryContext) -> Self {
        Self { context }
    }

    /// Returns the file at `path` on the default branch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the request fails or the body cannot be decoded.
    pub async fn get_content(&self, path: &str) -> Result<Contents, ApiError> {
        let path = path.trim_start_matches('/');
        let url = self
            .context
            .url(&format!("/repos/:owner/:repo/contents/{path}"));
        let response = self.context.client().get(&url).await?;
        Ok(response.json().await?)
    }
}
