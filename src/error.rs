//! Error types for the GitHub API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use github_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.github.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Repository owner name does not follow the platform naming rules.
    #[error("Invalid owner name '{owner}': {reason}")]
    InvalidOwnerName {
        /// The owner name that was provided.
        owner: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// Repository name does not follow the platform naming rules.
    #[error("Invalid repository name '{repo}': {reason}")]
    InvalidRepoName {
        /// The repository name that was provided.
        repo: String,
        /// Why the name was rejected.
        reason: String,
    },
}
