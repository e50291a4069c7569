//! Owner and repository name validation.
//!
//! Mirrors the naming rules the platform enforces when accounts and
//! repositories are created, so callers can reject bad input before making a
//! request that would only come back as a 404.

use crate::error::ConfigError;

/// Longest owner (user or organization) login the platform accepts.
pub const MAX_OWNER_LEN: usize = 39;

/// Longest repository name the platform accepts.
pub const MAX_REPO_LEN: usize = 100;

/// Validates an owner (user or organization) login.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOwnerName`] if the name is empty, too long,
/// contains characters other than ASCII alphanumerics and single hyphens, or
/// begins or ends with a hyphen.
///
/// # Example
///
/// ```rust
/// use github_api::config::validate_owner_name;
///
/// assert!(validate_owner_name("rust-lang").is_ok());
/// assert!(validate_owner_name("rust--lang").is_err());
/// ```
pub fn validate_owner_name(owner: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOwnerName {
        owner: owner.to_string(),
        reason,
    };

    if owner.is_empty() {
        return Err(invalid("owner is empty".to_string()));
    }
    if owner.len() > MAX_OWNER_LEN {
        return Err(invalid(format!(
            "owner is too long (maximum is {MAX_OWNER_LEN} characters)"
        )));
    }
    if owner.starts_with('-') || owner.ends_with('-') || owner.contains("--") {
        return Err(invalid(
            "owner may only contain alphanumeric characters or single hyphens, and cannot begin or end with a hyphen"
                .to_string(),
        ));
    }
    if let Some(c) = owner
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
    {
        return Err(invalid(format!("contains invalid character '{c}'")));
    }

    Ok(())
}

/// Validates a repository name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRepoName`] if the name is empty, too long,
/// reserved (`.`, `..`, or ending in `.git`/`.wiki`), or contains characters
/// other than ASCII alphanumerics, `.`, `_` and `-`.
///
/// # Example
///
/// ```rust
/// use github_api::config::validate_repo_name;
///
/// assert!(validate_repo_name("hello_world.rs").is_ok());
/// assert!(validate_repo_name("hello.git").is_err());
/// ```
pub fn validate_repo_name(repo: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidRepoName {
        repo: repo.to_string(),
        reason,
    };

    if repo.is_empty() {
        return Err(invalid("repo is empty".to_string()));
    }
    if repo.len() > MAX_REPO_LEN {
        return Err(invalid(format!(
            "repo is too long (maximum is {MAX_REPO_LEN} characters)"
        )));
    }

    let lower = repo.to_ascii_lowercase();
    if repo == "." || repo == ".." || lower.ends_with(".git") || lower.ends_with(".wiki") {
        return Err(invalid("name is reserved".to_string()));
    }
    if let Some(c) = repo
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid(format!("contains invalid character '{c}'")));
    }

    Ok(())
}
