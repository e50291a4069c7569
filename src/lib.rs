//! # GitHub API Rust Client
//!
//! A Rust client for the GitHub REST v3 API and a verifier for inbound
//! GitHub webhook deliveries.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - An async HTTP executor, [`HttpClient`], that turns every rejected
//!   response into a fully populated [`HttpResponseError`]
//! - Status-code classifiers [`is_http_error`] and [`is_404`]
//! - Typed facades for users, organizations, repositories, issues, pull
//!   requests, statuses, branches, contents and git refs, bundled in [`GitHubApi`]
//! - HMAC-SHA1 webhook signature verification in [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use github_api::{AccessToken, ApiConfig, GitHubApi};
//!
//! let config = ApiConfig::builder()
//!     .token(AccessToken::new("ghp_example"))
//!     .user_agent_prefix("my-bot/1.0")
//!     .build();
//!
//! let api = GitHubApi::new(&config, "octocat", "hello-world");
//! assert_eq!(api.coordinates().owner(), "octocat");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use github_api::{is_404, GitHubApi};
//!
//! let api = GitHubApi::new(&config, "octocat", "hello-world");
//!
//! match api.repository.get().await {
//!     Ok(repo) => println!("{} has {} stars", repo.full_name, repo.stargazers_count),
//!     Err(e) if is_404(Some(&e)) => println!("no such repository"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Receiving Webhooks
//!
//! ```rust,ignore
//! use github_api::webhooks::{read_webhook_request, WebhookRequest, WebhookEventType};
//!
//! let request = WebhookRequest::new(headers, body_stream);
//! let (event, body) = read_webhook_request(b"hook-secret", request).await?;
//! match event {
//!     WebhookEventType::Push => { /* decode body as PushEventPayload */ }
//!     WebhookEventType::Other(name) => println!("ignoring {name}"),
//!     _ => {}
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **No hidden retries**: Each call issues exactly the requests it documents
//! - **Thread-safe**: All clients and facades are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiConfig, ApiConfigBuilder, BaseUrl, RepositoryCoordinates};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    is_404, is_http_error, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RepositoryContext,
};

// Re-export resource facades
pub use resources::{ApiError, GitHubApi};
