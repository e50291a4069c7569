//! HTTP client types for GitHub API communication.
//!
//! This module provides the request executor every resource facade is built
//! on. It attaches the default and authorization headers, sends one request,
//! and turns any status code of 300 or above into a typed error that carries
//! both bodies.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A successful response whose body is still unread
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, PUT, DELETE)
//! - [`RepositoryContext`]: A client bound to one `(owner, repo)` pair
//! - [`HttpResponseError`]: A rejected exchange, see [`is_http_error`]
//!
//! # Example
//!
//! ```rust,ignore
//! use github_api::{ApiConfig, AccessToken, HttpClient};
//! use github_api::clients::{HttpMethod, HttpRequest};
//!
//! let config = ApiConfig::builder()
//!     .token(AccessToken::new("ghp_example"))
//!     .build();
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, client.url("/user"))
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call sends exactly one request; backoff and rate-limit handling
//! are left to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod repository_context;

pub use errors::{is_404, is_http_error, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, DEFAULT_ACCEPT, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo};
pub use repository_context::RepositoryContext;
