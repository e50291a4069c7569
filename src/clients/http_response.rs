//! HTTP response types for the GitHub API client.
//!
//! This module provides the [`HttpResponse`] type returned for successful
//! calls, and [`PaginationInfo`] for reading `Link` headers.

use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// Page numbers parsed from a `Link` header.
///
/// The API paginates list endpoints with `page` query parameters and
/// advertises neighbouring pages in the `Link` header:
///
/// ```text
/// <https://api.github.com/repositories/1/pulls?page=2>; rel="next",
/// <https://api.github.com/repositories/1/pulls?page=5>; rel="last"
/// ```
///
/// # Example
///
/// ```rust
/// use github_api::clients::PaginationInfo;
///
/// let info = PaginationInfo::parse_link_header(
///     r#"<https://api.github.com/x?page=2>; rel="next", <https://api.github.com/x?page=5>; rel="last""#,
/// );
/// assert_eq!(info.next_page, Some(2));
/// assert_eq!(info.last_page, Some(5));
/// assert_eq!(info.prev_page, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The page number for `rel="next"`, if advertised.
    pub next_page: Option<u32>,
    /// The page number for `rel="prev"`, if advertised.
    pub prev_page: Option<u32>,
    /// The page number for `rel="first"`, if advertised.
    pub first_page: Option<u32>,
    /// The page number for `rel="last"`, if advertised.
    pub last_page: Option<u32>,
}

impl PaginationInfo {
    /// Parses page numbers from a `Link` header value.
    ///
    /// Links without a `page` query parameter, or with an unknown `rel`, are ignored.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';');

            let url = parts
                .next()
                .map(|s| s.trim().trim_start_matches('<').trim_end_matches('>'));

            let rel = parts.find_map(|part| {
                part.trim()
                    .strip_prefix("rel=")
                    .map(|rel| rel.trim_matches('"'))
            });

            if let (Some(url), Some(rel)) = (url, rel) {
                let Some(page) = Self::extract_page(url) else {
                    continue;
                };
                match rel {
                    "next" => result.next_page = Some(page),
                    "prev" => result.prev_page = Some(page),
                    "first" => result.first_page = Some(page),
                    "last" => result.last_page = Some(page),
                    _ => {}
                }
            }
        }

        result
    }

    /// Returns `true` if a following page is advertised.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Extracts the `page` parameter from a URL.
    fn extract_page(url: &str) -> Option<u32> {
        let (_, query) = url.split_once('?')?;
        query.split('&').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key == "page" {
                value.parse().ok()
            } else {
                None
            }
        })
    }
}

/// A successful (status below 300) response whose body has not been read yet.
///
/// The caller decides how to consume the body: decode it with
/// [`HttpResponse::json`], read it with [`HttpResponse::text`], or drop it
/// with [`HttpResponse::discard`].
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) const fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns the response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Returns the first value of `name` if it is present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    /// Returns `true` if the response carries a `Link` header.
    #[must_use]
    pub fn has_link_header(&self) -> bool {
        self.inner.headers().contains_key(LINK)
    }

    /// Parses the `Link` header into page numbers.
    #[must_use]
    pub fn pagination(&self) -> PaginationInfo {
        self.header(LINK.as_str())
            .map(PaginationInfo::parse_link_header)
            .unwrap_or_default()
    }

    /// Reads the body and decodes it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the body cannot be read and
    /// [`HttpError::Decode`] if it is not valid JSON for `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let bytes = self.inner.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reads the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the body cannot be read.
    pub async fn text(self) -> Result<String, HttpError> {
        Ok(self.inner.text().await?)
    }

    /// Reads the raw body bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the body cannot be read.
    pub async fn bytes(self) -> Result<Vec<u8>, HttpError> {
        Ok(self.inner.bytes().await?.to_vec())
    }

    /// Reads the body to the end and drops it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the body cannot be read.
    pub async fn discard(self) -> Result<(), HttpError> {
        self.inner.bytes().await?;
        Ok(())
    }

    /// Returns the underlying `reqwest` response.
    #[must_use]
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}
