//! Page-number pagination shared by the list endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::HttpClient;
use crate::resources::ApiError;

/// When to stop requesting further pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageEnd {
    /// Stop at the first empty page.
    Empty,
    /// Stop at the first empty page or the first page without a `Link` header.
    EmptyOrUnlinked,
}

/// Requests `url_for(1)`, `url_for(2)`, ... and concatenates the results.
///
/// Any failed page aborts the whole listing.
pub(crate) async fn collect_pages<T, F>(
    client: &HttpClient,
    end: PageEnd,
    url_for: F,
) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
    F: Fn(u32) -> String,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let url = url_for(page);
        let response = client.get(&url).await?;
        let linked = response.has_link_header();
        let batch: Vec<T> = response.json().await?;

        tracing::debug!(page, count = batch.len(), linked, "fetched page");

        if batch.is_empty() {
            break;
        }
        items.extend(batch);

        if end == PageEnd::EmptyOrUnlinked && !linked {
            break;
        }
        page += 1;
    }

    Ok(items)
}

/// Serializes a request body to JSON text.
pub(crate) fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string(value)?)
}
