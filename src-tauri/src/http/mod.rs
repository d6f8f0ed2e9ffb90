//! Fetch layer: one GET-JSON seam shared by every API client.

pub mod client;

pub use client::ReqwestSource;

use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

#[async_trait]
pub trait HttpSource: Send + Sync {
    /// GET `url` and decode the body as JSON. Non-success statuses are errors.
    async fn get_json(&self, url: Url) -> FetchResult<Value>;
}

/// Append path segments to `base`, percent-encoding each one.
pub fn endpoint(base: &Url, segments: &[&str]) -> FetchResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests;
