use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::domain::errors::FetchError;

/// What came back from a remote GET, reduced to what the upload flow needs.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status ("Not Found", ...)
    pub status_text: String,
    /// Declared `content-type` header, if any
    pub content_type: Option<String>,
    /// Response body; empty for non-success responses
    pub body: Bytes,
}

impl FetchedResource {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for fetching a remote resource over HTTP
#[async_trait]
pub trait ImageFetcher: Send + Sync + 'static {
    /// Issue a GET for `url` and return the response.
    ///
    /// Non-success statuses are returned as a `FetchedResource`, not an
    /// error; `FetchError` is reserved for transport-level failures.
    async fn fetch(&self, url: &Url) -> Result<FetchedResource, FetchError>;
}
