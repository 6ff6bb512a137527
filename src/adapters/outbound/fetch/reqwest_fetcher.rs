use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{
    domain::errors::FetchError,
    ports::fetch::{FetchedResource, ImageFetcher},
};

/// `ImageFetcher` backed by a shared reqwest client.
///
/// No request timeout is configured: a hung origin stalls the whole upload
/// for as long as the origin holds the connection open.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedResource, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        // The body is only needed for success responses; skip the read on
        // error statuses.
        let body = if status.is_success() {
            response.bytes().await.map_err(|e| FetchError::Body {
                message: e.to_string(),
            })?
        } else {
            Bytes::new()
        };

        Ok(FetchedResource {
            status: status.as_u16(),
            status_text,
            content_type,
            body,
        })
    }
}
