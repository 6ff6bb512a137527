use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::BucketStore,
};

/// Error payload shape returned by the storage API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `BucketStore` over a hosted storage service's REST API.
///
/// Objects are written with `x-upsert: false`, so an existing object under
/// the same key is rejected rather than replaced. Authentication uses the
/// privileged service key; this adapter must only ever run server-side.
pub struct HttpBucketStore {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
}

impl HttpBucketStore {
    pub fn new(endpoint: impl Into<String>, service_key: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            endpoint,
            service_key: service_key.into(),
        }
    }

    fn object_url(&self, bucket: &BucketName, key: &ObjectKey) -> String {
        format!("{}/storage/v1/object/{}/{}", self.endpoint, bucket, key)
    }
}

#[async_trait]
impl BucketStore for HttpBucketStore {
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StoreResult<()> {
        let response = self
            .client
            .post(self.object_url(bucket, key))
            .bearer_auth(&self.service_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(|e| StoreError::Backend {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Error payloads are JSON with a "message" field; fall back to the
        // raw body when they are not.
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        // Map the status code first; the substring classifier only covers
        // what the status cannot distinguish.
        Err(match status.as_u16() {
            403 => StoreError::NotAllowed,
            409 => StoreError::AlreadyExists {
                key: key.to_string(),
            },
            _ => StoreError::classify(bucket.as_str(), message),
        })
    }

    fn public_url(&self, bucket: &BucketName, key: &ObjectKey) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.endpoint, bucket, key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpBucketStore {
        HttpBucketStore::new("https://project.example.co/", "service-key")
    }

    #[test]
    fn public_url_joins_endpoint_bucket_and_key() {
        let bucket = BucketName::new("avatars".to_string()).unwrap();
        let key = ObjectKey::new("image_42.png".to_string()).unwrap();
        assert_eq!(
            store().public_url(&bucket, &key),
            "https://project.example.co/storage/v1/object/public/avatars/image_42.png"
        );
    }

    #[test]
    fn trailing_slash_on_endpoint_is_trimmed() {
        let bucket = BucketName::new("b-1".to_string()).unwrap();
        let key = ObjectKey::new("k".to_string()).unwrap();
        assert_eq!(
            store().object_url(&bucket, &key),
            "https://project.example.co/storage/v1/object/b-1/k"
        );
    }
}
