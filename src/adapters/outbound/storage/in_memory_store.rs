use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    memory::InMemory, path::Path as ObjectPath, ObjectStore as ApacheObjectStore, PutMode,
    PutOptions, PutPayload,
};
use std::{collections::HashMap, sync::Arc};

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::BucketStore,
};

/// `BucketStore` over Apache `object_store` in-memory stores, one per
/// bucket. Buckets are declared at construction; writing to an undeclared
/// bucket fails the same way a missing bucket does on a real backend.
///
/// Meant for tests and local development.
pub struct InMemoryBucketStore {
    buckets: HashMap<String, Arc<InMemory>>,
}

impl InMemoryBucketStore {
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Declare a bucket that uploads may target
    pub fn with_bucket(mut self, name: &str) -> Self {
        self.buckets.insert(name.to_string(), Arc::new(InMemory::new()));
        self
    }
}

impl Default for InMemoryBucketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BucketStore for InMemoryBucketStore {
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        _content_type: &str,
    ) -> StoreResult<()> {
        // Content type is not recorded; the in-memory store has no object
        // metadata to attach it to.
        let store = self
            .buckets
            .get(bucket.as_str())
            .ok_or_else(|| StoreError::BucketNotFound {
                bucket: bucket.to_string(),
            })?;

        let path = ObjectPath::from(key.as_str());
        let payload = PutPayload::from(data);

        // PutMode::Create enforces the no-overwrite contract.
        store
            .put_opts(&path, payload, PutOptions::from(PutMode::Create))
            .await
            .map_err(|e| match e {
                object_store::Error::AlreadyExists { .. } => StoreError::AlreadyExists {
                    key: key.to_string(),
                },
                other => StoreError::Backend {
                    message: other.to_string(),
                },
            })?;

        Ok(())
    }

    fn public_url(&self, bucket: &BucketName, key: &ObjectKey) -> String {
        format!("memory://{}/{}", bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> BucketName {
        BucketName::new(name.to_string()).unwrap()
    }

    fn key(name: &str) -> ObjectKey {
        ObjectKey::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn put_into_declared_bucket_succeeds() {
        let store = InMemoryBucketStore::new().with_bucket("photos");
        let result = store
            .put_object(
                &bucket("photos"),
                &key("image_1.png"),
                Bytes::from_static(b"png-bytes"),
                "image/png",
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn put_into_missing_bucket_is_bucket_not_found() {
        let store = InMemoryBucketStore::new();
        let result = store
            .put_object(
                &bucket("nope"),
                &key("image_1.png"),
                Bytes::new(),
                "image/png",
            )
            .await;
        assert_eq!(
            result.unwrap_err(),
            StoreError::BucketNotFound {
                bucket: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn existing_object_is_never_overwritten() {
        let store = InMemoryBucketStore::new().with_bucket("photos");
        let b = bucket("photos");
        let k = key("image_1.png");

        store
            .put_object(&b, &k, Bytes::from_static(b"first"), "image/png")
            .await
            .unwrap();

        let second = store
            .put_object(&b, &k, Bytes::from_static(b"second"), "image/png")
            .await;
        assert!(matches!(second, Err(StoreError::AlreadyExists { .. })));
    }
}
