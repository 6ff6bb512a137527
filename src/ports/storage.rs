use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{
    errors::StoreResult,
    value_objects::{BucketName, ObjectKey},
};

/// Port for writing objects into named buckets of an external store
#[async_trait]
pub trait BucketStore: Send + Sync + 'static {
    /// Write `data` under `key` in `bucket` with the given content type.
    ///
    /// Overwrite is disabled: an existing object under the same key must be
    /// rejected, never replaced.
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
        content_type: &str,
    ) -> StoreResult<()>;

    /// Resolve the public URL of an object.
    ///
    /// Pure string construction over the store's address scheme; it cannot
    /// fail and does not verify the object exists.
    fn public_url(&self, bucket: &BucketName, key: &ObjectKey) -> String;
}
