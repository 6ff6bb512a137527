use async_trait::async_trait;

use crate::domain::models::{UploadOutcome, UploadRequest};

/// Port for the upload orchestration service
#[async_trait]
pub trait UploadService: Send + Sync + 'static {
    /// Fetch the image named by the request and relay it into the bucket.
    ///
    /// Infallible at the type level: every failure path is folded into the
    /// returned `UploadOutcome`.
    async fn upload_from_url(&self, request: UploadRequest) -> UploadOutcome;
}
