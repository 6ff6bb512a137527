use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

use crate::{
    domain::{
        errors::UploadError,
        models::{UploadOutcome, UploadRequest},
        value_objects::{BucketName, ObjectKey},
    },
    ports::{fetch::ImageFetcher, services::UploadService, storage::BucketStore},
};

/// The upload orchestrator.
///
/// A linear pipeline with no loops or retries: credential check, URL
/// validation, remote fetch, content-type validation, filename synthesis,
/// upload, public-URL resolution. Every step short-circuits into a failed
/// `UploadOutcome`; nothing propagates to the caller as an error.
///
/// `store` is `None` when the storage endpoint or service credential was
/// absent at wiring time; requests then fail at the first step without any
/// network traffic.
#[derive(Clone)]
pub struct UploadServiceImpl {
    store: Option<Arc<dyn BucketStore>>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl UploadServiceImpl {
    pub fn new(store: Option<Arc<dyn BucketStore>>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { store, fetcher }
    }

    async fn run(&self, request: &UploadRequest) -> Result<UploadOutcome, UploadError> {
        let store = self.store.as_ref().ok_or(UploadError::MissingCredentials)?;

        let source = Url::parse(&request.image_url).map_err(|_| UploadError::InvalidUrl)?;

        let fetched = self.fetcher.fetch(&source).await.map_err(|e| {
            warn!(url = %source, error = %e, "image fetch failed in transit");
            UploadError::Unexpected
        })?;

        if !fetched.is_success() {
            return Err(UploadError::FetchFailed {
                status: fetched.status,
                status_text: fetched.status_text.clone(),
            });
        }

        // Declared-header check only; the payload is not sniffed, so a
        // mislabeled non-image with an image content type passes.
        let content_type = fetched
            .content_type
            .as_deref()
            .filter(|ct| ct.starts_with("image/"))
            .ok_or(UploadError::NotAnImage)?
            .to_string();

        let bucket = BucketName::new(request.bucket_name.clone())
            .map_err(|e| UploadError::UploadRejected {
                message: e.to_string(),
            })?;

        let key = ObjectKey::for_remote_image(&source, Utc::now());

        store
            .put_object(&bucket, &key, fetched.body, &content_type)
            .await
            .map_err(|e| UploadError::from_store(e, &bucket))?;

        let public_url = store.public_url(&bucket, &key);

        info!(bucket = %bucket, key = %key, "image uploaded");

        Ok(UploadOutcome::uploaded(&key, public_url))
    }
}

#[async_trait]
impl UploadService for UploadServiceImpl {
    async fn upload_from_url(&self, request: UploadRequest) -> UploadOutcome {
        match self.run(&request).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(bucket = %request.bucket_name, url = %request.image_url, %error, "upload failed");
                UploadOutcome::from(error)
            }
        }
    }
}
