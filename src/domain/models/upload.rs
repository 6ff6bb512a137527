use serde::Serialize;

use crate::domain::errors::UploadError;
use crate::domain::value_objects::ObjectKey;

/// One form submission: a bucket to write into and a URL to pull from.
///
/// Fields are raw strings on purpose; validating them is the orchestrator's
/// first job, not the caller's.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bucket_name: String,
    pub image_url: String,
}

/// The structured result of an upload attempt.
///
/// `public_url` is present iff `success` is true. Failures are values, not
/// errors; the orchestrator produces exactly one of these per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
    pub success: bool,
    pub message: String,
    pub public_url: Option<String>,
}

impl UploadOutcome {
    /// Successful outcome naming the stored object and its public URL
    pub fn uploaded(key: &ObjectKey, public_url: String) -> Self {
        Self {
            success: true,
            message: format!("Image uploaded successfully as {}", key),
            public_url: Some(public_url),
        }
    }
}

impl From<UploadError> for UploadOutcome {
    fn from(error: UploadError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            public_url: None,
        }
    }
}
