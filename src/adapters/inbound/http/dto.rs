use serde::{Deserialize, Serialize};

use crate::domain::models::{UploadOutcome, UploadRequest};

/// DTO for an upload submission
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequestDto {
    pub bucket_name: String,
    pub image_url: String,
}

impl From<UploadRequestDto> for UploadRequest {
    fn from(dto: UploadRequestDto) -> Self {
        Self {
            bucket_name: dto.bucket_name,
            image_url: dto.image_url,
        }
    }
}

/// DTO for the upload result returned to the form
#[derive(Debug, Clone, Serialize)]
pub struct UploadResultDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}

impl From<UploadOutcome> for UploadResultDto {
    fn from(outcome: UploadOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            public_url: outcome.public_url,
        }
    }
}
