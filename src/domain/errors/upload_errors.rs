use crate::domain::errors::StoreError;
use crate::domain::value_objects::BucketName;

/// Every way an upload can fail, one variant per user-facing message.
///
/// `Display` is the exact text shown to the user; the orchestrator converts
/// these into a result value at its boundary and never lets them escape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Storage endpoint or service credential missing from configuration
    #[error("Storage credentials are not configured. Please set STORAGE_ENDPOINT and STORAGE_SERVICE_KEY in your environment.")]
    MissingCredentials,

    /// The submitted image URL is not an absolute URL
    #[error("Invalid URL format")]
    InvalidUrl,

    /// The remote server answered with a non-success status
    #[error("Failed to fetch image: {status} {status_text}")]
    FetchFailed { status: u16, status_text: String },

    /// The response's declared content type is not in the image family
    #[error("URL does not point to a valid image")]
    NotAnImage,

    /// The target bucket does not exist
    #[error("Bucket \"{bucket}\" not found. Please create the bucket first.")]
    BucketNotFound { bucket: String },

    /// The backend refused the write
    #[error("Upload not allowed. Check your bucket permissions.")]
    NotAllowed,

    /// The backend rejected the upload for any other stated reason
    #[error("Upload failed: {message}")]
    UploadRejected { message: String },

    /// Safety net for transport failures and anything unclassified
    #[error("An unexpected error occurred during upload")]
    Unexpected,
}

impl UploadError {
    /// Map a store rejection onto the user-facing taxonomy.
    ///
    /// Typed variants map directly; generic `Backend` messages get one more
    /// pass through the substring classifier so backends that only report
    /// strings still produce the specific messages.
    pub fn from_store(error: StoreError, bucket: &BucketName) -> Self {
        match error {
            StoreError::BucketNotFound { bucket } => UploadError::BucketNotFound { bucket },
            StoreError::NotAllowed => UploadError::NotAllowed,
            StoreError::AlreadyExists { key } => UploadError::UploadRejected {
                message: format!("object \"{}\" already exists", key),
            },
            StoreError::Backend { message } => {
                match StoreError::classify(bucket.as_str(), message) {
                    StoreError::BucketNotFound { bucket } => {
                        UploadError::BucketNotFound { bucket }
                    }
                    StoreError::NotAllowed => UploadError::NotAllowed,
                    StoreError::Backend { message } | StoreError::AlreadyExists { key: message } => {
                        UploadError::UploadRejected { message }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> BucketName {
        BucketName::new(name.to_string()).unwrap()
    }

    #[test]
    fn typed_store_errors_map_directly() {
        let err = UploadError::from_store(
            StoreError::BucketNotFound {
                bucket: "photos".to_string(),
            },
            &bucket("photos"),
        );
        assert_eq!(
            err.to_string(),
            "Bucket \"photos\" not found. Please create the bucket first."
        );

        let err = UploadError::from_store(StoreError::NotAllowed, &bucket("photos"));
        assert_eq!(
            err.to_string(),
            "Upload not allowed. Check your bucket permissions."
        );
    }

    #[test]
    fn backend_messages_are_reclassified_by_substring() {
        let err = UploadError::from_store(
            StoreError::Backend {
                message: "error 400: Bucket not found, try again".to_string(),
            },
            &bucket("photos"),
        );
        assert!(matches!(err, UploadError::BucketNotFound { .. }));
    }

    #[test]
    fn unmatched_backend_messages_become_generic_failures() {
        let err = UploadError::from_store(
            StoreError::Backend {
                message: "disk full".to_string(),
            },
            &bucket("photos"),
        );
        assert_eq!(err.to_string(), "Upload failed: disk full");
    }
}
