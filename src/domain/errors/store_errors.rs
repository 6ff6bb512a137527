/// Errors surfaced by a bucket store when an upload is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The target bucket does not exist
    #[error("bucket not found: {bucket}")]
    BucketNotFound { bucket: String },

    /// The backend refused the write for permission reasons
    #[error("upload not allowed")]
    NotAllowed,

    /// An object with the same key already exists (overwrite is disabled)
    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    /// Any other backend failure, carried as the backend's own message
    #[error("{message}")]
    Backend { message: String },
}

impl StoreError {
    /// Classify a raw backend error message by substring.
    ///
    /// The matched phrases ("Bucket not found", "not allowed") track the
    /// storage backend's error wording and are case-sensitive; a backend
    /// that rewords its responses silently degrades these to `Backend`.
    /// Adapters that get a typed status code should map it first and use
    /// this only as a fallback.
    pub fn classify(bucket: &str, message: String) -> Self {
        if message.contains("Bucket not found") {
            StoreError::BucketNotFound {
                bucket: bucket.to_string(),
            }
        } else if message.contains("not allowed") {
            StoreError::NotAllowed
        } else {
            StoreError::Backend { message }
        }
    }
}

/// Result type for bucket store operations
pub type StoreResult<T> = Result<T, StoreError>;
