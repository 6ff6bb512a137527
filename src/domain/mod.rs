pub mod errors;
pub mod models;
pub mod value_objects;

// Re-export commonly used types
pub use errors::{FetchError, StoreError, StoreResult, UploadError, ValidationError};
pub use models::{UploadOutcome, UploadRequest};
pub use value_objects::{BucketName, ObjectKey};
