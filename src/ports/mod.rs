pub mod fetch;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use fetch::{FetchedResource, ImageFetcher};
pub use services::UploadService;
pub use storage::BucketStore;
