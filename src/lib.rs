pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - models, value objects and errors
pub use domain::{
    BucketName, FetchError, ObjectKey, StoreError, UploadError, UploadOutcome, UploadRequest,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{BucketStore, FetchedResource, ImageFetcher, UploadService};

// Service implementations - business logic
pub use services::UploadServiceImpl;

// Application factory and configuration
pub use app::{AppBuilder, AppConfig, create_app_from_env, create_in_memory_app};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    fetch::ReqwestFetcher,
    storage::{HttpBucketStore, InMemoryBucketStore},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppConfig, BucketName, BucketStore, HttpBucketStore, ImageFetcher,
        InMemoryBucketStore, ObjectKey, ReqwestFetcher, UploadOutcome, UploadRequest,
        UploadService, UploadServiceImpl, create_app_from_env, create_in_memory_app,
    };
}
