mod fetch_errors;
mod store_errors;
mod upload_errors;
mod validation_errors;

pub use fetch_errors::FetchError;
pub use store_errors::{StoreError, StoreResult};
pub use upload_errors::UploadError;
pub use validation_errors::ValidationError;
