mod upload;

pub use upload::{UploadOutcome, UploadRequest};
