mod upload_service_impl;

pub use upload_service_impl::UploadServiceImpl;
