pub mod page_handlers;
pub mod upload_handlers;

pub use page_handlers::*;
pub use upload_handlers::*;
