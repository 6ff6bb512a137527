mod http_store;
mod in_memory_store;

pub use http_store::HttpBucketStore;
pub use in_memory_store::InMemoryBucketStore;
