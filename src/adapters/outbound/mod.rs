pub mod fetch;
pub mod storage;
