/// Errors raised while fetching the remote resource.
///
/// A non-success HTTP status is not a `FetchError`; the fetched status is
/// part of the response and the orchestrator branches on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The response body could not be read
    #[error("failed to read response body: {message}")]
    Body { message: String },
}
