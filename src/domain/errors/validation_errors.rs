/// Validation failures for domain value objects
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("bucket name must not be empty")]
    EmptyBucketName,

    #[error("bucket name too long: {actual} characters (max {max})")]
    BucketNameTooLong { actual: usize, max: usize },

    #[error("bucket name contains invalid character: {0:?}")]
    BucketNameInvalidCharacter(char),

    #[error("object key must not be empty")]
    EmptyObjectKey,

    #[error("object key too long: {actual} characters (max {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },

    #[error("object key contains invalid character: {0:?}")]
    InvalidObjectKeyCharacter(char),

    #[error("object key must not start with '/'")]
    ObjectKeyStartsWithSlash,

    #[error("object key must not contain '//'")]
    ObjectKeyContainsDoubleSlash,
}
