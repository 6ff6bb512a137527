use crate::domain::errors::ValidationError;

/// A validated storage bucket name.
///
/// Bucket naming is ultimately the storage backend's concern; this type only
/// rejects values that could never address a bucket (empty strings, path
/// separators, control characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if value.len() > 100 {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: 100,
            });
        }

        // The name is interpolated into an object path on upload.
        for c in value.chars() {
            if c == '/' || c.is_control() {
                return Err(ValidationError::BucketNameInvalidCharacter(c));
            }
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(BucketName::new("avatars".to_string()).is_ok());
        assert!(BucketName::new("user-uploads-2024".to_string()).is_ok());
        assert!(BucketName::new("My Bucket".to_string()).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(BucketName::new("".to_string()).is_err());
        assert!(BucketName::new("   ".to_string()).is_err());
    }

    #[test]
    fn rejects_path_separators_and_control_characters() {
        assert!(BucketName::new("a/b".to_string()).is_err());
        assert!(BucketName::new("bucket\0".to_string()).is_err());
        assert!(BucketName::new("bucket\n".to_string()).is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        assert!(BucketName::new("a".repeat(101)).is_err());
        assert!(BucketName::new("a".repeat(100)).is_ok());
    }
}
