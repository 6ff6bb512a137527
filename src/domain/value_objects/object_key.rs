use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::errors::ValidationError;

/// Extension used when the source URL path carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// A validated object key (path) in a storage bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > 1024 {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: 1024,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::InvalidObjectKeyCharacter('\0'));
        }

        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        Ok(Self(value))
    }

    /// Synthesize a destination key for an image fetched from `source`.
    ///
    /// The key is `image_<unix-millis>.<ext>`, where `<ext>` is taken from
    /// the final path segment of the source URL when it has one and falls
    /// back to "jpg" otherwise. Uniqueness rests on the millisecond
    /// timestamp; there is no collision retry.
    pub fn for_remote_image(source: &Url, at: DateTime<Utc>) -> Self {
        let extension = Self::path_extension(source.path());
        Self(format!("image_{}.{}", at.timestamp_millis(), extension))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extension of the last path segment, or the default when absent.
    fn path_extension(path: &str) -> &str {
        let segment = path.rsplit('/').next().unwrap_or(path);
        match segment.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => DEFAULT_EXTENSION,
        }
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn valid_keys() {
        assert!(ObjectKey::new("image_123.png".to_string()).is_ok());
        assert!(ObjectKey::new("nested/path/file.webp".to_string()).is_ok());
    }

    #[test]
    fn invalid_keys() {
        assert!(ObjectKey::new("".to_string()).is_err());
        assert!(ObjectKey::new("/leading".to_string()).is_err());
        assert!(ObjectKey::new("a//b".to_string()).is_err());
        assert!(ObjectKey::new("a".repeat(1025)).is_err());
    }

    #[test]
    fn synthesized_key_keeps_source_extension() {
        let url = Url::parse("https://example.com/photos/photo.webp").unwrap();
        let key = ObjectKey::for_remote_image(&url, at_millis(1_700_000_000_000));
        assert_eq!(key.as_str(), "image_1700000000000.webp");
    }

    #[test]
    fn synthesized_key_defaults_to_jpg_without_extension() {
        let url = Url::parse("https://example.com/photos/photo").unwrap();
        let key = ObjectKey::for_remote_image(&url, at_millis(42));
        assert_eq!(key.as_str(), "image_42.jpg");
    }

    #[test]
    fn trailing_dot_counts_as_no_extension() {
        let url = Url::parse("https://example.com/photo.").unwrap();
        let key = ObjectKey::for_remote_image(&url, at_millis(42));
        assert_eq!(key.as_str(), "image_42.jpg");
    }

    #[test]
    fn extension_comes_from_final_segment_only() {
        // A dot in an earlier segment must not leak into the extension.
        let url = Url::parse("https://example.com/v1.2/photo").unwrap();
        let key = ObjectKey::for_remote_image(&url, at_millis(42));
        assert_eq!(key.as_str(), "image_42.jpg");
    }
}
