use std::sync::Arc;

use crate::{
    adapters::outbound::{
        fetch::ReqwestFetcher,
        storage::{HttpBucketStore, InMemoryBucketStore},
    },
    ports::storage::BucketStore,
    services::UploadServiceImpl,
};

/// Storage configuration for the application.
///
/// All fields are optional on purpose: a missing endpoint or service key is
/// not a startup error. The orchestrator reports the gap per request with a
/// setup-guidance message instead, so the form still loads and explains
/// what to configure.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the storage service
    pub endpoint: Option<String>,
    /// Privileged service credential, server-side only
    pub service_key: Option<String>,
    /// Public credential for read-only client access
    pub anon_key: Option<String>,
}

impl AppConfig {
    /// Read configuration from STORAGE_ENDPOINT, STORAGE_SERVICE_KEY and
    /// STORAGE_ANON_KEY
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("STORAGE_ENDPOINT").ok(),
            service_key: std::env::var("STORAGE_SERVICE_KEY").ok(),
            anon_key: std::env::var("STORAGE_ANON_KEY").ok(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.endpoint.is_some() && self.service_key.is_some()
    }
}

/// Application builder wiring config, fetcher and store into the service
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.config.service_key = Some(key.into());
        self
    }

    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.config.anon_key = Some(key.into());
        self
    }

    /// Build the upload service.
    ///
    /// Without complete credentials the service is built storeless and
    /// answers every request with the configuration-guidance message.
    pub fn build(self) -> UploadServiceImpl {
        let store = self.privileged_store();
        UploadServiceImpl::new(store, Arc::new(ReqwestFetcher::new()))
    }

    /// Store authenticated with the service key, for uploads
    fn privileged_store(&self) -> Option<Arc<dyn BucketStore>> {
        match (&self.config.endpoint, &self.config.service_key) {
            (Some(endpoint), Some(key)) => {
                Some(Arc::new(HttpBucketStore::new(endpoint.clone(), key.clone())))
            }
            _ => None,
        }
    }

    /// Store authenticated with the anon key, for lower-privilege read-only
    /// access from client-facing code. Unused by the orchestrator itself.
    pub fn read_only_store(&self) -> Option<Arc<dyn BucketStore>> {
        match (&self.config.endpoint, &self.config.anon_key) {
            (Some(endpoint), Some(key)) => {
                Some(Arc::new(HttpBucketStore::new(endpoint.clone(), key.clone())))
            }
            _ => None,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the upload service from environment variables
pub fn create_app_from_env() -> UploadServiceImpl {
    AppBuilder::new().with_config(AppConfig::from_env()).build()
}

/// Build an upload service over in-memory buckets, for development and
/// tests
pub fn create_in_memory_app(buckets: &[&str]) -> UploadServiceImpl {
    let store = buckets
        .iter()
        .fold(InMemoryBucketStore::new(), |store, name| {
            store.with_bucket(name)
        });
    UploadServiceImpl::new(Some(Arc::new(store)), Arc::new(ReqwestFetcher::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_endpoint_and_service_key() {
        let mut config = AppConfig::default();
        assert!(!config.has_credentials());

        config.endpoint = Some("https://project.example.co".to_string());
        assert!(!config.has_credentials());

        config.service_key = Some("service-key".to_string());
        assert!(config.has_credentials());
    }

    #[test]
    fn builder_without_credentials_builds_storeless_service() {
        // Must not panic; the service reports the gap per request.
        let _service = AppBuilder::new().build();
    }

    #[test]
    fn read_only_store_uses_the_anon_key() {
        let builder = AppBuilder::new()
            .with_endpoint("https://project.example.co")
            .with_anon_key("anon-key");
        assert!(builder.read_only_store().is_some());

        let without_anon = AppBuilder::new().with_endpoint("https://project.example.co");
        assert!(without_anon.read_only_store().is_none());
    }
}
