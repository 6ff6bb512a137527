use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health_check, index_page, upload_image};
use crate::ports::services::UploadService;

/// Application state shared with all handlers
#[derive(Clone)]
pub struct AppState {
    pub upload_service: Arc<dyn UploadService>,
}

/// Create the application router: the form page, the upload endpoint, and a
/// health probe.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/api/upload", post(upload_image))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::{fetch::ReqwestFetcher, storage::InMemoryBucketStore},
        services::UploadServiceImpl,
    };
    use axum_test::TestServer;

    fn test_state() -> AppState {
        let store = Arc::new(InMemoryBucketStore::new().with_bucket("photos"));
        let service = UploadServiceImpl::new(Some(store), Arc::new(ReqwestFetcher::new()));
        AppState {
            upload_service: Arc::new(service),
        }
    }

    #[tokio::test]
    async fn router_serves_health_probe() {
        let server = TestServer::new(create_router(test_state())).unwrap();
        let response = server.get("/health").await;
        response.assert_status_ok();
    }
}
