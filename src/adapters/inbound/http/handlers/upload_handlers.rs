use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::adapters::inbound::http::{
    dto::{UploadRequestDto, UploadResultDto},
    router::AppState,
};

/// Handle an upload submission.
///
/// Always answers 200: failures are part of the result value, not HTTP
/// statuses, so the form can render them inline.
pub async fn upload_image(
    State(app_state): State<AppState>,
    Json(dto): Json<UploadRequestDto>,
) -> Json<UploadResultDto> {
    let outcome = app_state.upload_service.upload_from_url(dto.into()).await;

    Json(UploadResultDto::from(outcome))
}

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
