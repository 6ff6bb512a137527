use axum::response::Html;

/// Serve the upload form.
///
/// The page is self-contained markup plus a small script: local non-empty
/// guard, POST to /api/upload, `bucket` query-parameter persistence, the
/// copy-feedback timer, and the image preview fallback all live there.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../../../../assets/index.html"))
}
