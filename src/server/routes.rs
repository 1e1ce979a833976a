//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 16 * 1024;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        // HTML form
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_page))
        .route("/transcribe", post(handlers::transcribe_page))
        .route("/template", post(handlers::template_page))
        .route("/speak", post(handlers::speak_page))
        // JSON API
        .route("/api/ocr", post(handlers::api_ocr))
        .route("/api/classify", post(handlers::api_classify))
        .route("/api/transcribe", post(handlers::api_transcribe))
        .route("/api/templates", get(handlers::api_templates))
        .route("/api/templates/:kind", get(handlers::api_template))
        .route("/api/tts", post(handlers::api_tts))
        .route("/api/status", get(handlers::api_status))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
