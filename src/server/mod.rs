//! Web server for the legal-assistant form.
//!
//! Serves a single HTML page with three independent panels:
//! - Document: upload an image, run OCR, show the classified draft
//! - Voice: upload audio, mock-transcribe it, show the classified draft
//! - Templates: pick a canned draft directly
//!
//! Every panel can have its draft read aloud. The same operations are
//! exposed as a JSON API under `/api`.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::{Config, Settings};
use crate::services::Assistant;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(assistant: Assistant, max_upload_bytes: usize) -> Self {
        Self {
            assistant: Arc::new(assistant),
            max_upload_bytes,
            started_at: Utc::now(),
        }
    }

    pub fn from_config(config: &Config, settings: &Settings) -> anyhow::Result<Self> {
        let assistant = Assistant::from_config(config, settings)?;
        Ok(Self::new(assistant, settings.max_upload_bytes))
    }
}

/// Start the web server.
pub async fn serve(config: &Config, settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::from_config(config, settings)?;

    let ocr = state.assistant.ocr_backend();
    if !ocr.is_available() {
        tracing::warn!("{}", ocr.availability_hint());
    }

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::models::ExtractionResult;
    use crate::services::fakes::{assistant_with, RecordingTts};

    const BOUNDARY: &str = "nyayai-test-boundary";
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    const MP3: &[u8] = b"ID3\x03\x00\x00\x00\x00\x00\x00";

    fn setup_test_app(extraction: ExtractionResult) -> (axum::Router, Arc<RecordingTts>) {
        let (assistant, tts) = assistant_with(extraction);
        (create_router(AppState::new(assistant, 1024)), tts)
    }

    fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{f}\"; filename=\"{n}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            b = BOUNDARY,
            f = field,
            n = filename
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn multipart_request(uri: &str, field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(field, filename, content)))
            .unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Run OCR &amp; Analyze") || html.contains("Run OCR & Analyze"));
        assert!(html.contains("Deposit Refund Request"));
        assert!(html.contains("Not a substitute for legal advice"));
    }

    #[tokio::test]
    async fn test_static_css() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }

    #[tokio::test]
    async fn test_analyze_page_shows_draft() {
        let (app, _) = setup_test_app(ExtractionResult::extracted("I want my deposit refund"));

        let response = app
            .oneshot(multipart_request("/analyze", "file", "scan.jpg", JPEG))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("I want my deposit refund"));
        assert!(html.contains("Deposit refund issue detected."));
        assert!(html.contains("Request for refund of security deposit"));
        assert!(html.contains("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_analyze_page_shows_provider_error() {
        let (app, _) = setup_test_app(ExtractionResult::failed("bad image"));

        let response = app
            .oneshot(multipart_request("/analyze", "file", "scan.jpg", JPEG))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("bad image"));
        assert!(!html.contains("detected."));
    }

    #[tokio::test]
    async fn test_analyze_page_rejects_non_image() {
        let (app, _) = setup_test_app(ExtractionResult::extracted("notice"));

        let response = app
            .oneshot(multipart_request("/analyze", "file", "notes.txt", b"plain text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Unsupported image type"));
    }

    #[tokio::test]
    async fn test_template_page() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(form_request("/template", "kind=Eviction+Reply"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Subject: Reply to eviction notice"));
    }

    #[tokio::test]
    async fn test_template_page_placeholder_is_empty() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(form_request("/template", "kind=Select..."))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(!html.contains("Subject:"));
    }

    #[tokio::test]
    async fn test_transcribe_page() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(multipart_request("/transcribe", "audio", "voice.mp3", MP3))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(crate::stt::DEFAULT_TRANSCRIPT));
        assert!(html.contains("data:audio/mpeg;base64,"));
    }

    #[tokio::test]
    async fn test_speak_page_regional() {
        let (app, tts) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(form_request("/speak", "text=To%2C+Concerned&mode=regional"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("data:audio/mpeg;base64,"));
        assert_eq!(tts.calls(), vec!["mr"]);
    }

    #[tokio::test]
    async fn test_api_ocr_success() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(
            "This is an eviction notice dated 1st Jan",
        ));

        let response = app
            .oneshot(multipart_request("/api/ocr", "file", "scan.jpg", JPEG))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["error"].is_null());
        assert_eq!(json["text"], "This is an eviction notice dated 1st Jan");
        assert_eq!(json["analysis"]["risk"], "Medium");
        assert_eq!(json["analysis"]["summary"], "Eviction-related document detected.");
    }

    #[tokio::test]
    async fn test_api_ocr_provider_error() {
        let (app, _) = setup_test_app(ExtractionResult::failed("bad image"));

        let response = app
            .oneshot(multipart_request("/api/ocr", "file", "scan.jpg", JPEG))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "bad image");
        assert_eq!(json["text"], "");
        assert!(json["analysis"].is_null());
    }

    #[tokio::test]
    async fn test_api_ocr_missing_file() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(multipart_request("/api/ocr", "other", "scan.jpg", JPEG))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_api_ocr_too_large() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));
        let mut big = JPEG.to_vec();
        big.resize(4096, 0);

        let response = app
            .oneshot(multipart_request("/api/ocr", "file", "scan.jpg", &big))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_api_classify() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(json_request(
                "/api/classify",
                serde_json::json!({"text": "Please explain clause 4"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["risk"], "Low");
        assert!(json["draft"]
            .as_str()
            .unwrap()
            .starts_with("To,\nConcerned,\nSubject: Request for clarification"));
    }

    #[tokio::test]
    async fn test_api_templates() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/templates/deposit-refund-request")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["summary"], "Deposit refund issue detected.");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/templates/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_transcribe() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(multipart_request("/api/transcribe", "audio", "voice.mp3", MP3))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["transcript"], crate::stt::DEFAULT_TRANSCRIPT);
        assert_eq!(json["analysis"]["risk"], "Low");
    }

    #[tokio::test]
    async fn test_api_tts_auto_language() {
        let (app, tts) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(json_request(
                "/api/tts",
                serde_json::json!({"text": "मला माहिती हवी आहे"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "audio/mpeg");
        assert_eq!(response.headers()["x-tts-language"], "mr");
        assert_eq!(response.headers()["x-tts-fallback"], "false");
        assert_eq!(body_string(response).await, "ID3mr");
        assert_eq!(tts.calls(), vec!["mr"]);
    }

    #[tokio::test]
    async fn test_api_tts_fallback() {
        let (app, tts) = setup_test_app(ExtractionResult::extracted(""));
        tts.fail_for("xx");

        let response = app
            .oneshot(json_request(
                "/api/tts",
                serde_json::json!({"text": "hello", "lang": "xx"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-tts-language"], "en");
        assert_eq!(response.headers()["x-tts-fallback"], "true");
        assert_eq!(tts.calls(), vec!["xx", "en"]);
    }

    #[tokio::test]
    async fn test_api_tts_empty_text() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(json_request("/api/tts", serde_json::json!({"text": "  "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_status() {
        let (app, _) = setup_test_app(ExtractionResult::extracted(""));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["ocr"]["backend"], "fixed");
        assert_eq!(json["ocr"]["available"], true);
        assert_eq!(json["tts"]["regional_lang"], "mr");
        assert_eq!(json["stt"]["backend"], "mock");
    }
}
