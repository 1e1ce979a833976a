//! API endpoint handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::super::AppState;
use super::helpers::{
    json_error, ocr_status, read_upload, tts_status, upload_status, SpeakRequest, AUDIO_FIELD,
    DOCUMENT_FIELD,
};
use crate::draft::TemplateKind;
use crate::models::{AudioClip, Document, Draft};

/// Classification request body.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// `/api/ocr` response: the extraction view plus the draft when extraction succeeded.
#[derive(Debug, Serialize)]
struct OcrResponse<'a> {
    error: Option<&'a str>,
    text: &'a str,
    analysis: Option<&'a Draft>,
}

#[derive(Debug, Serialize)]
struct TemplateInfo {
    slug: &'static str,
    label: &'static str,
}

/// OCR an uploaded image and classify the text.
pub async fn api_ocr(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let document = match read_upload(&mut multipart, DOCUMENT_FIELD, state.max_upload_bytes)
        .await
        .and_then(|upload| Document::from_upload(upload.bytes, upload.filename))
    {
        Ok(document) => document,
        Err(e) => return json_error(upload_status(&e), e),
    };

    match state.assistant.analyze_document(&document).await {
        Ok(analysis) => {
            let view = analysis.extraction.view();
            Json(OcrResponse {
                error: view.error,
                text: view.text,
                analysis: analysis.draft.as_ref(),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("OCR request failed: {}", e);
            json_error(ocr_status(&e), e)
        }
    }
}

/// Classify arbitrary text.
pub async fn api_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> impl IntoResponse {
    Json(state.assistant.classify(&request.text))
}

/// Mock-transcribe an uploaded clip and classify the transcript.
pub async fn api_transcribe(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let clip = match read_upload(&mut multipart, AUDIO_FIELD, state.max_upload_bytes)
        .await
        .and_then(|upload| AudioClip::from_upload(upload.bytes, upload.filename))
    {
        Ok(clip) => clip,
        Err(e) => return json_error(upload_status(&e), e),
    };

    match state.assistant.transcribe_audio(&clip).await {
        Ok(analysis) => Json(serde_json::json!({
            "transcript": analysis.transcript,
            "analysis": analysis.draft,
        }))
        .into_response(),
        Err(e) => json_error(StatusCode::BAD_REQUEST, e),
    }
}

/// List template kinds.
pub async fn api_templates() -> impl IntoResponse {
    let kinds: Vec<_> = TemplateKind::ALL
        .into_iter()
        .map(|kind| TemplateInfo {
            slug: kind.slug(),
            label: kind.label(),
        })
        .collect();
    Json(kinds)
}

/// Get one template by slug or label.
pub async fn api_template(State(state): State<AppState>, Path(kind): Path<String>) -> Response {
    match TemplateKind::from_str(&kind).or_else(|| TemplateKind::from_label(&kind)) {
        Some(kind) => Json(state.assistant.generate_template(kind)).into_response(),
        None => json_error(
            StatusCode::NOT_FOUND,
            format!("Unknown template: {}", kind),
        ),
    }
}

/// Synthesize speech. Returns MP3 with the spoken language in `x-tts-language`.
pub async fn api_tts(State(state): State<AppState>, Json(request): Json<SpeakRequest>) -> Response {
    let result = if let Some(lang) = request.lang() {
        state.assistant.speak(&request.text, Some(lang)).await
    } else if request.is_regional() {
        state.assistant.speak_regional(&request.text).await
    } else {
        state
            .assistant
            .speak_draft(&request.text, request.source())
            .await
    };

    match result {
        Ok(output) => {
            let language = HeaderValue::from_str(&output.language)
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            let fell_back = HeaderValue::from_static(if output.fell_back { "true" } else { "false" });
            (
                [
                    (header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg")),
                    (header::HeaderName::from_static("x-tts-language"), language),
                    (header::HeaderName::from_static("x-tts-fallback"), fell_back),
                ],
                output.audio,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Speech synthesis failed: {}", e);
            json_error(tts_status(&e), e)
        }
    }
}

/// Backend availability and uptime.
pub async fn api_status(State(state): State<AppState>) -> impl IntoResponse {
    let assistant = &state.assistant;
    let ocr = assistant.ocr_backend();
    let synthesizer = assistant.synthesizer();
    let policy = synthesizer.policy();
    let hint = (!ocr.is_available()).then(|| ocr.availability_hint());

    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": (Utc::now() - state.started_at).num_seconds(),
        "ocr": {
            "backend": ocr.name(),
            "available": ocr.is_available(),
            "hint": hint,
        },
        "tts": {
            "backend": synthesizer.backend_name(),
            "default_lang": policy.default_lang,
            "regional_lang": policy.regional_lang,
        },
        "stt": {
            "backend": assistant.transcriber_name(),
        },
    }))
}
