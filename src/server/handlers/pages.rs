//! HTML form handlers.
//!
//! Every action re-renders the whole page with only its own panel filled;
//! nothing carries over between requests.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use super::super::template_structs::{
    template_options, DocumentPanel, DraftView, IndexTemplate, SpeechPanel, VoicePanel,
};
use super::super::AppState;
use super::helpers::{read_upload, upload_status, SpeakRequest, AUDIO_FIELD, DOCUMENT_FIELD};
use crate::draft::TemplateKind;
use crate::models::{AudioClip, Document};
use crate::utils::data_uri;

/// Template selector form.
#[derive(Debug, Deserialize)]
pub struct TemplateForm {
    #[serde(default)]
    pub kind: String,
}

fn page(state: &AppState) -> IndexTemplate<'static> {
    let ocr = state.assistant.ocr_backend();
    IndexTemplate {
        title: "NyayAI · AI Legal Assistant",
        ocr_ready: ocr.is_available(),
        ocr_hint: ocr.availability_hint(),
        error: None,
        template_options: template_options(None),
        template_body: None,
        document: None,
        voice: None,
        speech: None,
    }
}

fn render(template: IndexTemplate<'_>, status: StatusCode) -> Response {
    let html = template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));
    (status, Html(html)).into_response()
}

fn render_error(state: &AppState, status: StatusCode, message: String) -> Response {
    let mut template = page(state);
    template.error = Some(message);
    render(template, status)
}

/// The form.
pub async fn index(State(state): State<AppState>) -> Response {
    render(page(&state), StatusCode::OK)
}

/// Run OCR & Analyze.
pub async fn analyze_page(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let document = match read_upload(&mut multipart, DOCUMENT_FIELD, state.max_upload_bytes)
        .await
        .and_then(|upload| Document::from_upload(upload.bytes, upload.filename))
    {
        Ok(document) => document,
        Err(e) => return render_error(&state, upload_status(&e), e.to_string()),
    };

    let preview = data_uri(&document.mime_type, &document.bytes);
    let analysis = match state.assistant.analyze_document(&document).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!("OCR request failed: {}", e);
            let mut template = page(&state);
            template.document = Some(DocumentPanel {
                preview,
                error: Some(e.to_string()),
                text: String::new(),
                draft: None,
            });
            return render(template, StatusCode::OK);
        }
    };

    let mut template = page(&state);
    template.document = Some(DocumentPanel {
        preview,
        error: analysis.extraction.error().map(str::to_string),
        text: analysis.extraction.text().to_string(),
        draft: analysis.draft.map(DraftView::from),
    });
    render(template, StatusCode::OK)
}

/// Transcribe (Mock).
pub async fn transcribe_page(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let clip = match read_upload(&mut multipart, AUDIO_FIELD, state.max_upload_bytes)
        .await
        .and_then(|upload| AudioClip::from_upload(upload.bytes, upload.filename))
    {
        Ok(clip) => clip,
        Err(e) => return render_error(&state, upload_status(&e), e.to_string()),
    };

    match state.assistant.transcribe_audio(&clip).await {
        Ok(analysis) => {
            let mut template = page(&state);
            template.voice = Some(VoicePanel {
                player: data_uri(&clip.mime_type, &clip.bytes),
                transcript: analysis.transcript,
                draft: DraftView::from(analysis.draft),
            });
            render(template, StatusCode::OK)
        }
        Err(e) => render_error(&state, StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// Generate Template. The placeholder selection renders nothing.
pub async fn template_page(
    State(state): State<AppState>,
    Form(form): Form<TemplateForm>,
) -> Response {
    let kind = TemplateKind::from_label(&form.kind);
    let mut template = page(&state);
    template.template_options = template_options(kind);
    template.template_body = kind.map(|k| state.assistant.generate_template(k).body);
    render(template, StatusCode::OK)
}

/// Play TTS / Play Audio Draft / Play Template TTS.
pub async fn speak_page(
    State(state): State<AppState>,
    Form(request): Form<SpeakRequest>,
) -> Response {
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
            let mut template = page(&state);
            template.speech = Some(SpeechPanel {
                player: data_uri("audio/mpeg", &output.audio),
                language: output.language,
                fell_back: output.fell_back,
            });
            render(template, StatusCode::OK)
        }
        Err(e) => {
            tracing::error!("Speech synthesis failed: {}", e);
            render_error(
                &state,
                StatusCode::OK,
                format!("Speech synthesis failed: {}", e),
            )
        }
    }
}
