//! Helper types and utility functions for handlers.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::ocr::OcrError;
use crate::tts::TtsError;
use crate::utils::UploadError;

/// Form field carrying the document image.
pub const DOCUMENT_FIELD: &str = "file";

/// Form field carrying the audio clip.
pub const AUDIO_FIELD: &str = "audio";

/// One uploaded file.
pub struct Upload {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
}

/// Speech request shared by the form and the JSON API.
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    /// Text the language is detected from (defaults to `text`).
    #[serde(default)]
    pub source: Option<String>,
    /// Explicit language code; wins over detection.
    #[serde(default)]
    pub lang: Option<String>,
    /// "regional" speaks in the regional language; anything else detects.
    #[serde(default)]
    pub mode: Option<String>,
}

impl SpeakRequest {
    pub fn is_regional(&self) -> bool {
        self.mode.as_deref() == Some("regional")
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    pub fn source(&self) -> &str {
        self.source
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.text)
    }
}

fn multipart_error(e: MultipartError, limit: usize) -> UploadError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge { limit }
    } else {
        UploadError::Read(e.body_text())
    }
}

/// Read the first file in `field_name`, enforcing `limit` bytes.
pub async fn read_upload(
    multipart: &mut Multipart,
    field_name: &str,
    limit: usize,
) -> Result<Upload, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(field_name) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|n| !n.is_empty());
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        if bytes.len() > limit {
            return Err(UploadError::TooLarge { limit });
        }
        if bytes.is_empty() && filename.is_none() {
            // Browsers send an empty part when no file was chosen
            return Err(UploadError::Missing);
        }
        return Ok(Upload {
            bytes: bytes.to_vec(),
            filename,
        });
    }
    Err(UploadError::Missing)
}

pub fn upload_status(err: &UploadError) -> StatusCode {
    match err {
        UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    }
}

pub fn ocr_status(err: &OcrError) -> StatusCode {
    match err {
        OcrError::BackendNotAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    }
}

pub fn tts_status(err: &TtsError) -> StatusCode {
    match err {
        TtsError::EmptyText | TtsError::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// JSON `{"error": message}` with the given status.
pub fn json_error(status: StatusCode, message: impl ToString) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.to_string() })),
    )
        .into_response()
}
