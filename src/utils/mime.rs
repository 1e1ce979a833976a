//! Upload content sniffing.
//!
//! Uploads are classified by their magic bytes rather than the filename the
//! browser reports, so a renamed file is still rejected.

use base64::Engine;
use thiserror::Error;

/// Image formats accepted for OCR: detected extension and the MIME type reported for it.
const IMAGE_TYPES: &[(&str, &str)] = &[("png", "image/png"), ("jpg", "image/jpeg")];

/// Audio formats accepted for the voice panel.
///
/// `infer` reports WebM as video, and M4A files with a generic `isom`/`mp42`
/// brand as `mp4`; both are treated as audio containers.
const AUDIO_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("wav", "audio/x-wav"),
    ("webm", "audio/webm"),
    ("m4a", "audio/m4a"),
    ("mp4", "audio/mp4"),
];

/// Errors for rejected uploads.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    Missing,

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Unsupported {expected} type: {found}")]
    UnsupportedType {
        expected: &'static str,
        found: String,
    },

    #[error("Upload exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Failed to read upload: {0}")]
    Read(String),
}

fn sniff(
    bytes: &[u8],
    allowed: &[(&str, &'static str)],
    expected: &'static str,
) -> Result<&'static str, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    let kind = infer::get(bytes);
    let accepted = kind.and_then(|kind| {
        allowed
            .iter()
            .find(|(ext, _)| *ext == kind.extension())
            .map(|(_, mime)| *mime)
    });
    match (accepted, kind) {
        (Some(mime), _) => Ok(mime),
        (None, Some(kind)) => Err(UploadError::UnsupportedType {
            expected,
            found: kind.mime_type().to_string(),
        }),
        (None, None) => Err(UploadError::UnsupportedType {
            expected,
            found: "unknown".to_string(),
        }),
    }
}

/// Detect a PNG or JPEG image, returning its MIME type.
pub fn sniff_image(bytes: &[u8]) -> Result<&'static str, UploadError> {
    sniff(bytes, IMAGE_TYPES, "image")
}

/// Detect an MP3, WAV, WebM or M4A clip, returning its MIME type.
pub fn sniff_audio(bytes: &[u8]) -> Result<&'static str, UploadError> {
    sniff(bytes, AUDIO_TYPES, "audio")
}

/// Encode bytes as a `data:` URI for inline previews and audio players.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
