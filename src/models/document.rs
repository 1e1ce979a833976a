//! Uploaded payloads: document images and audio clips.

use crate::utils::{sniff_audio, sniff_image, UploadError};

/// Raw image bytes supplied by the user for a single OCR request.
#[derive(Debug, Clone)]
pub struct Document {
    /// Image content as uploaded.
    pub bytes: Vec<u8>,
    /// MIME type detected from the content (image/png or image/jpeg).
    pub mime_type: String,
    /// Original filename from the upload form, if any.
    pub filename: Option<String>,
}

impl Document {
    /// Build a document from uploaded bytes, rejecting anything that is not a PNG or JPEG.
    pub fn from_upload(bytes: Vec<u8>, filename: Option<String>) -> Result<Self, UploadError> {
        let mime_type = sniff_image(&bytes)?;
        Ok(Self {
            bytes,
            mime_type: mime_type.to_string(),
            filename,
        })
    }

    /// Filename to send to the OCR provider.
    ///
    /// The provider infers the file type from the extension, so a missing or
    /// extension-less name is replaced with one matching the sniffed type.
    pub fn upload_filename(&self) -> String {
        let ext = match self.mime_type.as_str() {
            "image/png" => "png",
            _ => "jpg",
        };
        match self.filename.as_deref() {
            Some(name) if name.contains('.') => name.to_string(),
            Some(name) if !name.is_empty() => format!("{}.{}", name, ext),
            _ => format!("document.{}", ext),
        }
    }

    /// Size of the image in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Uploaded audio. Only played back; the transcriber never looks at the samples.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: Option<String>,
}

impl AudioClip {
    /// Build a clip from uploaded bytes (MP3, WAV, WebM or M4A).
    pub fn from_upload(bytes: Vec<u8>, filename: Option<String>) -> Result<Self, UploadError> {
        let mime_type = sniff_audio(&bytes)?;
        Ok(Self {
            bytes,
            mime_type: mime_type.to_string(),
            filename,
        })
    }
}
