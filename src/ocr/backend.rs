//! OCR backend abstraction.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Document, ExtractionResult};

/// Errors from OCR backends.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Backend not available: {0}")]
    BackendNotAvailable(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed OCR response: {0}")]
    MalformedResponse(String),
}

/// Trait for OCR backends.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Short backend name for logs and status output.
    fn name(&self) -> &'static str;

    /// Check if this backend is usable (credentials present, endpoint set).
    fn is_available(&self) -> bool;

    /// Get a description of what's needed to make this backend available.
    fn availability_hint(&self) -> String;

    /// Send one document to the provider. Exactly one outbound request per call.
    async fn extract(&self, document: &Document) -> Result<ExtractionResult, OcrError>;
}
