//! TTS backend abstraction.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors from TTS backends.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("No text to speak")]
    EmptyText,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TTS provider returned HTTP {status} for chunk {chunk}")]
    Api { status: u16, chunk: usize },
}

/// Trait for speech synthesis services. Output is MP3.
#[async_trait]
pub trait TtsBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether `lang` is a code this backend accepts.
    fn supports_language(&self, lang: &str) -> bool;

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, TtsError>;
}
