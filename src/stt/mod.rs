//! Speech-to-text.
//!
//! Only a mock transcriber exists: it returns a configured sentence and never
//! decodes the audio. Real recognition would plug in behind [`Transcriber`].

mod mock;

pub use mock::{MockTranscriber, SttConfig, DEFAULT_TRANSCRIPT};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::AudioClip;

/// Errors from speech-to-text backends.
#[derive(Debug, Error)]
pub enum SttError {
    #[error("Audio clip is empty")]
    EmptyAudio,
}

/// Trait for speech-to-text services.
#[async_trait]
pub trait Transcriber: Send + Sync {
    fn name(&self) -> &'static str;

    async fn transcribe(&self, audio: &AudioClip) -> Result<String, SttError>;
}
