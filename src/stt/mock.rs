use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{SttError, Transcriber};
use crate::models::AudioClip;

/// "I want information about my rent agreement."
pub const DEFAULT_TRANSCRIPT: &str = "मला माझ्या भाडेकराराबाबत माहिती हवी आहे";

/// Configuration for the mock transcriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SttConfig {
    /// Sentence returned for every clip.
    #[serde(default = "default_transcript")]
    pub transcript: String,
}

fn default_transcript() -> String {
    DEFAULT_TRANSCRIPT.to_string()
}

impl Default for SttConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl SttConfig {
    pub(crate) fn base_default() -> Self {
        Self {
            transcript: default_transcript(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    /// Apply `NYAYAI_TRANSCRIPT` if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("NYAYAI_TRANSCRIPT") {
            if !val.trim().is_empty() {
                self.transcript = val;
            }
        }
        self
    }
}

/// Returns a fixed transcript regardless of the audio content.
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    transcript: String,
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPT)
    }
}

impl MockTranscriber {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    pub fn from_config(config: &SttConfig) -> Self {
        Self::new(config.transcript.clone())
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn transcribe(&self, audio: &AudioClip) -> Result<String, SttError> {
        if audio.bytes.is_empty() {
            return Err(SttError::EmptyAudio);
        }
        debug!(
            "Mock transcription of {} byte {} clip",
            audio.bytes.len(),
            audio.mime_type
        );
        Ok(self.transcript.clone())
    }
}
