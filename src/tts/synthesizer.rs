//! Speech synthesis with a single default-language fallback.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use super::backend::{TtsBackend, TtsError};
use super::language::LanguagePolicy;

/// Synthesized audio plus the language it was actually spoken in.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    /// MP3 bytes.
    pub audio: Bytes,
    pub language: String,
    /// True when the requested language failed and the default was used.
    pub fell_back: bool,
}

/// Wraps a backend with language selection and the fallback policy.
#[derive(Clone)]
pub struct Synthesizer {
    backend: Arc<dyn TtsBackend>,
    policy: LanguagePolicy,
}

impl Synthesizer {
    pub fn new(backend: Arc<dyn TtsBackend>, policy: LanguagePolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &LanguagePolicy {
        &self.policy
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Speak `text` in `lang`; on failure retry once in the default language.
    ///
    /// When `lang` already is the default language there is no second attempt.
    pub async fn speak(&self, text: &str, lang: &str) -> Result<SpeechOutput, TtsError> {
        let default_lang = self.policy.default_lang.as_str();

        match self.backend.synthesize(text, lang).await {
            Ok(audio) => {
                debug!("Synthesized {} bytes in '{}'", audio.len(), lang);
                Ok(SpeechOutput {
                    audio,
                    language: lang.to_string(),
                    fell_back: false,
                })
            }
            Err(TtsError::EmptyText) => Err(TtsError::EmptyText),
            Err(e) if !lang.eq_ignore_ascii_case(default_lang) => {
                warn!(
                    "TTS failed for '{}' ({}), retrying in '{}'",
                    lang, e, default_lang
                );
                let audio = self.backend.synthesize(text, default_lang).await?;
                Ok(SpeechOutput {
                    audio,
                    language: default_lang.to_string(),
                    fell_back: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Speak `text` in the language chosen from `source` (the text it was derived from).
    pub async fn speak_for_source(
        &self,
        text: &str,
        source: &str,
    ) -> Result<SpeechOutput, TtsError> {
        let lang = self.policy.select(source).to_string();
        self.speak(text, &lang).await
    }

    /// Speak `text` in the regional language.
    pub async fn speak_regional(&self, text: &str) -> Result<SpeechOutput, TtsError> {
        let lang = self.policy.regional_lang.clone();
        self.speak(text, &lang).await
    }
}
