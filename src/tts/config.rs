//! TTS configuration.

use serde::{Deserialize, Serialize};

/// Configuration for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    /// translate_tts endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Language used when the text has no Devanagari, and for the fallback attempt.
    #[serde(default = "default_lang")]
    pub default_lang: String,
    /// Language used for Devanagari text and for the audio/template panels.
    #[serde(default = "regional_lang")]
    pub regional_lang: String,
}

fn default_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn regional_lang() -> String {
    "mr".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl TtsConfig {
    pub(crate) fn base_default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_lang: default_lang(),
            regional_lang: regional_lang(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `TTS_ENDPOINT`: synthesis endpoint
    /// - `TTS_DEFAULT_LANG`: default/fallback language (e.g. "en")
    /// - `TTS_REGIONAL_LANG`: language for Devanagari text (e.g. "mr", "hi")
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("TTS_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("TTS_DEFAULT_LANG") {
            self.default_lang = val;
        }
        if let Ok(val) = std::env::var("TTS_REGIONAL_LANG") {
            self.regional_lang = val;
        }
        self
    }
}
