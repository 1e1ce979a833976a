//! OCR.Space provider configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the OCR.Space backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrSpaceConfig {
    /// Parse endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key. Never baked into the binary; set it in config or `OCR_SPACE_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Comma-separated language hint sent with every request.
    #[serde(default = "default_language")]
    pub language: String,
    /// OCR engine number (engine 2 handles Devanagari better).
    #[serde(default = "default_engine")]
    pub engine: u8,
    /// Ask the provider to upscale small images.
    #[serde(default = "default_true")]
    pub scale: bool,
    /// Table-aware line ordering.
    #[serde(default)]
    pub is_table: bool,
}

fn default_endpoint() -> String {
    "https://api.ocr.space/parse/image".to_string()
}

fn default_language() -> String {
    "eng,mar".to_string()
}

fn default_engine() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

impl Default for OcrSpaceConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl OcrSpaceConfig {
    pub(crate) fn base_default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            language: default_language(),
            engine: default_engine(),
            scale: true,
            is_table: false,
        }
    }

    /// Check if the config equals the default (for skip_serializing_if).
    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `OCR_SPACE_API_KEY`: provider API key
    /// - `OCR_SPACE_ENDPOINT`: parse endpoint
    /// - `OCR_LANGUAGE`: language hint (e.g. "eng,mar")
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("OCR_SPACE_API_KEY") {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(endpoint) = std::env::var("OCR_SPACE_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(language) = std::env::var("OCR_LANGUAGE") {
            self.language = language;
        }
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}
