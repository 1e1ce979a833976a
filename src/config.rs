//! Configuration management for NyayAI using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::draft::DraftsConfig;
use crate::ocr::OcrSpaceConfig;
use crate::stt::SttConfig;
use crate::tts::TtsConfig;

/// Default request timeout for provider calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Default cap on uploaded file size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Placeholder shown instead of secrets.
const REDACTED: &str = "********";

/// Application settings resolved from config file and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// User agent for provider requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: format!("NyayAI/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Upload size limit in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_upload_bytes: Option<usize>,
    /// OCR.Space settings.
    #[serde(default, skip_serializing_if = "OcrSpaceConfig::is_default")]
    pub ocr: OcrSpaceConfig,
    /// Speech synthesis settings.
    #[serde(default, skip_serializing_if = "TtsConfig::is_default")]
    pub tts: TtsConfig,
    /// Speech-to-text settings.
    #[serde(default, skip_serializing_if = "SttConfig::is_default")]
    pub stt: SttConfig,
    /// Draft template overrides.
    #[serde(default, skip_serializing_if = "DraftsConfig::is_default")]
    pub drafts: DraftsConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Automatically discovers nyayai config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("nyayai").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config {}: {}", path.display(), e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            // No config file found, use defaults with env overrides
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config text in the format named by `ext`, then apply env overrides.
    pub fn parse(contents: &str, ext: &str) -> Result<Self, String> {
        let config: Config = match ext {
            "toml" => toml::from_str(contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };
        Ok(config.with_env_overrides())
    }

    /// Environment variables win over file values.
    fn with_env_overrides(mut self) -> Self {
        self.ocr = self.ocr.with_env_overrides();
        self.tts = self.tts.with_env_overrides();
        self.stt = self.stt.with_env_overrides();
        self
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(limit) = self.max_upload_bytes {
            settings.max_upload_bytes = limit;
        }
    }

    /// Copy of this config with credentials masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.ocr.api_key.is_some() {
            config.ocr.api_key = Some(REDACTED.to_string());
        }
        config
    }

    /// Pretty TOML of the effective configuration with secrets masked.
    ///
    /// Unlike the serde defaults this always includes every section.
    pub fn to_display_toml(&self) -> Result<String, String> {
        let config = self.redacted();
        let mut doc = toml::Table::new();
        let mut insert = |key: &str, value: Result<toml::Value, toml::ser::Error>| {
            value
                .map(|v| {
                    doc.insert(key.to_string(), v);
                })
                .map_err(|e| format!("Failed to serialize {}: {}", key, e))
        };
        if let Some(ref ua) = config.user_agent {
            insert("user_agent", toml::Value::try_from(ua))?;
        }
        if let Some(timeout) = config.request_timeout {
            insert("request_timeout", toml::Value::try_from(timeout))?;
        }
        if let Some(limit) = config.max_upload_bytes {
            insert("max_upload_bytes", toml::Value::try_from(limit as u64))?;
        }
        insert("ocr", toml::Value::try_from(&config.ocr))?;
        insert("tts", toml::Value::try_from(&config.tts))?;
        insert("stt", toml::Value::try_from(&config.stt))?;
        insert("drafts", toml::Value::try_from(&config.drafts))?;
        toml::to_string_pretty(&doc).map_err(|e| format!("Failed to render config: {}", e))
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

async fn load_file_config(options: &LoadOptions) -> Config {
    // Priority 1: Explicit --config flag
    if let Some(ref config_path) = options.config_path {
        return match Config::load_from_path(config_path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                Config::default()
            }
        };
    }

    // Priority 2: Auto-discover via prefer
    Config::load().await
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(options: LoadOptions) -> (Settings, Config) {
    let config = load_file_config(&options).await;

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);

    // HTTP_TIMEOUT_SECS environment variable takes precedence over config
    if let Some(timeout) = std::env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
    {
        tracing::debug!("Using HTTP_TIMEOUT_SECS from environment: {}", timeout);
        settings.request_timeout = timeout;
    }

    if let Some(ua) = std::env::var("NYAYAI_USER_AGENT")
        .ok()
        .filter(|s| !s.is_empty())
    {
        tracing::debug!("Using NYAYAI_USER_AGENT from environment: {}", ua);
        settings.user_agent = ua;
    }

    (settings, config)
}
