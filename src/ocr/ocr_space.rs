//! OCR.Space backend implementation.
//!
//! Sends the image as a multipart form to the OCR.Space parse endpoint.
//! The API key comes from config or `OCR_SPACE_API_KEY`; get one at
//! https://ocr.space/ocrapi.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::backend::{OcrBackend, OcrError};
use super::config::OcrSpaceConfig;
use crate::models::{Document, ExtractionResult};

/// Message used when the provider flags an error but sends no text for it.
const DEFAULT_ERROR_MESSAGE: &str = "OCR error";

/// OCR.Space backend.
pub struct OcrSpaceBackend {
    config: OcrSpaceConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrSpaceResponse {
    #[serde(default)]
    is_errored_on_processing: bool,
    #[serde(default)]
    error_message: Option<ErrorMessage>,
    #[serde(default)]
    parsed_results: Option<Vec<ParsedResult>>,
}

/// The provider sends either a single string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    fn into_message(self) -> String {
        match self {
            ErrorMessage::One(s) => s,
            ErrorMessage::Many(v) => v.join("; "),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: Option<String>,
}

impl OcrSpaceBackend {
    pub fn new(config: OcrSpaceConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn build_form(&self, api_key: &str, document: &Document) -> Result<Form, OcrError> {
        let file = Part::bytes(document.bytes.clone())
            .file_name(document.upload_filename())
            .mime_str(&document.mime_type)?;

        Ok(Form::new()
            .text("apikey", api_key.to_string())
            .text("language", self.config.language.clone())
            .text("OCREngine", self.config.engine.to_string())
            .text("scale", self.config.scale.to_string())
            .text("isTable", self.config.is_table.to_string())
            .part("file", file))
    }
}

/// Interpret a parse-endpoint response body.
///
/// Errored responses become `ExtractionResult::Failed` with the provider
/// message verbatim; successful ones yield the first parsed text, trimmed.
pub(crate) fn parse_response(body: &str) -> Result<ExtractionResult, OcrError> {
    let response: OcrSpaceResponse = serde_json::from_str(body)
        .map_err(|e| OcrError::MalformedResponse(format!("{}: {}", e, truncate(body, 200))))?;

    if response.is_errored_on_processing {
        let message = response
            .error_message
            .map(ErrorMessage::into_message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        return Ok(ExtractionResult::failed(message));
    }

    let text = response
        .parsed_results
        .and_then(|results| results.into_iter().next())
        .and_then(|r| r.parsed_text)
        .ok_or_else(|| OcrError::MalformedResponse("no ParsedResults in response".to_string()))?;

    Ok(ExtractionResult::extracted(&text))
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[async_trait]
impl OcrBackend for OcrSpaceBackend {
    fn name(&self) -> &'static str {
        "ocr.space"
    }

    fn is_available(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn availability_hint(&self) -> String {
        if self.config.api_key.is_none() {
            "OCR_SPACE_API_KEY not set. Get a free key from https://ocr.space/ocrapi".to_string()
        } else {
            format!(
                "OCR.Space is available (language: {}, engine: {})",
                self.config.language, self.config.engine
            )
        }
    }

    async fn extract(&self, document: &Document) -> Result<ExtractionResult, OcrError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            OcrError::BackendNotAvailable("OCR_SPACE_API_KEY not set".to_string())
        })?;

        let form = self.build_form(api_key, document)?;
        let start = Instant::now();

        debug!(
            "Sending {} bytes ({}) to {}",
            document.size(),
            document.mime_type,
            self.config.endpoint
        );
        let response = self
            .client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            "OCR provider answered HTTP {} in {}ms",
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(OcrError::Api {
                status: status.as_u16(),
                body: truncate(&body, 500).to_string(),
            });
        }

        parse_response(&body)
    }
}
