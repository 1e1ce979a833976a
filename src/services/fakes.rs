//! In-memory backends for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use super::Assistant;
use crate::draft::Classifier;
use crate::models::{Document, ExtractionResult};
use crate::ocr::{OcrBackend, OcrError};
use crate::stt::MockTranscriber;
use crate::tts::{LanguagePolicy, Synthesizer, TtsBackend, TtsError};

/// OCR backend that always returns the same result.
pub struct FixedOcr(pub ExtractionResult);

#[async_trait]
impl OcrBackend for FixedOcr {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn availability_hint(&self) -> String {
        String::new()
    }

    async fn extract(&self, _document: &Document) -> Result<ExtractionResult, OcrError> {
        Ok(self.0.clone())
    }
}

/// TTS backend that records requested languages and returns `ID3<lang>`.
#[derive(Default)]
pub struct RecordingTts {
    calls: Mutex<Vec<String>>,
    failing: Mutex<Vec<String>>,
}

impl RecordingTts {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_for(&self, lang: &str) {
        self.failing.lock().unwrap().push(lang.to_string());
    }
}

#[async_trait]
impl TtsBackend for RecordingTts {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn supports_language(&self, lang: &str) -> bool {
        !self.failing.lock().unwrap().iter().any(|l| l == lang)
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, TtsError> {
        self.calls.lock().unwrap().push(lang.to_string());
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }
        if !self.supports_language(lang) {
            return Err(TtsError::UnsupportedLanguage(lang.to_string()));
        }
        Ok(Bytes::from(format!("ID3{}", lang)))
    }
}

/// Assistant over fake OCR/TTS and the default mock transcriber.
pub fn assistant_with(extraction: ExtractionResult) -> (Assistant, Arc<RecordingTts>) {
    let tts = Arc::new(RecordingTts::default());
    let assistant = Assistant::new(
        Arc::new(FixedOcr(extraction)),
        Classifier::default(),
        Synthesizer::new(tts.clone(), LanguagePolicy::default()),
        Arc::new(MockTranscriber::default()),
    );
    (assistant, tts)
}

pub fn jpeg_document() -> Document {
    Document {
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        mime_type: "image/jpeg".to_string(),
        filename: None,
    }
}
