//! Request workflows: OCR then classify, transcribe then classify, templates, speech.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::config::{Config, Settings};
use crate::draft::{Classifier, TemplateKind};
use crate::models::{AudioClip, Document, Draft, ExtractionResult};
use crate::ocr::{OcrBackend, OcrError, OcrSpaceBackend};
use crate::stt::{MockTranscriber, SttError, Transcriber};
use crate::tts::{GoogleTranslateTts, LanguagePolicy, SpeechOutput, Synthesizer, TtsError};
use crate::utils::build_http_client;

/// Outcome of the document path.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub extraction: ExtractionResult,
    /// `None` when extraction failed; the classifier never sees provider errors.
    pub draft: Option<Draft>,
}

/// Outcome of the audio path.
#[derive(Debug, Clone)]
pub struct AudioAnalysis {
    pub transcript: String,
    pub draft: Draft,
}

/// Wires OCR, classification, transcription and synthesis together.
///
/// Holds no per-request state; every method is independent.
#[derive(Clone)]
pub struct Assistant {
    ocr: Arc<dyn OcrBackend>,
    classifier: Classifier,
    synthesizer: Synthesizer,
    transcriber: Arc<dyn Transcriber>,
}

impl Assistant {
    pub fn new(
        ocr: Arc<dyn OcrBackend>,
        classifier: Classifier,
        synthesizer: Synthesizer,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            ocr,
            classifier,
            synthesizer,
            transcriber,
        }
    }

    /// Build the production wiring: OCR.Space, Google Translate TTS, mock STT.
    pub fn from_config(config: &Config, settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = build_http_client(settings.request_timeout, &settings.user_agent)?;

        let ocr = OcrSpaceBackend::new(config.ocr.clone(), client.clone());
        let tts = GoogleTranslateTts::new(config.tts.endpoint.clone(), client);
        let policy = LanguagePolicy::new(
            config.tts.default_lang.clone(),
            config.tts.regional_lang.clone(),
        );

        Ok(Self::new(
            Arc::new(ocr),
            Classifier::from_config(&config.drafts),
            Synthesizer::new(Arc::new(tts), policy),
            Arc::new(MockTranscriber::from_config(&config.stt)),
        ))
    }

    pub fn ocr_backend(&self) -> &dyn OcrBackend {
        self.ocr.as_ref()
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    pub fn transcriber_name(&self) -> &'static str {
        self.transcriber.name()
    }

    /// OCR the document, then classify the text unless the provider reported an error.
    pub async fn analyze_document(&self, document: &Document) -> Result<DocumentAnalysis, OcrError> {
        let span = info_span!("analyze", request_id = %Uuid::new_v4());
        async {
            let extraction = self.ocr.extract(document).await?;
            let draft = match extraction {
                ExtractionResult::Extracted { ref text } => Some(self.classifier.classify(text)),
                ExtractionResult::Failed { ref message } => {
                    debug!("Skipping classification after OCR error: {}", message);
                    None
                }
            };
            Ok(DocumentAnalysis { extraction, draft })
        }
        .instrument(span)
        .await
    }

    /// Transcribe the clip (mocked) and classify the transcript.
    pub async fn transcribe_audio(&self, audio: &AudioClip) -> Result<AudioAnalysis, SttError> {
        let span = info_span!("transcribe", request_id = %Uuid::new_v4());
        async {
            let transcript = self.transcriber.transcribe(audio).await?;
            let draft = self.classifier.classify(&transcript);
            Ok(AudioAnalysis { transcript, draft })
        }
        .instrument(span)
        .await
    }

    pub fn classify(&self, text: &str) -> Draft {
        self.classifier.classify(text)
    }

    pub fn generate_template(&self, kind: TemplateKind) -> Draft {
        self.classifier.template(kind)
    }

    /// Speak `text` in `lang`, or in the language detected from `text` when `None`.
    pub async fn speak(&self, text: &str, lang: Option<&str>) -> Result<SpeechOutput, TtsError> {
        let span = info_span!("speak", request_id = %Uuid::new_v4());
        match lang {
            Some(lang) => self.synthesizer.speak(text, lang).instrument(span).await,
            None => {
                self.synthesizer
                    .speak_for_source(text, text)
                    .instrument(span)
                    .await
            }
        }
    }

    /// Speak a draft body in the language of the text it was derived from.
    pub async fn speak_draft(
        &self,
        draft_body: &str,
        source_text: &str,
    ) -> Result<SpeechOutput, TtsError> {
        let span = info_span!("speak", request_id = %Uuid::new_v4());
        self.synthesizer
            .speak_for_source(draft_body, source_text)
            .instrument(span)
            .await
    }

    /// Speak in the regional language regardless of script.
    pub async fn speak_regional(&self, text: &str) -> Result<SpeechOutput, TtsError> {
        let span = info_span!("speak", request_id = %Uuid::new_v4());
        self.synthesizer.speak_regional(text).instrument(span).await
    }
}
