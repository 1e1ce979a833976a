//! Outcome of a single text-extraction request.

use serde::Serialize;

/// Either the text the provider extracted, or the provider's error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Provider succeeded; text is already trimmed.
    Extracted { text: String },
    /// Provider reported a processing error; the message is shown verbatim.
    Failed { message: String },
}

/// Wire shape used by the JSON API: `{"error": ..., "text": ...}`.
#[derive(Debug, Serialize)]
pub struct ExtractionView<'a> {
    pub error: Option<&'a str>,
    pub text: &'a str,
}

impl ExtractionResult {
    pub fn extracted(text: &str) -> Self {
        ExtractionResult::Extracted {
            text: text.trim().to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        ExtractionResult::Failed {
            message: message.into(),
        }
    }

    /// Extracted text, or an empty string on failure.
    pub fn text(&self) -> &str {
        match self {
            ExtractionResult::Extracted { text } => text,
            ExtractionResult::Failed { .. } => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Extracted { .. } => None,
            ExtractionResult::Failed { message } => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Failed { .. })
    }

    pub fn view(&self) -> ExtractionView<'_> {
        ExtractionView {
            error: self.error(),
            text: self.text(),
        }
    }
}
