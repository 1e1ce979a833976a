//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::draft::TemplateKind;
use crate::models::{Draft, RiskLevel};

/// First entry of the template selector; selects nothing.
pub const TEMPLATE_PLACEHOLDER: &str = "Select...";

/// Helper struct for template selector entries.
pub struct SelectOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Helper struct for rendering a draft.
pub struct DraftView {
    pub summary: String,
    pub risk: &'static str,
    pub risk_class: &'static str,
    pub body: String,
}

impl From<Draft> for DraftView {
    fn from(draft: Draft) -> Self {
        Self {
            summary: draft.summary,
            risk: draft.risk_level.as_str(),
            risk_class: match draft.risk_level {
                RiskLevel::Low => "low",
                RiskLevel::Medium => "medium",
            },
            body: draft.body,
        }
    }
}

/// Document panel after "Run OCR & Analyze".
pub struct DocumentPanel {
    /// Data URI of the uploaded image.
    pub preview: String,
    pub error: Option<String>,
    pub text: String,
    pub draft: Option<DraftView>,
}

/// Voice panel after "Transcribe (Mock)".
pub struct VoicePanel {
    /// Data URI of the uploaded clip.
    pub player: String,
    pub transcript: String,
    pub draft: DraftView,
}

/// Synthesized audio.
pub struct SpeechPanel {
    pub player: String,
    pub language: String,
    pub fell_back: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub ocr_ready: bool,
    pub ocr_hint: String,
    pub error: Option<String>,
    pub template_options: Vec<SelectOption>,
    pub template_body: Option<String>,
    pub document: Option<DocumentPanel>,
    pub voice: Option<VoicePanel>,
    pub speech: Option<SpeechPanel>,
}

/// Selector entries with `selected` marked (the placeholder when `None`).
pub fn template_options(selected: Option<TemplateKind>) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        label: TEMPLATE_PLACEHOLDER,
        selected: selected.is_none(),
    })
    .chain(TemplateKind::ALL.into_iter().map(|kind| SelectOption {
        label: kind.label(),
        selected: selected == Some(kind),
    }))
    .collect()
}
