//! Keyword-based draft selection.
//!
//! The classifier is a closed decision table: an ordered list of keyword
//! rules, each mapping to a fixed draft, plus a fallback draft. The first rule
//! whose keywords appear in the text (case-insensitive substring) wins, so
//! the eviction rule shadows the deposit rule when both match.

mod classifier;
mod config;
mod templates;

pub use classifier::{Classifier, DraftRule};
pub use config::{DraftOverride, DraftsConfig};
pub use templates::TemplateKind;
