//! Request-scoped data models for NyayAI.
//!
//! Nothing here is persisted: a `Document` lives for one OCR request, an
//! `ExtractionResult` for one render, and a `Draft` is rebuilt on every call.

mod document;
mod draft;
mod extraction;

pub use document::{AudioClip, Document};
pub use draft::{Draft, RiskLevel};
pub use extraction::{ExtractionResult, ExtractionView};
