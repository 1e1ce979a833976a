//! OCR text extraction.
//!
//! Text extraction is delegated to a remote provider behind the
//! [`OcrBackend`] trait. The only backend shipped is OCR.Space, which accepts
//! a multipart image upload and returns parsed text as JSON.
//!
//! Provider-side failures (unreadable image, unsupported file) are not Rust
//! errors: they come back as [`ExtractionResult::Failed`](crate::models::ExtractionResult)
//! carrying the provider's own message. `OcrError` is reserved for transport
//! problems and responses that do not parse.

mod backend;
mod config;
mod ocr_space;

pub use backend::{OcrBackend, OcrError};
pub use config::OcrSpaceConfig;
pub use ocr_space::OcrSpaceBackend;
