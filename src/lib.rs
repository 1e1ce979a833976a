//! NyayAI - legal-assistant intake service.
//!
//! A user uploads a photo of a legal document; the text is extracted by an
//! OCR provider, a keyword classifier picks a canned reply letter, and the
//! letter can be read aloud through a text-to-speech provider. A mock
//! speech-to-text path turns an uploaded voice note into a draft the same way.

pub mod cli;
pub mod config;
pub mod draft;
pub mod models;
pub mod ocr;
pub mod server;
pub mod services;
pub mod stt;
pub mod tts;
pub mod utils;
