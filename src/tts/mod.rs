//! Text-to-speech.
//!
//! Synthesis is delegated to a remote service behind [`TtsBackend`]. The
//! [`Synthesizer`] adds the only recovery policy in the system: a failed
//! attempt in the requested language is retried once in the default language.
//! Language choice is driven by [`LanguagePolicy`], which picks the regional
//! language whenever the source text contains Devanagari.

mod backend;
mod config;
mod google;
mod language;
mod synthesizer;

pub use backend::{TtsBackend, TtsError};
pub use config::TtsConfig;
pub use google::{split_chunks, GoogleTranslateTts, MAX_CHUNK_CHARS, SUPPORTED_LANGUAGES};
pub use language::{contains_devanagari, is_devanagari, select_language, LanguagePolicy};
pub use synthesizer::{SpeechOutput, Synthesizer};
