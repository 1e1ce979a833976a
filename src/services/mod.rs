//! Service layer for NyayAI business logic.
//!
//! This module contains the request workflows separated from UI concerns.
//! Both the CLI and the web server drive the same [`Assistant`].

mod assistant;

pub use assistant::{Assistant, AudioAnalysis, DocumentAnalysis};

#[cfg(test)]
pub(crate) mod fakes;
