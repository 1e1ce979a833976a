//! Draft template configuration.
//!
//! Every field is optional; anything left out keeps the built-in text.
//!
//! ```toml
//! [drafts.eviction]
//! keywords = ["evict", "notice", "नोटीस", "vacate"]
//!
//! [drafts.general]
//! body = "To,\nConcerned,\n..."
//! ```

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// Overrides for a single draft rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftOverride {
    /// Replacement keyword set (ignored for the general fallback).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl DraftOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configuration for the draft classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftsConfig {
    #[serde(default, skip_serializing_if = "DraftOverride::is_empty")]
    pub eviction: DraftOverride,
    #[serde(default, skip_serializing_if = "DraftOverride::is_empty")]
    pub deposit: DraftOverride,
    #[serde(default, skip_serializing_if = "DraftOverride::is_empty")]
    pub general: DraftOverride,
}

impl DraftsConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
