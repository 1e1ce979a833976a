//! Draft replies and their risk labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static risk label attached to a draft by the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A canned reply letter selected by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// One-line description of what kind of document was detected.
    pub summary: String,
    #[serde(rename = "risk")]
    pub risk_level: RiskLevel,
    /// Letter body.
    #[serde(rename = "draft")]
    pub body: String,
}

impl Draft {
    pub fn new(summary: impl Into<String>, risk_level: RiskLevel, body: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            risk_level,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_json_shape() {
        let draft = Draft::new("General legal document detected.", RiskLevel::Low, "To,");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["risk"], "Low");
        assert_eq!(json["draft"], "To,");
        assert_eq!(json["summary"], "General legal document detected.");
    }
}
