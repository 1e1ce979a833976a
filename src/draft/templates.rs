//! Built-in reply templates.

use std::fmt;

use crate::models::{Draft, RiskLevel};

pub(crate) const EVICTION_KEYWORDS: &[&str] = &["evict", "notice", "नोटीस"];
pub(crate) const DEPOSIT_KEYWORDS: &[&str] = &["deposit", "refund", "डिपॉझिट"];

pub(crate) const EVICTION_SUMMARY: &str = "Eviction-related document detected.";
pub(crate) const DEPOSIT_SUMMARY: &str = "Deposit refund issue detected.";
pub(crate) const GENERAL_SUMMARY: &str = "General legal document detected.";

pub(crate) const EVICTION_BODY: &str = "To,
The Landlord,
Subject: Reply to eviction notice

Dear Sir/Madam,
I received your eviction notice dated [DATE]. Kindly clarify the grounds and provide supporting documents.
Regards,
[Your name]";

pub(crate) const DEPOSIT_BODY: &str = "To,
The Landlord,
Subject: Request for refund of security deposit

Dear Sir/Madam,
The security deposit is refundable as per the agreement. I request prompt processing.
Regards,
[Your name]";

pub(crate) const GENERAL_BODY: &str = "To,
Concerned,
Subject: Request for clarification

Dear Sir/Madam,
Please share the necessary details and timelines so I can proceed.
Regards,
[Your name]";

/// The three reply templates offered by the quick-template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    EvictionReply,
    DepositRefundRequest,
    General,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::EvictionReply,
        TemplateKind::DepositRefundRequest,
        TemplateKind::General,
    ];

    /// Label shown in the template selector.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::EvictionReply => "Eviction Reply",
            TemplateKind::DepositRefundRequest => "Deposit Refund Request",
            TemplateKind::General => "General",
        }
    }

    /// URL/CLI slug.
    pub fn slug(&self) -> &'static str {
        match self {
            TemplateKind::EvictionReply => "eviction-reply",
            TemplateKind::DepositRefundRequest => "deposit-refund-request",
            TemplateKind::General => "general",
        }
    }

    /// Parse a selector label. The "Select..." placeholder yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label.trim())
    }

    /// Parse a slug or a loose name ("eviction", "deposit", "general").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "eviction-reply" | "eviction" | "eviction reply" => Some(TemplateKind::EvictionReply),
            "deposit-refund-request" | "deposit" | "refund" | "deposit refund request" => {
                Some(TemplateKind::DepositRefundRequest)
            }
            "general" => Some(TemplateKind::General),
            _ => None,
        }
    }

    pub(crate) fn default_draft(&self) -> Draft {
        match self {
            TemplateKind::EvictionReply => {
                Draft::new(EVICTION_SUMMARY, RiskLevel::Medium, EVICTION_BODY)
            }
            TemplateKind::DepositRefundRequest => {
                Draft::new(DEPOSIT_SUMMARY, RiskLevel::Low, DEPOSIT_BODY)
            }
            TemplateKind::General => Draft::new(GENERAL_SUMMARY, RiskLevel::Low, GENERAL_BODY),
        }
    }

    pub(crate) fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            TemplateKind::EvictionReply => EVICTION_KEYWORDS,
            TemplateKind::DepositRefundRequest => DEPOSIT_KEYWORDS,
            TemplateKind::General => &[],
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(
            TemplateKind::from_label("Eviction Reply"),
            Some(TemplateKind::EvictionReply)
        );
        assert_eq!(
            TemplateKind::from_label("Deposit Refund Request"),
            Some(TemplateKind::DepositRefundRequest)
        );
        assert_eq!(TemplateKind::from_label("General"), Some(TemplateKind::General));
        assert_eq!(TemplateKind::from_label("Select..."), None);
        assert_eq!(TemplateKind::from_label(""), None);
    }

    #[test]
    fn test_slug_roundtrip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_str(kind.slug()), Some(kind));
        }
        assert_eq!(TemplateKind::from_str("Deposit"), Some(TemplateKind::DepositRefundRequest));
        assert_eq!(TemplateKind::from_str("lease"), None);
    }
}
