//! Ordered keyword rules mapping text to a draft.

use tracing::debug;

use super::config::{DraftOverride, DraftsConfig};
use super::templates::TemplateKind;
use crate::models::Draft;

/// One row of the decision table: if any keyword occurs in the text, use `draft`.
#[derive(Debug, Clone)]
pub struct DraftRule {
    pub kind: TemplateKind,
    /// Lowercased keywords.
    keywords: Vec<String>,
    pub draft: Draft,
}

impl DraftRule {
    pub fn new(kind: TemplateKind, keywords: &[impl AsRef<str>], draft: Draft) -> Self {
        Self {
            kind,
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            draft,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `lowered` must already be lowercased.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Keyword classifier producing one of a closed set of drafts.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<DraftRule>,
    fallback: Draft,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&DraftsConfig::default())
    }
}

fn apply_override(mut draft: Draft, over: &DraftOverride) -> Draft {
    if let Some(ref summary) = over.summary {
        draft.summary = summary.clone();
    }
    if let Some(risk) = over.risk {
        draft.risk_level = risk;
    }
    if let Some(ref body) = over.body {
        draft.body = body.clone();
    }
    draft
}

fn build_rule(kind: TemplateKind, over: &DraftOverride) -> DraftRule {
    let draft = apply_override(kind.default_draft(), over);
    match over.keywords {
        Some(ref keywords) => DraftRule::new(kind, keywords.as_slice(), draft),
        None => DraftRule::new(kind, kind.default_keywords(), draft),
    }
}

impl Classifier {
    /// Build the table: eviction rule, then deposit rule, then the general fallback.
    pub fn from_config(config: &DraftsConfig) -> Self {
        let rules = vec![
            build_rule(TemplateKind::EvictionReply, &config.eviction),
            build_rule(TemplateKind::DepositRefundRequest, &config.deposit),
        ];
        let fallback = apply_override(TemplateKind::General.default_draft(), &config.general);
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[DraftRule] {
        &self.rules
    }

    /// Pick the draft for `text`. Empty text falls through to the general draft.
    pub fn classify(&self, text: &str) -> Draft {
        let lowered = text.to_lowercase();
        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => {
                debug!("Matched {} rule", rule.kind.slug());
                rule.draft.clone()
            }
            None => self.fallback.clone(),
        }
    }

    /// Draft for an explicitly chosen template.
    ///
    /// Looks the rule up by kind, so overridden keywords do not affect it.
    pub fn template(&self, kind: TemplateKind) -> Draft {
        self.rules
            .iter()
            .find(|rule| rule.kind == kind)
            .map(|rule| rule.draft.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}
