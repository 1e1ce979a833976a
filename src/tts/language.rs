//! Script detection and language selection.

/// Check if a character is in the Devanagari block (U+0900 to U+097F).
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Check if any character of `text` is Devanagari.
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(is_devanagari)
}

/// Chooses the synthesis language for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePolicy {
    /// Used for non-Devanagari text and as the fallback language.
    pub default_lang: String,
    /// Used when the text contains Devanagari.
    pub regional_lang: String,
}

impl Default for LanguagePolicy {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            regional_lang: "mr".to_string(),
        }
    }
}

impl LanguagePolicy {
    pub fn new(default_lang: impl Into<String>, regional_lang: impl Into<String>) -> Self {
        Self {
            default_lang: default_lang.into(),
            regional_lang: regional_lang.into(),
        }
    }

    pub fn select(&self, text: &str) -> &str {
        if contains_devanagari(text) {
            &self.regional_lang
        } else {
            &self.default_lang
        }
    }
}

/// Pick the synthesis language for `text` under `policy`.
pub fn select_language<'a>(text: &str, policy: &'a LanguagePolicy) -> &'a str {
    policy.select(text)
}
