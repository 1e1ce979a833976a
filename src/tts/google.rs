//! Google Translate speech backend.
//!
//! Uses the public `translate_tts` endpoint, which only accepts short
//! snippets. Text is split into chunks of at most [`MAX_CHUNK_CHARS`]
//! characters and each chunk is fetched separately. The MP3 frames are
//! concatenated in order.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::Client;
use tracing::debug;

use super::backend::{TtsBackend, TtsError};

/// Longest snippet the endpoint accepts.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Language codes the endpoint can voice.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "af", "am", "ar", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et",
    "eu", "fi", "fr", "fr-ca", "gl", "gu", "ha", "hi", "hr", "hu", "id", "is", "it", "iw", "ja",
    "jw", "km", "kn", "ko", "la", "lt", "lv", "ml", "mr", "ms", "my", "ne", "nl", "no", "pa",
    "pl", "pt", "pt-pt", "ro", "ru", "si", "sk", "sq", "sr", "su", "sv", "sw", "ta", "te", "th",
    "tl", "tr", "uk", "ur", "vi", "yue", "zh", "zh-cn", "zh-tw",
];

/// Characters a run without spaces may be broken after.
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '?', '!', '(', ')', '[', ']', '¡', '¿', '…', '‥', '،', '—', '।', '॥',
    '。', '，', '、', '：', '？', '！',
];

/// Pieces of `word` no longer than `max_chars`, with whether a space precedes each.
fn word_pieces(word: &str, max_chars: usize) -> Vec<(String, bool)> {
    if word.chars().count() <= max_chars {
        return vec![(word.to_string(), true)];
    }

    let mut runs = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if PUNCTUATION.contains(&c) {
            let end = i + c.len_utf8();
            runs.push(&word[start..end]);
            start = end;
        }
    }
    if start < word.len() {
        runs.push(&word[start..]);
    }

    let mut pieces = Vec::new();
    for run in runs {
        let chars: Vec<char> = run.chars().collect();
        for piece in chars.chunks(max_chars) {
            let first = pieces.is_empty();
            pieces.push((piece.iter().collect::<String>(), first));
        }
    }
    pieces
}

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Chunks break at whitespace. A run longer than `max_chars` breaks after
/// punctuation inside it, and pieces still too long are cut at character
/// boundaries.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        for (piece, spaced) in word_pieces(word, max_chars) {
            let piece_len = piece.chars().count();
            let sep = usize::from(spaced && !current.is_empty());

            if !current.is_empty() && current_len + sep + piece_len > max_chars {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            } else if sep == 1 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Google Translate TTS backend.
pub struct GoogleTranslateTts {
    endpoint: String,
    client: Client,
}

impl GoogleTranslateTts {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        idx: usize,
        total: usize,
    ) -> Result<Bytes, TtsError> {
        let total_str = total.to_string();
        let idx_str = idx.to_string();
        let len_str = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", lang),
                ("client", "tw-ob"),
                ("total", total_str.as_str()),
                ("idx", idx_str.as_str()),
                ("textlen", len_str.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TtsError::Api {
                status: response.status().as_u16(),
                chunk: idx,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl TtsBackend for GoogleTranslateTts {
    fn name(&self) -> &'static str {
        "google-translate"
    }

    fn supports_language(&self, lang: &str) -> bool {
        SUPPORTED_LANGUAGES.contains(&lang.to_lowercase().as_str())
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, TtsError> {
        if !self.supports_language(lang) {
            return Err(TtsError::UnsupportedLanguage(lang.to_string()));
        }

        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }

        debug!("Synthesizing {} chunk(s) in '{}'", chunks.len(), lang);
        let mut audio = BytesMut::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let part = self.fetch_chunk(chunk, lang, idx, chunks.len()).await?;
            audio.extend_from_slice(&part);
        }
        Ok(audio.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_short_text() {
        assert_eq!(split_chunks("Dear Sir/Madam,", 100), vec!["Dear Sir/Madam,"]);
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(
            split_chunks("To,\nThe Landlord,\n\nSubject", 100),
            vec!["To, The Landlord, Subject"]
        );
    }

    #[test]
    fn test_split_respects_limit() {
        let chunks = split_chunks("aaa bbb ccc ddd", 7);
        assert_eq!(chunks, vec!["aaa bbb", "ccc ddd"]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 7));
    }

    #[test]
    fn test_split_long_word() {
        assert_eq!(split_chunks("ab abcdefgh c", 3), vec!["ab", "abc", "def", "gh", "c"]);
    }

    #[test]
    fn test_split_long_run_after_punctuation() {
        assert_eq!(
            split_chunks("one,two,three,four", 9),
            vec!["one,two,", "three,", "four"]
        );
        assert_eq!(
            split_chunks("see: a,bbbbbbbbbbbb", 5),
            vec!["see:", "a,", "bbbbb", "bbbbb", "bb"]
        );
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        // 6 Devanagari chars, 18 bytes
        let word = "नमस्ते";
        assert_eq!(word.chars().count(), 6);
        assert_eq!(split_chunks(&format!("{} {}", word, word), 13).len(), 1);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_chunks("  \n\t ", 100).is_empty());
    }

    #[test]
    fn test_draft_bodies_fit_in_chunks() {
        let body = crate::draft::Classifier::default()
            .template(crate::draft::TemplateKind::EvictionReply)
            .body;
        let chunks = split_chunks(&body, MAX_CHUNK_CHARS);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_CHARS));
    }

    #[test]
    fn test_supported_languages() {
        let tts = GoogleTranslateTts::new("http://localhost", Client::new());
        assert!(tts.supports_language("mr"));
        assert!(tts.supports_language("en"));
        assert!(tts.supports_language("zh-CN"));
        assert!(!tts.supports_language("xx"));
    }

    #[tokio::test]
    async fn test_unsupported_language_makes_no_request() {
        // Unroutable endpoint: any request would fail with Http, not UnsupportedLanguage
        let tts = GoogleTranslateTts::new("http://127.0.0.1:9/", Client::new());
        let err = tts.synthesize("hello", "xx").await.unwrap_err();
        assert!(matches!(err, TtsError::UnsupportedLanguage(ref l) if l == "xx"));
    }

    #[tokio::test]
    async fn test_empty_text() {
        let tts = GoogleTranslateTts::new("http://127.0.0.1:9/", Client::new());
        assert!(matches!(
            tts.synthesize("   ", "en").await,
            Err(TtsError::EmptyText)
        ));
    }
}
