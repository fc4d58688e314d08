use crate::error::{Result, TextError};
use unicode_segmentation::UnicodeSegmentation;

/// Splits a passage into sentences, preserving document order
pub trait SentenceSegmenter: Send + Sync {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>>;
}

/// Splits a sentence into word tokens; punctuation may come back as separate tokens
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// UAX #29 sentence segmentation
#[derive(Debug, Clone, Default)]
pub struct UnicodeSegmenter {
    max_input_bytes: Option<usize>,
}

impl UnicodeSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject passages longer than `max` bytes
    #[must_use]
    pub const fn with_max_input_bytes(mut self, max: usize) -> Self {
        self.max_input_bytes = Some(max);
        self
    }
}

impl SentenceSegmenter for UnicodeSegmenter {
    fn split_sentences(&self, text: &str) -> Result<Vec<String>> {
        check_len(text, self.max_input_bytes)?;

        // fragments without any alphanumeric character are not sentences
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect())
    }
}

/// UAX #29 word-boundary tokenization.
///
/// Whitespace runs are dropped; every other segment, including standalone
/// punctuation such as `"."` or `"?"`, becomes a token. Case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub const fn new() -> Self {
        Self
    }
}

impl WordTokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_word_bounds()
            .filter(|seg| !seg.chars().all(char::is_whitespace))
            .map(String::from)
            .collect())
    }
}

fn check_len(text: &str, max: Option<usize>) -> Result<()> {
    match max {
        Some(max) if text.len() > max => Err(TextError::InputTooLarge {
            len: text.len(),
            max,
        }),
        _ => Ok(()),
    }
}
