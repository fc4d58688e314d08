//! # Sense Text
//!
//! Text plumbing consumed by the disambiguator: sentence segmentation, word
//! tokenization and the stopword/punctuation filter. Each concern is a small
//! trait with one default implementation built on `unicode-segmentation`.
//!
//! ```text
//! passage ──> SentenceSegmenter ──> [sentence]
//! sentence ──> WordTokenizer ──> [token]
//! token ──> TokenFilter::is_skippable
//! ```

mod error;
mod segment;
mod stopwords;

pub use error::{Result, TextError};
pub use segment::{SentenceSegmenter, UnicodeSegmenter, UnicodeTokenizer, WordTokenizer};
pub use stopwords::{is_punctuation, StopwordFilter, TokenFilter, ENGLISH_STOPWORDS};
