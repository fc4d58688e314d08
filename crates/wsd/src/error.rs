use thiserror::Error;

/// Result type for disambiguation operations
pub type Result<T> = std::result::Result<T, WsdError>;

/// Failures surfaced by the disambiguator.
///
/// Unknown words and zero-overlap sentences are not errors; only collaborator
/// failures and bad configuration end up here.
#[derive(Error, Debug)]
pub enum WsdError {
    /// The sense inventory failed
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] sense_lexicon::LexiconError),

    /// The segmenter or tokenizer failed
    #[error("Text error: {0}")]
    Text(#[from] sense_text::TextError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WsdError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
