use thiserror::Error;

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

/// Errors raised by a sense inventory
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The inventory document could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The inventory document parsed but its content is inconsistent
    #[error("Invalid inventory: {0}")]
    InvalidInventory(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Backend-specific lookup failure
    #[error("Lookup failed for '{word}': {reason}")]
    LookupFailed { word: String, reason: String },
}

impl LexiconError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an invalid inventory error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInventory(msg.into())
    }

    /// Create a lookup failure for `word`
    pub fn lookup(word: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            word: word.into(),
            reason: reason.into(),
        }
    }
}
