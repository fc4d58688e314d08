use thiserror::Error;

/// Result type for text-processing operations
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors raised by segmenters and tokenizers
#[derive(Error, Debug)]
pub enum TextError {
    /// Input exceeds the configured size limit
    #[error("Input too large: {len} bytes (limit {max})")]
    InputTooLarge { len: usize, max: usize },
}
