use crate::error::{Result, WsdError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gloss shown for words the inventory does not know
pub const UNKNOWN_GLOSS: &str = "<UNK>";

/// Default upper bound on a passage
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration for passage disambiguation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisambiguatorConfig {
    /// How sentences/tokens are fanned out
    pub execution: ExecutionMode,

    /// Gloss paired with unresolved words when glosses are requested
    pub unknown_gloss: String,

    /// Stopwords added on top of the English list
    pub extra_stopwords: Vec<String>,

    /// Maximum size in bytes of a passage handed to the disambiguator
    pub max_input_bytes: usize,
}

impl Default for DisambiguatorConfig {
    fn default() -> Self {
        Self {
            execution: ExecutionMode::Sequential,
            unknown_gloss: UNKNOWN_GLOSS.to_string(),
            extra_stopwords: Vec::new(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl DisambiguatorConfig {
    /// Create config for large passages (sentence-level fan-out)
    pub fn for_throughput() -> Self {
        Self {
            execution: ExecutionMode::ParallelSentences,
            ..Default::default()
        }
    }

    /// Builder: set execution mode
    #[must_use]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Builder: set the unknown-word gloss
    #[must_use]
    pub fn unknown_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.unknown_gloss = gloss.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.unknown_gloss.is_empty() {
            return Err(WsdError::invalid_config("unknown_gloss must not be empty"));
        }

        if self.max_input_bytes == 0 {
            return Err(WsdError::invalid_config("max_input_bytes must be > 0"));
        }

        if let Some(word) = self.extra_stopwords.iter().find(|w| w.trim().is_empty()) {
            return Err(WsdError::invalid_config(format!(
                "extra_stopwords contains a blank entry ({word:?})"
            )));
        }

        Ok(())
    }

    /// Parse a JSON document, falling back to TOML
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let config: Self = match serde_json::from_slice(bytes) {
            Ok(config) => config,
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| WsdError::invalid_config(format!("{json_err}; {err}")))?;
                toml::from_str(utf8).map_err(|toml_err| {
                    WsdError::invalid_config(format!(
                        "Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                    ))
                })?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a config file (JSON or TOML)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| {
            WsdError::invalid_config(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_slice(&bytes)
    }
}

/// Execution strategy for a passage.
///
/// Scoring shares no mutable state, so every mode yields identical output in
/// document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One sentence and one token at a time
    #[default]
    Sequential,

    /// Sentences scored on the rayon pool
    ParallelSentences,

    /// Tokens of each sentence scored on the rayon pool
    ParallelTokens,
}
