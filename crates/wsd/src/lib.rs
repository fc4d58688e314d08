//! # Sense WSD
//!
//! Unsupervised word-sense disambiguation with the simplified Lesk
//! algorithm: a word's sense is the candidate whose definition and examples
//! share the most distinct tokens with the surrounding sentence.
//!
//! ## Architecture
//!
//! ```text
//! Passage
//!     │
//!     ├──> SentenceSegmenter → [sentence]
//!     │
//!     ├──> per sentence (sequential or rayon fan-out)
//!     │    ├─> lower-case + WordTokenizer
//!     │    ├─> TokenFilter drops stopwords / punctuation
//!     │    └─> SenseScorer per retained token, full sentence as context
//!     │
//!     └──> [[Disambiguation]] in document order
//! ```
//!
//! The sense inventory is injected through [`sense_lexicon::SenseInventory`];
//! unknown words come back as [`Disambiguation::Unresolved`] rather than
//! as errors.
//!
//! ## Example
//!
//! ```rust
//! use sense_lexicon::{MemoryInventory, Sense};
//! use sense_wsd::{Disambiguation, SenseScorer};
//!
//! let inventory = MemoryInventory::new()
//!     .with_sense("bank", Sense::new("bank.n.01", "sloping land beside a river"))
//!     .with_sense("bank", Sense::new("bank.n.02", "an institution that holds deposits of money"));
//!
//! let scorer = SenseScorer::new(inventory);
//! let result = scorer.disambiguate("bank", "I put my money in the bank").unwrap();
//! assert_eq!(result.label(), "bank.n.02");
//!
//! let unknown = scorer.disambiguate("xyzzy123", "anything").unwrap();
//! assert_eq!(unknown, Disambiguation::Unresolved("xyzzy123".to_string()));
//! ```

mod config;
mod error;
mod passage;
mod scorer;
mod types;

pub use config::{DisambiguatorConfig, ExecutionMode, DEFAULT_MAX_INPUT_BYTES, UNKNOWN_GLOSS};
pub use error::{Result, WsdError};
pub use passage::PassageDisambiguator;
pub use scorer::SenseScorer;
pub use types::{Disambiguation, GlossedDisambiguation, PassageEntry, SenseScore};
