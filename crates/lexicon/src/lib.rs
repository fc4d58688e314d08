//! # Sense Lexicon
//!
//! The lexical-database side of sense-finder: the [`Sense`] record, the
//! [`SenseInventory`] port the disambiguator consumes, and a small
//! [`MemoryInventory`] that can be built in code or loaded from a JSON/TOML
//! document.
//!
//! ## Example
//!
//! ```rust
//! use sense_lexicon::{MemoryInventory, Sense, SenseInventory};
//!
//! let inventory = MemoryInventory::new()
//!     .with_sense("bank", Sense::new("bank.n.01", "sloping land beside a body of water"))
//!     .with_sense("bank", Sense::new("bank.n.02", "a financial institution"));
//!
//! let senses = inventory.senses_for("bank").unwrap();
//! assert_eq!(senses[0].id(), "bank.n.01");
//! ```

mod error;
mod inventory;
mod types;

pub use error::{LexiconError, Result};
pub use inventory::{InventoryDocument, MemoryInventory, SenseInventory};
pub use types::Sense;
