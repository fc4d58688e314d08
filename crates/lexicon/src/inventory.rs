use crate::error::{LexiconError, Result};
use crate::types::Sense;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Lexical database that supplies candidate senses for a word.
///
/// Implementations return candidates in their own priority order (for
/// WordNet-like inventories, most frequent sense first). Callers treat the
/// first element as the default sense and never re-order the list. An unknown
/// word yields an empty list, not an error.
pub trait SenseInventory: Send + Sync {
    /// Ordered candidate senses for `word`
    fn senses_for(&self, word: &str) -> Result<Vec<Sense>>;
}

impl<T: SenseInventory + ?Sized> SenseInventory for Arc<T> {
    fn senses_for(&self, word: &str) -> Result<Vec<Sense>> {
        (**self).senses_for(word)
    }
}

impl<T: SenseInventory + ?Sized> SenseInventory for &T {
    fn senses_for(&self, word: &str) -> Result<Vec<Sense>> {
        (**self).senses_for(word)
    }
}

/// Serialized form of an inventory: `word -> [sense, ...]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub entries: BTreeMap<String, Vec<Sense>>,
}

/// Small in-memory inventory keyed by lower-cased word
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    entries: HashMap<String, Vec<Sense>>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a sense to `word`'s candidate list
    #[must_use]
    pub fn with_sense(mut self, word: &str, sense: Sense) -> Self {
        self.insert(word, sense);
        self
    }

    /// Append a sense to the end of `word`'s candidate list
    pub fn insert(&mut self, word: &str, sense: Sense) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(sense);
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from an already parsed document
    pub fn from_document(document: InventoryDocument) -> Result<Self> {
        let mut inventory = Self::new();
        for (word, senses) in document.entries {
            validate_entry(&word, &senses)?;
            for sense in senses {
                inventory.insert(&word, sense);
            }
        }
        log::debug!("Loaded inventory with {} words", inventory.len());
        Ok(inventory)
    }

    /// Parse a JSON document, falling back to TOML
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let document = match serde_json::from_slice::<InventoryDocument>(bytes) {
            Ok(document) => document,
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| LexiconError::parse(format!("{json_err}; {err}")))?;
                toml::from_str::<InventoryDocument>(utf8).map_err(|toml_err| {
                    LexiconError::parse(format!(
                        "Inventory is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                    ))
                })?
            }
        };
        Self::from_document(document)
    }

    /// Load an inventory file (JSON or TOML)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        log::debug!("Reading inventory from {}", path.display());
        Self::from_slice(&bytes)
    }

    /// Export back to the serialized form
    #[must_use]
    pub fn to_document(&self) -> InventoryDocument {
        InventoryDocument {
            entries: self
                .entries
                .iter()
                .map(|(word, senses)| (word.clone(), senses.clone()))
                .collect(),
        }
    }
}

impl SenseInventory for MemoryInventory {
    fn senses_for(&self, word: &str) -> Result<Vec<Sense>> {
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

fn validate_entry(word: &str, senses: &[Sense]) -> Result<()> {
    if word.trim().is_empty() {
        return Err(LexiconError::invalid("entry with empty word"));
    }

    let mut seen = HashSet::new();
    for sense in senses {
        if sense.definition.trim().is_empty() {
            return Err(LexiconError::invalid(format!(
                "sense '{}' of '{word}' has an empty definition",
                sense.id
            )));
        }
        if !seen.insert(sense.id.as_str()) {
            return Err(LexiconError::invalid(format!(
                "duplicate sense id '{}' for '{word}'",
                sense.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(senses: &[Sense]) -> Vec<&str> {
        senses.iter().map(Sense::id).collect()
    }

    #[test]
    fn unknown_word_yields_empty_list() {
        let inventory = MemoryInventory::new().with_sense("cat", Sense::new("cat.n.01", "feline"));
        assert!(inventory.senses_for("xyzzy123").unwrap().is_empty());
    }

    #[test]
    fn insertion_order_is_candidate_order() {
        let inventory = MemoryInventory::new()
            .with_sense("bank", Sense::new("bank.n.01", "sloping land beside a river"))
            .with_sense("bank", Sense::new("bank.n.02", "a financial institution"));

        let senses = inventory.senses_for("bank").unwrap();
        assert_eq!(ids(&senses), vec!["bank.n.01", "bank.n.02"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let inventory = MemoryInventory::new().with_sense("Cat", Sense::new("cat.n.01", "feline"));
        assert_eq!(inventory.senses_for("CAT").unwrap().len(), 1);
    }

    #[test]
    fn parses_json_document() {
        let json = br#"{
            "entries": {
                "bank": [
                    {"id": "bank.n.01", "definition": "sloping land", "examples": ["the river bank"]},
                    {"id": "bank.n.02", "definition": "a financial institution"}
                ]
            }
        }"#;

        let inventory = MemoryInventory::from_slice(json).unwrap();
        let senses = inventory.senses_for("bank").unwrap();
        assert_eq!(ids(&senses), vec!["bank.n.01", "bank.n.02"]);
        assert_eq!(senses[0].examples(), ["the river bank".to_string()]);
    }

    #[test]
    fn parses_toml_document() {
        let toml = br#"
[[entries.cat]]
id = "cat.n.01"
definition = "feline mammal usually having thick soft fur"
examples = ["the cat sat on the mat"]

[[entries.cat]]
id = "cat.n.02"
definition = "an informal term for a youth or man"
"#;

        let inventory = MemoryInventory::from_slice(toml).unwrap();
        let senses = inventory.senses_for("cat").unwrap();
        assert_eq!(ids(&senses), vec!["cat.n.01", "cat.n.02"]);
    }

    #[test]
    fn rejects_garbage() {
        let err = MemoryInventory::from_slice(b"not = [valid").unwrap_err();
        assert!(matches!(err, LexiconError::ParseError(_)));
    }

    #[test]
    fn rejects_duplicate_ids_and_empty_definitions() {
        let dup = br#"{"entries":{"cat":[
            {"id":"cat.n.01","definition":"feline"},
            {"id":"cat.n.01","definition":"again"}
        ]}}"#;
        assert!(matches!(
            MemoryInventory::from_slice(dup).unwrap_err(),
            LexiconError::InvalidInventory(_)
        ));

        let empty = br#"{"entries":{"cat":[{"id":"cat.n.01","definition":"  "}]}}"#;
        assert!(matches!(
            MemoryInventory::from_slice(empty).unwrap_err(),
            LexiconError::InvalidInventory(_)
        ));
    }

    #[test]
    fn document_round_trips_through_arc() {
        let inventory = Arc::new(
            MemoryInventory::new().with_sense("cat", Sense::new("cat.n.01", "feline")),
        );
        let doc = inventory.to_document();
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(inventory.senses_for("cat").unwrap().len(), 1);
    }
}
