use serde::{Deserialize, Serialize};

/// One catalogued meaning of a word
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Sense {
    /// Inventory identifier (e.g., "bank.n.02")
    pub id: String,

    /// Gloss text
    pub definition: String,

    /// Usage examples, possibly empty
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Sense {
    /// Create a sense without examples
    pub fn new(id: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            definition: definition.into(),
            examples: Vec::new(),
        }
    }

    /// Builder: add a usage example
    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

impl std::fmt::Display for Sense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sense('{}')", self.id)
    }
}
