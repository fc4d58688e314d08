use sense_lexicon::Sense;
use serde::{Deserialize, Serialize};

/// Outcome of disambiguating one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Disambiguation {
    /// The inventory had candidates; this one won
    Resolved(Sense),

    /// The inventory had no entry; the word is passed through unchanged
    Unresolved(String),
}

impl Disambiguation {
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The chosen sense, if any
    #[must_use]
    pub const fn sense(&self) -> Option<&Sense> {
        match self {
            Self::Resolved(sense) => Some(sense),
            Self::Unresolved(_) => None,
        }
    }

    /// Sense definition, or `unknown` for a passed-through word
    #[must_use]
    pub fn gloss<'a>(&'a self, unknown: &'a str) -> &'a str {
        match self {
            Self::Resolved(sense) => sense.definition(),
            Self::Unresolved(_) => unknown,
        }
    }

    /// Sense id or the raw word
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Resolved(sense) => sense.id(),
            Self::Unresolved(word) => word,
        }
    }
}

impl std::fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(sense) => write!(f, "{sense}"),
            Self::Unresolved(word) => f.write_str(word),
        }
    }
}

/// A result paired with its display gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossedDisambiguation {
    pub result: Disambiguation,
    pub gloss: String,
}

impl GlossedDisambiguation {
    pub fn new(result: Disambiguation, unknown_gloss: &str) -> Self {
        let gloss = result.gloss(unknown_gloss).to_string();
        Self { result, gloss }
    }
}

impl std::fmt::Display for GlossedDisambiguation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, '{}')", self.result, self.gloss)
    }
}

/// One entry of a passage result; the variant follows the `with_glosses` flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PassageEntry {
    Glossed(GlossedDisambiguation),
    Plain(Disambiguation),
}

impl PassageEntry {
    #[must_use]
    pub const fn result(&self) -> &Disambiguation {
        match self {
            Self::Glossed(glossed) => &glossed.result,
            Self::Plain(result) => result,
        }
    }

    #[must_use]
    pub fn gloss(&self) -> Option<&str> {
        match self {
            Self::Glossed(glossed) => Some(&glossed.gloss),
            Self::Plain(_) => None,
        }
    }
}

impl std::fmt::Display for PassageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glossed(glossed) => glossed.fmt(f),
            Self::Plain(result) => result.fmt(f),
        }
    }
}

/// Overlap of one candidate against a sentence context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseScore {
    /// Position in the inventory's candidate list
    pub rank: usize,
    pub sense: Sense,
    /// Distinct tokens shared by signature and context
    pub overlap: usize,
}
