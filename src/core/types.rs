// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One abbreviation/definition pairing as stored in the index.
/// Equality covers all three fields, so identical records collapse in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entry {
    pub abbreviation: String,
    pub definition: String,
    /// Parenthetical note from either side of the record, "" when absent.
    pub explanation: String,
}

impl Entry {
    pub fn new(
        abbreviation: impl Into<String>,
        definition: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            definition: definition.into(),
            explanation: explanation.into(),
        }
    }

    fn with_explanation(&self, text: String) -> String {
        if self.explanation.is_empty() {
            text
        } else {
            format!("{} {}", text, self.explanation)
        }
    }

    /// Rendering used when the entry answers an abbreviation query.
    pub fn show_definition(&self) -> String {
        self.with_explanation(self.definition.clone())
    }

    /// Rendering used when the entry answers a definition-word query.
    pub fn show_abbreviation(&self) -> String {
        self.with_explanation(format!("{}: {}", self.abbreviation, self.definition))
    }
}
