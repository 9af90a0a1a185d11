// --- File: src/core/index.rs
use crate::core::parser::LineParser;
use crate::core::types::Entry;
use crate::error::ParseError;
use std::collections::{HashMap, HashSet};

/// Splits `"MO (medical officer)"` into `("MO", "(medical officer)")`.
///
/// Splits at the first `" ("`. Text without `(` comes back unchanged with an
/// empty explanation; so does text whose `(` is not preceded by a space.
pub fn split_explanation(text: &str) -> (&str, String) {
    if !text.contains('(') {
        return (text, String::new());
    }
    match text.split_once(" (") {
        Some((core, rest)) => (core.trim(), format!("({}", rest.trim())),
        None => (text, String::new()),
    }
}

/// Bidirectional, append-only abbreviation index.
///
/// Keys are trimmed and uppercased: abbreviations in one map, each single
/// word of a definition in the other.
#[derive(Debug, Default)]
pub struct AbbreviationIndex {
    by_abbreviation: HashMap<String, HashSet<Entry>>,
    by_definition_word: HashMap<String, HashSet<Entry>>,
}

fn key(text: &str) -> String {
    text.trim().to_uppercase()
}

impl AbbreviationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one abbreviation/definition pair, pulling parenthetical
    /// explanations off both sides.
    pub fn add(&mut self, abbreviation: &str, definition: &str) {
        let (abbreviation, abbr_explanation) = split_explanation(abbreviation);
        let (definition, defn_explanation) = split_explanation(definition);
        let explanation = format!("{} {}", abbr_explanation, defn_explanation)
            .trim()
            .to_string();
        let entry = Entry::new(abbreviation, definition, explanation);

        // Runs of spaces would leave empty words; those are not indexed.
        for word in definition.split(' ').filter(|w| !w.is_empty()) {
            self.by_definition_word
                .entry(key(word))
                .or_default()
                .insert(entry.clone());
        }
        self.by_abbreviation
            .entry(key(abbreviation))
            .or_default()
            .insert(entry);
    }

    /// Parses a corpus line and adds the cross product of its abbreviations
    /// and definitions. Returns how many pairs were added (0 for blank and
    /// comment lines).
    pub fn add_line(&mut self, line: &str) -> Result<usize, ParseError> {
        let Some(record) = LineParser::parse(line)? else {
            return Ok(0);
        };
        let mut added = 0;
        for (abbreviation, definition) in record.pairs() {
            self.add(abbreviation, definition);
            added += 1;
        }
        Ok(added)
    }

    /// Entries whose abbreviation matches, case-insensitively.
    pub fn lookup_abbreviation(&self, text: &str) -> HashSet<&Entry> {
        Self::lookup(&self.by_abbreviation, text)
    }

    /// Entries whose definition contains the given word, case-insensitively.
    pub fn lookup_definition_word(&self, text: &str) -> HashSet<&Entry> {
        Self::lookup(&self.by_definition_word, text)
    }

    fn lookup<'a>(map: &'a HashMap<String, HashSet<Entry>>, text: &str) -> HashSet<&'a Entry> {
        map.get(&key(text))
            .map(|entries| entries.iter().collect())
            .unwrap_or_default()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.by_abbreviation.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_abbreviation.is_empty()
    }
}
