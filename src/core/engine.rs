use crate::config::LookupConfig;
use crate::core::index::AbbreviationIndex;
use crate::core::types::Entry;
use crate::corpus::{self, CorpusStats};
use crate::error::Result;
use serde::Serialize;
use std::collections::HashSet;

/// Both directions of a query, already rendered and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub query: String,
    /// Definitions of the query read as an abbreviation.
    pub definitions: Vec<String>,
    /// Abbreviations whose definition contains the query as a word.
    pub abbreviations: Vec<String>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.abbreviations.is_empty()
    }
}

// The engine owns the index once loading is done; queries never mutate it.
pub struct LookupEngine {
    index: AbbreviationIndex,
    stats: CorpusStats,
}

fn render(entries: HashSet<&Entry>, show: impl Fn(&Entry) -> String) -> Vec<String> {
    let mut rendered: Vec<String> = entries.into_iter().map(show).collect();
    rendered.sort();
    rendered
}

impl LookupEngine {
    pub fn new(index: AbbreviationIndex) -> Self {
        Self {
            index,
            stats: CorpusStats::default(),
        }
    }

    /// Builds the index from every corpus file the config points at.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        let mut index = AbbreviationIndex::new();
        let stats = corpus::load_corpus(config, &mut index)?;
        Ok(Self { index, stats })
    }

    pub fn index(&self) -> &AbbreviationIndex {
        &self.index
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    pub fn lookup_abbreviation(&self, text: &str) -> Vec<String> {
        render(self.index.lookup_abbreviation(text), Entry::show_definition)
    }

    pub fn lookup_definition_word(&self, text: &str) -> Vec<String> {
        render(
            self.index.lookup_definition_word(text),
            Entry::show_abbreviation,
        )
    }

    pub fn lookup(&self, text: &str) -> LookupResult {
        LookupResult {
            query: text.trim().to_string(),
            definitions: self.lookup_abbreviation(text),
            abbreviations: self.lookup_definition_word(text),
        }
    }
}
