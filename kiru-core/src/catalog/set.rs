//! Per-language abbreviation sets

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::config::CatalogConfig;
use crate::error::Result;

/// Disambiguation rule applied to an abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AbbreviationKind {
    /// Masked only before a lowercase word, a digit, a pronoun or more punctuation
    Ordinary,
    /// Masked before a digit or an opening parenthesis ("No. 5", "pp. (3)")
    Number,
    /// Title or honorific, masked whenever followed by whitespace ("Dr. Smith")
    Prefix,
}

/// One catalog entry, stored lowercase without the trailing period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationEntry {
    text: String,
    kind: AbbreviationKind,
}

impl AbbreviationEntry {
    pub fn new(text: &str, kind: AbbreviationKind) -> Self {
        Self {
            text: text.trim().to_lowercase(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> AbbreviationKind {
        self.kind
    }
}

/// Read-only abbreviation list for one language
///
/// An abbreviation listed in several categories keeps the strongest one,
/// with prefix over number over ordinary.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationSet {
    code: String,
    name: String,
    entries: Vec<AbbreviationEntry>,
    index: HashMap<String, usize>,
}

impl AbbreviationSet {
    /// Create an empty set
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Build a set from a parsed catalog document
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut set = Self::new(&config.metadata.code, &config.metadata.name);
        let lists = &config.abbreviations;

        for text in &lists.ordinary {
            set.insert(AbbreviationEntry::new(text, AbbreviationKind::Ordinary));
        }
        for text in &lists.number {
            set.insert(AbbreviationEntry::new(text, AbbreviationKind::Number));
        }
        for text in &lists.prefix {
            set.insert(AbbreviationEntry::new(text, AbbreviationKind::Prefix));
        }

        set
    }

    /// Parse and validate a TOML catalog
    pub fn from_toml_str(source: &str) -> Result<Self> {
        CatalogConfig::from_toml_str(source).map(|config| Self::from_config(&config))
    }

    /// Load a TOML catalog from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Add an entry, upgrading the category of an existing one if stronger
    pub fn insert(&mut self, entry: AbbreviationEntry) {
        if entry.text.is_empty() {
            return;
        }
        match self.index.get(&entry.text) {
            Some(&i) => {
                if entry.kind > self.entries[i].kind {
                    self.entries[i].kind = entry.kind;
                }
            }
            None => {
                self.index.insert(entry.text.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Merge every entry of `other` into this set
    pub fn extend(&mut self, other: &AbbreviationSet) {
        for entry in &other.entries {
            self.insert(entry.clone());
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[AbbreviationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category of an abbreviation, matched case-insensitively
    pub fn kind_of(&self, abbreviation: &str) -> Option<AbbreviationKind> {
        let key = abbreviation.trim().trim_end_matches('.').to_lowercase();
        self.index.get(&key).map(|&i| self.entries[i].kind)
    }

    pub fn contains(&self, abbreviation: &str) -> bool {
        self.kind_of(abbreviation).is_some()
    }

    pub fn is_prefix(&self, abbreviation: &str) -> bool {
        self.kind_of(abbreviation) == Some(AbbreviationKind::Prefix)
    }

    pub fn is_number(&self, abbreviation: &str) -> bool {
        self.kind_of(abbreviation) == Some(AbbreviationKind::Number)
    }

    /// Entries of one category
    pub fn of_kind(&self, kind: AbbreviationKind) -> impl Iterator<Item = &AbbreviationEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}
