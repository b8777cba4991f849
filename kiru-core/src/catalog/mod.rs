//! Abbreviation catalogs
//!
//! The segmenter only reads abbreviation data through the
//! [`AbbreviationCatalog`] trait. [`EmbeddedCatalog`] serves the lists
//! compiled into the crate, and [`CatalogBuilder`] layers caller-supplied
//! sets over them.

pub(crate) mod config;
pub(crate) mod loader;
pub(crate) mod set;

use std::collections::HashMap;

pub use config::{Abbreviations, CatalogConfig, Metadata};
pub use set::{AbbreviationEntry, AbbreviationKind, AbbreviationSet};

use crate::language::Language;

/// Source of per-language abbreviation lists
///
/// Implementations are shared read-only across threads.
pub trait AbbreviationCatalog: Send + Sync {
    /// Abbreviation set for a language, or the default list when the
    /// language has none
    fn set(&self, language: Language) -> &AbbreviationSet;

    /// Every entry, in catalog order
    fn all(&self, language: Language) -> &[AbbreviationEntry] {
        self.set(language).entries()
    }

    /// Prefix (title) abbreviations
    fn prefix(&self, language: Language) -> Vec<&str> {
        self.set(language)
            .of_kind(AbbreviationKind::Prefix)
            .map(AbbreviationEntry::text)
            .collect()
    }

    /// Number abbreviations
    fn number(&self, language: Language) -> Vec<&str> {
        self.set(language)
            .of_kind(AbbreviationKind::Number)
            .map(AbbreviationEntry::text)
            .collect()
    }
}

/// Catalog backed by the embedded TOML lists
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl AbbreviationCatalog for EmbeddedCatalog {
    fn set(&self, language: Language) -> &AbbreviationSet {
        loader::embedded_or_default(language.code())
    }
}

impl EmbeddedCatalog {
    /// Whether `language` has a list of its own
    pub fn has_own_list(language: Language) -> bool {
        loader::embedded(language.code()).is_some()
    }

    /// Language codes of the embedded lists
    pub fn codes() -> impl Iterator<Item = &'static str> {
        loader::embedded_codes()
    }
}

/// Embedded catalog with caller-supplied sets layered on top
#[derive(Debug, Clone, Default)]
pub struct LayeredCatalog {
    overrides: HashMap<Language, AbbreviationSet>,
}

impl AbbreviationCatalog for LayeredCatalog {
    fn set(&self, language: Language) -> &AbbreviationSet {
        self.overrides
            .get(&language)
            .unwrap_or_else(|| loader::embedded_or_default(language.code()))
    }
}

/// Builder for [`LayeredCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    overrides: HashMap<Language, AbbreviationSet>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `set` for `language` instead of the embedded list
    pub fn replace(mut self, language: Language, set: AbbreviationSet) -> Self {
        self.overrides.insert(language, set);
        self
    }

    /// Add the entries of `set` to the list already registered for
    /// `language` (the embedded one if nothing was registered yet)
    pub fn extend(mut self, language: Language, set: &AbbreviationSet) -> Self {
        self.overrides
            .entry(language)
            .or_insert_with(|| loader::embedded_or_default(language.code()).clone())
            .extend(set);
        self
    }

    pub fn build(self) -> LayeredCatalog {
        LayeredCatalog {
            overrides: self.overrides,
        }
    }
}
