//! Embedded catalog table
//!
//! Catalog files are compiled into the binary and parsed once on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::catalog::set::AbbreviationSet;

/// Catalog code used when a language has no list of its own
pub(crate) const DEFAULT_CODE: &str = "en";

static EMBEDDED: OnceLock<HashMap<&'static str, AbbreviationSet>> = OnceLock::new();

static EMPTY: OnceLock<AbbreviationSet> = OnceLock::new();

macro_rules! embedded_catalogs {
    ($($code:literal => $file:literal),* $(,)?) => {
        &[$(($code, include_str!(concat!("../../configs/languages/", $file)))),*]
    };
}

const SOURCES: &[(&str, &str)] = embedded_catalogs! {
    "en" => "english.toml",
    "de" => "german.toml",
    "es" => "spanish.toml",
    "fr" => "french.toml",
    "it" => "italian.toml",
    "nl" => "dutch.toml",
    "pl" => "polish.toml",
    "ru" => "russian.toml",
    "da" => "danish.toml",
    "ar" => "arabic.toml",
    "fa" => "persian.toml",
};

fn table() -> &'static HashMap<&'static str, AbbreviationSet> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();
        for &(code, source) in SOURCES {
            match AbbreviationSet::from_toml_str(source) {
                Ok(set) => {
                    debug!(code, entries = set.len(), "loaded embedded abbreviation catalog");
                    map.insert(code, set);
                }
                Err(e) => warn!(code, error = %e, "failed to load embedded abbreviation catalog"),
            }
        }
        map
    })
}

/// Catalog for a language code, if one is embedded
pub(crate) fn embedded(code: &str) -> Option<&'static AbbreviationSet> {
    table().get(code)
}

/// Catalog for a language code, falling back to the default list
pub(crate) fn embedded_or_default(code: &str) -> &'static AbbreviationSet {
    embedded(code)
        .or_else(|| embedded(DEFAULT_CODE))
        .unwrap_or_else(|| EMPTY.get_or_init(AbbreviationSet::default))
}

/// Codes with an embedded catalog
pub(crate) fn embedded_codes() -> impl Iterator<Item = &'static str> {
    SOURCES.iter().map(|&(code, _)| code)
}
