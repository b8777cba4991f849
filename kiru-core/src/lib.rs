//! Rule-based sentence boundary disambiguation
//!
//! `kiru-core` splits text into sentences with an ordered set of
//! context-sensitive rules. Periods, exclamation and question marks that
//! cannot end a sentence (abbreviations, decimals, initials, ellipses,
//! quoted or bracketed asides) are masked with reserved placeholder
//! characters, the remaining punctuation is cut by a per-language boundary
//! grammar, and the placeholders are restored in the output.
//!
//! # Architecture
//!
//! - **Masking**: document-wide passes driven by the abbreviation catalog
//! - **Line analysis**: ellipses, e-mail addresses, quotations and
//!   punctuation clusters, followed by the boundary grammar
//! - **Reassembly**: placeholder restoration, whitespace cleanup and the
//!   final quotation split
//!
//! # Example
//!
//! ```rust
//! let sentences = kiru_core::segment("Hello world. How are you?", "en").unwrap();
//! assert_eq!(sentences, vec!["Hello world.", "How are you?"]);
//!
//! let sentences = kiru_core::segment("It cost $3.50 today. Nice.", "en").unwrap();
//! assert_eq!(sentences, vec!["It cost $3.50 today.", "Nice."]);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod language;
pub mod normalize;

mod grammar;
mod line;
mod masking;
mod protect;
mod scanner;
mod segmenter;
mod sentinel;

pub use catalog::{
    AbbreviationCatalog, AbbreviationEntry, AbbreviationKind, AbbreviationSet, CatalogBuilder,
    EmbeddedCatalog, LayeredCatalog,
};
pub use config::{ConfigBuilder, SegmenterConfig};
pub use error::{Error, Result};
pub use language::Language;
pub use normalize::{Cleaner, ListBreaker, ListNormalizer, TextCleaner, RECORD_SEPARATOR};
pub use segmenter::Segmenter;
pub use sentinel::is_reserved;

/// Split `text` into sentences using the rules for `language`
///
/// Unknown language codes use the generic rules. Use [`Segmenter`] to
/// segment many documents, to pass a document type or to skip cleaning.
pub fn segment(text: &str, language: &str) -> Result<Vec<String>> {
    Segmenter::for_language(language).segment(text)
}

/// Split `text` into sentences with an explicit configuration
pub fn segment_with(text: &str, config: &SegmenterConfig) -> Result<Vec<String>> {
    Segmenter::with_config(config.clone()).segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_convenience() {
        assert_eq!(
            segment("Dr. Smith went home.", "en").unwrap(),
            vec!["Dr. Smith went home."]
        );
    }

    #[test]
    fn test_segment_with_config() {
        let config = SegmenterConfig::builder().language("ja").build().unwrap();
        assert_eq!(
            segment_with("今日は晴れです。明日は雨です。", &config).unwrap(),
            vec!["今日は晴れです。", "明日は雨です。"]
        );
    }

    #[test]
    fn test_unknown_language_still_segments() {
        assert_eq!(
            segment("First one. Second one.", "zz").unwrap(),
            vec!["First one.", "Second one."]
        );
    }
}
