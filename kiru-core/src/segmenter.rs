//! Segmentation pipeline
//!
//! `Segmenter` wires the collaborators together: cleaning and list
//! normalisation, document-wide masking, per-line analysis and the final
//! reassembly of segments into sentences.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use crate::catalog::{AbbreviationCatalog, EmbeddedCatalog};
use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::language::Language;
use crate::line::LineAnalyzer;
use crate::masking::MaskingEngine;
use crate::normalize::{Cleaner, ListBreaker, ListNormalizer, TextCleaner, RECORD_SEPARATOR};
use crate::sentinel;

static UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{3,}").expect("valid underscore pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{3,}").expect("valid whitespace pattern"));

/// Rule-based sentence segmenter
///
/// A segmenter is immutable once built and can be shared between threads.
///
/// ```
/// use kiru_core::Segmenter;
///
/// let segmenter = Segmenter::new();
/// let sentences = segmenter.segment("Dr. Smith went home. He slept.").unwrap();
/// assert_eq!(sentences, vec!["Dr. Smith went home.", "He slept."]);
/// ```
#[derive(Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    catalog: Arc<dyn AbbreviationCatalog>,
    cleaner: Arc<dyn Cleaner>,
    lists: Arc<dyn ListNormalizer>,
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// English segmenter with the default collaborators
    pub fn new() -> Self {
        Self::with_config(SegmenterConfig::default())
    }

    /// Segmenter for a language code with default settings
    pub fn for_language(code: &str) -> Self {
        Self::with_config(SegmenterConfig {
            language: Language::from_code(code),
            ..SegmenterConfig::default()
        })
    }

    pub fn with_config(config: SegmenterConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(EmbeddedCatalog),
            cleaner: Arc::new(TextCleaner),
            lists: Arc::new(ListBreaker),
        }
    }

    /// Replace the abbreviation catalog
    pub fn with_catalog(mut self, catalog: Arc<dyn AbbreviationCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the text cleaner
    pub fn with_cleaner(mut self, cleaner: Arc<dyn Cleaner>) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Replace the list normaliser
    pub fn with_list_normalizer(mut self, lists: Arc<dyn ListNormalizer>) -> Self {
        self.lists = lists;
        self
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split `text` into sentences
    ///
    /// Sentences come back in document order, trimmed, and never empty.
    /// Text containing a reserved placeholder character is rejected with
    /// [`Error::ReservedCharacter`](crate::Error::ReservedCharacter).
    pub fn segment(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        sentinel::check_input(text)?;

        let language = self.config.language;
        debug!(
            language = %language,
            chars = text.chars().count(),
            clean = self.config.clean,
            "segmenting text"
        );

        let text = if self.config.clean {
            self.cleaner.clean(text, language, self.config.doc_type())
        } else {
            text.to_string()
        };
        let text = self.lists.add_line_break(&text);

        let masked = MaskingEngine::new(language, self.catalog.set(language)).run(text);

        let analyzer = LineAnalyzer::new(language);
        let segments: Vec<String> = masked
            .split(RECORD_SEPARATOR)
            .filter(|line| !line.is_empty())
            .flat_map(|line| analyzer.analyze(line))
            .collect();

        let sentences = reassemble(segments);
        debug!(sentences = sentences.len(), "segmentation complete");
        Ok(sentences)
    }
}

/// Turn raw segments into final sentences
fn reassemble(segments: Vec<String>) -> Vec<String> {
    let mut sentences = Vec::with_capacity(segments.len());

    for segment in segments {
        if is_degenerate(&segment) {
            continue;
        }
        let segment = sentinel::reinsert_ellipses(&segment);
        let segment = WHITESPACE_RUN.replace_all(&segment, " ");

        for piece in split_after_quotes(&segment) {
            let sentence = piece.replace('\n', " ");
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }
    }

    sentences
}

/// Segments that are only an underscore rule or a single character
fn is_degenerate(segment: &str) -> bool {
    UNDERSCORE_RUN.replace_all(segment, "").is_empty() || segment.chars().count() < 2
}

/// Split where terminal punctuation and a closing quote are followed by a
/// single space and a capital ("He left." She cried.)
fn split_after_quotes(segment: &str) -> Vec<String> {
    let chars: Vec<char> = segment.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    for i in 2..chars.len().saturating_sub(1) {
        let split = chars[i].is_whitespace()
            && matches!(chars[i - 1], '"' | '\'' | '”' | '“')
            && matches!(chars[i - 2], '!' | '?' | '.')
            && chars[i + 1].is_ascii_uppercase();
        if split {
            pieces.push(chars[start..i].iter().collect());
            start = i + 1;
        }
    }
    pieces.push(chars[start..].iter().collect());

    pieces
}
