//! Document-wide masking passes
//!
//! Each pass replaces periods that cannot end a sentence with the ambiguous
//! period sentinel. Passes run in a fixed order: later passes see, and may
//! undo, the masks of earlier ones.

mod abbreviations;
mod acronyms;
mod letters;
mod numbers;

use tracing::trace;

use crate::catalog::AbbreviationSet;
use crate::language::Language;

/// One masking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Possessive,
    Initials,
    Abbreviations,
    Numbers,
    Acronyms,
    AcronymBoundaries,
    Coordinates,
}

pub(crate) const PASSES: [Pass; 7] = [
    Pass::Possessive,
    Pass::Initials,
    Pass::Abbreviations,
    Pass::Numbers,
    Pass::Acronyms,
    Pass::AcronymBoundaries,
    Pass::Coordinates,
];

/// Runs the masking passes for one language and abbreviation set
pub(crate) struct MaskingEngine<'a> {
    language: Language,
    abbreviations: &'a AbbreviationSet,
}

impl<'a> MaskingEngine<'a> {
    pub(crate) fn new(language: Language, abbreviations: &'a AbbreviationSet) -> Self {
        Self {
            language,
            abbreviations,
        }
    }

    pub(crate) fn run(&self, text: String) -> String {
        PASSES.iter().fold(text, |text, &pass| {
            let masked = self.apply(pass, &text);
            trace!(?pass, changed = masked != text, "masking pass complete");
            masked
        })
    }

    pub(crate) fn apply(&self, pass: Pass, text: &str) -> String {
        match pass {
            Pass::Possessive => letters::mask_possessive(text),
            Pass::Initials => {
                letters::mask_initials(text, self.language.masks_lowercase_initials())
            }
            Pass::Abbreviations => abbreviations::mask_abbreviations(
                text,
                self.abbreviations,
                self.language.abbreviation_policy(),
            ),
            Pass::Numbers => numbers::mask_numbers(text, self.language.masks_ordinal_periods()),
            Pass::Acronyms => {
                acronyms::restore_meridiem_boundaries(&acronyms::mask_acronyms(text))
            }
            Pass::AcronymBoundaries => acronyms::restore_acronym_boundaries(text),
            Pass::Coordinates => letters::mask_coordinates(text),
        }
    }
}
