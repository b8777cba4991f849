//! Reserved placeholder alphabet
//!
//! Masking passes replace punctuation that must not end a sentence with
//! glyphs from this table. Every glyph restores to a fixed literal, either
//! per segment once boundaries are fixed ([`restore_symbols`]) or during
//! final reassembly ([`reinsert_ellipses`]). Input text must never contain
//! any of them.

use crate::error::{Error, Result};

/// Period that is not a sentence boundary
pub(crate) const AMBIGUOUS_PERIOD: char = '∯';
/// Period inside an e-mail address or domain
pub(crate) const EMAIL_PERIOD: char = '∮';
/// `" . . . "` ellipsis
pub(crate) const SPACED_ELLIPSIS: char = '♟';
/// `". . . ."` ellipsis closing a line
pub(crate) const SPACED_FINAL_ELLIPSIS: char = '♝';
/// `"..."` ellipsis inside a sentence
pub(crate) const ELLIPSIS: char = 'ƪ';
/// First two periods of an ellipsis that ends a sentence
pub(crate) const BOUNDARY_ELLIPSIS: char = '☏';
/// Colon between digits
pub(crate) const TIME_COLON: char = '♭';
/// Arabic comma inside an enumeration
pub(crate) const LIST_COMMA: char = '♬';
/// Explicit end of a line without terminal punctuation
pub(crate) const END_OF_LINE: char = 'ȸ';
/// Line break inside a line
pub(crate) const NEWLINE: char = 'ȹ';

pub(crate) const QUESTION_EXCLAMATION: char = '☉';
pub(crate) const EXCLAMATION_QUESTION: char = '☈';
pub(crate) const DOUBLE_QUESTION: char = '☇';
pub(crate) const DOUBLE_EXCLAMATION: char = '☄';

/// When a glyph is turned back into its literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Restoration {
    /// Per segment, right after boundary scanning
    Symbol,
    /// During reassembly, after degenerate segments are dropped
    Ellipsis,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Sentinel {
    pub glyph: char,
    pub literal: &'static str,
    pub restoration: Restoration,
}

const fn symbol(glyph: char, literal: &'static str) -> Sentinel {
    Sentinel {
        glyph,
        literal,
        restoration: Restoration::Symbol,
    }
}

const fn ellipsis(glyph: char, literal: &'static str) -> Sentinel {
    Sentinel {
        glyph,
        literal,
        restoration: Restoration::Ellipsis,
    }
}

pub(crate) const ALPHABET: [Sentinel; 20] = [
    symbol(AMBIGUOUS_PERIOD, "."),
    symbol(LIST_COMMA, "،"),
    symbol(TIME_COLON, ":"),
    symbol('ᓰ', "。"),
    symbol('ᓱ', "．"),
    symbol('ᓳ', "！"),
    symbol('ᓴ', "!"),
    symbol('ᓷ', "?"),
    symbol('ᓸ', "？"),
    symbol(QUESTION_EXCLAMATION, "?!"),
    symbol(EXCLAMATION_QUESTION, "!?"),
    symbol(DOUBLE_QUESTION, "??"),
    symbol(DOUBLE_EXCLAMATION, "!!"),
    symbol(END_OF_LINE, ""),
    symbol(NEWLINE, "\n"),
    ellipsis(EMAIL_PERIOD, "."),
    ellipsis(SPACED_ELLIPSIS, " . . . "),
    ellipsis(SPACED_FINAL_ELLIPSIS, ". . . ."),
    ellipsis(ELLIPSIS, "..."),
    ellipsis(BOUNDARY_ELLIPSIS, ".."),
];

/// Check whether `c` belongs to the reserved alphabet
pub fn is_reserved(c: char) -> bool {
    ALPHABET.iter().any(|s| s.glyph == c)
}

/// Reject input that already contains a reserved glyph
pub(crate) fn check_input(text: &str) -> Result<()> {
    match text.chars().enumerate().find(|(_, c)| is_reserved(*c)) {
        Some((offset, character)) => Err(Error::ReservedCharacter { character, offset }),
        None => Ok(()),
    }
}

/// Masked form of punctuation inside a protected span
pub(crate) fn protected_glyph(c: char) -> Option<char> {
    match c {
        '.' => Some(AMBIGUOUS_PERIOD),
        '。' => Some('ᓰ'),
        '．' => Some('ᓱ'),
        '！' => Some('ᓳ'),
        '!' => Some('ᓴ'),
        '?' => Some('ᓷ'),
        '？' => Some('ᓸ'),
        _ => None,
    }
}

fn restore(text: &str, stage: Restoration) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match ALPHABET
            .iter()
            .find(|s| s.glyph == c && s.restoration == stage)
        {
            Some(sentinel) => out.push_str(sentinel.literal),
            None => out.push(c),
        }
    }
    out
}

/// Restore every symbol-stage glyph in a segment
pub(crate) fn restore_symbols(text: &str) -> String {
    restore(text, Restoration::Symbol)
}

/// Restore ellipsis and e-mail glyphs
pub(crate) fn reinsert_ellipses(text: &str) -> String {
    restore(text, Restoration::Ellipsis)
}
