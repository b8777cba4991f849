//! Possessives, single-letter initials and coordinates

use crate::scanner::{substitute, CharWindow};
use crate::sentinel::AMBIGUOUS_PERIOD;

/// Mask a period directly before a possessive `'s` ("Inc.'s results")
pub(crate) fn mask_possessive(text: &str) -> String {
    substitute(text, '.', AMBIGUOUS_PERIOD, |w| {
        w.followed_by("'s") && w.ahead(3).map_or(true, char::is_whitespace)
    })
}

/// Mask the period of a single-letter initial ("J. Smith")
///
/// The letter must start the text or follow whitespace, and the period must
/// be followed by whitespace. Lowercase letters count only when
/// `lowercase` is set.
pub(crate) fn mask_initials(text: &str, lowercase: bool) -> String {
    substitute(text, '.', AMBIGUOUS_PERIOD, |w| {
        let Some(letter) = w.prev() else {
            return false;
        };
        let is_initial =
            letter.is_ascii_uppercase() || (lowercase && letter.is_ascii_lowercase());

        is_initial
            && w.next().is_some_and(char::is_whitespace)
            && w.back(2).map_or(true, char::is_whitespace)
    })
}

/// Mask a period after a degree sign that continues a coordinate ("40°. 5")
pub(crate) fn mask_coordinates(text: &str) -> String {
    substitute(text, '.', AMBIGUOUS_PERIOD, |w| {
        w.prev() == Some('°')
            && w.back(2).is_some_and(char::is_alphanumeric)
            && next_visible(w).is_some_and(|c| c.is_ascii_digit())
    })
}

fn next_visible(w: &CharWindow<'_>) -> Option<char> {
    w.chars()
        .get(w.position() + 1..)?
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}
