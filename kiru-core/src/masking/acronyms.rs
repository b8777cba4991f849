//! Multi-period acronyms and the boundaries they hide

use crate::scanner::{is_word_char, starts_with_at, substitute, CharWindow};
use crate::sentinel::AMBIGUOUS_PERIOD;

/// Words that almost always open a sentence
const SENTENCE_STARTERS: [&str; 22] = [
    "A", "Being", "Did", "For", "He", "How", "However", "I", "In", "Millions", "More", "She",
    "That", "The", "There", "They", "We", "What", "When", "Where", "Who", "Why",
];

/// Acronyms that end a sentence when a sentence starter follows,
/// written as they look once masked, without the final period
const BOUNDARY_ACRONYMS: [&str; 9] = [
    "U∯S", "U.S", "U∯K", "U.K", "E∯U", "E.U", "U∯S∯A", "U.S.A", "I",
];

const MERIDIEMS: [&str; 4] = ["a∯m", "A∯M", "p∯m", "P∯M"];

/// Mask every period of letter-period chains ("e.g.", "U.S.A.", "a.b.c")
///
/// A chain needs a final period, except that a chain of three or more
/// letters without one still masks all but its last letter.
pub(crate) fn mask_acronyms(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let starts_chain = chars[i].is_ascii_alphabetic() && (i == 0 || !is_word_char(chars[i - 1]));
        if !starts_chain {
            i += 1;
            continue;
        }

        let mut letters = 1;
        let mut j = i + 1;
        while j + 1 < len && chars[j] == '.' && chars[j + 1].is_ascii_alphabetic() {
            letters += 1;
            j += 2;
        }

        let end = if letters >= 2 && chars.get(j) == Some(&'.') {
            Some(j)
        } else if letters >= 3 {
            Some(j - 2)
        } else {
            None
        };

        match end {
            Some(end) => {
                for c in &mut chars[i..=end] {
                    if *c == '.' {
                        *c = AMBIGUOUS_PERIOD;
                    }
                }
                i = end + 1;
            }
            None => i += 1,
        }
    }

    chars.into_iter().collect()
}

fn followed_by_capital(w: &CharWindow<'_>) -> bool {
    w.next().is_some_and(char::is_whitespace) && w.ahead(2).is_some_and(|c| c.is_ascii_uppercase())
}

/// Restore the final period of "a.m." / "p.m." before a capitalised word
pub(crate) fn restore_meridiem_boundaries(text: &str) -> String {
    substitute(text, AMBIGUOUS_PERIOD, '.', |w| {
        MERIDIEMS.iter().any(|m| w.preceded_by(m)) && followed_by_capital(w)
    })
}

/// Restore the final period of common acronyms followed by a sentence starter
pub(crate) fn restore_acronym_boundaries(text: &str) -> String {
    substitute(text, AMBIGUOUS_PERIOD, '.', |w| {
        let acronym = BOUNDARY_ACRONYMS.iter().any(|a| {
            w.preceded_by(a) && {
                // Whole acronym only: "XU∯S∯" is not "U∯S∯".
                let before = w.position().checked_sub(a.chars().count() + 1);
                before.map_or(true, |i| !is_word_char(w.chars()[i]))
            }
        });
        if !acronym || !w.next().is_some_and(char::is_whitespace) {
            return false;
        }

        let start = w.position() + 2;
        SENTENCE_STARTERS.iter().any(|word| {
            let end = start + word.chars().count();
            starts_with_at(w.chars(), start, word)
                && w.chars().get(end).map_or(true, |&c| !is_word_char(c))
        })
    })
}
