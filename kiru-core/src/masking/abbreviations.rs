//! Catalog-driven abbreviation masking

use crate::catalog::{AbbreviationEntry, AbbreviationKind, AbbreviationSet};
use crate::language::AbbreviationPolicy;
use crate::scanner::{matches_any, CharWindow};
use crate::sentinel::AMBIGUOUS_PERIOD;

/// Characters after which a word may start besides whitespace
const WORD_OPENERS: [char; 10] = ['(', '[', '"', '\'', '“', '‘', '«', '„', '¿', '¡'];

/// Pronoun tokens that keep an ordinary abbreviation inside its sentence
const PRONOUNS: [&str; 2] = ["I'm", "I'll"];

/// Mask periods that close catalog abbreviations
pub(crate) fn mask_abbreviations(
    text: &str,
    set: &AbbreviationSet,
    policy: AbbreviationPolicy,
) -> String {
    let lowered = text.to_lowercase();
    let mut chars: Vec<char> = text.chars().collect();

    for entry in set.entries() {
        if !lowered.contains(entry.text()) {
            continue;
        }
        let pattern: Vec<char> = entry.text().chars().collect();

        for period in occurrences(&chars, &pattern) {
            if should_mask(&CharWindow::new(&chars, period), entry, policy) {
                chars[period] = AMBIGUOUS_PERIOD;
            }
        }
    }

    chars.into_iter().collect()
}

/// Indices of the periods that close word-initial occurrences of `pattern`
fn occurrences(chars: &[char], pattern: &[char]) -> Vec<usize> {
    let mut periods = Vec::new();
    if pattern.is_empty() || chars.len() <= pattern.len() {
        return periods;
    }

    for start in 0..chars.len() - pattern.len() {
        let period = start + pattern.len();
        if chars[period] != '.' {
            continue;
        }
        let word_start = start == 0 || {
            let before = chars[start - 1];
            before.is_whitespace() || WORD_OPENERS.contains(&before)
        };
        if word_start && eq_ignore_case(&chars[start..period], pattern) {
            periods.push(period);
        }
    }

    periods
}

fn eq_ignore_case(text: &[char], lowered: &[char]) -> bool {
    text.iter()
        .zip(lowered)
        .all(|(&c, &p)| c == p || c.to_lowercase().eq(std::iter::once(p)))
}

fn should_mask(w: &CharWindow<'_>, entry: &AbbreviationEntry, policy: AbbreviationPolicy) -> bool {
    let next = w.next();
    let spaced = next.is_some_and(char::is_whitespace);

    match policy {
        AbbreviationPolicy::BeforeWhitespace => return spaced,
        AbbreviationPolicy::Unconditional => return true,
        AbbreviationPolicy::Contextual | AbbreviationPolicy::WordStart => {}
    }

    // A capitalised word after the period may start a new sentence.
    let pronoun = spaced && starts_pronoun(w.chars(), w.skip_spacing());
    let capitalised = w.after_spacing().is_some_and(char::is_uppercase) && !pronoun;
    if capitalised && entry.kind() != AbbreviationKind::Prefix {
        return false;
    }

    match entry.kind() {
        AbbreviationKind::Prefix => spaced,
        AbbreviationKind::Number => {
            (spaced && w.ahead(2).is_some_and(|c| c.is_ascii_digit()))
                || (spaced && w.after_spacing() == Some('('))
        }
        AbbreviationKind::Ordinary if policy == AbbreviationPolicy::WordStart => true,
        AbbreviationKind::Ordinary => match next {
            Some('.' | ':' | '?' | ',') => true,
            Some(c) if c.is_whitespace() => w
                .ahead(2)
                .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit()) || pronoun,
            _ => false,
        },
    }
}

/// "I", "I'm" or "I'll" as a whole word at `at`
fn starts_pronoun(chars: &[char], at: usize) -> bool {
    matches_any(chars, at, &PRONOUNS)
        || (chars.get(at) == Some(&'I') && chars.get(at + 1).is_some_and(|c| c.is_whitespace()))
}
