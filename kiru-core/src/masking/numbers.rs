//! Periods inside and after numbers

use crate::normalize::RECORD_SEPARATOR;
use crate::scanner::{substitute, CharWindow};
use crate::sentinel::AMBIGUOUS_PERIOD;

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

/// Decimal points, version numbers and leading-period decimals ("3.14", ".5")
fn is_numeric_period(w: &CharWindow<'_>) -> bool {
    (is_digit(w.prev()) && w.next().is_some_and(|c| !c.is_whitespace())) || is_digit(w.next())
}

/// Numbered list item: one or two digits at the start of a line or record
fn is_list_number_period(w: &CharWindow<'_>) -> bool {
    let item_follows = w.next() == Some(')')
        || (w.next().is_some_and(char::is_whitespace)
            && w.ahead(2).is_some_and(|c| !c.is_whitespace()));
    if !item_follows || !is_digit(w.prev()) {
        return false;
    }

    let line_start = |c: Option<char>| c.map_or(true, |c| c == '\n' || c == RECORD_SEPARATOR);
    line_start(w.back(2))
        || (is_digit(w.back(2)) && line_start(w.back(3)))
}

/// German ordinal: one digit, or two digits not starting with zero, after
/// whitespace or a hyphen ("am 3. Mai", "1.-3. Juni")
fn is_ordinal_period(w: &CharWindow<'_>) -> bool {
    if !w.next().is_some_and(char::is_whitespace) || !is_digit(w.prev()) {
        return false;
    }
    let separator = |c: Option<char>| c.is_some_and(|c| c.is_whitespace() || c == '-');

    separator(w.back(2))
        || (w.back(2).is_some_and(|c| ('1'..='9').contains(&c)) && separator(w.back(3)))
}

/// Mask periods that belong to numbers
pub(crate) fn mask_numbers(text: &str, ordinals: bool) -> String {
    let text = substitute(text, '.', AMBIGUOUS_PERIOD, |w| {
        is_numeric_period(w) || is_list_number_period(w)
    });

    if ordinals {
        substitute(&text, '.', AMBIGUOUS_PERIOD, is_ordinal_period)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals() {
        assert_eq!(mask_numbers("It cost $3.50 today.", false), "It cost $3∯50 today.");
        assert_eq!(mask_numbers("only .5 percent", false), "only ∯5 percent");
        assert_eq!(mask_numbers("version 1.2.3 is out", false), "version 1∯2∯3 is out");
    }

    #[test]
    fn test_period_after_number_at_sentence_end() {
        assert_eq!(mask_numbers("I was born in 1990. Then", false), "I was born in 1990. Then");
    }

    #[test]
    fn test_list_numbers() {
        assert_eq!(mask_numbers("1. Buy milk", false), "1∯ Buy milk");
        assert_eq!(mask_numbers("intro\n12. Item", false), "intro\n12∯ Item");
        assert_eq!(mask_numbers("intro\r3. Item", false), "intro\r3∯ Item");
        assert_eq!(mask_numbers("intro\r10. Item", false), "intro\r10∯ Item");
        assert_eq!(mask_numbers("2.) item", false), "2∯) item");
        assert_eq!(mask_numbers("We had 3. Then", false), "We had 3. Then");
    }

    #[test]
    fn test_german_ordinals() {
        assert_eq!(mask_numbers("am 3. Mai", true), "am 3∯ Mai");
        assert_eq!(mask_numbers("vom 1.-23. Juni", true), "vom 1∯-23∯ Juni");
        assert_eq!(mask_numbers("am 3. Mai", false), "am 3. Mai");
        assert_eq!(mask_numbers("im Jahr 1990. Dann", true), "im Jahr 1990. Dann");
    }
}
