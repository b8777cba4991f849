//! Boundary grammar table
//!
//! Each language maps to a punctuation inventory, used to decide whether a
//! line needs boundary scanning at all, and a matcher that cuts a masked
//! line into sentence-sized pieces.

use crate::language::Language;
use crate::sentinel::{
    DOUBLE_EXCLAMATION, DOUBLE_QUESTION, END_OF_LINE, EXCLAMATION_QUESTION, NEWLINE,
    QUESTION_EXCLAMATION,
};

pub(crate) const LATIN_PUNCTUATION: &[char] = &['。', '．', '.', '！', '!', '?', '？'];

const LATIN_TERMINATORS: &[char] = &[
    '。',
    '．',
    '.',
    '！',
    '!',
    '?',
    '？',
    END_OF_LINE,
    NEWLINE,
    QUESTION_EXCLAMATION,
    EXCLAMATION_QUESTION,
    DOUBLE_QUESTION,
    DOUBLE_EXCLAMATION,
];

const AMHARIC: &[char] = &['፧', '።', '!', '?'];
const ARABIC_PUNCTUATION: &[char] = &['?', '!', ':', '.', '؟', '،'];
const ARABIC_TERMINATORS: &[char] = &[':', '.', '!', '?', '؟', '،'];
const GREEK: &[char] = &['.', ';', '!', '?'];
const PERSIAN: &[char] = &[':', '.', '!', '?', '؟'];
const HINDI_PUNCTUATION: &[char] = &['।', '|', '.', '!', '?'];
const HINDI_TERMINATORS: &[char] = &['।', '|', '!', '?'];
const ARMENIAN: &[char] = &['։', '՜', ':'];
const BURMESE: &[char] = &['။', '၏', '!', '?'];
const URDU: &[char] = &['۔', '؟', '!', '?'];

/// How a masked line is cut into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// Bracketed or quoted spans before a capitalised word, otherwise the
    /// shortest run from a non-space character to a terminator
    Latin,
    /// Shortest run up to any terminator, the rest of the line otherwise
    Terminated(&'static [char]),
}

/// Punctuation inventory and boundary matcher of one language
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundaryGrammar {
    punctuation: &'static [char],
    matcher: Matcher,
}

/// Enclosures tried before the terminator rule, in order
///
/// `(open, close, space_optional)`: the span must be followed by whitespace
/// (optional for fullwidth parentheses) and an ASCII capital.
const ENCLOSURES: [(char, char, bool); 6] = [
    ('（', '）', true),
    ('「', '」', false),
    ('(', ')', false),
    ('\'', '\'', false),
    ('"', '"', false),
    ('“', '”', false),
];

impl BoundaryGrammar {
    pub(crate) fn for_language(language: Language) -> Self {
        let (punctuation, matcher) = match language {
            Language::Amharic => (AMHARIC, Matcher::Terminated(AMHARIC)),
            Language::Arabic => (ARABIC_PUNCTUATION, Matcher::Terminated(ARABIC_TERMINATORS)),
            Language::Greek => (GREEK, Matcher::Terminated(GREEK)),
            Language::Persian => (PERSIAN, Matcher::Terminated(PERSIAN)),
            Language::Hindi => (HINDI_PUNCTUATION, Matcher::Terminated(HINDI_TERMINATORS)),
            Language::Armenian => (ARMENIAN, Matcher::Terminated(ARMENIAN)),
            Language::Burmese => (BURMESE, Matcher::Terminated(BURMESE)),
            Language::Urdu => (URDU, Matcher::Terminated(URDU)),
            Language::English
            | Language::Chinese
            | Language::Danish
            | Language::Dutch
            | Language::French
            | Language::German
            | Language::Italian
            | Language::Japanese
            | Language::Polish
            | Language::Russian
            | Language::Spanish
            | Language::Generic => (LATIN_PUNCTUATION, Matcher::Latin),
        };

        Self {
            punctuation,
            matcher,
        }
    }

    pub(crate) fn is_latin(&self) -> bool {
        self.matcher == Matcher::Latin
    }

    pub(crate) fn contains_punctuation(&self, line: &str) -> bool {
        line.chars().any(|c| self.punctuation.contains(&c))
    }

    pub(crate) fn ends_with_punctuation(&self, line: &str) -> bool {
        line.chars()
            .next_back()
            .is_some_and(|c| self.punctuation.contains(&c))
    }

    /// Whether the masked line ends with a character the matcher cuts on
    pub(crate) fn ends_with_terminator(&self, line: &str) -> bool {
        let terminators = match self.matcher {
            Matcher::Latin => LATIN_TERMINATORS,
            Matcher::Terminated(terminators) => terminators,
        };
        line.chars().next_back().is_some_and(|c| terminators.contains(&c))
    }

    /// Cut a masked line into segments
    pub(crate) fn split(&self, line: &str) -> Vec<String> {
        let chars: Vec<char> = line.chars().collect();
        match self.matcher {
            Matcher::Latin => split_latin(&chars),
            Matcher::Terminated(terminators) => split_terminated(&chars, terminators),
        }
    }
}

fn split_terminated(chars: &[char], terminators: &[char]) -> Vec<String> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, c) in chars.iter().enumerate() {
        if terminators.contains(c) {
            segments.push(chars[start..=i].iter().collect());
            start = i + 1;
        }
    }
    if start < chars.len() {
        segments.push(chars[start..].iter().collect());
    }

    segments
}

fn split_latin(chars: &[char]) -> Vec<String> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        match enclosed_span(chars, pos).or_else(|| terminated_run(chars, pos)) {
            Some(end) => {
                segments.push(chars[pos..end].iter().collect());
                pos = end;
            }
            // Characters no alternative can start from are dropped.
            None => pos += 1,
        }
    }

    segments
}

/// End of a bracketed or quoted span at `pos` that precedes a capital
fn enclosed_span(chars: &[char], pos: usize) -> Option<usize> {
    let &(_, close, space_optional) = ENCLOSURES.iter().find(|(open, _, _)| chars[pos] == *open)?;
    let closing = pos + 1 + chars[pos + 1..].iter().position(|&c| c == close)?;
    let end = closing + 1;

    let capital_at = |i: usize| chars.get(i).is_some_and(char::is_ascii_uppercase);
    let space_at = |i: usize| chars.get(i).is_some_and(|c| c.is_whitespace());

    let followed = (space_at(end) && capital_at(end + 1)) || (space_optional && capital_at(end));
    followed.then_some(end)
}

/// End of the shortest run from a non-space character to a terminator
fn terminated_run(chars: &[char], pos: usize) -> Option<usize> {
    if chars[pos].is_whitespace() {
        return None;
    }
    chars[pos + 1..]
        .iter()
        .position(|c| LATIN_TERMINATORS.contains(c))
        .map(|offset| pos + 1 + offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(line: &str) -> Vec<String> {
        BoundaryGrammar::for_language(Language::English).split(line)
    }

    #[test]
    fn test_latin_terminators() {
        assert_eq!(latin("Hello world. How are you?"), vec!["Hello world.", "How are you?"]);
    }

    #[test]
    fn test_latin_first_char_is_never_the_terminator() {
        assert_eq!(latin("!abc. def"), vec!["!abc."]);
    }

    #[test]
    fn test_latin_quote_before_capital() {
        let segments = latin("\"Go home\" Then he left.");
        assert_eq!(segments, vec!["\"Go home\"", "Then he left."]);
    }

    #[test]
    fn test_latin_fullwidth_paren_space_optional() {
        let segments = latin("（注意）Next.");
        assert_eq!(segments, vec!["（注意）", "Next."]);
    }

    #[test]
    fn test_latin_unterminated_tail_is_dropped() {
        assert_eq!(latin("Done. trailing"), vec!["Done."]);
    }

    #[test]
    fn test_terminated_grammar_keeps_remainder() {
        let grammar = BoundaryGrammar::for_language(Language::Hindi);
        assert_eq!(grammar.split("एक। दो"), vec!["एक।", " दो"]);
        assert!(grammar.contains_punctuation("a."));
        assert!(grammar.ends_with_punctuation("a."));
        assert_eq!(grammar.split("a. b"), vec!["a. b"]);
    }

    #[test]
    fn test_greek_question_mark() {
        let grammar = BoundaryGrammar::for_language(Language::Greek);
        assert_eq!(grammar.split("Τι κάνεις; Καλά."), vec!["Τι κάνεις;", " Καλά."]);
    }

    #[test]
    fn test_punctuation_inventory() {
        let grammar = BoundaryGrammar::for_language(Language::Japanese);
        assert!(grammar.is_latin());
        assert!(grammar.ends_with_punctuation("今日は。"));
        assert!(!BoundaryGrammar::for_language(Language::Urdu).is_latin());
    }
}
