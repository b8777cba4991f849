//! Quoted and bracketed span protection
//!
//! Terminal punctuation inside a quotation or a parenthetical never ends
//! the surrounding sentence. Spans are located on the unmasked line and
//! their punctuation is replaced in place, so span order does not matter.

use crate::language::Language;
use crate::sentinel::protected_glyph;

/// Words that carry an exclamation mark as part of their spelling
const EXCLAMATION_WORDS: [&str; 17] = [
    "!Xũ",
    "!Kung",
    "ǃʼOǃKung",
    "!Xuun",
    "!Kung-Ekoka",
    "ǃHu",
    "ǃKhung",
    "ǃKu",
    "ǃung",
    "ǃXo",
    "ǃXû",
    "ǃXung",
    "ǃXũ",
    "!Xun",
    "Yahoo!",
    "Y!J",
    "Yum!",
];

/// Paired delimiters scanned for every language, as
/// `(open, close, nested_open_forbidden)`
const BRACKETS: [(char, char, bool); 6] = [
    ('「', '」', true),
    ('(', ')', true),
    ('（', '）', true),
    ('«', '»', false),
    ('”', '”', false),
    ('“', '”', false),
];

/// Character range `[start, end)` of a protected span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

/// Mask terminal punctuation inside every protected span of `line`
pub(crate) fn protect_spans(line: &str, language: Language) -> String {
    let mut chars: Vec<char> = line.chars().collect();

    for span in find_spans(&chars, language) {
        for c in &mut chars[span.start..span.end] {
            if let Some(masked) = protected_glyph(*c) {
                *c = masked;
            }
        }
    }

    chars.into_iter().collect()
}

pub(crate) fn find_spans(chars: &[char], language: Language) -> Vec<Span> {
    let mut spans = exclamation_words(chars);

    for (open, close, nested_open_forbidden) in BRACKETS {
        spans.extend(delimited(chars, &[open], close, nested_open_forbidden));
    }

    if language.uses_low_opening_quotes() {
        if chars.contains(&'„') {
            spans.extend(delimited(chars, &['„'], '“', false));
        } else {
            spans.extend(delimited(chars, &[',', ','], '“', false));
        }
    } else {
        spans.extend(delimited(chars, &['"'], '"', false));
    }

    spans.extend(single_quoted(chars));
    spans
}

fn exclamation_words(chars: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    for word in EXCLAMATION_WORDS {
        let needle: Vec<char> = word.chars().collect();
        if needle.len() > chars.len() {
            continue;
        }
        for start in 0..=chars.len() - needle.len() {
            if chars[start..start + needle.len()] == needle[..] {
                spans.push(Span {
                    start,
                    end: start + needle.len(),
                });
            }
        }
    }
    spans
}

/// Non-overlapping `open … close` spans with backslash escapes
///
/// The body may not contain the closing delimiter, nor the opening one
/// when `nested_open_forbidden` is set. A backslash escapes the character
/// after it. A body that runs into a forbidden character or the end of the
/// line produces no span.
fn delimited(chars: &[char], open: &[char], close: char, nested_open_forbidden: bool) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i + open.len() <= chars.len() {
        if chars[i..i + open.len()] != *open {
            i += 1;
            continue;
        }
        match closing_index(chars, i + open.len(), close, nested_open_forbidden.then(|| open[0])) {
            Some(closing) => {
                spans.push(Span {
                    start: i,
                    end: closing + 1,
                });
                i = closing + 1;
            }
            None => i += 1,
        }
    }

    spans
}

fn closing_index(chars: &[char], from: usize, close: char, forbidden: Option<char>) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        match chars[j] {
            c if c == close => return Some(j),
            '\\' => j += 2,
            c if Some(c) == forbidden => return None,
            _ => j += 1,
        }
    }
    None
}

/// Single-quoted spans opened after whitespace
///
/// An apostrophe followed by an ASCII letter stays inside the quotation
/// ("'it's here'"). The span closes at the first apostrophe that is not,
/// or at the last inner apostrophe when the line ends first.
fn single_quoted(chars: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 1;

    while i < chars.len() {
        if chars[i] != '\'' || !chars[i - 1].is_whitespace() {
            i += 1;
            continue;
        }

        let mut inner = None;
        let mut j = i + 1;
        let closing = loop {
            match chars.get(j) {
                None => break inner,
                Some('\'') if chars.get(j + 1).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    inner = Some(j);
                    j += 2;
                }
                Some('\'') => break Some(j),
                Some(_) => j += 1,
            }
        };

        match closing {
            Some(closing) => {
                spans.push(Span {
                    start: i,
                    end: closing + 1,
                });
                i = closing + 1;
            }
            None => i += 1,
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protect(line: &str) -> String {
        protect_spans(line, Language::English)
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            protect("She said \"Stop. Now!\" and left."),
            "She said \"Stop∯ Nowᓴ\" and left."
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(protect("Yes (really? maybe.) ok."), "Yes (reallyᓷ maybe∯) ok.");
        assert_eq!(protect("Open (never closed. Done."), "Open (never closed. Done.");
    }

    #[test]
    fn test_nested_open_paren_blocks_span() {
        assert_eq!(protect("a (b (c.) d."), "a (b (c∯) d.");
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(protect(r#"x "a \" b." y."#), r#"x "a \" b∯" y."#);
    }

    #[test]
    fn test_cjk_brackets() {
        assert_eq!(protect("「これは。テスト！」と言った。"), "「これはᓰテストᓳ」と言った。");
    }

    #[test]
    fn test_exclamation_words() {
        assert_eq!(protect("I use Yahoo! every day."), "I use Yahooᓴ every day.");
    }

    #[test]
    fn test_single_quotes_need_leading_space() {
        assert_eq!(protect("He said 'no. way' then."), "He said 'no∯ way' then.");
        assert_eq!(protect("don't. won't."), "don't. won't.");
        assert_eq!(protect("say 'it's fine. ok' now."), "say 'it's fine∯ ok' now.");
    }

    #[test]
    fn test_german_low_quotes() {
        assert_eq!(
            protect_spans("Er sagte „Hallo. Tschüss“ und ging.", Language::German),
            "Er sagte „Hallo∯ Tschüss“ und ging."
        );
        assert_eq!(
            protect_spans("Er sagte ,,Hallo. Tschüss“ und ging.", Language::German),
            "Er sagte ,,Hallo∯ Tschüss“ und ging."
        );
        // Straight quotes are not quotations in German text.
        assert_eq!(
            protect_spans("Er sagte \"Hallo. Tschüss\" und ging.", Language::German),
            "Er sagte \"Hallo. Tschüss\" und ging."
        );
    }

    #[test]
    fn test_quotes_allow_nested_opener() {
        assert_eq!(protect("Il a dit «Un. «deux» trois» hier."), "Il a dit «Un∯ «deux» trois» hier.");
        assert_eq!(protect("He wrote “One. “two” three” today."), "He wrote “One∯ “two” three” today.");
    }

    #[test]
    fn test_guillemets() {
        assert_eq!(protect("Il a dit «Non. Jamais.» hier."), "Il a dit «Non∯ Jamais∯» hier.");
    }
}
