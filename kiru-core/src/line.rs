//! Per-line boundary analysis
//!
//! A line is one record of the masked document. It is masked further
//! (ellipses, e-mail addresses, quotations, punctuation clusters) and then
//! cut by the language's boundary grammar. Segments leave with their
//! symbol sentinels restored.

use tracing::trace;

use crate::grammar::BoundaryGrammar;
use crate::language::Language;
use crate::protect::protect_spans;
use crate::scanner::{is_word_char, rewrite, substitute, CharWindow};
use crate::sentinel::{
    self, BOUNDARY_ELLIPSIS, DOUBLE_EXCLAMATION, DOUBLE_QUESTION, ELLIPSIS, EMAIL_PERIOD,
    END_OF_LINE, EXCLAMATION_QUESTION, LIST_COMMA, NEWLINE, QUESTION_EXCLAMATION,
    SPACED_ELLIPSIS, SPACED_FINAL_ELLIPSIS, TIME_COLON,
};

/// Punctuation clusters folded into one terminator, in order
const CLUSTERS: [(&str, char); 4] = [
    ("?!", QUESTION_EXCLAMATION),
    ("!?", EXCLAMATION_QUESTION),
    ("??", DOUBLE_QUESTION),
    ("!!", DOUBLE_EXCLAMATION),
];

/// Splits masked lines into segments for one language
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineAnalyzer {
    language: Language,
    grammar: BoundaryGrammar,
}

impl LineAnalyzer {
    pub(crate) fn new(language: Language) -> Self {
        Self {
            language,
            grammar: BoundaryGrammar::for_language(language),
        }
    }

    pub(crate) fn analyze(&self, line: &str) -> Vec<String> {
        let line = line.replace('\n', &NEWLINE.to_string());
        let line = mask_email_periods(&mask_ellipses(&line));

        if !self.grammar.contains_punctuation(&line) {
            return vec![sentinel::restore_symbols(&line)];
        }

        let mut line = line;
        if self.language.appends_end_marker() && !self.grammar.ends_with_punctuation(&line) {
            line.push(END_OF_LINE);
        }

        let line = fold_clusters(&protect_spans(&line, self.language));
        let mut line = if self.language.rewrites_list_punctuation() {
            mask_list_punctuation(&line)
        } else if self.grammar.is_latin() {
            mask_interjections(&line)
        } else {
            line
        };

        // Protection can mask the final terminator ("I love Yahoo!").
        if self.language.appends_end_marker() && !self.grammar.ends_with_terminator(&line) {
            line.push(END_OF_LINE);
        }

        let segments: Vec<String> = self
            .grammar
            .split(&line)
            .iter()
            .map(|segment| sentinel::restore_symbols(segment))
            .collect();
        trace!(language = %self.language, segments = segments.len(), "analysed line");
        segments
    }
}

fn is_spaced(c: Option<char>) -> bool {
    c.is_some_and(char::is_whitespace)
}

/// Mask the ellipsis shapes, most specific first
pub(crate) fn mask_ellipses(line: &str) -> String {
    if !line.contains('.') {
        return line.to_string();
    }

    // " . . . "
    let line = rewrite(line, |w, out| {
        let spaced = (0..7).all(|k| match k % 2 {
            0 => is_spaced(w.ahead(k)),
            _ => w.ahead(k) == Some('.'),
        });
        if spaced {
            out.push(SPACED_ELLIPSIS);
            7
        } else {
            0
        }
    });

    // ". . . ." closing the line after a lowercase word
    let line = rewrite(&line, |w, out| {
        let len = w.chars().len();
        let shape = w.position() + 7 == len
            && w.prev().is_some_and(|c| c.is_ascii_lowercase())
            && (0..7).all(|k| match k % 2 {
                0 => w.ahead(k) == Some('.'),
                _ => is_spaced(w.ahead(k)),
            });
        if shape {
            out.push(SPACED_FINAL_ELLIPSIS);
            7
        } else {
            0
        }
    });

    // Four periods before a capital: the fourth one ends the sentence.
    let line = rewrite(&line, |w, out| {
        let shape = w.starts_with("....")
            && w.prev().is_some_and(|c| !c.is_whitespace())
            && is_spaced(w.ahead(4))
            && w.ahead(5).is_some_and(|c| c.is_ascii_uppercase());
        if shape {
            out.push(ELLIPSIS);
            3
        } else {
            0
        }
    });

    let line = rewrite(&line, |w, out| {
        let third = CharWindow::new(w.chars(), w.position() + 2);
        if w.starts_with("...") && third.after_spacing().is_some_and(|c| c.is_ascii_uppercase()) {
            out.push(BOUNDARY_ELLIPSIS);
            out.push('.');
            3
        } else {
            0
        }
    });

    rewrite(&line, |w, out| {
        if w.starts_with("...") {
            out.push(ELLIPSIS);
            3
        } else {
            0
        }
    })
}

/// Mask periods between word characters ("john.doe@example.com")
pub(crate) fn mask_email_periods(line: &str) -> String {
    rewrite(line, |w, out| match (w.current(), w.next(), w.ahead(2)) {
        (Some(a), Some('.'), Some(b)) if is_word_char(a) && is_word_char(b) => {
            out.push(a);
            out.push(EMAIL_PERIOD);
            out.push(b);
            3
        }
        _ => 0,
    })
}

/// Fold "?!", "!?", "??" and "!!" into single terminators
pub(crate) fn fold_clusters(line: &str) -> String {
    CLUSTERS
        .iter()
        .fold(line.to_string(), |line, (cluster, glyph)| {
            line.replace(cluster, &glyph.to_string())
        })
}

/// Mask "?" and "!" that do not end a sentence: before a closing quote, or
/// an exclamation before a lowercase word
pub(crate) fn mask_interjections(line: &str) -> String {
    let before_quote = |w: &CharWindow<'_>| matches!(w.next(), Some('\'' | '"'));

    let line = substitute(line, '?', 'ᓷ', before_quote);
    substitute(&line, '!', 'ᓴ', |w| {
        let lower_at = |k: usize| w.ahead(k).is_some_and(|c| c.is_ascii_lowercase());
        before_quote(w)
            || (w.next() == Some(',') && is_spaced(w.ahead(2)) && lower_at(3))
            || (is_spaced(w.next()) && lower_at(2))
    })
}

/// Mask colons in clock times and redundant Arabic list commas
pub(crate) fn mask_list_punctuation(line: &str) -> String {
    let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    let line = substitute(line, ':', TIME_COLON, |w| is_digit(w.prev()) && is_digit(w.next()));

    substitute(&line, '،', LIST_COMMA, |w| {
        if !is_spaced(w.next()) {
            return false;
        }
        let rest = &w.chars()[w.position() + 2..];
        let run = rest.iter().take_while(|c| !c.is_whitespace()).count();
        run > 0 && rest[..run].contains(&'،')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(line: &str) -> Vec<String> {
        LineAnalyzer::new(Language::English).analyze(line)
    }

    #[test]
    fn test_line_without_punctuation_is_one_segment() {
        assert_eq!(english("no punctuation here"), vec!["no punctuation here"]);
        assert_eq!(english("two\nrows"), vec!["two\nrows"]);
    }

    #[test]
    fn test_end_marker_closes_last_segment() {
        assert_eq!(english("One. Two"), vec!["One.", "Two"]);
    }

    #[test]
    fn test_protected_final_exclamation_keeps_clause() {
        assert_eq!(english("Hello world. I love Yahoo!"), vec!["Hello world.", "I love Yahoo!"]);
        assert_eq!(english("I love Yahoo!"), vec!["I love Yahoo!"]);
    }

    #[test]
    fn test_clusters_end_sentences() {
        assert_eq!(english("Really?! Yes!! Fine."), vec!["Really?!", "Yes!!", "Fine."]);
    }

    #[test]
    fn test_interjection_before_lowercase() {
        assert_eq!(english("Wow! what a day."), vec!["Wow! what a day."]);
        assert_eq!(english("\"Stop!\" she said."), vec!["\"Stop!\" she said."]);
    }

    #[test]
    fn test_ellipses() {
        assert_eq!(mask_ellipses("Wait... what"), "Waitƪ what");
        assert_eq!(mask_ellipses("I see... Then"), "I see☏. Then");
        assert_eq!(mask_ellipses("end.... Next"), "endƪ. Next");
        assert_eq!(mask_ellipses("a . . . b"), "a♟b");
        assert_eq!(mask_ellipses("trailing off. . . ."), "trailing off♝");
    }

    #[test]
    fn test_email_periods() {
        assert_eq!(mask_email_periods("mail john.doe@x.com now"), "mail john∮doe@x∮com now");
        assert_eq!(mask_email_periods("end. Next"), "end. Next");
    }

    #[test]
    fn test_arabic_list_punctuation() {
        assert_eq!(mask_list_punctuation("الساعة 10:30"), "الساعة 10♭30");
        assert_eq!(mask_list_punctuation("أ، ب، ج"), "أ♬ ب، ج");
    }

    #[test]
    fn test_arabic_has_no_end_marker() {
        let segments = LineAnalyzer::new(Language::Arabic).analyze("مرحبا. كيف حالك");
        assert_eq!(segments, vec!["مرحبا.", " كيف حالك"]);
    }
}
