//! Text normalisation ahead of segmentation
//!
//! Both collaborators turn line breaks that separate independent records
//! into the record separator `\r`. The segmenter never splits a sentence
//! across a record separator.

use crate::grammar::BoundaryGrammar;
use crate::language::Language;
use crate::scanner::{rewrite, CharWindow};

/// Separator between independently segmented records
pub const RECORD_SEPARATOR: char = '\r';

/// Bullet characters recognised as list markers
const BULLETS: [char; 6] = ['•', '◦', '▪', '‣', '●', '・'];

/// Raw text normalisation
pub trait Cleaner: Send + Sync {
    fn clean(&self, text: &str, language: Language, doc_type: Option<&str>) -> String;
}

/// Record-separator insertion around list items
pub trait ListNormalizer: Send + Sync {
    fn add_line_break(&self, text: &str) -> String;
}

/// Default cleaner
///
/// Normalises line endings and tabs. Every newline becomes a record
/// separator, except for `pdf` documents, whose hard-wrapped lines are
/// joined unless the break follows terminal punctuation or a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl Cleaner for TextCleaner {
    fn clean(&self, text: &str, language: Language, doc_type: Option<&str>) -> String {
        let text = text.replace("\r\n", "\n").replace(['\r', '\u{2028}'], "\n").replace('\t', " ");

        if doc_type.is_some_and(|t| t.eq_ignore_ascii_case("pdf")) {
            unwrap_lines(&text, &BoundaryGrammar::for_language(language))
        } else {
            text.replace('\n', &RECORD_SEPARATOR.to_string())
        }
    }
}

fn unwrap_lines(text: &str, grammar: &BoundaryGrammar) -> String {
    rewrite(text, |w, out| {
        if w.current() != Some('\n') {
            return 0;
        }

        let blank_line = w.next() == Some('\n');
        let last_visible = out.chars().rev().find(|c| *c != ' ');
        let after_terminal = last_visible.is_some_and(|c| {
            c == ':' || c == RECORD_SEPARATOR || grammar.ends_with_punctuation(&c.to_string())
        });

        if blank_line || after_terminal || starts_list_item(&w) {
            out.push(RECORD_SEPARATOR);
        } else if out.ends_with('-')
            && out.chars().rev().nth(1).is_some_and(char::is_alphabetic)
            && w.next().is_some_and(char::is_lowercase)
        {
            out.pop();
        } else if !out.ends_with(' ') {
            out.push(' ');
        }
        1
    })
}

/// Whether the line after the newline at `w` opens a list item
fn starts_list_item(w: &CharWindow<'_>) -> bool {
    let rest = w.chars().get(w.position() + 1..).unwrap_or_default();
    let rest = &rest[rest.iter().take_while(|c| **c == ' ').count()..];
    is_list_marker(rest)
}

/// List marker at the start of `rest`: a bullet, `-`/`*` before a space,
/// up to three digits before `.` or `)`, or a single letter or a roman
/// numeral before `)`
fn is_list_marker(rest: &[char]) -> bool {
    let spaced = |i: usize| rest.get(i).is_some_and(|c| c.is_whitespace());

    match rest.first() {
        None => false,
        Some(c) if BULLETS.contains(c) => true,
        Some('-' | '*') => spaced(1),
        Some(c) if c.is_ascii_digit() => {
            let digits = rest.iter().take_while(|c| c.is_ascii_digit()).count();
            digits <= 3 && matches!(rest.get(digits), Some('.' | ')')) && spaced(digits + 1)
        }
        Some(c) if c.is_alphabetic() => {
            let letters = rest.iter().take_while(|c| c.is_alphabetic()).count();
            let word: String = rest[..letters].iter().collect();
            let marker = letters == 1 || is_roman_numeral(&word);
            marker && rest.get(letters) == Some(&')') && spaced(letters + 1)
        }
        Some('(') => {
            let inner = rest[1..].iter().take_while(|c| c.is_alphanumeric()).count();
            (1..=4).contains(&inner) && rest.get(inner + 1) == Some(&')') && spaced(inner + 2)
        }
        _ => false,
    }
}

fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty()
        && word.len() <= 5
        && (word.chars().all(|c| matches!(c, 'i' | 'v' | 'x'))
            || word.chars().all(|c| matches!(c, 'I' | 'V' | 'X')))
}

/// Default list normaliser
///
/// A newline that opens a list item becomes a record separator, and a
/// bullet inside a line starts a new record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBreaker;

impl ListNormalizer for ListBreaker {
    fn add_line_break(&self, text: &str) -> String {
        rewrite(text, |w, out| match w.current() {
            Some('\n') if starts_list_item(&w) => {
                out.push(RECORD_SEPARATOR);
                1
            }
            Some(c) if BULLETS.contains(&c) && w.prev().is_some_and(|p| p == ' ') => {
                out.push(RECORD_SEPARATOR);
                out.push(c);
                1
            }
            _ => 0,
        })
    }
}
