//! Character window for context-sensitive rewriting
//!
//! The rules that decide whether a character is a boundary need arbitrary
//! lookbehind and lookahead. `CharWindow` gives O(1) access to any offset
//! around the current position of a decoded character buffer, and
//! [`rewrite`] drives a window over a string in a single left-to-right pass.

/// Read-only view of a character buffer positioned at one index
#[derive(Debug, Clone, Copy)]
pub(crate) struct CharWindow<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> CharWindow<'a> {
    pub(crate) fn new(chars: &'a [char], pos: usize) -> Self {
        Self { chars, pos }
    }

    /// Current character index
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn chars(&self) -> &'a [char] {
        self.chars
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Character `n` positions behind the current one
    pub(crate) fn back(&self, n: usize) -> Option<char> {
        self.pos.checked_sub(n).map(|i| self.chars[i])
    }

    /// Character `n` positions ahead of the current one (0 = current)
    pub(crate) fn ahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    pub(crate) fn prev(&self) -> Option<char> {
        self.back(1)
    }

    pub(crate) fn next(&self) -> Option<char> {
        self.ahead(1)
    }

    /// Check whether the text immediately after the current character starts with `s`
    pub(crate) fn followed_by(&self, s: &str) -> bool {
        starts_with_at(self.chars, self.pos + 1, s)
    }

    /// Check whether the text immediately before the current character ends with `s`
    pub(crate) fn preceded_by(&self, s: &str) -> bool {
        let len = s.chars().count();
        self.pos >= len && starts_with_at(self.chars, self.pos - len, s)
    }

    /// Check whether the text starting at the current character is `s`
    pub(crate) fn starts_with(&self, s: &str) -> bool {
        starts_with_at(self.chars, self.pos, s)
    }

    /// First character after the whitespace run that follows the current one
    ///
    /// Returns `None` when the current character is not followed by
    /// whitespace at all.
    pub(crate) fn after_spacing(&self) -> Option<char> {
        let rest = self.chars.get(self.pos + 1..)?;
        let spaces = rest.iter().take_while(|c| c.is_whitespace()).count();
        if spaces == 0 {
            return None;
        }
        rest.get(spaces).copied()
    }

    /// Index just past the whitespace run that follows the current one
    pub(crate) fn skip_spacing(&self) -> usize {
        let start = self.pos + 1;
        start
            + self.chars[start.min(self.chars.len())..]
                .iter()
                .take_while(|c| c.is_whitespace())
                .count()
    }
}

/// Check whether `chars[at..]` starts with `s`
pub(crate) fn starts_with_at(chars: &[char], at: usize, s: &str) -> bool {
    let mut index = at;
    for expected in s.chars() {
        match chars.get(index) {
            Some(&c) if c == expected => index += 1,
            _ => return false,
        }
    }
    true
}

/// Check whether any of `needles` occurs in `chars` at `at`
pub(crate) fn matches_any(chars: &[char], at: usize, needles: &[&str]) -> bool {
    needles.iter().any(|n| starts_with_at(chars, at, n))
}

/// Word characters in the regex sense: letters, digits and underscore
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Rewrite `text` in one pass
///
/// At each position the rule may append a replacement to the output and
/// return how many input characters it consumed. Returning 0 copies the
/// current character unchanged. The rule always sees the original input,
/// so earlier replacements never feed later lookbehind.
pub(crate) fn rewrite<F>(text: &str, mut rule: F) -> String
where
    F: FnMut(CharWindow<'_>, &mut String) -> usize,
{
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < chars.len() {
        match rule(CharWindow::new(&chars, pos), &mut out) {
            0 => {
                out.push(chars[pos]);
                pos += 1;
            }
            consumed => pos += consumed,
        }
    }

    out
}

/// Replace every `target` character for which `rule` holds
pub(crate) fn substitute<F>(text: &str, target: char, replacement: char, rule: F) -> String
where
    F: Fn(&CharWindow<'_>) -> bool,
{
    if !text.contains(target) {
        return text.to_string();
    }

    rewrite(text, |window, out| {
        if window.current() == Some(target) && rule(&window) {
            out.push(replacement);
            1
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_window_offsets() {
        let buffer = chars("ab.cd");
        let window = CharWindow::new(&buffer, 2);

        assert_eq!(window.current(), Some('.'));
        assert_eq!(window.prev(), Some('b'));
        assert_eq!(window.back(2), Some('a'));
        assert_eq!(window.back(3), None);
        assert_eq!(window.next(), Some('c'));
        assert_eq!(window.ahead(3), None);
    }

    #[test]
    fn test_followed_and_preceded_by() {
        let buffer = chars("Mr. Smith's.");
        let window = CharWindow::new(&buffer, 2);

        assert!(window.preceded_by("Mr"));
        assert!(!window.preceded_by("xMr"));
        assert!(window.followed_by(" Sm"));
        assert!(!window.followed_by("Smith"));
    }

    #[test]
    fn test_after_spacing() {
        let buffer = chars("end.   Next");
        assert_eq!(CharWindow::new(&buffer, 3).after_spacing(), Some('N'));
        assert_eq!(CharWindow::new(&buffer, 3).skip_spacing(), 7);

        let buffer = chars("a.b");
        assert_eq!(CharWindow::new(&buffer, 1).after_spacing(), None);
        assert_eq!(CharWindow::new(&buffer, 1).skip_spacing(), 2);
    }

    #[test]
    fn test_substitute_sees_original_text() {
        // Each period is judged against the unmodified neighbours.
        let out = substitute("1.2.3", '.', '∯', |w| {
            w.prev().is_some_and(|c| c.is_ascii_digit())
        });
        assert_eq!(out, "1∯2∯3");
    }

    #[test]
    fn test_rewrite_consumes_multiple_characters() {
        let out = rewrite("a...b", |w, out| {
            if w.starts_with("...") {
                out.push('ƪ');
                3
            } else {
                0
            }
        });
        assert_eq!(out, "aƪb");
    }

    #[test]
    fn test_matches_any() {
        let buffer = chars("I'm here");
        assert!(matches_any(&buffer, 0, &["I'll", "I'm"]));
        assert!(!matches_any(&buffer, 1, &["I'm"]));
    }

    #[test]
    fn test_multibyte_text() {
        let out = substitute("日本。东京。", '。', 'ᓰ', |w| w.next().is_some());
        assert_eq!(out, "日本ᓰ东京。");
    }
}
