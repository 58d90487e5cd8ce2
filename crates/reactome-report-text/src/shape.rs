//! Unbreakable text.
//!
//! Layout engines happily wrap or re-justify inside a name such as
//! "D'Eustachio, P.". [`shape`] glues every character to its neighbour with
//! U+2060 WORD JOINER and turns whitespace into U+00A0 NO-BREAK SPACE, so the
//! string can only move as a whole.

use once_cell::sync::Lazy;
use regex::Regex;

/// Zero-width character that forbids a line break on either side.
pub const WORD_JOINER: char = '\u{2060}';

/// Space that is never used as a break point.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Make `text` resistant to line breaking and justification.
///
/// Each maximal whitespace run becomes a single no-break space, and a word
/// joiner is inserted between every adjacent pair of characters. Joiners
/// already present are dropped first, so shaping twice is the same as
/// shaping once.
pub fn shape(text: &str) -> String {
    let unjoined = text.replace(WORD_JOINER, "");
    let mut buf = [0; 4];
    let no_break_space: &str = NO_BREAK_SPACE.encode_utf8(&mut buf);
    let collapsed = WHITESPACE.replace_all(&unjoined, no_break_space);

    let mut shaped = String::with_capacity(collapsed.len() * 4);
    for (i, c) in collapsed.chars().enumerate() {
        if i > 0 {
            shaped.push(WORD_JOINER);
        }
        shaped.push(c);
    }
    shaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unshape(text: &str) -> String {
        text.chars()
            .filter(|&c| c != WORD_JOINER)
            .map(|c| if c == NO_BREAK_SPACE { ' ' } else { c })
            .collect()
    }

    #[test]
    fn test_joiner_between_every_pair() {
        assert_eq!(shape("abc"), "a\u{2060}b\u{2060}c");
    }

    #[test]
    fn test_whitespace_becomes_single_no_break_space() {
        assert_eq!(shape("a b"), "a\u{2060}\u{a0}\u{2060}b");
        assert_eq!(shape("a \t\n  b"), shape("a b"));
    }

    #[test]
    fn test_empty_and_single_character() {
        assert_eq!(shape(""), "");
        assert_eq!(shape("x"), "x");
        assert_eq!(shape("   "), "\u{a0}");
    }

    #[test]
    fn test_shape_is_idempotent() {
        for input in ["a b", "Smith, J.", "  leading and trailing  ", "D'Eustachio, P."] {
            let once = shape(input);
            assert_eq!(shape(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_no_plain_whitespace_survives() {
        let shaped = shape("Jassal,   B.\tand\nothers");
        assert!(!shaped.contains(' '));
        assert!(!shaped.contains('\t'));
        assert!(!shaped.contains('\n'));
    }

    #[test]
    fn test_multibyte_characters_are_kept_whole() {
        assert_eq!(shape("Gómez"), "G\u{2060}ó\u{2060}m\u{2060}e\u{2060}z");
        assert_eq!(shape("🧬x"), "🧬\u{2060}x");
    }

    #[test]
    fn test_shape_only_adds_joiners_and_no_break_spaces() {
        assert_eq!(unshape(&shape("Smith,  J.")), "Smith, J.");
    }
}
