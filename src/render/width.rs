//! Display width of styled text

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// CSI sequences: colors, attributes, cursor moves, erases
static CONTROL_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("static pattern compiles"));

/// Remove terminal control sequences, leaving the printable text
#[must_use]
pub fn strip_control(text: &str) -> Cow<'_, str> {
    CONTROL_SEQUENCE.replace_all(text, "")
}

/// Number of terminal columns a styled line occupies
#[must_use]
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_control(text).as_ref())
}

/// Width used to center every line: the widest line plus a column of margin each side
#[must_use]
pub fn layout_width<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    2 + lines
        .into_iter()
        .map(|line| visible_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_width() {
        assert_eq!(visible_width("Enter guess: "), 13);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn control_sequences_do_not_count() {
        let styled = "\x1b[38;5;15m\x1b[48;5;2m A \x1b[0m";
        assert_eq!(strip_control(styled), " A ");
        assert_eq!(visible_width(styled), 3);
        assert_eq!(visible_width("\x1b[5A\x1b[K"), 0);
    }

    #[test]
    fn accented_letters_are_one_column() {
        assert_eq!(visible_width("ÉLÈVE"), 5);
    }

    #[test]
    fn layout_width_adds_margin() {
        assert_eq!(layout_width(["abc", "\x1b[1mabcdef\x1b[0m", ""]), 8);
        assert_eq!(layout_width(Vec::<String>::new()), 2);
    }
}
