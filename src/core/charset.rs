//! Alphabet membership test
//!
//! A language pack describes its alphabet as a regular-expression character
//! class such as `[A-Z]` or `[A-ZÖÄÅ]`. A `Charset` compiles that pattern once
//! and answers whether a single character belongs to the alphabet.

use regex::Regex;
use std::fmt;

/// Compiled alphabet pattern
#[derive(Clone)]
pub struct Charset {
    pattern: String,
    regex: Regex,
}

impl Charset {
    /// Compile a charset pattern, anchored so that it matches exactly one character
    ///
    /// # Errors
    /// Returns the regex error if the pattern does not compile.
    ///
    /// # Examples
    /// ```
    /// use termwordle::core::Charset;
    ///
    /// let charset = Charset::new("[A-Z]").unwrap();
    /// assert!(charset.contains('Q'));
    /// assert!(!charset.contains('q'));
    /// assert!(!charset.contains('1'));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Check whether a single character belongs to the alphabet
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }

    /// The source pattern, as written in the language pack
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.pattern).finish()
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Charset {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_class() {
        let charset = Charset::new("[A-Z]").unwrap();
        assert!(charset.contains('A'));
        assert!(charset.contains('Z'));
        assert!(!charset.contains('a'));
        assert!(!charset.contains('_'));
        assert!(!charset.contains(' '));
    }

    #[test]
    fn accented_class() {
        let charset = Charset::new("[A-ZÉËÊÈÎÏÇÀÔÙ]").unwrap();
        assert!(charset.contains('É'));
        assert!(charset.contains('Ç'));
        assert!(!charset.contains('é'));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        // Without the non-capturing group, "^A|B$" would match "AB..." prefixes
        let charset = Charset::new("A|B").unwrap();
        assert!(charset.contains('A'));
        assert!(charset.contains('B'));
        assert!(!charset.contains('C'));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(Charset::new("[A-Z").is_err());
    }
}
