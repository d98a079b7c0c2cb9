//! Word representation
//!
//! A `Word` is an upper-cased sequence of alphabet letters. Its length is not
//! fixed here; the dictionary filters words down to the configured length.

use super::Charset;
use rustc_hash::FxHashMap;
use std::fmt;

/// An upper-case word made only of alphabet letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, upper-casing it and checking every letter against the alphabet
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - A character (after upper-casing) is outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use termwordle::core::{Charset, Word};
    ///
    /// let charset = Charset::new("[A-Z]").unwrap();
    /// let word = Word::new("crane", &charset).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt", &charset).is_err());
    /// ```
    pub fn new(text: &str, charset: &Charset) -> Result<Self, WordError> {
        let text = text.trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|&c| !charset.contains(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word, provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &c in &self.letters {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Charset {
        Charset::new("[A-Z]").unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE", &latin()).unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), &['C', 'R', 'A', 'N', 'E']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane", &latin()).unwrap();
        assert_eq!(word.text(), "CRANE");

        let word2 = Word::new("CrAnE", &latin()).unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new("", &latin()), Err(WordError::Empty));
        assert_eq!(Word::new("   ", &latin()), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3", &latin()),
            Err(WordError::InvalidCharacter('3'))
        );
        assert!(Word::new("cr ne", &latin()).is_err());
        assert!(Word::new("cran!", &latin()).is_err());
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        let charset = Charset::new("[A-ZÉÈ]").unwrap();
        let word = Word::new("élève", &charset).unwrap();
        assert_eq!(word.text(), "ÉLÈVE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed", &latin()).unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'Z'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", &latin()).unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
