//! Language pack definition and parsing
//!
//! A language pack is a TOML document:
//!
//! ```toml
//! description = "British English"
//! charset = "[A-Z]"
//! keyboard = ["_Q W E R T Y U I O P_", "__A S D F G H J K L__", "_< Z X C V B N M [=]_"]
//! default_letters = 5
//! default_attempts = 6
//! default_difficulty = 5
//!
//! [messages]
//! difficulty = "Difficulty level: "
//! # ...
//!
//! [words]
//! frequency = ["ABOUT", "OTHER", "WHICH"]
//! extra = ["AAHED"]
//! ```

use crate::core::{Charset, Word};
use crate::error::GameError;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Localized strings shown by the game
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Messages {
    pub difficulty: String,
    pub poswords: String,
    pub howquit: String,
    pub guess: String,
    pub won: String,
    pub lost: String,
    pub again: String,
    pub yes: char,
    pub bye: String,
    #[serde(default = "default_nowords")]
    pub nowords: String,
}

fn default_nowords() -> String {
    "No words to choose from!".to_string()
}

/// Default game settings suggested by the pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackDefaults {
    pub letters: usize,
    pub attempts: usize,
    pub difficulty: u8,
}

#[derive(Debug, Deserialize)]
struct PackFile {
    #[serde(default)]
    description: String,
    charset: String,
    keyboard: Vec<String>,
    #[serde(default = "default_letters")]
    default_letters: usize,
    #[serde(default = "default_attempts")]
    default_attempts: usize,
    #[serde(default = "default_difficulty")]
    default_difficulty: u8,
    messages: Messages,
    words: WordLists,
}

#[derive(Debug, Deserialize)]
struct WordLists {
    frequency: Vec<String>,
    #[serde(default)]
    extra: Vec<String>,
}

const fn default_letters() -> usize {
    5
}

const fn default_attempts() -> usize {
    6
}

const fn default_difficulty() -> u8 {
    5
}

/// A parsed and validated language pack
#[derive(Debug, Clone)]
pub struct LanguagePack {
    name: String,
    description: String,
    charset: Charset,
    keyboard: Vec<String>,
    defaults: PackDefaults,
    messages: Messages,
    frequency: Vec<Word>,
    extra: Vec<Word>,
}

impl LanguagePack {
    /// Parse a pack from TOML source
    ///
    /// Words are upper-cased; entries with characters outside the charset are
    /// dropped. `origin` only serves error reporting.
    ///
    /// # Errors
    /// Returns `GameError::InvalidPack` for malformed TOML or missing fields and
    /// `GameError::InvalidCharset` if the charset pattern does not compile.
    pub fn from_toml(name: &str, source: &str, origin: &Path) -> Result<Self, GameError> {
        let file: PackFile = toml::from_str(source).map_err(|source| GameError::InvalidPack {
            path: origin.to_path_buf(),
            source,
        })?;

        let charset = Charset::new(&file.charset).map_err(|source| GameError::InvalidCharset {
            pattern: file.charset.clone(),
            source,
        })?;

        let frequency = normalize(name, "frequency", &file.words.frequency, &charset);
        let extra = normalize(name, "extra", &file.words.extra, &charset);

        let mut messages = file.messages;
        messages.yes = messages.yes.to_uppercase().next().unwrap_or(messages.yes);

        Ok(Self {
            name: name.to_string(),
            description: file.description,
            charset,
            keyboard: file.keyboard,
            defaults: PackDefaults {
                letters: file.default_letters,
                attempts: file.default_attempts,
                difficulty: file.default_difficulty,
            },
            messages,
            frequency,
            extra,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Keyboard rows as written in the pack, filler and decorations included
    #[must_use]
    pub fn keyboard(&self) -> &[String] {
        &self.keyboard
    }

    #[must_use]
    pub const fn defaults(&self) -> PackDefaults {
        self.defaults
    }

    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Words ordered from most to least common
    #[must_use]
    pub fn frequency_list(&self) -> &[Word] {
        &self.frequency
    }

    /// Additional words accepted as guesses but never drawn
    #[must_use]
    pub fn extra_words(&self) -> &[Word] {
        &self.extra
    }

    /// Letters that have a key on the layout, in layout order
    #[must_use]
    pub fn alphabet(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for c in self.keyboard.iter().flat_map(|row| row.chars()) {
            if self.charset.contains(c) && !letters.contains(&c) {
                letters.push(c);
            }
        }
        letters
    }

    /// Length of the longest word in the frequency list
    #[must_use]
    pub fn longest_word(&self) -> usize {
        self.frequency.iter().map(Word::len).max().unwrap_or(0)
    }
}

fn normalize(pack: &str, list: &str, raw: &[String], charset: &Charset) -> Vec<Word> {
    let words: Vec<Word> = raw
        .iter()
        .filter_map(|entry| Word::new(entry, charset).ok())
        .collect();

    let dropped = raw.len() - words.len();
    if dropped > 0 {
        debug!("{pack}: dropped {dropped} {list} entries outside the charset");
    }

    words
}
