//! Error types for pack loading, configuration and the game loop

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library
#[derive(Debug, Error)]
pub enum GameError {
    #[error("No words of {letters} letters to choose from")]
    EmptyPool { letters: usize },

    #[error("Language pack {0} not available")]
    PackNotFound(String),

    #[error("Language {0} not available")]
    UnknownLanguage(String),

    #[error("Invalid language pack {path}: {source}")]
    InvalidPack {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid charset pattern {pattern:?}: {source}")]
    InvalidCharset {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
