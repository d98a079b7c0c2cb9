//! Core domain types for the game
//!
//! Words, the per-letter classifier and the keyboard tracker. Everything here
//! is pure and terminal-free.

mod charset;
mod keyboard;
mod verdict;
mod word;

pub use charset::Charset;
pub use keyboard::{KeyboardStatus, LetterStatus};
pub use verdict::{ScoredGuess, Verdict, classify};
pub use word::{Word, WordError};
