//! Termwordle
//!
//! A word-guessing game for the terminal. Guesses are scored letter by letter,
//! the board and an on-screen keyboard are repainted in place, and words,
//! alphabet, keyboard layout and messages all come from language packs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use termwordle::core::{classify, Charset, Verdict, Word};
//!
//! let charset = Charset::new("[A-Z]").unwrap();
//! let secret = Word::new("crane", &charset).unwrap();
//! let guess = Word::new("slate", &charset).unwrap();
//!
//! let verdicts = classify(&secret, guess.letters());
//! assert_eq!(verdicts[2], Verdict::Correct);
//! ```

// Core domain types
pub mod core;

// Crate error type
pub mod error;

// Rounds, sessions and the terminal adapter
pub mod game;

// Language packs
pub mod langpack;

// Terminal output
pub mod render;
