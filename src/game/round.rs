//! One round of play, independent of any terminal
//!
//! A `Round` owns the secret word, the submitted guesses, the keyboard status,
//! and the letters typed so far. Keystrokes arrive as `Input` values and each
//! one advances the round by exactly one `Step`.

use super::dictionary::Dictionary;
use crate::core::{Charset, KeyboardStatus, ScoredGuess, Word};
use crate::render::BoardView;
use log::{debug, info};

/// A keystroke, already decoded from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A printable character, uppercased
    Letter(char),
    Backspace,
    Submit,
    /// Escape; two in a row quit
    Cancel,
    /// Ctrl-C
    Interrupt,
    Other,
}

/// What a single input did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Typed,
    Erased,
    /// No visible change
    Ignored,
    /// A guess was scored and the round goes on
    Guessed,
    Won,
    Lost,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    secret: Word,
    attempts: usize,
    charset: Charset,
    alphabet: Vec<char>,
    history: Vec<ScoredGuess>,
    keyboard: KeyboardStatus,
    entry: Vec<char>,
    cancels: u8,
    status: RoundStatus,
}

impl Round {
    /// Start a round: empty board, every key unused
    #[must_use]
    pub fn new(secret: Word, attempts: usize, charset: Charset, alphabet: Vec<char>) -> Self {
        let keyboard = KeyboardStatus::new(alphabet.iter().copied());
        Self {
            secret,
            attempts,
            charset,
            alphabet,
            history: Vec::with_capacity(attempts),
            keyboard,
            entry: Vec::new(),
            cancels: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Begin again with a new secret, as if freshly created
    pub fn restart(&mut self, secret: Word) {
        self.secret = secret;
        self.history.clear();
        self.keyboard = KeyboardStatus::new(self.alphabet.iter().copied());
        self.entry.clear();
        self.cancels = 0;
        self.status = RoundStatus::InProgress;
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn letters(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn entry(&self) -> &[char] {
        &self.entry
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// The grid and keyboard as they stand, drawn with `layout`
    #[must_use]
    pub fn board<'a>(&'a self, layout: &'a [String]) -> BoardView<'a> {
        BoardView {
            history: &self.history,
            attempts: self.attempts,
            letters: self.letters(),
            layout,
            keyboard: &self.keyboard,
        }
    }

    /// Apply one keystroke
    ///
    /// A finished round ignores everything. Letters outside the charset, a
    /// full entry, an empty backspace and a submit that is short or not in
    /// the dictionary all leave the round unchanged.
    pub fn handle(&mut self, input: Input, dictionary: &Dictionary) -> Step {
        if self.status != RoundStatus::InProgress {
            return Step::Ignored;
        }

        self.cancels = if input == Input::Cancel {
            self.cancels.saturating_add(1)
        } else {
            0
        };

        match input {
            Input::Interrupt => self.quit(),
            Input::Cancel if self.cancels >= 2 => self.quit(),
            Input::Cancel | Input::Other => Step::Ignored,
            Input::Backspace => {
                if self.entry.pop().is_some() {
                    Step::Erased
                } else {
                    Step::Ignored
                }
            }
            Input::Letter(c) => {
                if self.entry.len() < self.letters() && self.charset.contains(c) {
                    self.entry.push(c);
                    Step::Typed
                } else {
                    Step::Ignored
                }
            }
            Input::Submit => {
                if self.entry.len() != self.letters() {
                    return Step::Ignored;
                }
                match dictionary.lookup(&self.entry) {
                    Some(word) => self.submit(word.clone()),
                    None => {
                        debug!("Rejected guess {}", self.entry.iter().collect::<String>());
                        Step::Ignored
                    }
                }
            }
        }
    }

    fn submit(&mut self, word: Word) -> Step {
        let scored = ScoredGuess::score(&self.secret, word);
        self.keyboard = self.keyboard.update(scored.verdicts(), scored.word().letters());
        let solved = scored.is_solved();
        self.history.push(scored);
        self.entry.clear();

        if solved {
            info!("Solved in {} of {} attempts", self.history.len(), self.attempts);
            self.status = RoundStatus::Won;
            Step::Won
        } else if self.history.len() >= self.attempts {
            info!("Out of attempts after {} guesses", self.history.len());
            self.status = RoundStatus::Lost;
            Step::Lost
        } else {
            Step::Guessed
        }
    }

    fn quit(&mut self) -> Step {
        self.status = RoundStatus::Quit;
        Step::Quit
    }
}
