//! Game settings

use crate::error::GameError;
use crate::langpack::LanguagePack;

/// Highest difficulty level; the whole frequency list is eligible
pub const MAX_DIFFICULTY: u8 = 5;

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Word length
    pub letters: usize,
    /// Guesses allowed per round
    pub attempts: usize,
    /// 1 draws only from the most common fifth of the words, 5 from all of them
    pub difficulty: u8,
    /// Use the ANSI palette when the terminal supports it
    pub color: bool,
    /// Animate the board after a win
    pub animate: bool,
}

impl GameConfig {
    /// The pack's suggested settings, with color and animation on
    #[must_use]
    pub const fn from_pack(pack: &LanguagePack) -> Self {
        let defaults = pack.defaults();
        Self {
            letters: defaults.letters,
            attempts: defaults.attempts,
            difficulty: defaults.difficulty,
            color: true,
            animate: true,
        }
    }

    /// Check the settings make sense for `pack`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the word length is below 2 or longer
    /// than any word in the pack, if there are no attempts, or if the
    /// difficulty is outside 1..=5.
    pub fn validate(&self, pack: &LanguagePack) -> Result<(), GameError> {
        if self.letters < 2 || self.letters > pack.longest_word() {
            return Err(GameError::InvalidConfig(format!(
                "Invalid number of letters {}",
                self.letters
            )));
        }

        if self.attempts < 1 {
            return Err(GameError::InvalidConfig(format!(
                "Invalid number of attempts {}",
                self.attempts
            )));
        }

        if !(1..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(GameError::InvalidConfig(format!(
                "Invalid difficulty level {}",
                self.difficulty
            )));
        }

        Ok(())
    }
}
