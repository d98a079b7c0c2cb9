//! Secret-word pool and accepted guesses for one word length

use super::config::MAX_DIFFICULTY;
use crate::core::Word;
use crate::error::GameError;
use crate::langpack::LanguagePack;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Words of the configured length: those that may be drawn, and those accepted as guesses
#[derive(Debug, Clone)]
pub struct Dictionary {
    letters: usize,
    pool: Vec<Word>,
    accepted: FxHashMap<String, Word>,
}

impl Dictionary {
    /// Build the pool and the accepted set from a pack
    ///
    /// The pool is the most common `difficulty / 5` share of the frequency
    /// words of the right length (at least one word when any exist). Every
    /// frequency or extra word of the right length is accepted as a guess.
    #[must_use]
    pub fn build(pack: &LanguagePack, letters: usize, difficulty: u8) -> Self {
        let candidates: Vec<&Word> = pack
            .frequency_list()
            .iter()
            .filter(|w| w.len() == letters)
            .collect();

        let eligible = (candidates.len() * usize::from(difficulty) / usize::from(MAX_DIFFICULTY))
            .max(1)
            .min(candidates.len());
        let pool: Vec<Word> = candidates[..eligible].iter().copied().cloned().collect();

        let accepted: FxHashMap<String, Word> = candidates
            .into_iter()
            .chain(pack.extra_words().iter().filter(|w| w.len() == letters))
            .map(|w| (w.text().to_string(), w.clone()))
            .collect();

        debug!(
            "{letters}-letter dictionary: {} drawable, {} accepted",
            pool.len(),
            accepted.len()
        );

        Self {
            letters,
            pool,
            accepted,
        }
    }

    #[must_use]
    pub const fn letters(&self) -> usize {
        self.letters
    }

    /// Words the secret may be drawn from
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    /// Draw a secret word uniformly from the pool
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if no word has the configured length.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, GameError> {
        self.pool.choose(rng).ok_or(GameError::EmptyPool {
            letters: self.letters,
        })
    }

    /// The accepted word spelled by `letters`, if any
    #[must_use]
    pub fn lookup(&self, letters: &[char]) -> Option<&Word> {
        let text: String = letters.iter().collect();
        self.accepted.get(&text)
    }
}
