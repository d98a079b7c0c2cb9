//! Cumulative per-letter knowledge for the on-screen keyboard

use super::Verdict;
use rustc_hash::FxHashMap;

/// Best-known status of a letter across every guess in a round
///
/// Ordered so that `max` picks the more informative status:
/// Correct > Present > Absent > Unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Status contributed by a single verdict, `None` for an empty cell
    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Correct => Some(Self::Correct),
            Verdict::Present => Some(Self::Present),
            Verdict::Absent => Some(Self::Absent),
            Verdict::Empty => None,
        }
    }
}

/// Status of every letter of the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardStatus {
    /// Start a round with every alphabet letter unused
    pub fn new(alphabet: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: alphabet
                .into_iter()
                .map(|c| (c, LetterStatus::Unused))
                .collect(),
        }
    }

    /// Fold one classified guess into the status, never downgrading a letter
    ///
    /// A letter that appears several times in the guess contributes its best
    /// verdict, so a duplicate marked Absent does not hide its Present twin.
    #[must_use]
    pub fn update(&self, verdicts: &[Verdict], guess: &[char]) -> Self {
        let mut letters = self.letters.clone();

        for (&letter, &verdict) in guess.iter().zip(verdicts) {
            let Some(seen) = LetterStatus::from_verdict(verdict) else {
                continue;
            };
            let entry = letters.entry(letter).or_default();
            *entry = (*entry).max(seen);
        }

        Self { letters }
    }

    /// Status of a letter, `None` if it is not part of the alphabet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        self.letters.get(&letter).copied()
    }

    /// Number of tracked letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True while no guess has touched any letter
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.letters.values().all(|&s| s == LetterStatus::Unused)
    }
}
