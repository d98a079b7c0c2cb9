//! Per-letter feedback for a guess
//!
//! Each position of a guess gets one of four verdicts:
//! - Correct: the letter is in the secret word at this position
//! - Present: the letter is in the secret word, elsewhere
//! - Absent: no unmatched instance of the letter remains in the secret word
//! - Empty: nothing has been typed at this position yet

use super::Word;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
    Empty,
}

/// Compare a guess against the secret word
///
/// Letters are compared position by position with Wordle's duplicate rules:
/// 1. First pass: exact matches become Correct and consume that secret letter
/// 2. Second pass: every other letter consumes the first unconsumed occurrence
///    of itself in the secret (left to right) and becomes Present, or is Absent
///    when none is left
///
/// `guess` may be shorter than the secret while it is being typed; the missing
/// positions come back as `Verdict::Empty`. Guess letters past the secret's
/// length are ignored, so the output always has the secret's length.
///
/// # Examples
/// ```
/// use termwordle::core::{Charset, Verdict, Word, classify};
///
/// let charset = Charset::new("[A-Z]").unwrap();
/// let secret = Word::new("APPLE", &charset).unwrap();
/// let guess = Word::new("PAPER", &charset).unwrap();
///
/// assert_eq!(
///     classify(&secret, guess.letters()),
///     vec![
///         Verdict::Present,
///         Verdict::Present,
///         Verdict::Correct,
///         Verdict::Present,
///         Verdict::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn classify(secret: &Word, guess: &[char]) -> Vec<Verdict> {
    let secret = secret.letters();
    let mut verdicts = vec![Verdict::Empty; secret.len()];
    let mut consumed = vec![false; secret.len()];

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: misplaced letters take the leftmost unconsumed instance
    for (i, &g) in guess.iter().take(secret.len()).enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }

        let available = secret
            .iter()
            .zip(&consumed)
            .position(|(&s, &used)| s == g && !used);

        verdicts[i] = match available {
            Some(j) => {
                consumed[j] = true;
                Verdict::Present
            }
            None => Verdict::Absent,
        };
    }

    verdicts
}

/// A submitted guess together with its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    word: Word,
    verdicts: Vec<Verdict>,
}

impl ScoredGuess {
    /// Classify `word` against `secret` and freeze the result
    #[must_use]
    pub fn score(secret: &Word, word: Word) -> Self {
        let verdicts = classify(secret, word.letters());
        Self { word, verdicts }
    }

    /// A secret word scored against itself, used to reveal it after a loss
    #[must_use]
    pub fn reveal(secret: &Word) -> Self {
        Self::score(secret, secret.clone())
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Charset;

    fn word(text: &str) -> Word {
        Word::new(text, &Charset::new("[A-Z]").unwrap()).unwrap()
    }

    fn verdicts(secret: &str, guess: &str) -> Vec<Verdict> {
        classify(&word(secret), word(guess).letters())
    }

    use Verdict::{Absent, Correct, Empty, Present};

    #[test]
    fn all_absent() {
        assert_eq!(verdicts("FGHIJ", "ABCDE"), vec![Absent; 5]);
    }

    #[test]
    fn all_correct() {
        assert_eq!(verdicts("CRANE", "CRANE"), vec![Correct; 5]);
    }

    #[test]
    fn slate_against_crane() {
        // S L A T E vs C R A N E: A and E sit in the same positions
        assert_eq!(
            verdicts("CRANE", "SLATE"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letter_in_guess_single_in_secret() {
        // APPLE has two P's; PAPER's P at 2 is exact, P at 0 takes the other
        assert_eq!(
            verdicts("APPLE", "PAPER"),
            vec![Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn exact_match_consumed_before_misplaced() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        assert_eq!(
            verdicts("FLOOR", "ROBOT"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        // The only L and the only A are taken by exact matches
        assert_eq!(
            verdicts("PLANT", "LLAMA"),
            vec![Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn speed_erase_never_overcounts() {
        let secret = word("SPEED");
        let guess = word("ERASE");
        let result = classify(&secret, guess.letters());

        let marked_e = guess
            .letters()
            .iter()
            .zip(&result)
            .filter(|&(&c, &v)| c == 'E' && matches!(v, Correct | Present))
            .count();
        assert!(marked_e <= 2);
        assert_eq!(result, vec![Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn marked_letters_never_exceed_secret_counts() {
        let pairs = [
            ("SPEED", "ERASE"),
            ("APPLE", "PAPER"),
            ("ABBEY", "BBBBB"),
            ("EERIE", "EEEEE"),
            ("LEVEL", "ELVEL"),
            ("CRANE", "NACRE"),
        ];

        for (secret, guess) in pairs {
            let secret = word(secret);
            let guess = word(guess);
            let result = classify(&secret, guess.letters());
            assert_eq!(result.len(), secret.len());

            let counts = secret.letter_counts();
            for (&letter, &limit) in &counts {
                let marked = guess
                    .letters()
                    .iter()
                    .zip(&result)
                    .filter(|&(&c, &v)| c == letter && matches!(v, Correct | Present))
                    .count();
                assert!(marked <= limit, "{letter} over-counted in {guess} vs {secret}");
            }
        }
    }

    #[test]
    fn classification_is_repeatable() {
        let secret = word("EERIE");
        let guess = word("RESET");
        assert_eq!(
            classify(&secret, guess.letters()),
            classify(&secret, guess.letters())
        );
    }

    #[test]
    fn partial_guess_pads_with_empty() {
        let secret = word("CRANE");
        assert_eq!(
            classify(&secret, &['C', 'A']),
            vec![Correct, Present, Empty, Empty, Empty]
        );
        assert_eq!(classify(&secret, &[]), vec![Empty; 5]);
    }

    #[test]
    fn scored_guess_solved() {
        let secret = word("CRANE");
        assert!(ScoredGuess::reveal(&secret).is_solved());
        assert!(!ScoredGuess::score(&secret, word("SLATE")).is_solved());
    }
}
