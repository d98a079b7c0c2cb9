//! The interactive loop: rounds, replays, and everything drawn in between
//!
//! A session moves through phases: a secret is drawn, keystrokes are read
//! until the round is won, lost or abandoned, the final board is shown, and
//! the player is offered another round. Terminal access is limited to a
//! `KeySource` and a `Write` sink, so the whole loop runs in tests without a
//! terminal.

use super::config::{GameConfig, MAX_DIFFICULTY};
use super::dictionary::Dictionary;
use super::round::{Input, Round, RoundStatus, Step};
use super::terminal::KeySource;
use crate::core::{KeyboardStatus, ScoredGuess};
use crate::error::GameError;
use crate::langpack::LanguagePack;
use crate::render::{Frame, RenderEngine, layout_width};
use log::{debug, error, trace};
use rand::Rng;
use std::io::Write;
use std::time::Duration;

/// Normal quit
pub const EXIT_OK: i32 = 0;
/// Nothing to play with, such as no words of the requested length
pub const EXIT_SETUP_FAILURE: i32 = -1;

/// Pause between frames of the win animation
const REVEAL_DELAY: Duration = Duration::from_millis(50);

enum Phase {
    /// Draw a secret; a finished round is reused if there is one
    SelectingWord(Option<Round>),
    AwaitingInput(Round),
    RoundOver(Round),
    PromptReplay(Round),
    Terminated(i32),
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub status: RoundStatus,
    pub guesses: usize,
}

pub struct Session<'a, K: KeySource, W: Write, R: Rng> {
    pack: &'a LanguagePack,
    config: &'a GameConfig,
    dictionary: Dictionary,
    keys: K,
    engine: RenderEngine<W>,
    rng: R,
    outcomes: Vec<RoundOutcome>,
}

impl<'a, K: KeySource, W: Write, R: Rng> Session<'a, K, W, R> {
    /// Prepare a session; the layout width is fixed here for the whole game
    pub fn new(
        pack: &'a LanguagePack,
        config: &'a GameConfig,
        keys: K,
        engine: RenderEngine<W>,
        rng: R,
    ) -> Self {
        let dictionary = Dictionary::build(pack, config.letters, config.difficulty);
        let mut session = Self {
            pack,
            config,
            dictionary,
            keys,
            engine,
            rng,
            outcomes: Vec::new(),
        };
        let width = session.layout_width();
        debug!("Layout width {width}");
        session.engine.set_width(width);
        session
    }

    /// Rounds finished so far, in order
    #[must_use]
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    pub fn into_engine(self) -> RenderEngine<W> {
        self.engine
    }

    /// Play until the player quits
    ///
    /// Returns `EXIT_OK` on a normal quit and `EXIT_SETUP_FAILURE` when no
    /// secret can be drawn.
    ///
    /// # Errors
    /// Returns `GameError::Io` if reading keys or writing the screen fails.
    pub fn run(&mut self) -> Result<i32, GameError> {
        let pack = self.pack;
        let header = [
            String::new(),
            self.difficulty_line(),
            self.pool_line(),
            String::new(),
        ];
        self.engine.print_lines(header)?;
        if !self.dictionary.pool().is_empty() {
            self.engine
                .print_lines([pack.messages().howquit.as_str(), ""])?;
        }

        let mut phase = Phase::SelectingWord(None);
        loop {
            phase = match phase {
                Phase::SelectingWord(previous) => self.select_word(previous)?,
                Phase::AwaitingInput(round) => self.await_input(round)?,
                Phase::RoundOver(round) => self.finish_round(round)?,
                Phase::PromptReplay(round) => self.prompt_replay(round)?,
                Phase::Terminated(code) => return Ok(code),
            };
        }
    }

    fn select_word(&mut self, previous: Option<Round>) -> Result<Phase, GameError> {
        let secret = match self.dictionary.draw(&mut self.rng) {
            Ok(word) => word.clone(),
            Err(e) => {
                error!("{e}");
                self.engine
                    .print_lines([self.pack.messages().nowords.as_str(), ""])?;
                return Ok(Phase::Terminated(EXIT_SETUP_FAILURE));
            }
        };
        trace!("Drew a secret from {} candidates", self.dictionary.pool().len());

        let round = match previous {
            Some(mut round) => {
                round.restart(secret);
                round
            }
            None => Round::new(
                secret,
                self.config.attempts,
                self.pack.charset().clone(),
                self.pack.alphabet(),
            ),
        };
        Ok(Phase::AwaitingInput(round))
    }

    fn await_input(&mut self, mut round: Round) -> Result<Phase, GameError> {
        let frame = self.input_frame(&round);
        self.engine.present(&frame)?;

        let input = self.keys.next_input()?;
        let phase = match round.handle(input, &self.dictionary) {
            Step::Won | Step::Lost => Phase::RoundOver(round),
            Step::Quit => {
                self.farewell()?;
                Phase::Terminated(EXIT_OK)
            }
            Step::Typed | Step::Erased | Step::Guessed | Step::Ignored => {
                Phase::AwaitingInput(round)
            }
        };
        Ok(phase)
    }

    fn finish_round(&mut self, round: Round) -> Result<Phase, GameError> {
        let outcome = RoundOutcome {
            status: round.status(),
            guesses: round.history().len(),
        };
        debug!("Round over: {outcome:?}");
        self.outcomes.push(outcome);

        if outcome.status == RoundStatus::Won && self.config.animate {
            let frames = self.win_animation(&round);
            self.engine.animate(frames, REVEAL_DELAY)?;
        }

        let frame = self.result_frame(&round);
        self.engine.present(&frame)?;
        Ok(Phase::PromptReplay(round))
    }

    fn prompt_replay(&mut self, round: Round) -> Result<Phase, GameError> {
        let yes = self.pack.messages().yes;
        // A new round repaints over the result frame
        let phase = match self.keys.next_input()? {
            Input::Submit => Phase::SelectingWord(Some(round)),
            Input::Letter(c) if c == yes => Phase::SelectingWord(Some(round)),
            _ => {
                self.farewell()?;
                Phase::Terminated(EXIT_OK)
            }
        };
        Ok(phase)
    }

    fn farewell(&mut self) -> Result<(), GameError> {
        self.engine
            .print_lines([self.pack.messages().bye.as_str(), ""])?;
        Ok(())
    }

    fn difficulty_line(&self) -> String {
        format!(
            "{}{}/{MAX_DIFFICULTY}",
            self.pack.messages().difficulty,
            self.config.difficulty
        )
    }

    fn pool_line(&self) -> String {
        format!(
            "{}{}",
            self.dictionary.pool().len(),
            self.pack.messages().poswords
        )
    }

    /// Widest line the game can draw, plus margin
    fn layout_width(&self) -> usize {
        let messages = self.pack.messages();
        let letters = self.config.letters;

        let mut lines = vec![
            self.difficulty_line(),
            self.pool_line(),
            messages.howquit.clone(),
            messages.nowords.clone(),
            format!("{}{}", messages.guess, "_".repeat(letters)),
            messages.won.clone(),
            messages.lost.clone(),
            format!("{}_", messages.again),
            messages.bye.clone(),
            self.engine.render_empty_row(letters),
        ];
        lines.extend(self.engine.render_keyboard(
            self.pack.keyboard(),
            &KeyboardStatus::new(self.pack.alphabet()),
        ));
        layout_width(&lines)
    }

    /// Board plus the guess prompt, cursor on the first blank
    fn input_frame(&self, round: &Round) -> Frame {
        let lines = self
            .engine
            .render_board(&round.board(self.pack.keyboard()), round.history().len());
        let remaining = round.letters() - round.entry().len();

        let mut prompt = self.pack.messages().guess.clone();
        prompt.extend(round.entry());
        prompt.push_str(&"_".repeat(remaining));

        Frame::new(lines).with_prompt(prompt, remaining)
    }

    /// Final board, the result, and the replay question
    fn result_frame(&self, round: &Round) -> Frame {
        let messages = self.pack.messages();
        let mut lines = self
            .engine
            .render_board(&round.board(self.pack.keyboard()), round.history().len());

        if round.status() == RoundStatus::Won {
            lines.push(messages.won.clone());
        } else {
            lines.push(messages.lost.clone());
            let reveal = ScoredGuess::reveal(round.secret());
            lines.push(
                self.engine
                    .render_guess_row(reveal.word().letters(), reveal.verdicts()),
            );
        }
        lines.push(String::new());

        Frame::new(lines).with_prompt(format!("{}_", messages.again), 1)
    }

    /// Each guess row blanked then redrawn, top to bottom
    fn win_animation(&self, round: &Round) -> Vec<Frame> {
        let board = self
            .engine
            .render_board(&round.board(self.pack.keyboard()), round.history().len());
        let blank = self.engine.render_empty_row(round.letters());

        (0..round.history().len())
            .flat_map(|row| {
                let mut flashed = board.clone();
                flashed[row].clone_from(&blank);
                [Frame::new(flashed), Frame::new(board.clone())]
            })
            .collect()
    }
}
