//! Playing the game
//!
//! `Round` holds the rules, `Session` drives rounds against a key source and
//! a screen, and `run_round` wires a session to the real terminal.

mod config;
mod dictionary;
mod round;
mod session;
mod terminal;

pub use config::{GameConfig, MAX_DIFFICULTY};
pub use dictionary::Dictionary;
pub use round::{Input, Round, RoundStatus, Step};
pub use session::{EXIT_OK, EXIT_SETUP_FAILURE, RoundOutcome, Session};
pub use terminal::{KeySource, RawModeGuard, TerminalKeys, map_key};

use crate::error::GameError;
use crate::langpack::LanguagePack;
use crate::render::{RenderEngine, Theme};
use std::io;

/// Play on the controlling terminal until the player quits
///
/// The terminal is in raw mode for the duration of the call and is restored
/// on every way out, errors included.
///
/// # Errors
/// Returns `GameError::InvalidConfig` for settings that do not fit the pack,
/// and `GameError::Io` if the terminal cannot be read or written.
pub fn run_round(pack: &LanguagePack, config: &GameConfig) -> Result<i32, GameError> {
    config.validate(pack)?;

    let theme = Theme::detect(!config.color);
    let _raw_mode = RawModeGuard::acquire()?;
    let engine = RenderEngine::new(io::stdout(), theme);
    let mut session = Session::new(pack, config, TerminalKeys, engine, rand::rng());
    session.run()
}
