//! Keyboard input and raw mode

use super::round::Input;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::warn;
use std::io;

/// Anything that can hand the session one keystroke at a time
pub trait KeySource {
    /// Block until the next keystroke
    ///
    /// # Errors
    /// Returns any error from reading the input device.
    fn next_input(&mut self) -> io::Result<Input>;
}

/// Keystrokes from the real terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_input(&mut self) -> io::Result<Input> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(map_key(key));
            }
        }
    }
}

/// Decode a crossterm key event
#[must_use]
pub fn map_key(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Interrupt,
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Other,
        KeyCode::Char(c) => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(letter), None) => Input::Letter(letter),
                _ => Input::Other,
            }
        }
        KeyCode::Esc => Input::Cancel,
        KeyCode::Enter => Input::Submit,
        KeyCode::Backspace | KeyCode::Delete => Input::Backspace,
        _ => Input::Other,
    }
}

/// Keeps the terminal in raw mode until dropped
///
/// Dropping restores the terminal on every exit path, panics included.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    /// Returns an error if the terminal cannot enter raw mode.
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {e}");
        }
    }
}

/// Replays a fixed list of inputs, then interrupts
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedKeys {
    inputs: std::collections::VecDeque<Input>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub(crate) fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Letters of `word` followed by a submit
    pub(crate) fn guess(word: &str) -> Vec<Input> {
        word.chars()
            .map(Input::Letter)
            .chain(std::iter::once(Input::Submit))
            .collect()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn next_input(&mut self) -> io::Result<Input> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Interrupt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(map_key(key(KeyCode::Char('a'))), Input::Letter('A'));
        assert_eq!(map_key(key(KeyCode::Char('é'))), Input::Letter('É'));
        assert_eq!(map_key(key(KeyCode::Char('1'))), Input::Letter('1'));
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Input::Cancel);
        assert_eq!(map_key(key(KeyCode::Enter)), Input::Submit);
        assert_eq!(map_key(key(KeyCode::Backspace)), Input::Backspace);
        assert_eq!(map_key(key(KeyCode::Delete)), Input::Backspace);
        assert_eq!(map_key(key(KeyCode::Left)), Input::Other);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Input::Interrupt
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Input::Other
        );
    }

    #[test]
    fn shifted_letters() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Input::Letter('Q')
        );
    }

    #[test]
    fn script_runs_out_into_interrupt() {
        let mut keys = ScriptedKeys::new(ScriptedKeys::guess("AB"));
        assert_eq!(keys.remaining(), 3);
        assert_eq!(keys.next_input().unwrap(), Input::Letter('A'));
        assert_eq!(keys.next_input().unwrap(), Input::Letter('B'));
        assert_eq!(keys.next_input().unwrap(), Input::Submit);
        assert_eq!(keys.next_input().unwrap(), Input::Interrupt);
    }
}
