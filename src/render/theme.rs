//! Cell styles for the board and keyboard
//!
//! The ANSI theme paints each letter cell with a background color; the
//! monochrome theme marks status with brackets and case instead, so the game
//! stays playable where color is unavailable.

use crate::core::{LetterStatus, Verdict};
use crossterm::style::{Color, Stylize, style};
use std::io::{self, IsTerminal};

/// Foreground and background of a painted cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    pub fg: Color,
    pub bg: Color,
}

impl CellColors {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Colors for each letter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: CellColors,
    pub present: CellColors,
    pub absent: CellColors,
    pub unused: CellColors,
    pub empty: CellColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            correct: CellColors::new(Color::White, Color::DarkGreen),
            present: CellColors::new(Color::White, Color::DarkYellow),
            absent: CellColors::new(Color::White, Color::DarkGrey),
            unused: CellColors::new(Color::Black, Color::Grey),
            empty: CellColors::new(Color::White, Color::White),
        }
    }
}

/// How letter cells are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Ansi(Palette),
    Monochrome,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Ansi(Palette::default())
    }
}

impl Theme {
    /// Pick a theme for stdout
    ///
    /// Color is dropped when `no_color` is set, when `NO_COLOR` is set to a
    /// non-empty value, or when stdout is not a terminal.
    #[must_use]
    pub fn detect(no_color: bool) -> Self {
        let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

        if no_color || env_no_color || !io::stdout().is_terminal() {
            Self::Monochrome
        } else {
            Self::default()
        }
    }

    /// One guess-grid cell, three columns wide
    #[must_use]
    pub fn guess_cell(&self, verdict: Verdict, letter: Option<char>) -> String {
        let letter = letter.unwrap_or(' ');

        match self {
            Self::Ansi(palette) => {
                let colors = match verdict {
                    Verdict::Correct => palette.correct,
                    Verdict::Present => palette.present,
                    Verdict::Absent => palette.absent,
                    Verdict::Empty => palette.empty,
                };
                let shown = if verdict == Verdict::Empty { ' ' } else { letter };
                paint(format!(" {shown} "), colors)
            }
            Self::Monochrome => match verdict {
                Verdict::Correct => format!("[{letter}]"),
                Verdict::Present => format!("({letter})"),
                Verdict::Absent => format!(" {} ", lower(letter)),
                Verdict::Empty => " _ ".to_string(),
            },
        }
    }

    /// One keyboard key
    ///
    /// One column in color, three columns in monochrome so the markers fit.
    #[must_use]
    pub fn key(&self, status: LetterStatus, letter: char) -> String {
        match self {
            Self::Ansi(palette) => {
                let colors = match status {
                    LetterStatus::Correct => palette.correct,
                    LetterStatus::Present => palette.present,
                    LetterStatus::Absent => palette.absent,
                    LetterStatus::Unused => palette.unused,
                };
                paint(letter.to_string(), colors)
            }
            Self::Monochrome => match status {
                LetterStatus::Correct => format!("[{letter}]"),
                LetterStatus::Present => format!("({letter})"),
                LetterStatus::Absent => format!(" {} ", lower(letter)),
                LetterStatus::Unused => format!(" {letter} "),
            },
        }
    }

    /// Layout filler (`_` in a pack's keyboard rows)
    #[must_use]
    pub fn filler(&self) -> String {
        match self {
            Self::Ansi(palette) => paint(" ".to_string(), palette.empty),
            Self::Monochrome => " ".to_string(),
        }
    }

    /// Any other layout symbol, drawn like an unused key
    #[must_use]
    pub fn decoration(&self, symbol: char) -> String {
        match self {
            Self::Ansi(palette) => paint(symbol.to_string(), palette.unused),
            Self::Monochrome => symbol.to_string(),
        }
    }
}

fn paint(text: String, colors: CellColors) -> String {
    style(text).with(colors.fg).on(colors.bg).to_string()
}

fn lower(letter: char) -> char {
    let mut lowered = letter.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}
