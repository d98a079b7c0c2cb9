//! In-place terminal rendering
//!
//! Every screen update is a `Frame`: a list of lines plus an optional prompt
//! line that keeps the cursor. Before drawing a frame the engine moves the
//! cursor back up over the lines of the previous one, then overwrites them,
//! clearing each line's tail and everything below the new frame. The terminal
//! never scrolls between frames and nothing is cleared before it is redrawn.

use super::theme::Theme;
use super::width::visible_width;
use crate::core::{KeyboardStatus, ScoredGuess, Verdict};
use crossterm::cursor::{MoveLeft, MoveToColumn, MoveUp};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Line ending in raw mode
const NEWLINE: &str = "\r\n";

/// Input line that keeps the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    /// Columns between the end of `text` and the cursor
    pub cursor_back: usize,
}

/// One full screen update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<String>,
    pub prompt: Option<Prompt>,
}

impl Frame {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            prompt: None,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, text: String, cursor_back: usize) -> Self {
        self.prompt = Some(Prompt { text, cursor_back });
        self
    }
}

/// Everything needed to draw the guess grid and the keyboard
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub history: &'a [ScoredGuess],
    pub attempts: usize,
    pub letters: usize,
    pub layout: &'a [String],
    pub keyboard: &'a KeyboardStatus,
}

/// Draws frames on a terminal-like writer
pub struct RenderEngine<W: Write> {
    out: W,
    theme: Theme,
    width: usize,
    frame_lines: usize,
    prompt_open: bool,
}

impl<W: Write> RenderEngine<W> {
    #[must_use]
    pub const fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            width: 0,
            frame_lines: 0,
            prompt_open: false,
        }
    }

    /// Width every line is centered in
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Lines the last frame occupied above the cursor
    #[must_use]
    pub const fn frame_lines(&self) -> usize {
        self.frame_lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// One row of the guess grid
    ///
    /// Each verdict styles one three-column cell; a missing letter draws as
    /// an empty cell.
    #[must_use]
    pub fn render_guess_row(&self, guess: &[char], verdicts: &[Verdict]) -> String {
        verdicts
            .iter()
            .enumerate()
            .map(|(i, &verdict)| self.theme.guess_cell(verdict, guess.get(i).copied()))
            .collect()
    }

    /// A row nobody has guessed yet
    #[must_use]
    pub fn render_empty_row(&self, letters: usize) -> String {
        self.render_guess_row(&[], &vec![Verdict::Empty; letters])
    }

    /// One line per layout row, keys styled by their cumulative status
    #[must_use]
    pub fn render_keyboard(&self, layout: &[String], status: &KeyboardStatus) -> Vec<String> {
        layout
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match status.get(c) {
                        Some(letter_status) => self.theme.key(letter_status, c),
                        None if c == '_' => self.theme.filler(),
                        None => self.theme.decoration(c),
                    })
                    .collect()
            })
            .collect()
    }

    /// Guess grid, blank line, keyboard, blank line
    ///
    /// Only the first `revealed` submitted rows are drawn; later rows show as
    /// empty, which is what the win animation steps through.
    #[must_use]
    pub fn render_board(&self, view: &BoardView<'_>, revealed: usize) -> Vec<String> {
        let mut lines: Vec<String> = (0..view.attempts)
            .map(|row| match view.history.get(row) {
                Some(scored) if row < revealed => {
                    self.render_guess_row(scored.word().letters(), scored.verdicts())
                }
                _ => self.render_empty_row(view.letters),
            })
            .collect();

        lines.push(String::new());
        lines.extend(self.render_keyboard(view.layout, view.keyboard));
        lines.push(String::new());
        lines
    }

    /// Pad a line on the left so it sits in the middle of the layout width
    #[must_use]
    pub fn center(&self, line: &str) -> String {
        let pad = self.width.saturating_sub(visible_width(line)) / 2;
        format!("{}{line}", " ".repeat(pad))
    }

    /// Move the cursor to the first column of a frame drawn `previous_line_count` lines up
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn repaint(&mut self, previous_line_count: usize) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0))?;
        if previous_line_count > 0 {
            let up = u16::try_from(previous_line_count).unwrap_or(u16::MAX);
            queue!(self.out, MoveUp(up))?;
        }
        Ok(())
    }

    /// Draw a frame over the previous one
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.repaint(self.frame_lines)?;

        for line in &frame.lines {
            let text = self.center(line);
            queue!(
                self.out,
                Print(text),
                Clear(ClearType::UntilNewLine),
                Print(NEWLINE)
            )?;
        }

        if let Some(prompt) = &frame.prompt {
            let text = self.center(&prompt.text);
            queue!(self.out, Print(text))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))?;

        if let Some(prompt) = &frame.prompt
            && prompt.cursor_back > 0
        {
            let back = u16::try_from(prompt.cursor_back).unwrap_or(u16::MAX);
            queue!(self.out, MoveLeft(back))?;
        }

        self.out.flush()?;
        self.frame_lines = frame.lines.len();
        self.prompt_open = frame.prompt.is_some();
        Ok(())
    }

    /// Present a sequence of frames with a pause after each one but the last
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn animate<I>(&mut self, frames: I, delay: Duration) -> io::Result<()>
    where
        I: IntoIterator<Item = Frame>,
    {
        let mut frames = frames.into_iter().peekable();
        while let Some(frame) = frames.next() {
            self.present(&frame)?;
            if frames.peek().is_some() && !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(())
    }

    /// Leave the current frame in place; the next frame starts below it
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn release_frame(&mut self) -> io::Result<()> {
        if self.prompt_open {
            queue!(self.out, Print(NEWLINE))?;
        }
        self.frame_lines = 0;
        self.prompt_open = false;
        self.out.flush()
    }

    /// Print centered lines outside any frame (headers, farewells)
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn print_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.release_frame()?;
        for line in lines {
            let text = self.center(line.as_ref());
            queue!(self.out, Print(text), Print(NEWLINE))?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Charset, Word};
    use crate::render::strip_control;

    fn engine() -> RenderEngine<Vec<u8>> {
        RenderEngine::new(Vec::new(), Theme::Monochrome)
    }

    fn output(engine: RenderEngine<Vec<u8>>) -> String {
        String::from_utf8(engine.into_inner()).unwrap()
    }

    fn layout() -> Vec<String> {
        vec!["_Q W E_".to_string(), "_< A S [=]_".to_string()]
    }

    #[test]
    fn guess_row_styles_each_cell() {
        use Verdict::{Absent, Correct, Empty, Present};
        let row = engine().render_guess_row(&['P', 'A', 'P'], &[Present, Correct, Absent, Empty]);
        assert_eq!(row, "(P)[A] p  _ ");
    }

    #[test]
    fn guess_row_ansi_is_three_columns_per_letter() {
        let engine = RenderEngine::new(Vec::new(), Theme::default());
        let row = engine.render_guess_row(&['C', 'R'], &[Verdict::Correct, Verdict::Absent]);
        assert_eq!(strip_control(&row), " C  R ");
        assert_eq!(visible_width(&row), 6);
    }

    #[test]
    fn keyboard_marks_letters_fillers_and_decorations() {
        let status = KeyboardStatus::new(['Q', 'W', 'E', 'A', 'S']).update(
            &[Verdict::Correct, Verdict::Absent, Verdict::Present],
            &['Q', 'W', 'A'],
        );
        let lines = engine().render_keyboard(&layout(), &status);
        assert_eq!(lines, vec![" [Q]  w   E  ", " < (A)  S  [=] "]);
    }

    #[test]
    fn board_hides_unrevealed_rows() {
        let charset = Charset::new("[A-Z]").unwrap();
        let secret = Word::new("ASE", &charset).unwrap();
        let history = vec![ScoredGuess::score(&secret, Word::new("SEA", &charset).unwrap())];
        let keyboard = KeyboardStatus::new(['Q', 'W', 'E', 'A', 'S']);
        let layout = layout();
        let view = BoardView {
            history: &history,
            attempts: 2,
            letters: 3,
            layout: &layout,
            keyboard: &keyboard,
        };

        let engine = engine();
        let shown = engine.render_board(&view, 1);
        assert_eq!(shown.len(), 2 + 1 + 2 + 1);
        assert_eq!(shown[0], "(S)(E)(A)");
        assert_eq!(shown[1], " _  _  _ ");
        assert_eq!(shown[2], "");

        let hidden = engine.render_board(&view, 0);
        assert_eq!(hidden[0], " _  _  _ ");
    }

    #[test]
    fn center_ignores_styling() {
        let mut engine = RenderEngine::new(Vec::new(), Theme::default());
        engine.set_width(11);
        let row = engine.render_guess_row(&['A'], &[Verdict::Correct]);
        let centered = engine.center(&row);
        assert!(centered.starts_with("    "));
        assert_eq!(visible_width(&centered), 4 + 3);

        // Wider than the layout: no padding, never a panic
        engine.set_width(2);
        assert_eq!(engine.center("abcdef"), "abcdef");
    }

    #[test]
    fn first_frame_does_not_move_up() {
        let mut engine = engine();
        engine
            .present(&Frame::new(vec!["one".into(), "two".into()]))
            .unwrap();
        assert_eq!(engine.frame_lines(), 2);

        let out = output(engine);
        assert!(!out.contains("\x1b[2A"));
        assert!(out.contains("one\x1b[K\r\n"));
        assert!(out.contains("two\x1b[K\r\n"));
        assert!(out.ends_with("\x1b[J"));
    }

    #[test]
    fn repaint_moves_up_over_previous_frame() {
        let mut engine = engine();
        engine
            .present(&Frame::new(vec!["a".into(), "b".into(), "c".into()]))
            .unwrap();
        engine
            .present(&Frame::new(vec!["d".into()]).with_prompt("> __".into(), 2))
            .unwrap();
        assert_eq!(engine.frame_lines(), 1);
        engine.present(&Frame::new(vec!["e".into()])).unwrap();

        let out = output(engine);
        let second = out.find("\x1b[3A").expect("moved up three lines");
        let third = out.find("\x1b[1A").expect("moved up one line");
        assert!(second < third);
        // Cursor parked on the first placeholder of the prompt
        assert!(out.contains("> __\x1b[J\x1b[2D"));
    }

    #[test]
    fn release_frame_ends_open_prompt() {
        let mut engine = engine();
        engine
            .present(&Frame::new(vec![]).with_prompt("again? _".into(), 1))
            .unwrap();
        engine.print_lines(["Bye..."]).unwrap();
        assert_eq!(engine.frame_lines(), 0);

        let out = output(engine);
        assert!(out.contains("\x1b[1D\r\nBye...\r\n"));
    }

    #[test]
    fn animate_presents_every_frame() {
        let mut engine = engine();
        let frames = (0..3).map(|i| Frame::new(vec![format!("step {i}")]));
        engine.animate(frames, Duration::ZERO).unwrap();

        let out = output(engine);
        assert!(out.contains("step 0"));
        assert!(out.contains("step 2"));
        assert_eq!(out.matches("\x1b[1A").count(), 2);
    }
}
