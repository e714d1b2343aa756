//! Board rendering
//!
//! Each board row is drawn as bracketed single-letter cells, `[a][l][l][o][y]`,
//! with placeholders `[ ]` for rows not yet played. Colour is applied by the
//! renderer so the game logic never touches escape codes.

use crate::core::{Guess, LetterResult, WORD_LEN};
use crate::game::{Board, Row};
use colored::Colorize;

/// Turns board state and status messages into terminal text
pub trait BoardRenderer {
    /// Draw one guessed letter
    fn cell(&self, letter: char, result: LetterResult) -> String;

    /// Highlight a failure message
    fn error(&self, message: &str) -> String;

    /// Highlight a success message
    fn success(&self, message: &str) -> String;

    /// Draw an unplayed cell
    fn empty_cell(&self) -> String {
        "[ ]".to_string()
    }

    /// Draw a played guess as one line
    fn guess_row(&self, guess: &Guess) -> String {
        guess
            .feedback()
            .cells()
            .iter()
            .map(|&(letter, result)| self.cell(char::from(letter), result))
            .collect()
    }

    /// Draw every board row, one per line, each terminated by a newline
    fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        for row in board.rows() {
            match row {
                Row::Filled(guess) => out.push_str(&self.guess_row(guess)),
                Row::Empty => out.push_str(&self.empty_cell().repeat(WORD_LEN)),
            }
            out.push('\n');
        }
        out
    }
}

/// Colours cells with ANSI codes: green for exact, yellow for present
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl BoardRenderer for AnsiRenderer {
    fn cell(&self, letter: char, result: LetterResult) -> String {
        let text = format!("[{letter}]");
        match result {
            LetterResult::ExactMatch => text.green().bold().to_string(),
            LetterResult::PresentElsewhere => text.yellow().bold().to_string(),
            LetterResult::Absent => text.normal().to_string(),
        }
    }

    fn error(&self, message: &str) -> String {
        message.red().bold().to_string()
    }

    fn success(&self, message: &str) -> String {
        message.green().bold().to_string()
    }
}

/// Uncoloured output; marks cells with `*` (exact) and `?` (present)
///
/// Used for `--no-color` and wherever escape codes get in the way.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl BoardRenderer for PlainRenderer {
    fn cell(&self, letter: char, result: LetterResult) -> String {
        match result {
            LetterResult::ExactMatch => format!("[{letter}]*"),
            LetterResult::PresentElsewhere => format!("[{letter}]?"),
            LetterResult::Absent => format!("[{letter}] "),
        }
    }

    fn error(&self, message: &str) -> String {
        message.to_string()
    }

    fn success(&self, message: &str) -> String {
        message.to_string()
    }
}
