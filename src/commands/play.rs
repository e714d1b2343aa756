//! Interactive play mode
//!
//! Prompts for guesses until the game is won or lost. Input and output are
//! generic so the whole loop can be driven from memory in tests.

use crate::core::MAX_GUESSES;
use crate::game::{GameSession, GameState};
use crate::output::{BoardRenderer, Screen, share_text};
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Prompt shown before each guess
pub const PROMPT: &str = "Make a guess: ";

/// Message shown when all guesses are used up
pub const LOSS_MESSAGE: &str = "Unluckers! Maybe next time.";

/// How a played game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { guesses: usize },
    Lost { answer: String },
    /// Input ended before the game finished
    Abandoned,
}

/// Terminal collaborators for a game
pub struct PlayConfig<'r> {
    pub renderer: &'r dyn BoardRenderer,
    pub screen: Screen,
    pub show_share: bool,
}

/// Run the turn loop for `session`, reading one guess per input line
///
/// Rejected guesses are reported and re-prompted without using a turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    config: &PlayConfig<'_>,
    mut input: R,
    output: &mut W,
) -> Result<GameOutcome> {
    let renderer = config.renderer;
    config.screen.clear(output).context("failed to clear screen")?;

    while session.state() == GameState::InProgress {
        write!(output, "{}\n\n{PROMPT}", renderer.render(session.board()))?;
        output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read guess")?;
        if read == 0 {
            debug!("Input closed after {} guesses", session.guesses_made());
            writeln!(output)?;
            return Ok(GameOutcome::Abandoned);
        }

        config.screen.clear(output).context("failed to clear screen")?;
        if let Err(e) = session.submit(&line) {
            writeln!(output, "{}", renderer.error(&e.to_string()))?;
            continue;
        }
        writeln!(output)?;
    }

    write!(output, "{}", renderer.render(session.board()))?;

    let outcome = if session.state() == GameState::Won {
        let guesses = session.guesses_made();
        let message = format!("Congratulations! {guesses}/{MAX_GUESSES}");
        writeln!(output, "{}", renderer.success(&message))?;
        GameOutcome::Won { guesses }
    } else {
        writeln!(output, "{}", renderer.error(LOSS_MESSAGE))?;
        GameOutcome::Lost {
            answer: session.answer().text().to_string(),
        }
    };

    if config.show_share {
        writeln!(output, "\n{}", share_text(session))?;
    }
    output.flush()?;

    Ok(outcome)
}
