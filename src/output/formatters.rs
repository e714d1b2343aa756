//! Formatting utilities for end-of-game summaries

use crate::core::MAX_GUESSES;
use crate::game::{GameSession, GameState};

/// Build a spoiler-free share grid, e.g. "Wordle 3/6" followed by emoji rows
///
/// Lost games show `X` in place of the guess count.
#[must_use]
pub fn share_text(session: &GameSession<'_>) -> String {
    let score = match session.state() {
        GameState::Won => session.guesses_made().to_string(),
        GameState::Lost | GameState::InProgress => "X".to_string(),
    };

    let mut text = format!("Wordle {score}/{MAX_GUESSES}");
    for guess in session.board().guesses() {
        text.push('\n');
        text.push_str(&guess.feedback().to_emoji());
    }
    text
}
