//! Game state: the board of played guesses and the session state machine

mod board;
mod session;

pub use board::{Board, Row};
pub use session::{GameSession, GameState, GuessError};
