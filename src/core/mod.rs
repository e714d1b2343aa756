//! Core domain types for Wordle
//!
//! This module contains the pure, terminal-free pieces of the game: validated
//! words, the feedback scorer and immutable scored guesses.

mod feedback;
mod guess;
mod word;

pub use feedback::{Feedback, LetterResult, score};
pub use guess::Guess;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_GUESSES: usize = 6;
