//! Wordle Game
//!
//! A command-line Wordle: a hidden five-letter answer, six guesses, and
//! letter-by-letter feedback that accounts for repeated letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, GameState};
//! use wordle_game::wordlists::WordStore;
//!
//! let store = WordStore::embedded();
//! let mut game = GameSession::with_answer(&store, Word::new("crane").unwrap());
//!
//! let guess = game.submit("slate").unwrap();
//! println!("{}", guess.feedback());
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Board and session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
