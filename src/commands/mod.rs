//! Command implementations

pub mod play;

pub use play::{GameOutcome, PlayConfig, play_game};
