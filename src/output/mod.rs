//! Terminal output formatting
//!
//! Rendering of the board, status messages and screen control, kept behind
//! [`BoardRenderer`] and [`Screen`] so game logic stays terminal-free.

pub mod formatters;
pub mod render;
pub mod screen;

pub use formatters::share_text;
pub use render::{AnsiRenderer, BoardRenderer, PlainRenderer};
pub use screen::Screen;
