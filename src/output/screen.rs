//! Terminal screen control

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clears the terminal between turns, or does nothing when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    clear_enabled: bool,
}

impl Screen {
    #[must_use]
    pub const fn new(clear_enabled: bool) -> Self {
        Self { clear_enabled }
    }

    /// A screen that never clears; output scrolls instead
    #[must_use]
    pub const fn scrolling() -> Self {
        Self::new(false)
    }

    /// Wipe the visible terminal and home the cursor
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing the control sequence fails.
    pub fn clear<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.clear_enabled {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_screen_writes_nothing() {
        let mut out = Vec::new();
        Screen::scrolling().clear(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn clearing_screen_writes_escape_sequence() {
        let mut out = Vec::new();
        Screen::new(true).clear(&mut out).unwrap();
        assert!(out.starts_with(b"\x1b["));
    }
}
