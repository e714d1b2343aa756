//! Game board: the ordered guesses of one game

use crate::core::{Guess, MAX_GUESSES};

/// One board line, either a played guess or an empty placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Filled(&'a Guess),
    Empty,
}

/// Up to `MAX_GUESSES` scored guesses in play order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    guesses: Vec<Guess>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guesses: Vec::with_capacity(MAX_GUESSES),
        }
    }

    /// Place `guess` in the next empty row
    ///
    /// # Panics
    /// Panics if the board is already full. The session stops accepting
    /// guesses before that can happen.
    pub fn make_guess(&mut self, guess: Guess) {
        assert!(
            !self.is_full(),
            "board already holds {MAX_GUESSES} guesses"
        );
        self.guesses.push(guess);
    }

    /// Guesses played so far, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Number of guesses played
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.guesses.len() >= MAX_GUESSES
    }

    /// All `MAX_GUESSES` rows: played guesses first, then placeholders
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.guesses
            .iter()
            .map(Row::Filled)
            .chain(std::iter::repeat_n(Row::Empty, MAX_GUESSES - self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn guess(word: &str) -> Guess {
        Guess::new(Word::new(word).unwrap(), Word::new("alloy").unwrap())
    }

    #[test]
    fn new_board_is_all_placeholders() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.rows().count(), MAX_GUESSES);
        assert!(board.rows().all(|row| row == Row::Empty));
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut board = Board::new();
        board.make_guess(guess("crane"));
        board.make_guess(guess("llama"));

        let rows: Vec<Row<'_>> = board.rows().collect();
        assert_eq!(rows.len(), MAX_GUESSES);
        assert!(matches!(rows[0], Row::Filled(g) if g.word().text() == "crane"));
        assert!(matches!(rows[1], Row::Filled(g) if g.word().text() == "llama"));
        assert!(rows[2..].iter().all(|&row| row == Row::Empty));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn board_fills_up() {
        let mut board = Board::new();
        for _ in 0..MAX_GUESSES {
            board.make_guess(guess("crane"));
        }
        assert!(board.is_full());
        assert!(board.rows().all(|row| matches!(row, Row::Filled(_))));
    }

    #[test]
    #[should_panic(expected = "board already holds")]
    fn overfilling_panics() {
        let mut board = Board::new();
        for _ in 0..=MAX_GUESSES {
            board.make_guess(guess("crane"));
        }
    }
}
