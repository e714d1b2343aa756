//! One play-through: answer selection to win or loss

use super::Board;
use crate::core::{Guess, MAX_GUESSES, Word};
use crate::wordlists::WordStore;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A rejected guess; the turn is not consumed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("\"{0}\" is not on the word list.")]
    NotInWordList(String),
}

/// A single game against a fixed answer
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    store: &'a WordStore,
    answer: Word,
    board: Board,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a game with an answer drawn from the store
    pub fn new<R: Rng>(store: &'a WordStore, rng: &mut R) -> Self {
        let answer = store.random_answer(rng).clone();
        Self::with_answer(store, answer)
    }

    /// Start a game with a known answer
    #[must_use]
    pub fn with_answer(store: &'a WordStore, answer: Word) -> Self {
        Self {
            store,
            answer,
            board: Board::new(),
            state: GameState::InProgress,
        }
    }

    /// Play a raw guess from the player
    ///
    /// The input is trimmed and lowercased before the word-list check.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::NotInWordList` if the normalized guess is not an
    /// allowed word. The board and state are left untouched.
    ///
    /// # Panics
    /// Panics if the game is already won or lost.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, GameState};
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(&["crane", "slate"], &["slate"]).unwrap();
    /// let mut game = GameSession::with_answer(&store, Word::new("slate").unwrap());
    ///
    /// assert!(game.submit("xxxxx").is_err());
    /// game.submit("CRANE").unwrap();
    /// game.submit("slate").unwrap();
    /// assert_eq!(game.state(), GameState::Won);
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<&Guess, GuessError> {
        assert!(
            !self.state.is_over(),
            "guess submitted after the game ended ({:?})",
            self.state
        );

        let normalized = raw.trim().to_lowercase();
        let Some(word) = self.store.lookup(&normalized) else {
            debug!("Rejected guess '{normalized}'");
            return Err(GuessError::NotInWordList(normalized));
        };

        let guess = Guess::new(word.clone(), self.answer.clone());
        let solved = guess.is_answer();
        debug!("Guess {}: {guess}", self.board.len() + 1);
        self.board.make_guess(guess);

        if solved {
            self.state = GameState::Won;
            info!("Won in {}/{MAX_GUESSES}", self.guesses_made());
        } else if self.board.is_full() {
            self.state = GameState::Lost;
            info!("Lost, answer was {}", self.answer);
        }

        Ok(&self.board.guesses()[self.board.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.board.len()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}
