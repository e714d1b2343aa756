//! A single scored guess

use super::{Feedback, Word};
use std::fmt;

/// A guess played against an answer, scored once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    answer: Word,
    feedback: Feedback,
}

impl Guess {
    /// Score `word` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Guess, Word};
    ///
    /// let answer = Word::new("alloy").unwrap();
    /// let guess = Guess::new(Word::new("llama").unwrap(), answer);
    /// assert_eq!(guess.feedback().to_emoji(), "⬜🟩⬜⬜🟨");
    /// assert!(!guess.is_answer());
    /// ```
    #[must_use]
    pub fn new(word: Word, answer: Word) -> Self {
        let feedback = Feedback::calculate(&word, &answer);
        Self {
            word,
            answer,
            feedback,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Check if the guessed word is the answer
    #[must_use]
    pub fn is_answer(&self) -> bool {
        self.word == self.answer
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word.text().to_uppercase(), self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult;

    fn guess(word: &str, answer: &str) -> Guess {
        Guess::new(Word::new(word).unwrap(), Word::new(answer).unwrap())
    }

    #[test]
    fn guess_of_answer_is_answer() {
        let g = guess("crane", "crane");
        assert!(g.is_answer());
        assert!(g.feedback().is_perfect());
    }

    #[test]
    fn guess_keeps_both_words() {
        let g = guess("robot", "floor");
        assert_eq!(g.word().text(), "robot");
        assert_eq!(g.answer().text(), "floor");
        assert!(!g.is_answer());
        assert_eq!(g.feedback().count(LetterResult::ExactMatch), 1);
    }

    #[test]
    fn guess_display() {
        let g = guess("crane", "slate");
        assert_eq!(g.to_string(), "CRANE ⬜⬜🟩⬜🟩");
    }
}
