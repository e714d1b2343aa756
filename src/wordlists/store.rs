//! Word store: the allowed-guess and answer lists for a process
//!
//! Loaded once at startup and shared read-only by every game.

use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use log::{debug, info, warn};
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to load a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {name}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("word list {name} contains no valid words")]
    Empty { name: String },
}

/// Allowed guesses and candidate answers, each sorted and deduplicated
///
/// Every answer is also an allowed guess.
#[derive(Debug, Clone)]
pub struct WordStore {
    allowed: Vec<Word>,
    answers: Vec<Word>,
}

impl WordStore {
    /// Load both lists from plain-text files, one word per line
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if either file cannot be read, and
    /// `LoadError::Empty` if either file has no valid 5-letter words.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::load("assets/allowed.txt", "assets/answers.txt").unwrap();
    /// println!("{} answers", store.answers().len());
    /// ```
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        allowed_path: P,
        answers_path: Q,
    ) -> Result<Self, LoadError> {
        let allowed = read_list(allowed_path.as_ref())?;
        let answers = read_list(answers_path.as_ref())?;
        Ok(Self::build(allowed, answers))
    }

    /// Build a store from in-memory word slices
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if either slice has no valid 5-letter words.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(&["crane", "slate"], &["SLATE\n"]).unwrap();
    /// assert!(store.is_allowed_guess("slate"));
    /// assert!(!store.is_allowed_guess("plate"));
    /// ```
    pub fn from_words(allowed: &[&str], answers: &[&str]) -> Result<Self, LoadError> {
        let allowed = parse_list("allowed", allowed.iter().copied())?;
        let answers = parse_list("answers", answers.iter().copied())?;
        Ok(Self::build(allowed, answers))
    }

    /// Store backed by the word lists embedded at build time
    #[must_use]
    pub fn embedded() -> Self {
        let parse = |words: &[&str]| -> Vec<Word> {
            words.iter().filter_map(|&w| Word::new(w).ok()).collect()
        };
        Self::build(parse(ALLOWED), parse(ANSWERS))
    }

    fn build(mut allowed: Vec<Word>, mut answers: Vec<Word>) -> Self {
        sort_and_dedup(&mut answers);
        sort_and_dedup(&mut allowed);

        let missing: Vec<Word> = answers
            .iter()
            .filter(|w| search(&allowed, w.text()).is_err())
            .cloned()
            .collect();
        if !missing.is_empty() {
            warn!(
                "{} answers are missing from the allowed list, adding them",
                missing.len()
            );
            allowed.extend(missing);
            sort_and_dedup(&mut allowed);
        }

        info!(
            "Loaded {} allowed guesses and {} answers",
            allowed.len(),
            answers.len()
        );

        Self { allowed, answers }
    }

    /// Check if a normalized word is an allowed guess
    #[must_use]
    pub fn is_allowed_guess(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// The stored allowed word matching `word` exactly
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&Word> {
        search(&self.allowed, word).ok().map(|i| &self.allowed[i])
    }

    /// Pick an answer uniformly at random
    ///
    /// Each call is independent; answers are never used up.
    pub fn random_answer<R: Rng>(&self, rng: &mut R) -> &Word {
        let answer = &self.answers[rng.random_range(0..self.answers.len())];
        debug!("Selected answer {answer}");
        answer
    }

    /// All allowed guesses, sorted
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// All candidate answers, sorted
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, LoadError> {
    let name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        name: name.clone(),
        source,
    })?;
    parse_list(&name, content.lines())
}

fn parse_list<'a>(
    name: &str,
    lines: impl Iterator<Item = &'a str>,
) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => words.push(word),
            Err(e) => warn!("Skipping '{trimmed}' in {name}: {e}"),
        }
    }

    if words.is_empty() {
        return Err(LoadError::Empty {
            name: name.to_string(),
        });
    }

    debug!("Parsed {} words from {name}", words.len());
    Ok(words)
}

fn sort_and_dedup(words: &mut Vec<Word>) {
    words.sort_by(|a, b| a.text().cmp(b.text()));
    words.dedup_by(|a, b| a.text() == b.text());
}

fn search(words: &[Word], text: &str) -> Result<usize, usize> {
    words.binary_search_by(|w| w.text().cmp(text))
}
