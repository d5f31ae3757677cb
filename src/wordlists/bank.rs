//! Word sources
//!
//! A word source hands out solutions and decides which guesses are words.

use super::loader::{load_from_file, words_from_slice};
use super::{LEXICON, SOLUTIONS};
use crate::core::Word;
use crate::error::WordListError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Supplies solutions and the lexicon membership test
pub trait WordSource {
    /// Letters per word for every solution this source hands out
    fn word_length(&self) -> usize;

    /// Pick a solution for a new round
    ///
    /// Returns `None` if the source has no solutions.
    fn pick_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word>;

    /// Whether `guess` is an accepted word (case-insensitive)
    fn is_valid_guess(&self, guess: &str) -> bool;
}

/// Solution list plus lexicon
///
/// Every solution is also accepted as a guess.
#[derive(Debug, Clone)]
pub struct WordBank {
    word_length: usize,
    solutions: Vec<Word>,
    lexicon: FxHashSet<Word>,
}

impl WordBank {
    /// Build from raw solution and lexicon entries
    ///
    /// Entries that are not alphabetic or not `word_length` letters long are
    /// skipped.
    ///
    /// # Errors
    /// Returns `WordListError::NoSolutions` if no usable solution remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::wordlists::{WordBank, WordSource};
    ///
    /// let bank = WordBank::new(&["apple"], &["paper", "crane"], 5).unwrap();
    /// assert!(bank.is_valid_guess("Paper"));
    /// assert!(bank.is_valid_guess("apple"));
    /// assert!(!bank.is_valid_guess("xxxxx"));
    /// ```
    pub fn new<S: AsRef<str>, L: AsRef<str>>(
        solutions: &[S],
        lexicon: &[L],
        word_length: usize,
    ) -> Result<Self, WordListError> {
        let solutions = words_from_slice(solutions, word_length);
        if solutions.is_empty() {
            return Err(WordListError::NoSolutions { word_length });
        }

        let mut accepted: FxHashSet<Word> = words_from_slice(lexicon, word_length)
            .into_iter()
            .collect();
        accepted.extend(solutions.iter().cloned());

        tracing::debug!(
            word_length,
            solutions = solutions.len(),
            lexicon = accepted.len(),
            "word bank ready"
        );

        Ok(Self {
            word_length,
            solutions,
            lexicon: accepted,
        })
    }

    /// Bank over the lists compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::NoSolutions` if the embedded lists hold no
    /// word of `word_length` letters.
    pub fn embedded(word_length: usize) -> Result<Self, WordListError> {
        Self::new(SOLUTIONS, LEXICON, word_length)
    }

    /// Bank over word list files, falling back to the embedded list for
    /// whichever file is not given
    ///
    /// # Errors
    /// Returns `WordListError` if a file can't be loaded or no usable
    /// solution remains.
    pub fn from_files(
        solutions: Option<&Path>,
        lexicon: Option<&Path>,
        word_length: usize,
    ) -> Result<Self, WordListError> {
        let solutions = match solutions {
            Some(path) => load_from_file(path)?,
            None => embedded_strings(SOLUTIONS),
        };
        let lexicon = match lexicon {
            Some(path) => load_from_file(path)?,
            None => embedded_strings(LEXICON),
        };
        Self::new(&solutions, &lexicon, word_length)
    }

    /// Possible solutions
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether `word` is an accepted guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lexicon.contains(word)
    }
}

impl WordSource for WordBank {
    fn word_length(&self) -> usize {
        self.word_length
    }

    fn pick_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.solutions.choose(rng).cloned()
    }

    fn is_valid_guess(&self, guess: &str) -> bool {
        Word::new(guess).is_ok_and(|word| self.contains(&word))
    }
}

fn embedded_strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|&s| s.to_string()).collect()
}
