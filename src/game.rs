//! Game session
//!
//! The object a presentation layer talks to. It owns the word source and
//! exactly one [`Round`], screens raw guess rows before they reach the round,
//! and starts new rounds on request.

use crate::core::Word;
use crate::error::{GameError, SubmitError};
use crate::round::{Round, TurnReport};
use crate::wordlists::WordSource;
use rand::rngs::StdRng;

/// Placeholders a presentation layer may use for an empty cell, besides whitespace
const BLANK_CELLS: [char; 2] = ['_', '.'];

/// One game session over a word source
pub struct Game<S: WordSource> {
    source: S,
    round: Round,
    rng: StdRng,
}

impl<S: WordSource> Game<S> {
    /// Start a session with a random solution
    ///
    /// # Errors
    /// - `GameError::EmptyWordSource` if the source has no solutions
    /// - `GameError::NoAttempts` if `attempts_allowed` is zero
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_round::game::Game;
    /// use wordle_round::round::RoundStatus;
    /// use wordle_round::wordlists::WordBank;
    ///
    /// let bank = WordBank::new(&["apple"], &["paper"], 5).unwrap();
    /// let mut game = Game::new(bank, 5, StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let report = game.submit("paper").unwrap();
    /// assert_eq!(report.feedback.to_code(), "YYGY-");
    ///
    /// let report = game.submit("apple").unwrap();
    /// assert_eq!(report.status, RoundStatus::Won);
    /// ```
    pub fn new(source: S, attempts_allowed: usize, mut rng: StdRng) -> Result<Self, GameError> {
        let solution = source
            .pick_solution(&mut rng)
            .ok_or(GameError::EmptyWordSource)?;
        let round = Round::new(solution, attempts_allowed)?;
        tracing::info!(
            word_length = source.word_length(),
            attempts_allowed,
            "game started"
        );

        Ok(Self { source, round, rng })
    }

    /// Submit one guess row
    ///
    /// The row is read cell by cell: a blank cell is whitespace, `_`, `.`, or
    /// a missing trailing character. Rejected rows leave the round untouched.
    ///
    /// # Errors
    /// - `SubmitError::Round(InvalidTransition)` once the round is over
    /// - `SubmitError::MissingLetters` for blank cells
    /// - `SubmitError::TooManyLetters` if the row is longer than the word
    /// - `SubmitError::InvalidCharacters` for anything but letters
    /// - `SubmitError::NotAWord` if the lexicon doesn't know the guess
    pub fn submit(&mut self, input: &str) -> Result<TurnReport, SubmitError> {
        if self.round.is_over() {
            return Err(GameError::InvalidTransition {
                status: self.round.status(),
            }
            .into());
        }

        let guess = self.read_row(input).inspect_err(|e| {
            tracing::debug!(input, error = %e, "guess row rejected");
        })?;

        if !self.source.is_valid_guess(guess.text()) {
            tracing::debug!(%guess, "not in lexicon");
            return Err(SubmitError::NotAWord(guess.text().to_string()));
        }

        Ok(self.round.submit(&guess)?)
    }

    /// Abandon the current round and start one with a random solution
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordSource` if the source has no solutions.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let solution = self
            .source
            .pick_solution(&mut self.rng)
            .ok_or(GameError::EmptyWordSource)?;
        self.round.reset(solution);
        tracing::info!("new round");
        Ok(())
    }

    /// Abandon the current round and start one with a chosen solution
    ///
    /// The word need not be in the solution list but must fit the board.
    ///
    /// # Errors
    /// Returns `GameError::InvalidSolutionLength` if the word has the wrong
    /// number of letters.
    pub fn new_round_with(&mut self, solution: Word) -> Result<(), GameError> {
        let expected = self.source.word_length();
        if solution.len() != expected {
            return Err(GameError::InvalidSolutionLength {
                expected,
                actual: solution.len(),
            });
        }
        self.round.reset(solution);
        tracing::info!("new round with given solution");
        Ok(())
    }

    /// The active round
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Letters per guess
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.source.word_length()
    }

    fn read_row(&self, input: &str) -> Result<Word, SubmitError> {
        let cells: Vec<char> = input.trim_end_matches(['\r', '\n']).chars().collect();
        let length = self.word_length();

        let missing: Vec<usize> = (0..length)
            .filter(|&i| cells.get(i).is_none_or(|&c| is_blank(c)))
            .collect();
        if !missing.is_empty() {
            return Err(SubmitError::MissingLetters { positions: missing });
        }

        if cells.len() > length {
            return Err(SubmitError::TooManyLetters {
                expected: length,
                actual: cells.len(),
            });
        }

        Ok(Word::new(cells.into_iter().collect::<String>())?)
    }
}

fn is_blank(cell: char) -> bool {
    cell.is_whitespace() || BLANK_CELLS.contains(&cell)
}
