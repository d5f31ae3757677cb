//! The round state machine
//!
//! A round owns its solution, counts attempts and closes itself on a win or
//! when the attempt limit is reached.

use super::{RoundStatus, TurnReport};
use crate::core::{Feedback, Keyboard, Word, evaluate};
use crate::error::GameError;

/// One play-through from solution selection to Won/Lost
#[derive(Debug, Clone)]
pub struct Round {
    solution: Word,
    attempts_used: usize,
    attempts_allowed: usize,
    status: RoundStatus,
    keyboard: Keyboard,
    history: Vec<(Word, Feedback)>,
}

impl Round {
    /// Start a round
    ///
    /// # Errors
    /// Returns `GameError::NoAttempts` if `attempts_allowed` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::Word;
    /// use wordle_round::round::{Round, RoundStatus};
    ///
    /// let mut round = Round::new(Word::new("apple").unwrap(), 5).unwrap();
    /// let report = round.submit(&Word::new("paper").unwrap()).unwrap();
    ///
    /// assert_eq!(report.feedback.to_code(), "YYGY-");
    /// assert_eq!(report.status, RoundStatus::InProgress);
    /// assert_eq!(round.attempts_used(), 1);
    /// ```
    pub fn new(solution: Word, attempts_allowed: usize) -> Result<Self, GameError> {
        if attempts_allowed == 0 {
            return Err(GameError::NoAttempts);
        }

        Ok(Self {
            solution,
            attempts_used: 0,
            attempts_allowed,
            status: RoundStatus::InProgress,
            keyboard: Keyboard::new(),
            history: Vec::new(),
        })
    }

    /// Evaluate a guess and advance the round
    ///
    /// Lexicon checks belong to the caller; this only enforces the state
    /// machine and the length contract. On error nothing changes.
    ///
    /// # Errors
    /// - `GameError::InvalidTransition` if the round already ended
    /// - `GameError::InvalidGuessLength` if the guess length differs from the solution
    pub fn submit(&mut self, guess: &Word) -> Result<TurnReport, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidTransition {
                status: self.status,
            });
        }

        let feedback = evaluate(&self.solution, guess)?;
        self.attempts_used += 1;

        if feedback.is_perfect() {
            self.status = RoundStatus::Won;
        } else if self.attempts_used >= self.attempts_allowed {
            self.status = RoundStatus::Lost;
        }

        self.keyboard.record(guess, &feedback);
        self.history.push((guess.clone(), feedback.clone()));

        tracing::debug!(
            %guess,
            feedback = %feedback.to_code(),
            attempt = self.attempts_used,
            of = self.attempts_allowed,
            "guess accepted"
        );
        if self.status.is_terminal() {
            tracing::info!(
                status = %self.status,
                attempts = self.attempts_used,
                solution = %self.solution,
                "round over"
            );
        }

        Ok(TurnReport {
            guess: guess.clone(),
            feedback,
            status: self.status,
            attempts_used: self.attempts_used,
            attempts_allowed: self.attempts_allowed,
            solution: (self.status == RoundStatus::Lost).then(|| self.solution.clone()),
        })
    }

    /// Abandon the current round and start over with a new solution
    ///
    /// The attempt limit is kept.
    pub fn reset(&mut self, new_solution: Word) {
        tracing::debug!(
            abandoned = !self.status.is_terminal() && self.attempts_used > 0,
            "round reset"
        );
        self.solution = new_solution;
        self.attempts_used = 0;
        self.status = RoundStatus::InProgress;
        self.keyboard.clear();
        self.history.clear();
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Letters per word in this round
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution.len()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_allowed(&self) -> usize {
        self.attempts_allowed
    }

    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.attempts_allowed - self.attempts_used
    }

    /// Best-known state of every letter this round
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }
}
