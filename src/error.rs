//! Error types for the round engine
//!
//! Core errors are contract violations the caller should never trigger in
//! normal play; submit errors are the recoverable rejections a presentation
//! layer shows to the player.

use crate::round::RoundStatus;
use thiserror::Error;

/// Errors raised when constructing a [`Word`](crate::core::Word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,

    #[error("word must contain only ASCII letters A-Z, got '{0}'")]
    InvalidCharacters(String),
}

/// Errors raised by the guess evaluator and the round state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and solution differ in length
    #[error("guess has {actual} letters, the solution has {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// A guess was submitted to a round that already ended
    #[error("round is already {status}, no further guesses are accepted")]
    InvalidTransition { status: RoundStatus },

    /// A round must allow at least one attempt
    #[error("a round needs at least one attempt")]
    NoAttempts,

    /// A given solution does not fit the board
    #[error("solution has {actual} letters, the board has {expected}")]
    InvalidSolutionLength { expected: usize, actual: usize },

    /// The word source had no solution to hand out
    #[error("word source has no solutions")]
    EmptyWordSource,
}

/// Rejections produced before a guess reaches the round
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Some cells of the guess row are still empty
    #[error("missing letters at positions {positions:?}")]
    MissingLetters { positions: Vec<usize> },

    /// More letters than the row has cells
    #[error("guess has {actual} letters, expected {expected}")]
    TooManyLetters { expected: usize, actual: usize },

    /// Characters outside A-Z
    #[error(transparent)]
    InvalidCharacters(#[from] WordError),

    /// The guess is not in the lexicon
    #[error("'{0}' is not a word")]
    NotAWord(String),

    /// The round itself refused the guess
    #[error(transparent)]
    Round(#[from] GameError),
}

impl SubmitError {
    /// Whether the player can fix this by editing the guess row
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Round(_))
    }
}

/// Errors raised while loading or assembling word lists
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no usable {word_length}-letter solutions in the word list")]
    NoSolutions { word_length: usize },
}

/// Errors raised while loading or validating a [`GameConfig`](crate::config::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_error_messages() {
        let err = GameError::InvalidGuessLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "guess has 4 letters, the solution has 5");

        let err = GameError::InvalidTransition {
            status: RoundStatus::Won,
        };
        assert_eq!(
            err.to_string(),
            "round is already won, no further guesses are accepted"
        );
    }

    #[test]
    fn submit_error_recoverability() {
        assert!(SubmitError::NotAWord("XXXXX".into()).is_recoverable());
        assert!(SubmitError::MissingLetters { positions: vec![4] }.is_recoverable());
        assert!(!SubmitError::Round(GameError::NoAttempts).is_recoverable());
    }

    #[test]
    fn submit_error_wraps_game_error() {
        let err: SubmitError = GameError::InvalidTransition {
            status: RoundStatus::Lost,
        }
        .into();
        assert!(matches!(
            err,
            SubmitError::Round(GameError::InvalidTransition { .. })
        ));
    }
}
