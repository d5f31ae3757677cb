//! Round status and per-turn results

use crate::core::{Feedback, Word};
use std::fmt;

/// Lifecycle of a round
///
/// Moves only forward: `InProgress` -> `Won` or `InProgress` -> `Lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Whether the round has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// What the presentation layer gets back from an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub guess: Word,
    pub feedback: Feedback,
    pub status: RoundStatus,
    pub attempts_used: usize,
    pub attempts_allowed: usize,
    /// Only set once the round is lost
    pub solution: Option<Word>,
}

impl TurnReport {
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.attempts_allowed.saturating_sub(self.attempts_used)
    }
}
