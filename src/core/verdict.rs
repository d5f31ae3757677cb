//! Per-letter verdicts and feedback rows
//!
//! A verdict keeps the numeric value the board stores for each cell:
//! - 0 = Absent (letter not in the remaining solution letters)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)

use std::fmt;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Verdict {
    /// Numeric cell value (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: G (correct), Y (present), - (absent)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess: one verdict per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Wrap an ordered list of verdicts
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// Verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{Feedback, Verdict};
    ///
    /// let feedback = Feedback::new(vec![Verdict::Correct, Verdict::Present, Verdict::Absent]);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Render as the compact G/Y/- code
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|v| v.code()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
