//! Keyboard letter hints
//!
//! Derived state: the best verdict seen so far for every letter A-Z. Used by
//! a presentation layer to colour its on-screen keyboard.

use super::word::ALPHABET;
use super::{Feedback, Verdict, Word};

/// Best-known state of a single letter
///
/// Ordering follows precedence: Correct > Present > Absent > Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Numeric state as stored on the board: -1 for unknown, else the verdict value
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }
}

impl From<Verdict> for LetterState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Absent => Self::Absent,
            Verdict::Present => Self::Present,
            Verdict::Correct => Self::Correct,
        }
    }
}

/// Per-letter hints accumulated over a round
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keyboard {
    states: [LetterState; 26],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the hints
    ///
    /// A letter only ever moves up in precedence.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{evaluate, Keyboard, LetterState, Word};
    ///
    /// let solution = Word::new("apple").unwrap();
    /// let mut keyboard = Keyboard::new();
    ///
    /// let guess = Word::new("paper").unwrap();
    /// keyboard.record(&guess, &evaluate(&solution, &guess).unwrap());
    /// assert_eq!(keyboard.state(b'P'), LetterState::Correct);
    /// assert_eq!(keyboard.state(b'R'), LetterState::Absent);
    /// assert_eq!(keyboard.state(b'Z'), LetterState::Unknown);
    /// ```
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.states[i]) {
                *slot = (*slot).max(LetterState::from(verdict));
            }
        }
    }

    /// Best-known state for a letter (case-insensitive)
    #[must_use]
    pub fn state(&self, letter: u8) -> LetterState {
        Self::index(letter).map_or(LetterState::Unknown, |i| self.states[i])
    }

    /// All letters with their state, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        ALPHABET
            .iter()
            .zip(self.states.iter())
            .map(|(&letter, &state)| (letter as char, state))
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.states = [LetterState::Unknown; 26];
    }

    fn index(letter: u8) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| usize::from(upper - b'A'))
    }
}
