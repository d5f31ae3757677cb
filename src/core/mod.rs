//! Core domain types for the word game
//!
//! Pure, deterministic building blocks: words, verdicts, the evaluator and
//! the derived keyboard hints. Nothing here holds round state.

mod evaluate;
mod keyboard;
mod verdict;
mod word;

pub use evaluate::evaluate;
pub use keyboard::{Keyboard, LetterState};
pub use verdict::{Feedback, Verdict};
pub use word::{ALPHABET, Word};
