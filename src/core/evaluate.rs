//! Guess evaluation
//!
//! Maps a (solution, guess) pair to one verdict per position using Wordle's
//! duplicate-aware rules.

use super::{Feedback, Verdict, Word};
use crate::error::GameError;

/// Evaluate `guess` against `solution`
///
/// # Algorithm
/// 1. Every position starts out Absent
/// 2. First pass: exact matches become Correct and their letter is taken
///    out of the solution's pool
/// 3. Second pass: scanning the remaining guess positions left to right, a
///    letter still in the pool becomes Present and takes one occurrence
///
/// When the guess repeats a letter more often than the solution, the
/// leftmost leftover positions get Present and the rest stay Absent.
///
/// # Errors
/// Returns `GameError::InvalidGuessLength` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_round::core::{evaluate, Word};
///
/// let solution = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// let feedback = evaluate(&solution, &guess).unwrap();
///
/// // P(present) A(present) P(correct) E(present) R(absent)
/// assert_eq!(feedback.to_code(), "YYGY-");
/// ```
pub fn evaluate(solution: &Word, guess: &Word) -> Result<Feedback, GameError> {
    if guess.len() != solution.len() {
        return Err(GameError::InvalidGuessLength {
            expected: solution.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![Verdict::Absent; solution.len()];
    let mut remaining = solution.letter_counts();

    // First pass: greens
    for (i, (&g, &s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            result[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows, left to right
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    let feedback = Feedback::new(result);
    tracing::trace!(%solution, %guess, feedback = %feedback.to_code(), "evaluated guess");
    Ok(feedback)
}
