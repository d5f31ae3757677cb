//! One-off evaluation command
//!
//! Scores a single guess against a given solution without a round.

use crate::core::{Feedback, Word, evaluate};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub solution: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty or contains anything but letters
/// - The words have different lengths
pub fn check_guess(solution: &str, guess: &str) -> Result<CheckResult, String> {
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = evaluate(&solution, &guess).map_err(|e| e.to_string())?;

    Ok(CheckResult {
        solution,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_duplicate_letters() {
        let result = check_guess("apple", "paper").unwrap();
        assert_eq!(result.feedback.to_code(), "YYGY-");
        assert_eq!(result.guess.text(), "PAPER");
        assert_eq!(result.solution.text(), "APPLE");
    }

    #[test]
    fn check_exact_match() {
        assert!(check_guess("Crane", "CRANE").unwrap().feedback.is_perfect());
    }

    #[test]
    fn check_rejects_bad_input() {
        assert!(check_guess("apple", "pap3r").unwrap_err().starts_with("Invalid guess"));
        assert!(check_guess("", "paper").unwrap_err().starts_with("Invalid solution"));
        assert!(check_guess("apple", "monkey").is_err());
    }
}
