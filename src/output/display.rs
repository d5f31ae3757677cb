//! Display functions for game events

use super::formatters::{empty_row, guess_row, keyboard_line, verdict_label};
use crate::core::{Feedback, Word};
use crate::error::SubmitError;
use crate::round::{Round, RoundStatus, TurnReport};
use colored::Colorize;

/// Status banner text once a round is over
///
/// Returns `None` while the round is still running.
#[must_use]
pub fn status_message(report: &TurnReport) -> Option<String> {
    match report.status {
        RoundStatus::InProgress => None,
        RoundStatus::Won => Some(format!(
            "Solved in {} {}.",
            report.attempts_used,
            if report.attempts_used == 1 {
                "attempt"
            } else {
                "attempts"
            }
        )),
        RoundStatus::Lost => Some(format!(
            "Lost. Solution: {}.",
            report
                .solution
                .as_ref()
                .map_or_else(|| "?".to_string(), ToString::to_string)
        )),
    }
}

/// Short player-facing text for a rejected row
#[must_use]
pub fn rejection_message(error: &SubmitError) -> String {
    match error {
        SubmitError::MissingLetters { positions } => {
            let cells: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
            format!("Missing letters (cell {}).", cells.join(", "))
        }
        SubmitError::TooManyLetters { expected, .. } => {
            format!("Too many letters, the word has {expected}.")
        }
        SubmitError::InvalidCharacters(_) => "Only letters A-Z are allowed.".to_string(),
        SubmitError::NotAWord(word) => format!("{word} is not a word."),
        SubmitError::Round(e) => format!("Guess refused: {e}."),
    }
}

/// Print the greeting for a new round
pub fn print_round_start(round: &Round) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "New round: {} letters, {} attempts",
        round.word_length().to_string().bright_yellow().bold(),
        round.attempts_allowed().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("{}", empty_row(round.word_length()).bright_black());
}

/// Print an accepted guess and the keyboard state
pub fn print_turn(report: &TurnReport, round: &Round) {
    println!(
        "{}  {}  {}/{}",
        guess_row(&report.guess, &report.feedback),
        report.feedback.to_emoji(),
        report.attempts_used,
        report.attempts_allowed
    );
    println!("  {}", keyboard_line(round.keyboard()));

    if let Some(message) = status_message(report) {
        let banner = match report.status {
            RoundStatus::Won => message.green().bold(),
            _ => message.red().bold(),
        };
        println!("\n{banner}");
        println!("Type :new for another round or :quit to exit.");
    }
}

/// Print why a row was rejected
pub fn print_rejection(error: &SubmitError) {
    println!("{}", rejection_message(error).red());
}

/// Print a one-off evaluation
pub fn print_check(guess: &Word, feedback: &Feedback, explain: bool) {
    println!("{}  {}", guess_row(guess, feedback), feedback.to_emoji());

    if explain {
        for (i, (&letter, &verdict)) in guess.letters().iter().zip(feedback.verdicts()).enumerate() {
            println!("  {}. {} {}", i + 1, letter as char, verdict_label(verdict));
        }
    }

    if feedback.is_perfect() {
        println!("{}", format!("{guess} is the solution.").green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::error::GameError;

    fn report(status: RoundStatus, attempts_used: usize, solution: Option<&str>) -> TurnReport {
        TurnReport {
            guess: Word::new("paper").unwrap(),
            feedback: evaluate(&Word::new("apple").unwrap(), &Word::new("paper").unwrap()).unwrap(),
            status,
            attempts_used,
            attempts_allowed: 5,
            solution: solution.map(|s| Word::new(s).unwrap()),
        }
    }

    #[test]
    fn no_message_while_in_progress() {
        assert_eq!(status_message(&report(RoundStatus::InProgress, 2, None)), None);
    }

    #[test]
    fn won_message_counts_attempts() {
        assert_eq!(
            status_message(&report(RoundStatus::Won, 3, None)).as_deref(),
            Some("Solved in 3 attempts.")
        );
        assert_eq!(
            status_message(&report(RoundStatus::Won, 1, None)).as_deref(),
            Some("Solved in 1 attempt.")
        );
    }

    #[test]
    fn lost_message_shows_solution() {
        assert_eq!(
            status_message(&report(RoundStatus::Lost, 5, Some("apple"))).as_deref(),
            Some("Lost. Solution: APPLE.")
        );
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            rejection_message(&SubmitError::MissingLetters {
                positions: vec![3, 4]
            }),
            "Missing letters (cell 4, 5)."
        );
        assert_eq!(
            rejection_message(&SubmitError::NotAWord("XYZZY".into())),
            "XYZZY is not a word."
        );
        assert!(
            rejection_message(&SubmitError::Round(GameError::InvalidTransition {
                status: RoundStatus::Won
            }))
            .contains("already won")
        );
    }
}
