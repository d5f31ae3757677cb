//! Formatting utilities for terminal output

use crate::core::{Feedback, Keyboard, LetterState, Verdict, Word};
use colored::{ColoredString, Colorize};

/// One guess letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Verdict::Correct => tile.black().on_green().bold(),
        Verdict::Present => tile.black().on_yellow().bold(),
        Verdict::Absent => tile.white().on_bright_black(),
    }
}

/// A guess row as coloured tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| letter_tile(letter as char, verdict).to_string())
        .collect()
}

/// The alphabet with each letter coloured by its best-known state
#[must_use]
pub fn keyboard_line(keyboard: &Keyboard) -> String {
    keyboard
        .iter()
        .map(|(letter, state)| {
            let text = letter.to_string();
            match state {
                LetterState::Correct => text.green().bold().to_string(),
                LetterState::Present => text.yellow().bold().to_string(),
                LetterState::Absent => text.bright_black().to_string(),
                LetterState::Unknown => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row of placeholders for the remaining attempts, e.g. "_ _ _ _ _"
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    vec!["_"; word_length].join(" ")
}

/// Human label for a verdict
#[must_use]
pub const fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "correct",
        Verdict::Present => "present, wrong position",
        Verdict::Absent => "absent",
    }
}
