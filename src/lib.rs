//! Wordle Round
//!
//! The rules engine of a Wordle-style game: duplicate-safe guess evaluation,
//! a round state machine with a fixed attempt budget, and the keyboard state
//! derived from accepted guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_round::core::{Word, evaluate};
//!
//! let solution = Word::new("apple").unwrap();
//! let guess = Word::new("paper").unwrap();
//!
//! // G in place, Y elsewhere in the word, - absent
//! let feedback = evaluate(&solution, &guess).unwrap();
//! assert_eq!(feedback.to_code(), "YYGY-");
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod round;

// Game session over a word source
pub mod game;

// Word lists
pub mod wordlists;

// Settings file and overrides
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
