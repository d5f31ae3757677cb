//! Terminal output formatting
//!
//! Display utilities for the line-based game and one-off checks.

pub mod display;
pub mod formatters;

pub use display::{print_check, print_rejection, print_round_start, print_turn};
