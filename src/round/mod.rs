//! Round state machine
//!
//! Tracks a single round: its solution, attempts and win/loss status.

mod report;
mod state;

pub use report::{RoundStatus, TurnReport};
pub use state::Round;
