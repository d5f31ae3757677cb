//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckResult, check_guess};
pub use play::run_play;
