//! Word lists for the game
//!
//! Embedded solution and lexicon lists compiled into the binary, file
//! loaders, and the [`WordBank`] word source built on top of them.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordSource};
pub use embedded::{LEXICON, LEXICON_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
