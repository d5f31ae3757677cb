//! Line-based play mode
//!
//! Reads one guess row per line and prints the verdict after each one.

use crate::game::Game;
use crate::output::{print_rejection, print_round_start, print_turn};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewRound,
    Guess(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    match line.trim().to_ascii_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::NewRound,
        _ => Command::Guess(line.trim_end()),
    }
}

/// Run the game loop until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails, or if a
/// new round cannot be started.
pub fn run_play<S: WordSource, R: BufRead>(game: &mut Game<S>, input: R) -> Result<()> {
    println!("Guess the word. Commands: ':new' for a new round, ':quit' to exit.");
    print_round_start(game.round());

    let mut lines = input.lines();

    loop {
        if !game.round().is_over() {
            let round = game.round();
            print!("Guess {}/{}: ", round.attempts_used() + 1, round.attempts_allowed());
            io::stdout().flush().context("failed to flush stdout")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        match parse_line(&line) {
            Command::Quit => break,
            Command::NewRound => {
                game.new_round()?;
                print_round_start(game.round());
            }
            Command::Guess(_) if game.round().is_over() => {
                println!("The round is over. Type :new or :quit.");
            }
            Command::Guess(row) => match game.submit(row) {
                Ok(report) => print_turn(&report, game.round()),
                Err(e) => print_rejection(&e),
            },
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}
