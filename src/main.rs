//! Wordle Round - CLI
//!
//! Play rounds line by line in the terminal, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordle_round::{
    commands::{check_guess, run_play},
    config::GameConfig,
    core::Word,
    game::Game,
    output::print_check,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle-style word guessing game with duplicate-safe feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML file with `word_length` and `attempts_allowed`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Letters per word (overrides the config file)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Attempts per round (overrides the config file)
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Solution list (.txt one word per line, or .json)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Accepted guess list (.txt one word per line, or .json)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Seed for picking solutions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds in the terminal (default)
    Play {
        /// Fix the solution of the first round
        #[arg(long)]
        solution: Option<String>,
    },

    /// Score one guess against a solution
    Check {
        /// The hidden word
        solution: String,

        /// The guessed word
        guess: String,

        /// List the verdict of every letter
        #[arg(short, long)]
        explain: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wordle_round=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordle_round=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let config = config.with_overrides(cli.length, cli.attempts);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli
        .command
        .take()
        .unwrap_or(Commands::Play { solution: None });

    match command {
        Commands::Play { solution } => run_play_command(&cli, solution.as_deref()),
        Commands::Check {
            solution,
            guess,
            explain,
        } => run_check_command(&solution, &guess, explain),
    }
}

fn run_play_command(cli: &Cli, solution: Option<&str>) -> Result<()> {
    let config = load_config(cli)?;
    let bank = WordBank::from_files(
        cli.solutions.as_deref(),
        cli.lexicon.as_deref(),
        config.word_length,
    )
    .context("failed to load word lists")?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut game = Game::new(bank, config.attempts_allowed, rng)?;
    if let Some(word) = solution {
        let word = Word::new(word).context("invalid --solution")?;
        game.new_round_with(word)?;
    }

    run_play(&mut game, io::stdin().lock())
}

fn run_check_command(solution: &str, guess: &str, explain: bool) -> Result<()> {
    let result = check_guess(solution, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check(&result.guess, &result.feedback, explain);
    Ok(())
}
