//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wordle() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("wordle").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_scores_duplicate_letters() {
    wordle()
        .args(["check", "apple", "paper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🟨🟨🟩🟨⬜"));
}

#[test]
fn check_explain_lists_letters() {
    wordle()
        .args(["check", "apple", "paper", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. P correct"))
        .stdout(predicate::str::contains("5. R absent"));
}

#[test]
fn check_exact_match() {
    wordle()
        .args(["check", "crane", "CRANE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRANE is the solution."));
}

#[test]
fn check_length_mismatch_fails() {
    wordle()
        .args(["check", "apple", "monkey"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("guess has 6 letters"));
}

#[test]
fn play_win_in_two() {
    wordle()
        .args(["play", "--solution", "apple"])
        .write_stdin("paper\napple\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solved in 2 attempts."));
}

#[test]
fn play_is_default_command() {
    wordle()
        .write_stdin(":quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New round: 5 letters, 5 attempts"))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_rejects_rows_without_cost() {
    wordle()
        .args(["play", "--solution", "apple"])
        .write_stdin("xyzzy\npap\npap3r\napple\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("XYZZY is not a word."))
        .stdout(predicate::str::contains("Missing letters (cell 4, 5)."))
        .stdout(predicate::str::contains("Only letters A-Z are allowed."))
        .stdout(predicate::str::contains("Solved in 1 attempt."));
}

#[test]
fn play_loss_reveals_solution() {
    wordle()
        .args(["play", "--attempts", "2", "--solution", "apple"])
        .write_stdin("paper\ncrane\napple\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lost. Solution: APPLE."))
        .stdout(predicate::str::contains("The round is over."));
}

#[test]
fn play_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("wordle.toml");
    fs::write(&config, "attempts_allowed = 1\n").unwrap();

    wordle()
        .arg("--config")
        .arg(&config)
        .args(["play", "--solution", "apple"])
        .write_stdin("paper\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 attempts"))
        .stdout(predicate::str::contains("Lost. Solution: APPLE."));
}

#[test]
fn play_rejects_zero_attempts() {
    wordle()
        .args(["play", "--attempts", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("attempts_allowed"));
}

#[test]
fn play_with_json_word_lists() {
    let dir = TempDir::new().unwrap();
    let solutions = dir.path().join("solutions.json");
    let lexicon = dir.path().join("lexicon.json");
    fs::write(&solutions, r#"{"words": ["lolly"]}"#).unwrap();
    fs::write(&lexicon, r#"["hello"]"#).unwrap();

    wordle()
        .arg("--solutions")
        .arg(&solutions)
        .arg("--lexicon")
        .arg(&lexicon)
        .args(["--seed", "7"])
        .write_stdin("apple\nhello\nlolly\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("APPLE is not a word."))
        .stdout(predicate::str::contains("Solved in 2 attempts."));
}

#[test]
fn play_new_round_command() {
    wordle()
        .args(["play", "--solution", "apple", "--seed", "1"])
        .write_stdin("apple\n:new\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solved in 1 attempt."))
        .stdout(predicate::str::contains("New round").count(2));
}
