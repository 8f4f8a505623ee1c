use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn run_board_file() {
    Command::main_binary()
        .unwrap()
        .arg("boards/2x2-inverted.txt")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                r"A: 02 | B: 01
--------------
A: 01 | B: 01
--------------

Solving...
States created total: ",
            )
            .and(predicate::str::contains("Found solution:"))
            .and(predicate::str::contains("Move 1: "))
            .and(predicate::str::ends_with("Moves: 1\nSwaps: 2\n")),
        )
        .stderr("");
}

#[test]
fn run_generated_board_with_limit() {
    // any seed works, the first expansion already hits the limit unless the board is sorted
    Command::main_binary()
        .unwrap()
        .args(&["--shape", "3x10", "--seed", "42", "--max-expansions", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Search limit reached")
                .or(predicate::str::contains("Found solution:")),
        );
}

#[test]
fn run_with_status() {
    Command::main_binary()
        .unwrap()
        .arg("--status")
        .arg("boards/2x2-inverted.txt")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Visited new depth: 0")
                .and(predicate::str::contains("Visited new depth: 1")),
        );
}

#[test]
fn run_bad_shape() {
    Command::main_binary()
        .unwrap()
        .args(&["--shape", "0x3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Can't generate board"));

    Command::main_binary()
        .unwrap()
        .args(&["--shape", "three"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid value 'three' for --shape"));
}

#[test]
fn run_bad_categories() {
    Command::main_binary()
        .unwrap()
        .args(&["--categories", "apple,orange"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("single characters"));
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("boards/does-not-exist.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Can't load board"));
}

#[test]
fn run_file_and_seed() {
    // doesn't check stdout/stderr contents, clap decides the wording
    Command::main_binary()
        .unwrap()
        .arg("--seed")
        .arg("1")
        .arg("boards/2x2-inverted.txt")
        .assert()
        .failure()
        .stdout("");
}
