//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memspan() -> Command {
    #[allow(deprecated)]
    let cmd = Command::cargo_bin("memspan").unwrap();
    cmd
}

/// Stdin script for one full session: `o` on every judgment, Enter on
/// every word prompt, five recall words that are guaranteed misses, and a
/// `n` to decline the restart.
fn scripted_session() -> String {
    let mut input = String::new();
    for _ in 0..5 {
        input.push_str("o\n"); // judgment at the odd position
        input.push('\n'); // acknowledge the word at the even position
    }
    for i in 1..=5 {
        input.push_str(&format!("recall-{i}\n"));
    }
    input.push_str("n\n");
    input
}

#[test]
fn help_output() {
    memspan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory-span training quiz"));
}

#[test]
fn version_output() {
    memspan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("memspan"));
}

#[test]
fn preview_is_deterministic_for_a_seed() {
    let first = memspan()
        .arg("preview")
        .arg("--seed")
        .arg("abc")
        .output()
        .unwrap();
    let second = memspan()
        .arg("preview")
        .arg("--seed")
        .arg("abc")
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn preview_prints_all_ten_problems_and_the_key() {
    memspan()
        .arg("preview")
        .arg("--seed")
        .arg("abc")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. [judgment]"))
        .stdout(predicate::str::contains(" 2. [word]"))
        .stdout(predicate::str::contains("10. [word]"))
        .stdout(predicate::str::contains("Recall key:"));
}

#[test]
fn scripted_run_completes_and_scores_recall_misses_as_zero() {
    memspan()
        .arg("run")
        .arg("--seed")
        .arg("abc")
        .write_stdin(scripted_session())
        .assert()
        .success()
        .stdout(predicate::str::contains("Recall score:   0 / 5"))
        .stdout(predicate::str::contains("Total:"))
        .stdout(predicate::str::contains("Judgments"));
}

#[test]
fn run_reprompts_on_invalid_choice() {
    let mut input = String::from("maybe\n");
    input.push_str(&scripted_session());

    memspan()
        .arg("run")
        .arg("--seed")
        .arg("abc")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please answer o or x."));
}

#[test]
fn run_attaches_identity_to_report_rows() {
    memspan()
        .arg("run")
        .arg("--seed")
        .arg("abc")
        .arg("--name")
        .arg("kim")
        .write_stdin(scripted_session())
        .assert()
        .success()
        .stdout(predicate::str::contains("kim"))
        .stdout(predicate::str::contains("not provided"));
}

#[test]
fn run_saves_report_and_show_renders_it() {
    let dir = TempDir::new().unwrap();

    memspan()
        .arg("run")
        .arg("--seed")
        .arg("abc")
        .arg("--output")
        .arg(dir.path())
        .write_stdin(scripted_session())
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to:"));

    let report_path = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|path| path.extension().is_some_and(|ext| ext == "json"))
        .expect("report file");

    memspan()
        .arg("show")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("/ 10"));

    memspan()
        .arg("show")
        .arg("--report")
        .arg(&report_path)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Scores:**"));
}

#[test]
fn run_fails_when_stdin_closes_mid_quiz() {
    memspan()
        .arg("run")
        .arg("--seed")
        .arg("abc")
        .write_stdin("o\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin closed"));
}

#[test]
fn show_nonexistent_report() {
    memspan()
        .arg("show")
        .arg("--report")
        .arg("no_such_file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
