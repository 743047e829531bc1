//! End-to-end tests for the `betslip` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup(failure_rate: f64) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config = format!(
        "[logging]\nlevel = \"error\"\n\n[storage]\npath = {:?}\n\n[submission]\nlatency_ms = 0\nfailure_rate = {failure_rate:?}\n\n[user]\nid = \"cli-test\"\n",
        dir.path().join("slip.json"),
    );
    std::fs::write(dir.path().join("betslip.toml"), config).unwrap();
    dir
}

fn betslip(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("betslip").unwrap();
    cmd.current_dir(dir)
        .env_remove("BETSLIP_USER_ID")
        .arg("--config")
        .arg(dir.join("betslip.toml"));
    cmd
}

fn add(dir: &Path, event: &str, outcome: &str, price: &str) {
    betslip(dir)
        .args(["add", "--event", event, "--home", "Arsenal", "--away", "Chelsea"])
        .args(["--outcome", outcome, "--price", price])
        .assert()
        .success();
}

#[test]
fn show_empty_slip() {
    let dir = setup(0.0);
    betslip(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your bet slip is empty"));
}

#[test]
fn build_slip_across_invocations() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    add(dir.path(), "e2", "Draw", "1.80");

    betslip(dir.path())
        .args(["stake", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total odds        3.60"))
        .stdout(predicate::str::contains("Potential payout  90.00"));
}

#[test]
fn invalid_stake_fails() {
    let dir = setup(0.0);
    betslip(dir.path())
        .args(["stake", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid stake"));
}

#[test]
fn place_without_selections_fails() {
    let dir = setup(0.0);
    betslip(dir.path())
        .args(["place", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Your bet slip is empty"));
}

#[test]
fn place_without_stake_fails() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path())
        .args(["place", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid stake amount"));
}

#[test]
fn place_success_empties_slip() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path()).args(["stake", "10"]).assert().success();

    betslip(dir.path())
        .args(["place", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bet placed successfully! Bet ID: BET-"));

    betslip(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your bet slip is empty"))
        .stdout(predicate::str::contains("Stake             0.00"));
}

#[test]
fn place_failure_keeps_slip() {
    let dir = setup(1.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path()).args(["stake", "10"]).assert().success();

    betslip(dir.path())
        .args(["place", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to place bet. Please try again."));

    betslip(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bet slip (1 selections)"));
}

#[test]
fn toggle_twice_removes() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path())
        .args(["toggle", "--event", "e1", "--home", "Arsenal", "--away", "Chelsea"])
        .args(["--outcome", "Arsenal", "--price", "2.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Arsenal"));
}

#[test]
fn clear_reports_count() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    add(dir.path(), "e2", "Chelsea", "3.10");
    betslip(dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 selection(s)"));
}

#[test]
fn remove_unknown_id_fails() {
    let dir = setup(0.0);
    betslip(dir.path())
        .args(["remove", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no selection with ID nope"));
}

#[test]
fn stake_too_large_to_price_fails_cleanly() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path())
        .args(["stake", "79228162514264337593543950335"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid stake"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn stake_preview_leaves_slip_alone() {
    let dir = setup(0.0);
    add(dir.path(), "e1", "Arsenal", "2.00");
    betslip(dir.path())
        .args(["stake", "--preview", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 at odds 2.00 returns"))
        .stdout(predicate::str::contains("20.00"));

    betslip(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stake             0.00"));
}

#[test]
fn duplicate_quoted_outcome_fails() {
    let dir = setup(0.0);
    betslip(dir.path())
        .args(["add", "--event", "e1", "--home", "Arsenal", "--away", "Chelsea"])
        .args(["--outcome", "Arsenal", "--price", "2.00", "--also", "Arsenal=2.10"])
        .assert()
        .failure();

    betslip(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your bet slip is empty"));
}
