use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/data/sample.txt");

    cmd.assert().success().stdout(str::contains("41"));
}

#[test]
fn part1_requires_a_guard() {
    let mut cmd = Command::cargo_bin("day6_part1").unwrap();
    cmd.arg("tests/data/no_guard.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("There's no guard in given laboratory"));
}
