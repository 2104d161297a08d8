use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/data/sample.txt");

    cmd.assert().success().stdout(str::contains("14"));
}

#[test]
fn part1_rejects_unknown_symbol() {
    let mut cmd = Command::cargo_bin("day8_part1").unwrap();
    cmd.arg("tests/data/bad_symbol.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid character(#) at (1, 2) of given map."));
}
