use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day12_part1").unwrap();
    cmd.arg("tests/data/sample.txt");

    cmd.assert().success().stdout(str::contains("1930"));
}

#[test]
fn part1_rejects_ragged_garden() {
    let mut cmd = Command::cargo_bin("day12_part1").unwrap();
    cmd.arg("tests/data/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 4 columns in each row, given 3."));
}

#[test]
fn part1_reports_missing_file() {
    let mut cmd = Command::cargo_bin("day12_part1").unwrap();
    cmd.arg("tests/data/no_such_garden.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
