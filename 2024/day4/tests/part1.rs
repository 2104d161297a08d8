use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day4_part1").unwrap();
    cmd.arg("tests/data/sample.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("Given word(XMAS) appears 18 time(s)"));
}

#[test]
fn part1_rejects_non_letter() {
    let mut cmd = Command::cargo_bin("day4_part1").unwrap();
    cmd.arg("tests/data/bad_letter.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid character(.) at (1, 2) of given map."));
}

#[test]
fn part1_rejects_ragged_matrix() {
    let mut cmd = Command::cargo_bin("day4_part1").unwrap();
    cmd.arg("tests/data/ragged.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 4 columns in each row, given 3."));
}
