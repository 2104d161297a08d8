use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day10_part2").unwrap();
    cmd.arg("tests/data/sample.txt");

    cmd.assert().success().stdout(str::contains("81"));
}
