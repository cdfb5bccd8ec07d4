use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn prints_single_result() {
    cargo_bin_cmd!("tiercalc").arg("5 * (5 + 5)")
                              .assert()
                              .success()
                              .stdout("50\n");
}

#[test]
fn accepts_expressions_starting_with_a_minus() {
    cargo_bin_cmd!("tiercalc").arg("-5 * 2")
                              .assert()
                              .success()
                              .stdout("-10\n");
}

#[test]
fn ordinary_failures_exit_with_one() {
    cargo_bin_cmd!("tiercalc").arg("1 / 0")
                              .assert()
                              .code(1)
                              .stdout("")
                              .stderr(predicate::str::contains("You can't divide by 0"));

    cargo_bin_cmd!("tiercalc").arg("(1 + 2")
                              .assert()
                              .code(1)
                              .stderr(predicate::str::contains("Unmatched '('"));
}

#[test]
fn zero_over_zero_exits_with_its_own_status() {
    cargo_bin_cmd!("tiercalc").arg("0 / 0")
                              .assert()
                              .code(69)
                              .stderr(predicate::str::contains("Never gonna give you up!"));
}

#[test]
fn meta_flags() {
    cargo_bin_cmd!("tiercalc").arg("--licence")
                              .assert()
                              .success()
                              .stdout(predicate::str::contains("ABSOLUTELY NO WARRANTY"));

    cargo_bin_cmd!("tiercalc").arg("--version")
                              .assert()
                              .success()
                              .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    cargo_bin_cmd!("tiercalc").arg("help")
                              .assert()
                              .success()
                              .stdout(predicate::str::contains("Tiers"));
}

#[test]
fn interactive_session_carries_the_last_answer() {
    cargo_bin_cmd!("tiercalc").write_stdin("3 ! + 1\n7 / 0\nans * 2\nexit\n")
                              .assert()
                              .success()
                              .stdout(predicate::str::contains("> 7\n").and(predicate::str::contains("> 14\n")))
                              .stderr(predicate::str::contains("You can't divide by 0: 7 / 0"));
}

#[test]
fn interactive_zero_over_zero_is_fatal() {
    cargo_bin_cmd!("tiercalc").write_stdin("1 + 1\n0 / 0\n2 + 2\n")
                              .assert()
                              .code(69)
                              .stdout(predicate::str::contains("> 4").not());
}
