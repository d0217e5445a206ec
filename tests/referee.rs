use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;

fn sapper() -> Command {
    Command::cargo_bin("sapper").unwrap()
}

#[test]
fn test_init_go_end() {
    sapper()
        .write_stdin(indoc! {"
            (init 1 time/move 1)
            (go 1)
            (end 1)
        "})
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("( ( E1 2 )( D1 F )")
                .and(predicate::str::is_match(r"(?m)^\( [A-E]\d+ [A-E]\d+ \)$").unwrap()),
        );
}

#[test]
fn test_opponent_turn_is_silent() {
    sapper()
        .write_stdin(indoc! {"
            (init 2 time/move 1/2)
            (go 1)
            (outcome > (C7 C6))
            (end 0)
        "})
        .assert()
        .success()
        .stdout(predicate::str::contains("\n").count(1));
}

#[test]
fn test_illegal_move_exits_with_255() {
    sapper()
        .write_stdin(indoc! {"
            (init 1 time/move 1)
            (illegal (E1 E2))
            (go 1)
        "})
        .assert()
        .code(255)
        .stdout(predicate::str::contains("(resign)").not());
}

#[test]
fn test_malformed_message_is_fatal_in_strict_mode() {
    sapper()
        .write_stdin("(go 7)\n")
        .assert()
        .code(1);
}

#[test]
fn test_lenient_mode_keeps_playing() {
    sapper()
        .arg("--lenient")
        .write_stdin(indoc! {"
            (go 7)
            (hello)
            (init 1 time/move 1e300)
            (init 1 time/move 0.5)
            (end 2)
        "})
        .assert()
        .success()
        .stdout(predicate::str::starts_with("( ( E1 2 )"));
}

#[test]
fn test_random_weights_with_seed() {
    sapper()
        .args(["--weights", "random", "--seed", "3"])
        .write_stdin(indoc! {"
            (init 1 time/move 1)
            (go 1)
            (end 0)
        "})
        .assert()
        .success()
        .stdout(predicate::str::contains("(resign)").not());
}

#[test]
fn test_unknown_weight_mode_is_rejected() {
    sapper()
        .args(["--weights", "tuned"])
        .write_stdin("")
        .assert()
        .failure();
}
