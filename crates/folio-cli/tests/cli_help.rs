use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("folio")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--no-motion"));
}

#[test]
fn test_print_help_shows_width() {
    cargo_bin_cmd!("folio")
        .args(["print", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("folio")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    cargo_bin_cmd!("folio")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
