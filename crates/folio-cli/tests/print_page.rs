use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_print_renders_every_section() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["print", "--width", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anjali Shukla"))
        .stdout(predicate::str::contains("› CA Finalist"))
        .stdout(predicate::str::contains("Experience"))
        .stdout(predicate::str::contains("[ Send ]"));

    assert!(dir.path().join("logs").join("folio.log").exists());
}

#[test]
fn test_print_caps_huge_width() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["print", "--width", &usize::MAX.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skills"))
        .stdout(predicate::function(|out: &str| {
            out.lines().all(|line| line.chars().count() <= 96)
        }));
}

#[test]
fn test_print_uses_profile_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[profile]\nname = \"Meera Iyer\"\nroles = [\"Auditor\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meera Iyer"))
        .stdout(predicate::str::contains("› Auditor"));
}

#[test]
fn test_invalid_timing_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[motion]\ndelete_interval_ms = 200\n",
    )
    .unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be shorter than type interval"));
}

#[test]
fn test_view_requires_a_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("--no-motion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
