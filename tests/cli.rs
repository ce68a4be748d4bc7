use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("freetime")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("signin"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn schema_prints_config_schema() {
    Command::cargo_bin("freetime")
        .unwrap()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url"))
        .stdout(predicate::str::contains("timeout_sec"));
}

#[test]
fn history_requires_session() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("freetime")
        .unwrap()
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("config"))
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("signin"));
}

#[test]
fn generate_requires_profile_fields() {
    Command::cargo_bin("freetime")
        .unwrap()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--domain"));
}
