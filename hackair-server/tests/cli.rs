use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    Command::cargo_bin("hackair-server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--location"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--insecure"));
}

#[test]
fn missing_location_fails() {
    Command::cargo_bin("hackair-server")
        .unwrap()
        .env_remove("HACKAIR_LOCATION")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--location"));
}

#[test]
fn invalid_port_fails() {
    Command::cargo_bin("hackair-server")
        .unwrap()
        .args(["--location", "1,2|3,4", "--port", "http"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
