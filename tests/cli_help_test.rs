use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_interactive_flow() {
    let mut cmd = Command::cargo_bin("tracker-stats").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("per-column"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn missing_base_url_fails_with_guidance() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("tracker-stats").unwrap();

    // No config file, no env: the run must abort before any prompt.
    cmd.env_remove("TRACKER_STATS_API__BASE_URL")
        .env_remove("TULEAP_ACCESS_KEY")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}
