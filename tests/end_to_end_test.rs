//! Whole-binary run against a mock tracker API: single project and tracker
//! (auto-selected, so no stdin is needed), file name and format supplied on
//! the command line.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Apollo", "uri": "projects/101"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects/101/trackers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "label": "Sprint"}
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trackers/7/artifacts"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    {"id": 1, "title": "Fix login", "status": "On going",
                     "submitted_on": "2024-01-02T10:00:00+01:00"},
                    {"id": 2, "title": "Ship it", "status": "Done",
                     "submitted_on": "2024-02-02T10:00:00+01:00"},
                    {"id": 3, "title": "Orphan", "status": "",
                     "submitted_on": "2024-03-02T10:00:00+01:00"}
                ]))
                .append_header("X-PAGINATION-OFFSET", "0")
                .append_header("X-PAGINATION-LIMIT", "10")
                .append_header("X-PAGINATION-SIZE", "3"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_run_writes_the_summary_csv() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;
    let base_url = server.uri();

    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("stats.csv");
    let work_dir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("tracker-stats").unwrap();
        cmd.env("TRACKER_STATS_API__BASE_URL", &base_url)
            .env("TULEAP_ACCESS_KEY", "test-key")
            .current_dir(&work_dir)
            .args(["--output", "stats", "--format", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The only available project is 'Apollo'"))
            .stdout(predicate::str::contains("The only available tracker is 'Sprint'"))
            .stdout(predicate::str::contains("The results are ready"));
    })
    .await
    .unwrap();

    let mut reader = csv::Reader::from_path(&out_path).unwrap();
    let columns: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    // The uncategorized artifact stays out of the table.
    assert_eq!(columns, ["Done", "On going"]);
}

#[tokio::test]
async fn tracker_without_artifacts_exits_cleanly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Apollo", "uri": "projects/101"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/101/trackers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "label": "Sprint"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trackers/7/artifacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .append_header("X-PAGINATION-OFFSET", "0")
                .append_header("X-PAGINATION-LIMIT", "10")
                .append_header("X-PAGINATION-SIZE", "0"),
        )
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = TempDir::new().unwrap();
    let work_dir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("tracker-stats").unwrap();
        cmd.env("TRACKER_STATS_API__BASE_URL", &base_url)
            .current_dir(&work_dir)
            .args(["--output", "stats", "--format", "csv"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No artifact was found"));
    })
    .await
    .unwrap();

    assert!(!dir.path().join("stats.csv").exists());
}

#[tokio::test]
async fn no_projects_is_a_clean_exit_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let dir = TempDir::new().unwrap();
    let work_dir = dir.path().to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("tracker-stats").unwrap();
        cmd.env("TRACKER_STATS_API__BASE_URL", &base_url)
            .current_dir(&work_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("No project is available"));
    })
    .await
    .unwrap();
}
