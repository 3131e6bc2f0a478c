//! Integration tests for the `radarrctl` binary.
//!
//! Argument parsing, help output, shell completions, and error handling
//! run without any server; the end-to-end tests stand up a wiremock
//! server and drive the binary against it.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `radarrctl` binary with env isolation.
///
/// Clears all `RADARR_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn radarrctl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("radarrctl");
    cmd.env("HOME", "/tmp/radarrctl-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/radarrctl-test-nonexistent")
        .env_remove("RADARR_PROFILE")
        .env_remove("RADARR_URL")
        .env_remove("RADARR_API_KEY")
        .env_remove("RADARR_OUTPUT")
        .env_remove("RADARR_INSECURE")
        .env_remove("RADARR_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn indexer_body(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "enableRss": true,
        "enableAutomaticSearch": true,
        "enableInteractiveSearch": false,
        "protocol": "torrent",
        "priority": 25,
        "implementation": "Newznab",
        "configContract": "NewznabSettings",
        "tags": [],
        "fields": []
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = radarrctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    radarrctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Radarr configuration")
            .and(predicate::str::contains("indexers"))
            .and(predicate::str::contains("quality-profiles"))
            .and(predicate::str::contains("system")),
    );
}

#[test]
fn test_version_flag() {
    radarrctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("radarrctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    radarrctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    radarrctl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = radarrctl_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_indexers_list_no_config() {
    radarrctl_cmd()
        .args(["indexers", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("url")),
        );
}

#[test]
fn test_url_without_api_key_fails_before_any_request() {
    radarrctl_cmd()
        .args(["--url", "http://localhost:7878", "indexers", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials").or(predicate::str::contains("RADARR_API_KEY")));
}

#[test]
fn test_invalid_url_is_a_usage_error() {
    let output = radarrctl_cmd()
        .args(["--url", "not a url", "--api-key", "k", "indexers", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
}

#[test]
fn test_invalid_output_format() {
    let output = radarrctl_cmd()
        .args(["--output", "invalid", "indexers", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values") || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    radarrctl_cmd().args(["config", "show"]).assert().success();
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_indexers_subcommands_exist() {
    radarrctl_cmd()
        .args(["indexers", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_quality_profiles_subcommands_exist() {
    radarrctl_cmd()
        .args(["quality-profiles", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_config_subcommands_exist() {
    radarrctl_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles")),
        );
}

// ── Config round-trip ───────────────────────────────────────────────

#[test]
fn test_config_set_then_profiles_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let mut set_cmd = cargo_bin_cmd!("radarrctl");
    set_cmd
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RADARR_PROFILE")
        .env_remove("RADARR_URL")
        .env_remove("RADARR_API_KEY")
        .args(["config", "set", "url", "http://localhost:7878"])
        .assert()
        .success();

    let mut profiles_cmd = cargo_bin_cmd!("radarrctl");
    profiles_cmd
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RADARR_PROFILE")
        .env_remove("RADARR_URL")
        .env_remove("RADARR_API_KEY")
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default *"));
}

// ── End-to-end against a mock server ────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_indexers_list_json_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/indexer"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            indexer_body(1, "Indexer A"),
            indexer_body(2, "Indexer B"),
        ])))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "test-key",
            "-o",
            "json",
            "indexers",
            "list",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["changed"], json!(false));
    let indexers = envelope["indexers"].as_array().unwrap();
    assert_eq!(indexers.len(), 2);
    assert_eq!(indexers[0]["name"], json!("Indexer A"));
    // Output keys are un-aliased snake_case.
    assert_eq!(indexers[0]["enable_automatic_search"], json!(true));
    assert!(indexers[0].get("enableAutomaticSearch").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_name_filter_returns_last_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/indexer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            indexer_body(1, "A"),
            indexer_body(2, "B"),
            indexer_body(3, "A"),
        ])))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "k",
            "-o",
            "json",
            "indexers",
            "list",
            "--name",
            "A",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let indexers = envelope["indexers"].as_array().unwrap();
    assert_eq!(indexers.len(), 1);
    assert_eq!(indexers[0]["id"], json!(3), "last match should win");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_name_filter_no_match_is_success_with_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/indexer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([indexer_body(1, "A")])))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "k",
            "-o",
            "json",
            "indexers",
            "list",
            "--name",
            "Nope",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["changed"], json!(false));
    assert_eq!(envelope["indexers"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quality_profiles_plain_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/qualityprofile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Any", "items": [], "formatItems": [] },
            { "id": 4, "name": "HD-1080p", "items": [], "formatItems": [] },
        ])))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "k",
            "-o",
            "plain",
            "quality-profiles",
            "list",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n4\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_fails_without_partial_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/indexer"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "k",
            "-o",
            "json",
            "indexers",
            "list",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no partial envelope on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error listing indexers"),
        "stderr should carry the failure reason:\n{stderr}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_api_key_uses_auth_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/indexer"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let url = server.uri();
    let output = radarrctl_cmd()
        .args([
            "--url",
            url.as_str(),
            "--api-key",
            "wrong",
            "indexers",
            "list",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "auth failures exit with 3");
}
