//! End-to-end tests for the `aircalc` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's environment and config.
fn aircalc(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aircalc").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("-c")
        .arg(dir.join("aircalc.toml"));
    cmd
}

fn workspace(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("aircalc.toml"), config).unwrap();
    dir
}

#[test]
fn help_lists_commands() {
    let dir = workspace("");
    aircalc(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("room"));
}

#[test]
fn version_flag() {
    let dir = workspace("");
    aircalc(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── quote ─────────────────────────────────────────────────────────────────────

#[test]
fn quote_prints_total() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["quote", "--qty", "1=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 250 BYN"));
}

#[test]
fn quote_json_uses_host_field_names() {
    let dir = workspace("");
    let out = aircalc(dir.path())
        .args(["quote", "--qty", "1=2", "--qty", "10=3", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["totalAmount"], 519.5);
    let lines = summary["selectedServices"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["id"], 10);
    assert_eq!(lines[1]["total"], 19.5);
}

#[test]
fn quote_unknown_service_exits_not_found() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["quote", "--qty", "99=1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No service with id 99"))
        .stderr(predicate::str::contains("aircalc catalog"));
}

#[test]
fn quote_malformed_pair_is_usage_error() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["quote", "--qty", "12"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ID=VALUE"));
}

#[test]
fn currency_comes_from_environment() {
    let dir = workspace("");
    aircalc(dir.path())
        .env("AIRCALC_DISPLAY__CURRENCY", "EUR")
        .args(["quote", "--qty", "6=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 30 EUR"));
}

#[test]
fn export_dir_receives_fields() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("fields");
    fs::write(
        dir.path().join("aircalc.toml"),
        format!("[host]\nexport_dir = {:?}\n", export.display().to_string()),
    )
    .unwrap();

    aircalc(dir.path())
        .args(["quote", "--qty", "1=2"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(export.join("TOTAL_AMOUNT")).unwrap(), "500");
    let selected = fs::read_to_string(export.join("SELECTED_SERVICES")).unwrap();
    assert!(selected.contains("\"quantity\":2"));
}

#[test]
fn stderr_host_emits_json_lines() {
    let dir = workspace("[host]\nnotify = \"stderr\"\n");
    aircalc(dir.path())
        .args(["quote", "--qty", "1=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\"").not())
        .stderr(predicate::str::contains("\"event\":\"summary\""))
        .stderr(predicate::str::contains("\"totalAmount\":250.0"));
}

#[test]
fn host_stream_keeps_json_stdout_parseable() {
    let dir = workspace("[host]\nnotify = \"stderr\"\n");
    let out = aircalc(dir.path())
        .args(["quote", "--qty", "1=1", "--qty", "2=1", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["selectedServices"].as_array().unwrap().len(), 2);

    let events = String::from_utf8_lossy(&out.stderr)
        .lines()
        .filter(|line| line.contains("\"event\":\"summary\""))
        .count();
    assert_eq!(events, 2);
}

// ── catalog ───────────────────────────────────────────────────────────────────

#[test]
fn catalog_categorized_groups_services() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["catalog", "--categorized"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[installation]"))
        .stdout(predicate::str::contains("[maintenance]"))
        .stdout(predicate::str::contains("[construction]"))
        .stdout(predicate::str::contains("[other]"));
}

#[test]
fn catalog_file_from_config() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("prices.toml");
    fs::write(
        &catalog,
        "[[services]]\nid = 1\nname = \"Wall drilling\"\nprice = 15\nunit = \"item\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("aircalc.toml"),
        format!("[catalog]\npath = {:?}\n", catalog.display().to_string()),
    )
    .unwrap();

    aircalc(dir.path())
        .args(["catalog", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wall drilling"));
}

// ── session ───────────────────────────────────────────────────────────────────

#[test]
fn session_reads_commands_from_stdin() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["session", "--no-prompt"])
        .write_stdin("set 1 1\ninc 2\nbogus\nshow\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 570 BYN"))
        .stdout(predicate::str::contains("Unknown command 'bogus'"));
}

// ── room ──────────────────────────────────────────────────────────────────────

#[test]
fn room_missing_height_is_user_error() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["room", "--area", "20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ceiling height"));
}

#[test]
fn room_json_request() {
    let dir = workspace("");
    aircalc(dir.path())
        .args([
            "--output-format",
            "json",
            "room",
            "--area",
            "20",
            "--height",
            "2.7",
            "--mansard",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"roomArea\": \"20\""))
        .stdout(predicate::str::contains("\"hasMansard\": true"));
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn init_then_config_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("aircalc.toml");

    aircalc(dir.path()).arg("init").assert().success();
    assert!(config.exists());

    aircalc(dir.path())
        .args(["config", "get", "display.currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("display.currency = BYN"));
}

#[test]
fn missing_explicit_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    aircalc(dir.path())
        .args(["catalog"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key() {
    let dir = workspace("");
    aircalc(dir.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}
