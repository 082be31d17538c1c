use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn huddle_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("huddle"))
}

fn setup_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    huddle_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();
    temp_dir
}

fn setup_running_session(demo: bool) -> TempDir {
    let temp_dir = setup_test_project();
    let mut cmd = huddle_cmd();
    cmd.arg("start");
    if demo {
        cmd.arg("--demo");
    }
    cmd.current_dir(temp_dir.path()).assert().success();
    temp_dir
}

fn json_output(temp_dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = huddle_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn element_ids(temp_dir: &TempDir, phase: &str) -> Vec<String> {
    json_output(temp_dir, &["element", "list", "--phase", phase, "--json"])
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

fn pending_ids(temp_dir: &TempDir) -> Vec<String> {
    json_output(temp_dir, &["nudge", "list", "--json"])
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    huddle_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("facilitator"));
}

#[test]
fn test_version() {
    huddle_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("huddle"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    huddle_cmd()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

// =============================================================================
// Initialization and session lifecycle
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    huddle_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".huddle.toml").exists());
    assert!(temp_dir.path().join(".huddle").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_test_project();

    huddle_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_rejects_broken_catalog() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("catalog.toml"), "phases = []\n").unwrap();

    huddle_cmd()
        .args(["init", "--catalog", "catalog.toml"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog"));

    assert!(!temp_dir.path().join(".huddle.toml").exists());
}

#[test]
fn test_status_without_session() {
    let temp_dir = setup_test_project();

    huddle_cmd()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active session"));
}

#[test]
fn test_start_and_status() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pause"))
        .stdout(predicate::str::contains("in-progress"))
        .stdout(predicate::str::contains("queued"));

    let status = json_output(&temp_dir, &["status", "--json"]);
    assert_eq!(status["current_step"], 1);
    assert_eq!(status["current_phase"], "pause");
    assert_eq!(status["phases"][0]["status"], "in_progress");
    assert_eq!(status["phases"][3]["status"], "queued");
    assert_eq!(status["pending_nudges"], 0);
}

#[test]
fn test_start_twice_requires_force() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .arg("start")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already running"));

    huddle_cmd()
        .args(["start", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
}

#[test]
fn test_end_discards_session() {
    let temp_dir = setup_running_session(true);

    huddle_cmd()
        .arg("end")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ended"));

    huddle_cmd()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active session"));
}

// =============================================================================
// Phase tracking
// =============================================================================

#[test]
fn test_advance_through_journey() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .arg("advance")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("expand"));

    let status = json_output(&temp_dir, &["advance", "focus", "--json"]);
    assert_eq!(status["current_step"], 3);
    assert_eq!(status["phases"][0]["status"], "done");
    assert_eq!(status["phases"][1]["status"], "done");
    assert_eq!(status["phases"][2]["status"], "in_progress");

    let status = json_output(&temp_dir, &["advance", "4", "--json"]);
    assert_eq!(status["current_phase"], "doing");

    huddle_cmd()
        .arg("advance")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Out of range"));
}

#[test]
fn test_advance_out_of_range_keeps_step() {
    let temp_dir = setup_running_session(false);
    json_output(&temp_dir, &["advance", "2", "--json"]);

    for step in ["0", "5", "99999999999999999999"] {
        huddle_cmd()
            .args(["advance", step])
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Out of range"));
    }

    let status = json_output(&temp_dir, &["status", "--json"]);
    assert_eq!(status["current_step"], 2);
}

#[test]
fn test_advance_reports_saved_session() {
    let temp_dir = setup_running_session(false);
    let advanced = json_output(&temp_dir, &["advance", "focus", "--json"]);
    let status = json_output(&temp_dir, &["status", "--json"]);
    assert_eq!(advanced["current_step"], 3);
    assert_eq!(advanced["updated"], status["updated"]);
}

#[test]
fn test_tampered_session_file_is_rejected() {
    let temp_dir = setup_running_session(false);
    let path = temp_dir.path().join(".huddle").join("session.json");
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, content.replace("\"current_step\": 1", "\"current_step\": 0")).unwrap();

    huddle_cmd()
        .arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unreadable session file"));

    huddle_cmd()
        .arg("start")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already running"));

    huddle_cmd()
        .args(["start", "--force"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    let status = json_output(&temp_dir, &["status", "--json"]);
    assert_eq!(status["current_step"], 1);
}

#[test]
fn test_project_log_file_under_data_dir() {
    let temp_dir = setup_running_session(false);
    let config_path = temp_dir.path().join(".huddle.toml");
    let config = std::fs::read_to_string(&config_path).unwrap();
    assert!(config.contains("file = false"));
    let config = config
        .replace("file = false", "file = true")
        .replace("level = \"warn\"", "level = \"info\"");
    std::fs::write(&config_path, config).unwrap();

    huddle_cmd()
        .arg("advance")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let log_dir = temp_dir.path().join(".huddle").join("logs");
    let logs: Vec<String> = std::fs::read_dir(&log_dir)
        .unwrap()
        .map(|e| std::fs::read_to_string(e.unwrap().path()).unwrap())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Advancing journey"));
}

// =============================================================================
// Library elements
// =============================================================================

#[test]
fn test_element_move_round_trip() {
    let temp_dir = setup_running_session(false);
    let original = element_ids(&temp_dir, "pause");
    assert_eq!(original.len(), 4);

    huddle_cmd()
        .args(["element", "move", "0", "3", "--phase", "pause"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    let moved = element_ids(&temp_dir, "pause");
    assert_eq!(moved[3], original[0]);

    huddle_cmd()
        .args(["element", "move", "3", "0", "--phase", "pause"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    assert_eq!(element_ids(&temp_dir, "pause"), original);
}

#[test]
fn test_element_move_out_of_range() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .args(["element", "move", "0", "9", "--phase", "focus"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Out of range"));
}

#[test]
fn test_element_boundary_moves_are_noops() {
    let temp_dir = setup_running_session(false);
    let original = element_ids(&temp_dir, "doing");

    huddle_cmd()
        .args(["element", "up", "0", "--phase", "doing"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));

    huddle_cmd()
        .args(["element", "down", "2", "--phase", "doing"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));

    assert_eq!(element_ids(&temp_dir, "doing"), original);
}

#[test]
fn test_element_add_and_remove() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .args([
            "element", "add", "Gratitude Round", "--phase", "doing", "--kind", "exercise",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("gratitude-round"));

    let ids = element_ids(&temp_dir, "doing");
    assert_eq!(ids.last().map(String::as_str), Some("gratitude-round"));

    huddle_cmd()
        .args([
            "element", "add", "Gratitude Round", "--phase", "doing", "--kind", "exercise",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate id"));

    huddle_cmd()
        .args(["element", "remove", "gratitude-round", "--phase", "doing"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    huddle_cmd()
        .args(["element", "remove", "gratitude-round", "--phase", "doing"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_element_list_defaults_to_current_phase() {
    let temp_dir = setup_running_session(false);
    json_output(&temp_dir, &["advance", "expand", "--json"]);

    huddle_cmd()
        .args(["element", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Perspective cards"));
}

// =============================================================================
// Nudges
// =============================================================================

#[test]
fn test_accept_nudge() {
    let temp_dir = setup_running_session(true);
    assert_eq!(pending_ids(&temp_dir), vec!["n1", "n2", "n3"]);

    huddle_cmd()
        .args(["nudge", "accept", "n1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Accepted"));

    assert_eq!(pending_ids(&temp_dir), vec!["n2", "n3"]);
    let accepted = json_output(&temp_dir, &["nudge", "accepted", "--json"]);
    assert_eq!(accepted, serde_json::json!(["n1"]));

    huddle_cmd()
        .args(["nudge", "accept", "n1"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));

    let accepted = json_output(&temp_dir, &["nudge", "accepted", "--json"]);
    assert_eq!(accepted, serde_json::json!(["n1"]));
}

#[test]
fn test_dismiss_nudge_twice() {
    let temp_dir = setup_running_session(true);

    huddle_cmd()
        .args(["nudge", "dismiss", "n2"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    huddle_cmd()
        .args(["nudge", "dismiss", "n2"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));

    assert_eq!(pending_ids(&temp_dir), vec!["n1", "n3"]);
    let accepted = json_output(&temp_dir, &["nudge", "accepted", "--json"]);
    assert_eq!(accepted, serde_json::json!([]));
}

#[test]
fn test_add_nudge_with_duplicate_id() {
    let temp_dir = setup_running_session(true);

    huddle_cmd()
        .args(["nudge", "add", "Another", "--id", "n3"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate id"));

    assert_eq!(pending_ids(&temp_dir), vec!["n1", "n2", "n3"]);
}

#[test]
fn test_add_nudge_generates_id() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .args([
            "nudge",
            "add",
            "Check the energy",
            "--reason",
            "Long silence",
            "--suggestion",
            "Shall we stretch?",
            "--difficulty",
            "2",
            "--cooldown",
            "120",
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Queued"));

    let pending = json_output(&temp_dir, &["nudge", "list", "--json"]);
    let nudge = &pending[0];
    assert!(nudge["id"].as_str().unwrap().starts_with("n-"));
    assert_eq!(nudge["difficulty"], 2);
    assert_eq!(nudge["cooldown"], 120);
}

#[test]
fn test_add_nudge_rejects_bad_difficulty() {
    let temp_dir = setup_running_session(false);

    huddle_cmd()
        .args(["nudge", "add", "Too bold", "--difficulty", "4"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

// =============================================================================
// Prompt library
// =============================================================================

#[test]
fn test_prompts_filter() {
    let temp_dir = setup_test_project();

    huddle_cmd()
        .args(["prompts", "open"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 prompts"));

    let results = json_output(&temp_dir, &["prompts", "reframe", "--json"]);
    let titles: Vec<_> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Reframe"]);

    let all = json_output(&temp_dir, &["prompts", "--json"]);
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[test]
fn test_prompts_advanced_search() {
    let temp_dir = setup_test_project();

    let results = json_output(&temp_dir, &["prompts", "--advanced", "tag:mirror", "--json"]);
    assert_eq!(results[0]["id"], "name-pattern");
    assert_eq!(results.as_array().unwrap().len(), 1);

    huddle_cmd()
        .args(["prompts", "--advanced", "regex:[broken"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid regex"));
}

// =============================================================================
// Custom catalog
// =============================================================================

#[test]
fn test_custom_catalog() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("catalog.toml"),
        r#"
[[phases]]
name = "pause"
description = "Land"

[[phases.elements]]
id = "breathe"
kind = "exercise"
title = "Breathe"

[[phases]]
name = "expand"

[[phases]]
name = "focus"

[[phases]]
name = "doing"

[[prompts]]
id = "mirror"
title = "Mirror back"
tags = ["listening"]
"#,
    )
    .unwrap();

    huddle_cmd()
        .args(["init", "--catalog", "catalog.toml"])
        .current_dir(temp_dir.path())
        .assert()
        .success();
    huddle_cmd()
        .arg("start")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    assert_eq!(element_ids(&temp_dir, "pause"), vec!["breathe"]);
    let prompts = json_output(&temp_dir, &["prompts", "listen", "--json"]);
    assert_eq!(prompts[0]["title"], "Mirror back");
}
