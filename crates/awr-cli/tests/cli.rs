use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn awr() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("awr"))
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let text = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(text.trim()).expect("stdout is json")
}

#[test]
fn help_lists_subcommands() {
    let output = awr().arg("--help").output().expect("run help");
    assert!(output.status.success(), "--help should succeed");
    let text = String::from_utf8_lossy(&output.stdout);
    for needle in ["serve", "spec", "run"] {
        assert!(text.contains(needle), "help output should contain '{needle}'");
    }
}

#[test]
fn serve_help_mentions_env_vars() {
    awr()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("AWR_API_KEY"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn spec_prints_every_action_kind() {
    let output = awr().arg("spec").output().expect("run spec");
    assert!(output.status.success());
    let spec = stdout_json(&output);
    let object = spec.as_object().expect("object");
    assert_eq!(object.len(), 4);
    for kind in ["read_file", "write_file", "list_dir", "exec"] {
        assert_eq!(object[kind]["type"], kind);
    }
    assert_eq!(spec["write_file"]["payload"]["path"]["required"], true);
}

#[test]
fn run_literal_request_prints_observation() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("note.txt"), "cli read").unwrap();
    let request = serde_json::json!({
        "type": "read_file",
        "payload": {"path": tmp.path().join("note.txt")},
    })
    .to_string();

    let output = awr().args(["run", &request]).output().expect("run");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"success": true, "data": "cli read"})
    );
}

#[test]
fn run_reads_request_from_file() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("written.txt");
    let request_path = tmp.path().join("request.json");
    fs::write(
        &request_path,
        serde_json::json!({
            "type": "write_file",
            "payload": {"path": target, "content": "via @file"},
        })
        .to_string(),
    )
    .unwrap();

    awr()
        .arg("run")
        .arg(format!("@{}", request_path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("file written successfully"));
    assert_eq!(fs::read_to_string(target).unwrap(), "via @file");
}

#[test]
fn run_reads_request_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let request = serde_json::json!({
        "type": "list_dir",
        "payload": {"path": tmp.path()},
    })
    .to_string();

    let assert = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("awr"))
        .args(["run", "@-"])
        .write_stdin(request)
        .assert()
        .success();
    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"], serde_json::json!([]));
}

#[test]
fn failed_observation_exits_non_zero() {
    let output = awr()
        .args(["run", r#"{"type":"teleport","payload":{}}"#])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "unknown action type: teleport");
}

#[test]
fn request_without_payload_is_rejected() {
    let output = awr()
        .args(["run", r#"{"type":"list_dir"}"#])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert!(
        json["error"]
            .as_str()
            .unwrap_or_default()
            .starts_with("invalid payload for action list_dir")
    );
}

#[test]
fn malformed_request_is_reported_on_stderr() {
    awr()
        .args(["run", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request must be"));
}
