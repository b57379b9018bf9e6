//! Integration tests for `unionfind connected`, `size` and `version`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `unionfind` binary.
fn unionfind_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("unionfind");
    path
}

fn islands() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures/islands.edges");
    path.to_str().expect("path").to_owned()
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(unionfind_bin())
        .args(args)
        .output()
        .expect("run unionfind")
}

// ---------------------------------------------------------------------------
// connected
// ---------------------------------------------------------------------------

#[test]
fn connected_pair_exits_0() {
    let file = islands();
    let out = run(&["connected", &file, "north", "south"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "connected");
}

#[test]
fn element_is_connected_to_itself() {
    let file = islands();
    let out = run(&["connected", &file, "solo", "solo"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
}

#[test]
fn disconnected_pair_exits_1() {
    let file = islands();
    let out = run(&["connected", &file, "north", "alpha"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "not connected");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("different components"), "stderr: {stderr}");
}

#[test]
fn quiet_disconnected_pair_keeps_stderr_empty() {
    let file = islands();
    let out = run(&["connected", "--quiet", &file, "x", "solo"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty(), "stderr: {:?}", out.stderr);
}

#[test]
fn unknown_label_exits_1() {
    let file = islands();
    let out = run(&["connected", &file, "north", "nowhere"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown element"), "stderr: {stderr}");
    assert!(stderr.contains("nowhere"), "stderr: {stderr}");
}

#[test]
fn connected_json_output() {
    let file = islands();
    let out = run(&["connected", "-f", "json", &file, "y", "x"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["a"], "y");
    assert_eq!(value["b"], "x");
    assert_eq!(value["connected"], true);
}

// ---------------------------------------------------------------------------
// size
// ---------------------------------------------------------------------------

#[test]
fn size_of_largest_island() {
    let file = islands();
    let out = run(&["size", &file, "east"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "3");
}

#[test]
fn size_of_singleton() {
    let file = islands();
    let out = run(&["size", "--format", "json", &file, "solo"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["label"], "solo");
    assert_eq!(value["component_size"], 1);
}

#[test]
fn size_of_unknown_label_exits_1() {
    let file = islands();
    let out = run(&["size", &file, "ghost"]);
    assert_eq!(out.status.code(), Some(1));
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

#[test]
fn version_prints_semver() {
    let out = run(&["version"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim().split('.').count(), 3, "stdout: {stdout}");
}
