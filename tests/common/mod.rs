#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn notekeeper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notekeeper").unwrap();
    cmd.env_remove("NOTEKEEPER_ROOT");
    cmd.env_remove("NOTEKEEPER_LOG");
    cmd
}

/// Fresh temp directory with an initialized workspace
pub fn init_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    notekeeper_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run a command inside `dir` and return its stdout, asserting success
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = notekeeper_cmd().current_dir(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "notekeeper {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Pull the id out of "Created notebook <id>: <name>" style output
pub fn created_id(stdout: &str) -> String {
    stdout
        .split_whitespace()
        .nth(2)
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}
