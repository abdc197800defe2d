// tests/common/mod.rs
//! Shared helpers for the CLI tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// The demo data shipped in `data/`.
pub fn demo_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// `arqa --data-dir <demo data>`.
pub fn arqa() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_arqa"));
    cmd.arg("--data-dir").arg(demo_data_dir()).env_remove("RUST_LOG");
    cmd
}

/// Parses stdout as JSON.
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}
