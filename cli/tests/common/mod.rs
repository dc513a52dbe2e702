#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub fn hl_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hl"))
}

/// Writes a snippet into a per-process temp file and returns its path.
pub fn write_snippet(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hl_tests_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write snippet");
    path
}

/// Runs `hl` with `stdin` piped in.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> std::io::Result<Output> {
    use std::io::Write;
    let mut child = hl_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut input) = child.stdin.take() {
        input.write_all(stdin.as_bytes())?;
    }
    child.wait_with_output()
}

pub fn validate_json_output(stdout: &str, expected_path: &Path) -> Result<(), String> {
    let expected = std::fs::read_to_string(expected_path)
        .map_err(|e| format!("Failed to read expected file {expected_path:?}: {e}"))?;
    let expected: serde_json::Value = serde_json::from_str(&expected)
        .map_err(|e| format!("Invalid expected JSON {expected_path:?}: {e}"))?;
    let actual: serde_json::Value =
        serde_json::from_str(stdout).map_err(|e| format!("Output is not JSON: {e}\n{stdout}"))?;

    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "Unexpected tokens.\nExpected:\n---\n{}\n---\nActual:\n---\n{}\n---",
            serde_json::to_string_pretty(&expected).unwrap_or_default(),
            serde_json::to_string_pretty(&actual).unwrap_or_default()
        ))
    }
}
