//! Integration tests for the clicrew binary end-to-end flow.
//!
//! Tests:
//! 1. Missing credential: exits before any dispatch, with the export hint
//! 2. Shell fallback: `exec` with the interpreter disabled runs the shell
//! 3. Default crew run: OS report with trash emptying against a temp HOME
//! 4. Timeout: a configured timeout renders the exact timeout message
//!
//! Every test disables the interpreter through the config overlay so no
//! network request is attempted; the dummy key only satisfies the gate.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Get the path to the compiled `clicrew` binary (from target/debug or
/// target/release).
fn clicrew_binary() -> PathBuf {
    // Use the binary built by `cargo test` in the same target directory.
    let mut path = std::env::current_exe().expect("could not get current exe path");
    path.pop(); // remove the test binary name
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("clicrew");
    assert!(
        path.exists(),
        "clicrew binary not found at {:?}. Run `cargo build` first.",
        path
    );
    path
}

/// Write a config overlay that disables the interpreter, optionally with a
/// short shell timeout.
fn offline_config(dir: &Path, timeout_secs: Option<u64>) -> PathBuf {
    let mut content = String::from("interpreter = false\n");
    if let Some(secs) = timeout_secs {
        content.push_str(&format!("shell_timeout_secs = {}\n", secs));
    }
    let path = dir.join("clicrew.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Run `clicrew` with the given args, a dummy credential, and the offline
/// config overlay.
fn clicrew_cmd(config: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(clicrew_binary())
        .arg("--config")
        .arg(config)
        .args(args)
        .env("GOOGLE_API_KEY", "test-key")
        .env("HOME", home)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run clicrew {:?}: {}", args, e))
}

#[test]
fn test_missing_credential_exits_before_dispatch() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(tmp.path(), None);

    // Drop a canary into the fake HOME's trash: it must survive because
    // the program exits before any dispatcher is built.
    let trash_files = tmp.path().join(".local/share/Trash/files");
    fs::create_dir_all(&trash_files).unwrap();
    fs::write(trash_files.join("canary.txt"), "still here").unwrap();

    let output = Command::new(clicrew_binary())
        .arg("--config")
        .arg(&config)
        .arg("run")
        .env_remove("GOOGLE_API_KEY")
        .env("HOME", tmp.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GOOGLE_API_KEY environment variable is not set"));
    assert!(stderr.contains("export GOOGLE_API_KEY="));
    assert!(trash_files.join("canary.txt").exists());
}

#[test]
#[cfg(unix)]
fn test_exec_shell_fallback_report_shape() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(tmp.path(), None);

    let output = clicrew_cmd(&config, tmp.path(), &["exec", "echo hello"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Command: echo hello"));
    assert!(stdout.contains("Output: hello"));
    assert!(stdout.contains("Error: "));
}

#[test]
#[cfg(target_os = "linux")]
fn test_default_crew_reports_os_and_empties_trash() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(tmp.path(), None);

    let trash = tmp.path().join(".local/share/Trash");
    fs::create_dir_all(trash.join("files")).unwrap();
    fs::create_dir_all(trash.join("info")).unwrap();
    fs::write(trash.join("files/old.doc"), "x").unwrap();
    fs::write(trash.join("info/old.doc.trashinfo"), "y").unwrap();

    let output = clicrew_cmd(&config, tmp.path(), &["run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CREW EXECUTION COMPLETED"));
    assert!(stdout.contains("Operating System: Linux"));
    assert!(stdout.contains("Trash emptied successfully."));
    assert_eq!(fs::read_dir(trash.join("files")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(trash.join("info")).unwrap().count(), 0);
}

#[test]
#[cfg(target_os = "linux")]
fn test_default_crew_is_idempotent_on_empty_trash() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(tmp.path(), None);

    for _ in 0..2 {
        let output = clicrew_cmd(&config, tmp.path(), &["run"]);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Trash emptied successfully."));
        assert!(!stdout.contains("Failed to empty"));
    }
}

#[test]
#[cfg(target_os = "linux")]
fn test_recycle_bin_path_never_times_out() {
    let tmp = TempDir::new().unwrap();
    // Even with a 1 second shell timeout, the OS path bypasses the shell.
    let config = offline_config(tmp.path(), Some(1));

    let output = clicrew_cmd(&config, tmp.path(), &["exec", "empty my recycle bin"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Operating System: Linux"));
    assert!(!stdout.contains("Command timed out"));
}

#[test]
#[cfg(unix)]
fn test_exec_timeout_message_is_exact() {
    let tmp = TempDir::new().unwrap();
    let config = offline_config(tmp.path(), Some(1));

    let output = clicrew_cmd(&config, tmp.path(), &["exec", "sleep 5"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Command timed out: sleep 5");
    assert!(!stdout.contains("Output:"));
    assert!(!stdout.contains("Error:"));
}
