//! Literal shell execution with a timeout guard.
//!
//! One command at a time, blocking, output captured in full. The child is
//! polled against a deadline and killed when it expires; reader threads
//! drain the pipes so a chatty child cannot deadlock on a full pipe buffer.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured output of a completed shell command.
#[derive(Debug, Clone, Default)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("command timed out")]
    TimedOut,
    #[error("failed to spawn shell: {0}")]
    Spawn(std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run `command` through the platform shell, killing it after `timeout`.
///
/// The exit status is not surfaced; failures the command reports land in
/// its stderr, which the caller embeds in the report.
pub fn run_with_timeout(command: &str, timeout: Duration) -> Result<ShellOutput, ShellError> {
    let mut child = shell_command(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(ShellError::Spawn)?;

    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait()? {
            Some(_status) => break,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ShellError::TimedOut);
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }

    Ok(ShellOutput {
        stdout: join_reader(stdout_reader),
        stderr: join_reader(stderr_reader),
    })
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}
