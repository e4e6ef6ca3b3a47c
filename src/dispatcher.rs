//! The command dispatcher: pick an execution strategy, run it, report.
//!
//! Contract: `execute(command) -> String` never fails at the interface.
//! Every outcome, including timeouts and spawn errors, renders into the
//! returned report text. Internally outcomes stay typed; the string form
//! is a presentation concern handled by [`Outcome::render`].

use std::time::Duration;

use log::{debug, warn};

use crate::interpreter::Interpreter;
use crate::platform::{Platform, TrashEmptier, TrashError, TrashKind, trash_emptier_for};
use crate::shell::{self, ShellError};

/// Capabilities resolved once at startup and handed to the dispatcher.
/// Replaces process-wide availability flags with explicit state.
pub struct Capabilities {
    pub interpreter: Option<Box<dyn Interpreter>>,
}

impl Capabilities {
    /// No optional backends: every command goes to the shell fallback.
    pub fn none() -> Self {
        Self { interpreter: None }
    }

    pub fn with_interpreter(interpreter: Box<dyn Interpreter>) -> Self {
        Self {
            interpreter: Some(interpreter),
        }
    }
}

/// Phrases that route a command to the OS-identification / trash path
/// instead of literal shell execution. Substring match, case-insensitive.
const TRIGGER_PHRASES: [&str; 2] = ["identify the os", "recycle bin"];

pub struct Dispatcher {
    capabilities: Capabilities,
    platform: Platform,
    trash: Option<Box<dyn TrashEmptier>>,
    shell_timeout: Duration,
}

impl Dispatcher {
    /// Build a dispatcher for the host platform.
    pub fn new(capabilities: Capabilities, shell_timeout: Duration) -> Self {
        let platform = Platform::detect();
        let trash = trash_emptier_for(&platform);
        Self {
            capabilities,
            platform,
            trash,
            shell_timeout,
        }
    }

    /// Build a dispatcher with an explicit platform and trash emptier.
    pub fn with_platform(
        capabilities: Capabilities,
        platform: Platform,
        trash: Option<Box<dyn TrashEmptier>>,
        shell_timeout: Duration,
    ) -> Self {
        Self {
            capabilities,
            platform,
            trash,
            shell_timeout,
        }
    }

    /// Execute a command and render the outcome. Never panics, never
    /// returns an error: the report text is the whole interface.
    pub fn execute(&self, command: &str) -> String {
        self.dispatch(command).render()
    }

    /// Typed form of [`execute`](Self::execute).
    pub fn dispatch(&self, command: &str) -> Outcome {
        if let Some(interpreter) = &self.capabilities.interpreter {
            debug!("delegating to {} interpreter", interpreter.name());
            match interpreter.chat(command) {
                Ok(text) => return Outcome::Interpreted(text),
                // Nothing from the failed attempt reaches the report.
                Err(e) => warn!("interpreter failed, falling back to shell: {:#}", e),
            }
        }

        if is_os_request(command) {
            return self.os_report();
        }

        match shell::run_with_timeout(command, self.shell_timeout) {
            Ok(output) => Outcome::Shell {
                command: command.to_string(),
                stdout: output.stdout,
                stderr: output.stderr,
            },
            Err(ShellError::TimedOut) => Outcome::TimedOut {
                command: command.to_string(),
            },
            Err(e) => Outcome::Failed {
                command: command.to_string(),
                error: e.to_string(),
            },
        }
    }

    fn os_report(&self) -> Outcome {
        let trash = self.trash.as_ref().map(|emptier| TrashReport {
            kind: emptier.kind(),
            result: emptier.empty(),
        });

        Outcome::OsReport {
            platform: self.platform.clone(),
            trash,
        }
    }
}

fn is_os_request(command: &str) -> bool {
    let lower = command.to_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

/// Result of one trash-emptying attempt, kept typed until rendering.
#[derive(Debug)]
pub struct TrashReport {
    pub kind: TrashKind,
    pub result: Result<(), TrashError>,
}

/// Typed dispatch outcome. `render` flattens it to the report string the
/// caller receives.
#[derive(Debug)]
pub enum Outcome {
    /// The interpreter backend handled the command.
    Interpreted(String),
    /// OS identification, with a trash attempt when the platform has one.
    OsReport {
        platform: Platform,
        trash: Option<TrashReport>,
    },
    /// Literal shell execution completed (successfully or not).
    Shell {
        command: String,
        stdout: String,
        stderr: String,
    },
    /// Shell execution exceeded the timeout.
    TimedOut { command: String },
    /// Shell execution could not run at all.
    Failed { command: String, error: String },
}

impl Outcome {
    pub fn render(&self) -> String {
        match self {
            Outcome::Interpreted(text) => text.clone(),
            Outcome::OsReport { platform, trash } => {
                let mut report = format!("Operating System: {}", platform);
                if let Some(trash) = trash {
                    report.push('\n');
                    match &trash.result {
                        Ok(()) => report.push_str(trash.kind.success_line()),
                        Err(e) => report.push_str(&trash.kind.failure_line(e)),
                    }
                }
                report
            }
            Outcome::Shell {
                command,
                stdout,
                stderr,
            } => format!("Command: {}\nOutput: {}\nError: {}", command, stdout, stderr),
            Outcome::TimedOut { command } => format!("Command timed out: {}", command),
            Outcome::Failed { command, error } => {
                format!("Error executing command '{}': {}", command, error)
            }
        }
    }
}
