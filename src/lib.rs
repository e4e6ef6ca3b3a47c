pub mod config;
pub mod crew;
pub mod dispatcher;
pub mod interpreter;
pub mod platform;
pub mod shell;

pub use config::{Config, ConfigError};
pub use crew::{AgentSpec, Crew, TaskSpec};
pub use dispatcher::{Capabilities, Dispatcher, Outcome, TrashReport};
pub use interpreter::{GeminiInterpreter, Interpreter};
pub use platform::{
    DarwinTrash, LinuxTrash, Platform, RecycleBinCleaner, TrashEmptier, TrashError, TrashKind,
    trash_emptier_for,
};
pub use shell::{DEFAULT_TIMEOUT, ShellError, ShellOutput, run_with_timeout};
