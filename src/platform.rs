//! Platform identity and trash emptying.
//!
//! The dispatcher's OS special case needs two things: the host's platform
//! name, and a way to empty its deleted-file staging area. Each platform
//! gets its own `TrashEmptier` implementation, selected once at startup.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Host platform identity, derived at startup and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Darwin,
    Linux,
    Other(String),
}

impl Platform {
    /// Detect the platform from the compile-time OS constant.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::Darwin,
            "linux" => Platform::Linux,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Darwin => write!(f, "Darwin"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
    #[error("home directory not found")]
    NoHome,
}

/// What kind of staging area an emptier targets. Drives the report phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashKind {
    RecycleBin,
    Trash,
}

impl TrashKind {
    pub fn success_line(self) -> &'static str {
        match self {
            TrashKind::RecycleBin => "Recycle bin emptied successfully.",
            TrashKind::Trash => "Trash emptied successfully.",
        }
    }

    pub fn failure_line(self, err: &TrashError) -> String {
        match self {
            TrashKind::RecycleBin => format!("Failed to empty recycle bin: {}", err),
            TrashKind::Trash => format!("Failed to empty trash: {}", err),
        }
    }
}

/// Per-platform trash emptying.
///
/// Emptying an already-empty (or absent) trash succeeds. Partial deletion on
/// failure is not rolled back.
pub trait TrashEmptier: Send + Sync {
    fn kind(&self) -> TrashKind;
    fn empty(&self) -> Result<(), TrashError>;
}

/// Select the emptier for a platform. Unrecognized platforms get none,
/// so the OS report carries the identity line only.
pub fn trash_emptier_for(platform: &Platform) -> Option<Box<dyn TrashEmptier>> {
    match platform {
        Platform::Windows => Some(Box::new(RecycleBinCleaner)),
        Platform::Darwin => Some(Box::new(DarwinTrash::new())),
        Platform::Linux => Some(Box::new(LinuxTrash::new())),
        Platform::Other(_) => None,
    }
}

/// Windows recycle bin, cleared through PowerShell.
pub struct RecycleBinCleaner;

impl TrashEmptier for RecycleBinCleaner {
    fn kind(&self) -> TrashKind {
        TrashKind::RecycleBin
    }

    fn empty(&self) -> Result<(), TrashError> {
        let output = Command::new("powershell")
            .args(["-Command", "Clear-RecycleBin -Force"])
            .output()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(TrashError::Command(stderr.trim().to_string()))
        }
    }
}

/// macOS user trash at `~/.Trash`.
pub struct DarwinTrash {
    root: Option<PathBuf>,
}

impl DarwinTrash {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Point the emptier at an explicit trash directory instead of `~/.Trash`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn trash_dir(&self) -> Result<PathBuf, TrashError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".Trash"))
                .ok_or(TrashError::NoHome),
        }
    }
}

impl Default for DarwinTrash {
    fn default() -> Self {
        Self::new()
    }
}

impl TrashEmptier for DarwinTrash {
    fn kind(&self) -> TrashKind {
        TrashKind::Trash
    }

    fn empty(&self) -> Result<(), TrashError> {
        clear_dir(&self.trash_dir()?)?;
        Ok(())
    }
}

/// Linux XDG trash: both `files/` and `info/` under `~/.local/share/Trash`.
pub struct LinuxTrash {
    root: Option<PathBuf>,
}

impl LinuxTrash {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Point the emptier at an explicit trash directory (one containing
    /// `files/` and `info/`) instead of the user's XDG location.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn trash_dir(&self) -> Result<PathBuf, TrashError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".local/share/Trash"))
                .ok_or(TrashError::NoHome),
        }
    }
}

impl Default for LinuxTrash {
    fn default() -> Self {
        Self::new()
    }
}

impl TrashEmptier for LinuxTrash {
    fn kind(&self) -> TrashKind {
        TrashKind::Trash
    }

    fn empty(&self) -> Result<(), TrashError> {
        let root = self.trash_dir()?;
        clear_dir(&root.join("files"))?;
        clear_dir(&root.join("info"))?;
        Ok(())
    }
}

/// Remove every entry inside `dir`, keeping the directory itself.
/// A missing directory counts as already empty.
fn clear_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
