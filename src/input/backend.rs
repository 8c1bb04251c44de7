// SPDX-License-Identifier: GPL-3.0-only

//! Input injection and window query backend abstraction.
//!
//! Keystrokes never go through the toolkit: they are handed to an external
//! command-line tool that talks to the X server. [`InputBackend`] describes
//! the operations the keyboard needs from such a tool so the dispatch logic
//! can be driven by a recording double in tests.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Opaque handle of a window, as printed by the injection tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowId(String);

impl WindowId {
    /// Wraps a raw window handle. Surrounding whitespace is trimmed.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The raw handle as passed on the command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while invoking the injection tool.
#[derive(Debug)]
pub enum InjectError {
    /// The tool binary could not be found.
    ToolMissing {
        /// Program that was looked up
        program: String,
    },

    /// The tool could not be started.
    Spawn {
        /// Program that failed to start
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The tool ran but exited unsuccessfully.
    Failed {
        /// Full command line, for diagnostics
        command: String,
        /// Exit status reported by the OS
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

impl InjectError {
    /// Classifies a spawn failure, separating "not installed" from other I/O errors.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ToolMissing { program }
        } else {
            Self::Spawn { program, source }
        }
    }

    /// Whether this error means the tool is not installed.
    #[must_use]
    pub fn is_tool_missing(&self) -> bool {
        matches!(self, Self::ToolMissing { .. })
    }
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolMissing { program } => {
                write!(f, "{} not found; install it and make sure it is on PATH", program)
            }
            Self::Spawn { program, source } => {
                write!(f, "failed to start {}: {}", program, source)
            }
            Self::Failed {
                command,
                status,
                stderr,
            } => {
                write!(f, "`{}` exited with {}", command, status)?;
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for InjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Operations the keyboard needs from the injection and window query tool.
///
/// Every call is synchronous and returns once the tool has exited.
pub trait InputBackend {
    /// Brings a window to the front and focuses it, waiting until it is active.
    fn activate_window(&self, window: &WindowId) -> Result<(), InjectError>;

    /// Types literal text into the focused window with modifier keys cleared.
    fn type_text(&self, text: &str) -> Result<(), InjectError>;

    /// Sends a named key (X keysym) to the focused window with modifier keys cleared.
    fn send_key(&self, keysym: &str) -> Result<(), InjectError>;

    /// Types literal text directed at a specific window without focusing it.
    fn type_text_to_window(&self, window: &WindowId, text: &str) -> Result<(), InjectError>;

    /// Finds windows whose title contains `title`.
    fn search_windows(&self, title: &str) -> Result<Vec<WindowId>, InjectError>;

    /// Returns the window currently holding input focus.
    fn active_window(&self) -> Result<Option<WindowId>, InjectError>;

    /// Returns the title of a window.
    fn window_name(&self, window: &WindowId) -> Result<String, InjectError>;

    /// Lets the user click a window and returns its handle.
    fn select_window(&self) -> Result<Option<WindowId>, InjectError>;
}

/// Locates an executable on `PATH`.
///
/// Names containing a path separator are checked directly.
#[must_use]
pub fn locate_tool(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    locate_tool_in(name, &path)
}

/// Locates an executable in an explicit `PATH`-style search list.
#[must_use]
pub fn locate_tool_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    std::env::split_paths(search_path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ============================================================================
// Test Support
// ============================================================================


// ============================================================================
// Unit Tests
// ============================================================================
