// SPDX-License-Identifier: GPL-3.0-only

//! `xdotool` implementation of [`InputBackend`].
//!
//! Each operation runs one `xdotool` subcommand and waits for it to exit.
//! Typing always passes `--` before the text so glyphs such as `-` are not
//! taken for options.

use std::path::PathBuf;
use std::process::{Command, Output};

use crate::input::backend::{InjectError, InputBackend, WindowId};

/// Injection backend driving the `xdotool` command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdotoolBackend {
    program: PathBuf,
}

impl XdotoolBackend {
    /// Creates a backend running `program` (a name looked up on `PATH` or a path).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this backend runs.
    #[must_use]
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    pub(crate) fn activate_args(window: &WindowId) -> Vec<String> {
        vec![
            "windowactivate".into(),
            "--sync".into(),
            window.to_string(),
        ]
    }

    pub(crate) fn type_args(text: &str) -> Vec<String> {
        vec![
            "type".into(),
            "--clearmodifiers".into(),
            "--".into(),
            text.into(),
        ]
    }

    pub(crate) fn key_args(keysym: &str) -> Vec<String> {
        vec!["key".into(), "--clearmodifiers".into(), keysym.into()]
    }

    pub(crate) fn type_to_window_args(window: &WindowId, text: &str) -> Vec<String> {
        vec![
            "type".into(),
            "--window".into(),
            window.to_string(),
            "--".into(),
            text.into(),
        ]
    }

    /// Runs the tool and returns its output if it exited successfully.
    fn run(&self, args: &[String]) -> Result<Output, InjectError> {
        let program = self.program.display().to_string();
        tracing::trace!("Running {} {}", program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| InjectError::spawn(program.clone(), source))?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(InjectError::Failed {
                command: format!("{} {}", program, args.join(" ")),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    /// Runs the tool and returns trimmed standard output.
    fn query(&self, args: &[String]) -> Result<String, InjectError> {
        let output = self.run(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for XdotoolBackend {
    fn default() -> Self {
        Self::new(crate::app_settings::DEFAULT_TOOL)
    }
}

impl InputBackend for XdotoolBackend {
    fn activate_window(&self, window: &WindowId) -> Result<(), InjectError> {
        self.run(&Self::activate_args(window)).map(drop)
    }

    fn type_text(&self, text: &str) -> Result<(), InjectError> {
        self.run(&Self::type_args(text)).map(drop)
    }

    fn send_key(&self, keysym: &str) -> Result<(), InjectError> {
        self.run(&Self::key_args(keysym)).map(drop)
    }

    fn type_text_to_window(&self, window: &WindowId, text: &str) -> Result<(), InjectError> {
        self.run(&Self::type_to_window_args(window, text)).map(drop)
    }

    fn search_windows(&self, title: &str) -> Result<Vec<WindowId>, InjectError> {
        let args = ["search".to_string(), "--name".to_string(), title.to_string()];
        match self.query(&args) {
            Ok(stdout) => Ok(stdout.split_whitespace().map(WindowId::new).collect()),
            // `search` exits with 1 when nothing matches
            Err(InjectError::Failed { stderr, .. }) if stderr.is_empty() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    fn active_window(&self) -> Result<Option<WindowId>, InjectError> {
        let stdout = self.query(&["getactivewindow".to_string()])?;
        Ok((!stdout.is_empty()).then(|| WindowId::new(stdout)))
    }

    fn window_name(&self, window: &WindowId) -> Result<String, InjectError> {
        self.query(&["getwindowname".to_string(), window.to_string()])
    }

    fn select_window(&self) -> Result<Option<WindowId>, InjectError> {
        let stdout = self.query(&["selectwindow".to_string()])?;
        Ok((!stdout.is_empty()).then(|| WindowId::new(stdout)))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
