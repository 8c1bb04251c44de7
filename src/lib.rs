// SPDX-License-Identifier: GPL-3.0-only

//! Floatboard - A floating on-screen keyboard for X11 desktops
//!
//! This crate provides a small always-on-top keyboard panel. Clicking a key
//! types the corresponding keystroke into a previously selected target
//! window through the `xdotool` command-line tool.
//!
//! # Architecture
//!
//! The panel never receives keyboard focus itself. Every click activates the
//! target window and hands the keystroke to `xdotool`, which synthesizes it
//! through the X server.
//!
//! # Modules
//!
//! - `app`: Main application model and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants
//! - `config`: Read-only user configuration with cosmic_config
//! - `i18n`: Localization support using fluent translations
//! - `input`: Modifier state, key resolution and the injection backend
//! - `keyboard`: Interaction state and keystroke dispatch
//! - `layout`: The QWERTY key grid
//! - `overlay`: Always-on-top behavior and windowing-system detection
//! - `renderer`: Panel widgets and color palettes
//! - `state`: Panel geometry and pointer gestures
//! - `target`: Target window selection

pub mod app;
pub mod app_settings;
pub mod config;
pub mod i18n;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod overlay;
pub mod renderer;
pub mod state;
pub mod target;

// Re-export the language loader used by the fl! macro
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================
