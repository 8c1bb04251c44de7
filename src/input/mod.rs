// SPDX-License-Identifier: GPL-3.0-only

//! Input handling module for the Floatboard keyboard.
//!
//! This module resolves key presses against the modifier state and hands the
//! result to an external injection tool.
//!
//! # Features
//!
//! - **Modifier state management**: One-shot Shift and latching Caps Lock
//! - **Key resolution**: Letters, shifted symbols and named keysyms
//! - **Injection backend**: [`InputBackend`] trait with an `xdotool` implementation
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use floatboard::input::{resolve_key, InputBackend, ModifierState, ResolvedKeycode, XdotoolBackend};
//! use floatboard::layout::{Layout, Modifier};
//!
//! let layout = Layout::qwerty();
//! let mut state = ModifierState::new();
//! state.toggle(Modifier::Shift);
//!
//! let backend = XdotoolBackend::default();
//! match resolve_key(&layout.keys()[1], &state) {
//!     ResolvedKeycode::Character(c) => backend.type_text(&c.to_string())?,
//!     ResolvedKeycode::Keysym(name) => backend.send_key(&name)?,
//! }
//! state.release_one_shot();
//! ```

// Sub-modules
pub mod backend;
pub mod keycode;
pub mod modifier;
pub mod xdotool;

// Re-export public API
pub use backend::{InjectError, InputBackend, WindowId, locate_tool};
pub use keycode::{ResolvedKeycode, display_label, resolve_key, shifted_glyph};
pub use modifier::ModifierState;
pub use xdotool::XdotoolBackend;
