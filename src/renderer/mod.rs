// SPDX-License-Identifier: GPL-3.0-only

//! Panel renderer for Floatboard.
//!
//! This module turns the keyboard layout and the interaction state into
//! libcosmic/Iced widgets. It owns no state: every function builds widgets
//! from borrowed data and reports clicks as [`RendererMessage`]s.
//!
//! # Architecture
//!
//! - **theme**: The two fixed palettes and per-key color selection.
//! - **key**: Individual key cells with modifier-aware labels.
//! - **title**: The title strip with status label, controls and resize grip.
//! - **panel**: Key grid and title strip combined into the full panel.
//! - **message**: Renderer message types for interactions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use floatboard::renderer::{render_panel, PanelView, TitleCaptions};
//! use floatboard::renderer::theme::{palette, ThemeName};
//!
//! let view = PanelView {
//!     layout: &layout,
//!     modifiers: &modifiers,
//!     palette: palette(ThemeName::Dark),
//!     window: &window_state,
//!     has_target: false,
//!     hovered: None,
//! };
//! let element = render_panel(&view, captions).map(Message::Renderer);
//! ```

pub mod key;
pub mod message;
pub mod panel;
pub mod theme;
pub mod title;

// Re-export message types
pub use message::{Hovered, RendererMessage};

// Re-export rendering functions
pub use key::render_key;
pub use panel::{render_keyboard, render_panel, PanelView};
pub use title::{render_grip, render_title_bar, TitleCaptions};

// Re-export theme types for convenience
pub use theme::{palette, Palette, ThemeName};
