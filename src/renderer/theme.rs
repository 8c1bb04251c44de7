// SPDX-License-Identifier: GPL-3.0-only

//! Fixed color palettes for the keyboard panel.
//!
//! The panel does not follow the desktop theme. It carries two named
//! palettes and the user switches between them with the title strip button.
//!
//! # Color Functions
//!
//! - [`palette`]: All roles of a named theme
//! - [`key_background_color`]: Key background, reflecting active modifiers
//! - [`status_color`]: Target status label color

use cosmic::iced::Color;
use serde::{Deserialize, Serialize};

use crate::input::ModifierState;
use crate::layout::{Key, Modifier};

/// The two named palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// The other palette.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Semantic color roles of a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub key_background: Color,
    pub key_foreground: Color,
    pub title_background: Color,
    pub title_foreground: Color,
    pub active_background: Color,
    pub shift_active: Color,
    pub caps_active: Color,
    pub status_target: Color,
    pub status_no_target: Color,
    pub close_hover: Color,
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb8(0x2b, 0x2b, 0x2b),
        foreground: Color::from_rgb8(0xff, 0xff, 0xff),
        key_background: Color::from_rgb8(0x4a, 0x4a, 0x4a),
        key_foreground: Color::from_rgb8(0xdd, 0xdd, 0xdd),
        title_background: Color::from_rgb8(0x40, 0x40, 0x40),
        title_foreground: Color::from_rgb8(0xff, 0xff, 0xff),
        active_background: Color::from_rgb8(0x60, 0x60, 0x60),
        shift_active: Color::from_rgb8(0x00, 0x7a, 0xcc),
        caps_active: Color::from_rgb8(0x00, 0x99, 0x00),
        status_target: Color::from_rgb8(0x90, 0xee, 0x90),
        status_no_target: Color::from_rgb8(0xaa, 0xaa, 0xaa),
        close_hover: Color::from_rgb8(0xcc, 0x00, 0x00),
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        foreground: Color::from_rgb8(0x00, 0x00, 0x00),
        key_background: Color::from_rgb8(0xff, 0xff, 0xff),
        key_foreground: Color::from_rgb8(0x00, 0x00, 0x00),
        title_background: Color::from_rgb8(0xd0, 0xd0, 0xd0),
        title_foreground: Color::from_rgb8(0x00, 0x00, 0x00),
        active_background: Color::from_rgb8(0xc0, 0xc0, 0xc0),
        shift_active: Color::from_rgb8(0x87, 0xce, 0xeb),
        caps_active: Color::from_rgb8(0x90, 0xee, 0x90),
        status_target: Color::from_rgb8(0x00, 0x64, 0x00),
        status_no_target: Color::from_rgb8(0x66, 0x66, 0x66),
        close_hover: Color::from_rgb8(0xcc, 0x00, 0x00),
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Returns the palette of a named theme.
#[must_use]
pub fn palette(name: ThemeName) -> Palette {
    match name {
        ThemeName::Dark => dark(),
        ThemeName::Light => light(),
    }
}

/// Returns the background color of a key.
///
/// Shift keys use the shift color while Shift is active and the Caps Lock
/// key uses the caps color while Caps Lock is latched. All other keys use
/// the plain key background.
pub fn key_background_color(palette: &Palette, key: &Key, state: &ModifierState) -> Color {
    match key.modifier() {
        Some(modifier) if state.is_active(modifier) => match modifier {
            Modifier::Shift => palette.shift_active,
            Modifier::CapsLock => palette.caps_active,
        },
        _ => palette.key_background,
    }
}

/// Returns the background of a key under the pointer.
pub fn key_hover_color(palette: &Palette, key: &Key, state: &ModifierState) -> Color {
    let base = key_background_color(palette, key, state);
    if base == palette.key_background {
        palette.active_background
    } else {
        base
    }
}

/// Returns the color of the target status label.
#[must_use]
pub fn status_color(palette: &Palette, has_target: bool) -> Color {
    if has_target {
        palette.status_target
    } else {
        palette.status_no_target
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
