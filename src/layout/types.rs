// SPDX-License-Identifier: GPL-3.0-only

//! Core types for the keyboard layout.

/// Base font size of character keys.
pub const DEFAULT_FONT_SIZE: u16 = 12;

/// Base font size of named keys (Backspace, Shift, Space, ...).
pub const NAMED_KEY_FONT_SIZE: u16 = 10;

/// Modifier keys tracked by the panel itself.
///
/// Ctrl, Alt and Super are plain key events for the target and carry no
/// panel state, so they are not modifiers here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Shift, cleared after the next character key.
    Shift,
    /// Caps Lock, latched until pressed again.
    CapsLock,
}

impl Modifier {
    /// Maps an X keysym name to the modifier it controls.
    #[must_use]
    pub fn from_keysym(keysym: &str) -> Option<Self> {
        match keysym {
            "Shift_L" | "Shift_R" => Some(Self::Shift),
            "Caps_Lock" => Some(Self::CapsLock),
            _ => None,
        }
    }

    /// Whether the modifier releases itself after the next key press.
    #[must_use]
    pub fn is_one_shot(self) -> bool {
        matches!(self, Self::Shift)
    }

    /// Whether toggling the modifier is also sent to the target window.
    ///
    /// Caps Lock is, so the target's own lock state follows the panel.
    #[must_use]
    pub fn is_forwarded(self) -> bool {
        matches!(self, Self::CapsLock)
    }
}

/// A single key of the on-screen keyboard.
///
/// Keys are created once when the layout is built and never change. The grid
/// position is expressed in columns of a fixed-width grid so that every row
/// can be laid out with proportional widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Label shown on the key in its unmodified state.
    pub label: String,
    /// X keysym name sent for the key (`"a"`, `"grave"`, `"BackSpace"`).
    pub keysym: String,
    /// Row index, top row first.
    pub row: usize,
    /// First grid column covered by the key.
    pub column: u16,
    /// Number of grid columns covered by the key.
    pub span: u16,
    /// Font size at the default panel width.
    pub font_size: u16,
}

impl Key {
    /// Creates a key with the default character font size.
    pub fn new(
        label: impl Into<String>,
        keysym: impl Into<String>,
        row: usize,
        column: u16,
        span: u16,
    ) -> Self {
        Self {
            label: label.into(),
            keysym: keysym.into(),
            row,
            column,
            span,
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Overrides the base font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    /// The modifier this key toggles, if any.
    #[must_use]
    pub fn modifier(&self) -> Option<Modifier> {
        Modifier::from_keysym(&self.keysym)
    }

    /// The single character printed on the key, if the label is one character.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        let mut chars = self.label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// The letter on the key, if it is an alphabetic key.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.glyph().filter(|c| c.is_alphabetic())
    }
}
