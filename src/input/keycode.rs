// SPDX-License-Identifier: GPL-3.0-only

//! Key resolution against the current modifier state.
//!
//! A pressed key resolves to either a single printable character, which is
//! typed literally into the target, or a named X keysym, which is sent as a
//! key event.
//!
//! # Rules
//!
//! 1. Letters are uppercase when Shift or Caps Lock is active.
//! 2. Symbols with a shifted glyph (`1` → `!`) use it only while Shift is
//!    active; Caps Lock does not affect them.
//! 3. Everything else resolves to the key's own keysym.

use crate::input::ModifierState;
use crate::layout::Key;

/// A resolved keycode ready for input emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedKeycode {
    /// A single character typed literally.
    /// Examples: 'a', 'A', '!', '1'
    Character(char),

    /// An X keysym name for non-printable or named keys.
    /// Examples: "BackSpace", "Return", "space", "grave"
    Keysym(String),
}

impl ResolvedKeycode {
    /// The string handed to the injection tool.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Character(c) => c.to_string(),
            Self::Keysym(name) => name.clone(),
        }
    }
}

/// Returns the glyph produced by a US keyboard when `c` is typed with Shift.
#[must_use]
pub fn shifted_glyph(c: char) -> Option<char> {
    let shifted = match c {
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        _ => return None,
    };
    Some(shifted)
}

/// Resolves what pressing `key` emits under `state`.
///
/// Modifier keys are not emitted and are expected to be handled before
/// calling this; they resolve to their keysym like any other named key.
pub fn resolve_key(key: &Key, state: &ModifierState) -> ResolvedKeycode {
    if let Some(letter) = key.letter() {
        return ResolvedKeycode::Character(apply_case(letter, state.shift() || state.caps()));
    }

    if state.shift() {
        if let Some(shifted) = key.glyph().and_then(shifted_glyph) {
            return ResolvedKeycode::Character(shifted);
        }
    }

    canonical(&key.keysym)
}

/// Returns the label a key should currently display.
///
/// Labels follow the same rules as emission, so the panel always shows what
/// a click would type.
pub fn display_label(key: &Key, state: &ModifierState) -> String {
    if key.modifier().is_some() {
        return key.label.clone();
    }

    if let Some(letter) = key.letter() {
        return apply_case(letter, state.shift() || state.caps()).to_string();
    }

    if state.shift() {
        if let Some(shifted) = key.glyph().and_then(shifted_glyph) {
            return shifted.to_string();
        }
    }

    key.label.clone()
}

fn apply_case(letter: char, upper: bool) -> char {
    if upper {
        letter.to_uppercase().next().unwrap_or(letter)
    } else {
        letter.to_lowercase().next().unwrap_or(letter)
    }
}

/// Single-character keysyms are typed, longer ones are key events.
fn canonical(keysym: &str) -> ResolvedKeycode {
    let mut chars = keysym.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ResolvedKeycode::Character(c),
        _ => ResolvedKeycode::Keysym(keysym.to_string()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, Modifier};

    fn state(shift: bool, caps: bool) -> ModifierState {
        let mut state = ModifierState::new();
        if shift {
            state.activate(Modifier::Shift);
        }
        if caps {
            state.activate(Modifier::CapsLock);
        }
        state
    }

    fn all_states() -> [(bool, bool); 4] {
        [(false, false), (true, false), (false, true), (true, true)]
    }

    /// Letters are uppercase iff shift OR caps.
    #[test]
    fn test_letters_follow_shift_or_caps() {
        let layout = Layout::qwerty();
        for (shift, caps) in all_states() {
            let modifiers = state(shift, caps);
            for key in layout.keys().iter().filter(|key| key.letter().is_some()) {
                let resolved = resolve_key(key, &modifiers);
                let ResolvedKeycode::Character(c) = resolved else {
                    panic!("Letter '{}' should resolve to a character", key.label);
                };
                assert_eq!(
                    c.is_uppercase(),
                    shift || caps,
                    "'{}' with shift={} caps={}",
                    key.label,
                    shift,
                    caps
                );
            }
        }
    }

    /// Symbols use the shifted glyph iff shift, regardless of caps.
    #[test]
    fn test_symbols_ignore_caps() {
        let layout = Layout::qwerty();
        for (shift, caps) in all_states() {
            let modifiers = state(shift, caps);
            for key in layout.keys() {
                let Some(shifted) = key.glyph().and_then(shifted_glyph) else {
                    continue;
                };
                let resolved = resolve_key(key, &modifiers);
                if shift {
                    assert_eq!(resolved, ResolvedKeycode::Character(shifted));
                } else {
                    assert_ne!(resolved, ResolvedKeycode::Character(shifted));
                }
            }
        }
    }

    #[test]
    fn test_unshifted_symbols_use_keysym() {
        let modifiers = state(false, true);
        let grave = Key::new("`", "grave", 0, 0, 2);
        assert_eq!(
            resolve_key(&grave, &modifiers),
            ResolvedKeycode::Keysym("grave".to_string())
        );

        let one = Key::new("1", "1", 0, 2, 2);
        assert_eq!(resolve_key(&one, &modifiers), ResolvedKeycode::Character('1'));
    }

    #[test]
    fn test_named_keys_ignore_modifiers() {
        let backspace = Key::new("Backspace", "BackSpace", 0, 26, 4);
        let space = Key::new("Space", "space", 4, 9, 12);
        for (shift, caps) in all_states() {
            let modifiers = state(shift, caps);
            assert_eq!(
                resolve_key(&backspace, &modifiers),
                ResolvedKeycode::Keysym("BackSpace".to_string())
            );
            assert_eq!(
                resolve_key(&space, &modifiers),
                ResolvedKeycode::Keysym("space".to_string())
            );
        }
    }

    #[test]
    fn test_display_labels() {
        let a = Key::new("a", "a", 2, 4, 2);
        let one = Key::new("1", "1", 0, 2, 2);
        let shift = Key::new("Shift", "Shift_L", 3, 0, 5);

        assert_eq!(display_label(&a, &state(false, false)), "a");
        assert_eq!(display_label(&a, &state(false, true)), "A");
        assert_eq!(display_label(&a, &state(true, true)), "A");
        assert_eq!(display_label(&one, &state(false, true)), "1");
        assert_eq!(display_label(&one, &state(true, false)), "!");
        assert_eq!(display_label(&shift, &state(true, false)), "Shift");
    }

    #[test]
    fn test_shifted_glyph_table() {
        assert_eq!(shifted_glyph('\''), Some('"'));
        assert_eq!(shifted_glyph('\\'), Some('|'));
        assert_eq!(shifted_glyph('a'), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ResolvedKeycode::Character('!').as_text(), "!");
        assert_eq!(ResolvedKeycode::Keysym("Return".to_string()).as_text(), "Return");
    }
}
