// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout for Floatboard.
//!
//! The panel shows a single US QWERTY layout laid out on a grid of
//! [`GRID_COLUMNS`] equal columns. Every row covers the full grid, so a key's
//! `span` doubles as its proportional width.
//!
//! ```rust,ignore
//! use floatboard::layout::Layout;
//!
//! let layout = Layout::qwerty();
//! for row in 0..layout.row_count() {
//!     for (index, key) in layout.row(row) {
//!         println!("{index}: {} -> {}", key.label, key.keysym);
//!     }
//! }
//! ```

mod types;

pub use types::{DEFAULT_FONT_SIZE, Key, Modifier, NAMED_KEY_FONT_SIZE};

/// Number of grid columns each row is divided into.
pub const GRID_COLUMNS: u16 = 30;

/// An immutable set of keys arranged in rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    keys: Vec<Key>,
    row_count: usize,
}

impl Layout {
    /// Builds a layout from keys. Keys are ordered by row, then column.
    pub fn new(mut keys: Vec<Key>) -> Self {
        keys.sort_by_key(|key| (key.row, key.column));
        let row_count = keys.last().map(|key| key.row + 1).unwrap_or(0);
        Self { keys, row_count }
    }

    /// The standard five-row US QWERTY layout.
    pub fn qwerty() -> Self {
        let mut keys = Vec::with_capacity(64);

        // Row 0: number row
        let number_row = [
            ("`", "grave"),
            ("1", "1"),
            ("2", "2"),
            ("3", "3"),
            ("4", "4"),
            ("5", "5"),
            ("6", "6"),
            ("7", "7"),
            ("8", "8"),
            ("9", "9"),
            ("0", "0"),
            ("-", "minus"),
            ("=", "equal"),
        ];
        let mut column = push_run(&mut keys, 0, 0, &number_row);
        keys.push(named("Backspace", "BackSpace", 0, column, 4));

        // Row 1: Tab + QWERTY
        keys.push(named("Tab", "Tab", 1, 0, 3));
        column = push_letters(&mut keys, 1, 3, "qwertyuiop");
        column = push_run(
            &mut keys,
            1,
            column,
            &[("[", "bracketleft"), ("]", "bracketright")],
        );
        keys.push(Key::new("\\", "backslash", 1, column, 3));

        // Row 2: Caps + home row
        keys.push(named("Caps", "Caps_Lock", 2, 0, 4));
        column = push_letters(&mut keys, 2, 4, "asdfghjkl");
        column = push_run(
            &mut keys,
            2,
            column,
            &[(";", "semicolon"), ("'", "apostrophe")],
        );
        keys.push(named("Enter", "Return", 2, column, 4));

        // Row 3: Shift + bottom letters
        keys.push(named("Shift", "Shift_L", 3, 0, 5));
        column = push_letters(&mut keys, 3, 5, "zxcvbnm");
        column = push_run(
            &mut keys,
            3,
            column,
            &[(",", "comma"), (".", "period"), ("/", "slash")],
        );
        keys.push(named("Shift", "Shift_R", 3, column, 5));

        // Row 4: modifiers and space
        keys.push(named("Ctrl", "Control_L", 4, 0, 3));
        keys.push(named("Win", "Super_L", 4, 3, 3));
        keys.push(named("Alt", "Alt_L", 4, 6, 3));
        keys.push(named("Space", "space", 4, 9, 12));
        keys.push(named("Alt", "Alt_R", 4, 21, 3));
        keys.push(named("Win", "Super_R", 4, 24, 3));
        keys.push(named("Ctrl", "Control_R", 4, 27, 3));

        Self::new(keys)
    }

    /// All keys, ordered by row then column.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Looks up a key by its index in [`Layout::keys`].
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Keys of one row together with their layout index.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &Key)> {
        self.keys
            .iter()
            .enumerate()
            .filter(move |(_, key)| key.row == row)
    }
}

/// Creates a named (multi-letter label) key with the smaller font.
fn named(label: &str, keysym: &str, row: usize, column: u16, span: u16) -> Key {
    Key::new(label, keysym, row, column, span).with_font_size(NAMED_KEY_FONT_SIZE)
}

/// Pushes two-column keys left to right and returns the next free column.
fn push_run(keys: &mut Vec<Key>, row: usize, mut column: u16, run: &[(&str, &str)]) -> u16 {
    for (label, keysym) in run {
        keys.push(Key::new(*label, *keysym, row, column, 2));
        column += 2;
    }
    column
}

/// Pushes two-column letter keys whose label and keysym coincide.
fn push_letters(keys: &mut Vec<Key>, row: usize, mut column: u16, letters: &str) -> u16 {
    for letter in letters.chars() {
        let label = letter.to_string();
        keys.push(Key::new(label.clone(), label, row, column, 2));
        column += 2;
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_has_five_rows() {
        let layout = Layout::qwerty();
        assert_eq!(layout.row_count(), 5);
    }

    #[test]
    fn test_every_row_fills_the_grid() {
        let layout = Layout::qwerty();
        for row in 0..layout.row_count() {
            let mut expected_column = 0;
            for (_, key) in layout.row(row) {
                assert_eq!(
                    key.column, expected_column,
                    "Key '{}' in row {} should start where the previous key ended",
                    key.label, row
                );
                expected_column += key.span;
            }
            assert_eq!(expected_column, GRID_COLUMNS, "Row {} should span the grid", row);
        }
    }

    #[test]
    fn test_all_letters_present() {
        let layout = Layout::qwerty();
        for letter in 'a'..='z' {
            let found = layout
                .keys()
                .iter()
                .any(|key| key.letter() == Some(letter) && key.keysym == letter.to_string());
            assert!(found, "Layout should contain '{}'", letter);
        }
    }

    #[test]
    fn test_modifier_keys() {
        let layout = Layout::qwerty();
        let shifts = layout
            .keys()
            .iter()
            .filter(|key| key.modifier() == Some(Modifier::Shift))
            .count();
        let caps = layout
            .keys()
            .iter()
            .filter(|key| key.modifier() == Some(Modifier::CapsLock))
            .count();
        assert_eq!(shifts, 2, "Both shift keys toggle shift");
        assert_eq!(caps, 1);
    }

    #[test]
    fn test_named_keys_use_small_font() {
        let layout = Layout::qwerty();
        let backspace = layout
            .keys()
            .iter()
            .find(|key| key.keysym == "BackSpace")
            .expect("backspace key");
        assert_eq!(backspace.font_size, NAMED_KEY_FONT_SIZE);

        let q = layout.keys().iter().find(|key| key.keysym == "q").expect("q key");
        assert_eq!(q.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_row_indices_resolve_to_keys() {
        let layout = Layout::qwerty();
        for (index, key) in layout.row(2) {
            assert_eq!(layout.get(index), Some(key));
        }
        assert!(layout.get(layout.keys().len()).is_none());
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new(Vec::new());
        assert_eq!(layout.row_count(), 0);
        assert_eq!(layout.row(0).count(), 0);
    }
}
