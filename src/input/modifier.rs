// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state for the panel.
//!
//! Only two modifiers exist, each with its own release behavior:
//!
//! - **Shift** is one-shot and released after the next non-modifier key
//! - **Caps Lock** latches until it is pressed again
//!
//! Both decide which character a key emits. Typed text is always sent with
//! modifiers cleared, so the target's own lock state does not double up.
//!
//! ```rust,ignore
//! use floatboard::input::ModifierState;
//! use floatboard::layout::Modifier;
//!
//! let mut state = ModifierState::new();
//! state.toggle(Modifier::Shift);
//! state.toggle(Modifier::CapsLock);
//!
//! state.release_one_shot();
//! assert!(!state.shift());
//! assert!(state.caps());
//! ```

use crate::layout::Modifier;

/// Shift and Caps Lock flags of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    shift: bool,
    caps: bool,
}

impl ModifierState {
    /// Creates a state with both modifiers off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn flag_mut(&mut self, modifier: Modifier) -> &mut bool {
        match modifier {
            Modifier::Shift => &mut self.shift,
            Modifier::CapsLock => &mut self.caps,
        }
    }

    /// Turns a modifier on.
    pub fn activate(&mut self, modifier: Modifier) {
        *self.flag_mut(modifier) = true;
    }

    /// Flips a modifier and returns whether it is now on.
    pub fn toggle(&mut self, modifier: Modifier) -> bool {
        let flag = self.flag_mut(modifier);
        *flag = !*flag;
        *flag
    }

    #[must_use]
    pub fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::CapsLock => self.caps,
        }
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.shift
    }

    #[must_use]
    pub fn caps(&self) -> bool {
        self.caps
    }

    /// Releases every one-shot modifier. Latched ones stay on.
    pub fn release_one_shot(&mut self) {
        for modifier in [Modifier::Shift, Modifier::CapsLock] {
            if modifier.is_one_shot() {
                *self.flag_mut(modifier) = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_each_modifier_independently() {
        let mut state = ModifierState::new();

        assert!(state.toggle(Modifier::CapsLock));
        assert!(state.caps());
        assert!(!state.shift());

        assert!(state.toggle(Modifier::Shift));
        assert!(!state.toggle(Modifier::CapsLock));
        assert!(state.shift());
        assert!(!state.caps());
    }

    #[test]
    fn test_release_keeps_caps_latched() {
        let mut state = ModifierState::new();
        state.activate(Modifier::Shift);
        state.activate(Modifier::CapsLock);

        state.release_one_shot();

        assert!(!state.shift(), "Shift should be released");
        assert!(state.caps(), "Caps Lock should remain latched");
        assert!(state.is_active(Modifier::CapsLock));
    }

    #[test]
    fn test_release_without_modifiers_is_noop() {
        let mut state = ModifierState::new();
        state.release_one_shot();
        assert_eq!(state, ModifierState::default());
    }
}
