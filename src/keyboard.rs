// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard controller.
//!
//! [`KeyboardController`] owns the interaction state of the panel (modifier
//! state, target window and palette) and turns key presses into calls on an
//! [`InputBackend`]. It knows nothing about widgets or windows, which keeps
//! the dispatch rules testable without a display.

use crate::input::{InjectError, InputBackend, ModifierState, ResolvedKeycode, resolve_key};
use crate::layout::{Key, Layout, Modifier};
use crate::renderer::theme::ThemeName;
use crate::target::{self, TargetWindow};

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A modifier key was toggled; `active` is its new state.
    Modifier { modifier: Modifier, active: bool },

    /// Nothing was sent because no target window is set.
    NoTarget(ResolvedKeycode),

    /// The keystroke was handed to the target window.
    Delivered(ResolvedKeycode),

    /// The injection tool failed; the error has been logged.
    Failed(ResolvedKeycode),

    /// No key exists at the pressed index.
    Unknown,
}

impl KeyOutcome {
    /// Whether the injection tool was asked to deliver a keystroke.
    #[must_use]
    pub fn reached_backend(&self) -> bool {
        matches!(self, Self::Delivered(_) | Self::Failed(_))
    }
}

/// Interaction state and keystroke dispatch of the panel.
#[derive(Debug)]
pub struct KeyboardController<B> {
    layout: Layout,
    modifiers: ModifierState,
    target: Option<TargetWindow>,
    theme: ThemeName,
    backend: B,
}

impl<B: InputBackend> KeyboardController<B> {
    /// Creates a controller with the QWERTY layout and no target.
    pub fn new(backend: B, theme: ThemeName) -> Self {
        Self {
            layout: Layout::qwerty(),
            modifiers: ModifierState::new(),
            target: None,
            theme,
            backend,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn target(&self) -> Option<&TargetWindow> {
        self.target.as_ref()
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Switches to the other palette.
    pub fn toggle_theme(&mut self) -> ThemeName {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        if self.theme != theme {
            tracing::info!("Switching to {:?} theme", theme);
            self.theme = theme;
        }
    }

    /// Stores the result of the window picker.
    ///
    /// `None` means nothing was picked and keeps the previous target.
    pub fn select_target(&mut self, picked: Option<TargetWindow>) {
        match picked {
            Some(target) => {
                tracing::info!("Target window set to {}", target.id);
                self.target = Some(target);
            }
            None => tracing::debug!("No window picked, keeping previous target"),
        }
    }

    /// Adopts the focused window as the target unless it is the panel itself.
    pub fn adopt_focused_window(&mut self, panel_title: &str) -> Option<&TargetWindow> {
        let focused = target::focused_target(&self.backend, panel_title);
        if let Some(target) = &focused {
            tracing::info!("Adopted focused window {} as initial target", target.id);
        }
        self.target = focused;
        self.target.as_ref()
    }

    /// Handles a click on the key at `index`.
    ///
    /// Modifier keys change state; Caps Lock is additionally sent to the
    /// target as a key event and leaves Shift untouched. Any other key emits
    /// according to the current modifiers and then releases Shift, whether
    /// or not a target is set and whether or not delivery succeeded.
    pub fn press(&mut self, index: usize) -> KeyOutcome {
        let Some(key) = self.layout.get(index) else {
            tracing::warn!("No key at index {}", index);
            return KeyOutcome::Unknown;
        };

        if let Some(modifier) = key.modifier() {
            let active = self.modifiers.toggle(modifier);
            tracing::debug!("{:?} {}", modifier, if active { "on" } else { "off" });
            if modifier.is_forwarded() {
                return self.dispatch(key, ResolvedKeycode::Keysym(key.keysym.clone()));
            }
            return KeyOutcome::Modifier { modifier, active };
        }

        let output = resolve_key(key, &self.modifiers);
        let outcome = self.dispatch(key, output);
        self.modifiers.release_one_shot();
        outcome
    }

    fn dispatch(&self, key: &Key, output: ResolvedKeycode) -> KeyOutcome {
        let Some(target) = &self.target else {
            tracing::debug!("No target window, dropping {:?}", output);
            return KeyOutcome::NoTarget(output);
        };

        tracing::debug!("Sending {:?} ({}) to window {}", output, key.keysym, target.id);
        match self.deliver(target, &output) {
            Ok(()) => KeyOutcome::Delivered(output),
            Err(e) => {
                tracing::error!("Error sending key {}: {}", key.keysym, e);
                KeyOutcome::Failed(output)
            }
        }
    }

    fn deliver(&self, target: &TargetWindow, output: &ResolvedKeycode) -> Result<(), InjectError> {
        let text = output.as_text();
        if let Err(e) = self.backend.activate_window(&target.id) {
            // Characters can still be typed straight at the window
            return match output {
                ResolvedKeycode::Character(_) => {
                    tracing::warn!("Failed to activate window {}: {}; typing at it directly", target.id, e);
                    self.backend.type_text_to_window(&target.id, &text)
                }
                ResolvedKeycode::Keysym(_) => Err(e),
            };
        }

        match output {
            ResolvedKeycode::Character(_) => self.backend.type_text(&text),
            ResolvedKeycode::Keysym(_) => self.backend.send_key(&text),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
