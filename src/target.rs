// SPDX-License-Identifier: GPL-3.0-only

//! Target window selection.
//!
//! The target is the window keystrokes are sent to. It is adopted from the
//! focused window at startup and replaced whenever the user picks a window
//! interactively. No liveness check is made afterwards: a target that has
//! gone away simply makes the injection calls fail.

use crate::app_settings::TARGET_TITLE_MAX_CHARS;
use crate::input::{InputBackend, WindowId};

/// A window selected to receive keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWindow {
    /// Handle passed to the injection tool.
    pub id: WindowId,
    /// Shortened title for the status label, `None` if the window has no title.
    pub title: Option<String>,
}

impl TargetWindow {
    /// Creates a target from a handle and its raw title.
    pub fn new(id: WindowId, raw_title: &str) -> Self {
        Self {
            id,
            title: short_title(raw_title),
        }
    }
}

/// Trims a window title for display. Empty titles yield `None`.
#[must_use]
pub fn short_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(TARGET_TITLE_MAX_CHARS).collect())
    }
}

/// Looks up a window's title, treating a failed query as an empty title.
fn describe<B: InputBackend>(backend: &B, id: WindowId) -> TargetWindow {
    let raw = backend.window_name(&id).unwrap_or_else(|e| {
        tracing::warn!("Failed to query title of window {}: {}", id, e);
        String::new()
    });
    TargetWindow::new(id, &raw)
}

/// Lets the user click a window and describes it.
///
/// Blocks until the user has clicked. Returns `None` when nothing was picked
/// or the picker failed; failures are logged.
pub fn pick_target<B: InputBackend>(backend: &B) -> Option<TargetWindow> {
    match backend.select_window() {
        Ok(Some(id)) => {
            let target = describe(backend, id);
            tracing::info!("Selected target window {} ({:?})", target.id, target.title);
            Some(target)
        }
        Ok(None) => {
            tracing::debug!("Window selection returned no window");
            None
        }
        Err(e) => {
            tracing::error!("Error selecting window: {}", e);
            None
        }
    }
}

/// Returns the focused window unless it is the keyboard panel itself.
///
/// The panel is recognised by searching for windows titled `panel_title`.
/// Failures are logged and yield `None`.
pub fn focused_target<B: InputBackend>(backend: &B, panel_title: &str) -> Option<TargetWindow> {
    let own_windows = backend.search_windows(panel_title).unwrap_or_else(|e| {
        tracing::warn!("Failed to look up keyboard window: {}", e);
        Vec::new()
    });
    // Only the first match is ours; other matches are unrelated windows
    // that happen to share the title.
    let own = own_windows.into_iter().next();

    let active = match backend.active_window() {
        Ok(active) => active?,
        Err(e) => {
            tracing::error!("Error getting target window: {}", e);
            return None;
        }
    };

    if own.as_ref() == Some(&active) {
        tracing::debug!("Focused window {} is the keyboard itself", active);
        return None;
    }

    Some(describe(backend, active))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::backend::testing::{Call, RecordingBackend, Script};

    #[test]
    fn test_short_title_truncates() {
        assert_eq!(
            short_title("Mozilla Firefox - Private Browsing").as_deref(),
            Some("Mozilla Firefox - Pr")
        );
        assert_eq!(short_title("  vim  ").as_deref(), Some("vim"));
        assert_eq!(short_title(""), None);
        assert_eq!(short_title("   \n"), None);
    }

    #[test]
    fn test_short_title_counts_characters_not_bytes() {
        let title = "Ünïcödé wïndöw tïtlé ëxträ";
        let short = short_title(title).unwrap();
        assert_eq!(short.chars().count(), TARGET_TITLE_MAX_CHARS);
    }

    #[test]
    fn test_pick_target_describes_selection() {
        let backend = RecordingBackend::with_script(Script {
            selection: Some("300".to_string()),
            names: vec![("300".to_string(), "Text Editor".to_string())],
            ..Script::default()
        });

        let target = pick_target(&backend).expect("target");
        assert_eq!(target.id, WindowId::new("300"));
        assert_eq!(target.title.as_deref(), Some("Text Editor"));
        assert_eq!(
            backend.calls(),
            vec![Call::Select, Call::WindowName("300".to_string())]
        );
    }

    #[test]
    fn test_pick_target_without_selection() {
        let backend = RecordingBackend::new();
        assert_eq!(pick_target(&backend), None);
        assert_eq!(backend.calls(), vec![Call::Select]);
    }

    #[test]
    fn test_untitled_window_has_no_title() {
        let backend = RecordingBackend::with_script(Script {
            selection: Some("5".to_string()),
            ..Script::default()
        });
        let target = pick_target(&backend).expect("target");
        assert_eq!(target.title, None);
    }

    #[test]
    fn test_focused_target_adopts_other_window() {
        let backend = RecordingBackend::with_script(Script {
            active: Some("10".to_string()),
            own_windows: vec!["20".to_string()],
            names: vec![("10".to_string(), "xterm".to_string())],
            ..Script::default()
        });

        let target = focused_target(&backend, "On-Screen Keyboard").expect("target");
        assert_eq!(target.id, WindowId::new("10"));
        assert_eq!(target.title.as_deref(), Some("xterm"));
    }

    #[test]
    fn test_focused_target_skips_panel() {
        let backend = RecordingBackend::with_script(Script {
            active: Some("20".to_string()),
            own_windows: vec!["20".to_string(), "21".to_string()],
            ..Script::default()
        });

        assert_eq!(focused_target(&backend, "On-Screen Keyboard"), None);
    }

    #[test]
    fn test_focused_target_without_focus() {
        let backend = RecordingBackend::new();
        assert_eq!(focused_target(&backend, "On-Screen Keyboard"), None);
        assert_eq!(
            backend.calls(),
            vec![
                Call::Search("On-Screen Keyboard".to_string()),
                Call::ActiveWindow,
            ]
        );
    }
}
