// SPDX-License-Identifier: GPL-3.0-only

//! Keeping the panel above other windows.
//!
//! The panel asks for `window::Level::AlwaysOnTop`, which X11 window
//! managers honor through the EWMH `_NET_WM_STATE_ABOVE` hint. The level is
//! re-asserted after every keystroke and window selection because activating
//! the target window may raise it above the panel.
//!
//! ## Wayland
//!
//! Under Wayland the level hint has no effect, and `xdotool` can only reach
//! XWayland clients. The panel still runs there but logs a warning.

use cosmic::app::cosmic::WindowingSystem;
use cosmic::iced::window;
use cosmic::iced::Task;

/// Display server the panel is running on, as far as injection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    X11,
    Wayland,
    Other,
    /// The windowing system has not been detected yet.
    Unknown,
}

impl DisplayServer {
    /// Classifies the windowing system reported by the toolkit.
    #[must_use]
    pub fn from_windowing_system(system: Option<WindowingSystem>) -> Self {
        match system {
            Some(WindowingSystem::Xlib | WindowingSystem::Xcb) => Self::X11,
            Some(WindowingSystem::Wayland) => Self::Wayland,
            Some(_) => Self::Other,
            None => Self::Unknown,
        }
    }

    /// Whether `xdotool` can reach every window on this display server.
    #[must_use]
    pub fn supports_injection(self) -> bool {
        matches!(self, Self::X11 | Self::Unknown)
    }
}

/// Detects the display server and logs what that means for the panel.
pub fn detect() -> DisplayServer {
    let server = DisplayServer::from_windowing_system(cosmic::app::cosmic::windowing_system());
    match server {
        DisplayServer::X11 => {
            tracing::info!("Running on X11 - using EWMH _NET_WM_STATE_ABOVE for always-on-top");
        }
        DisplayServer::Wayland => {
            tracing::warn!(
                "Running on Wayland - xdotool only reaches XWayland windows \
                 and always-on-top may not be honored"
            );
        }
        DisplayServer::Other => {
            tracing::warn!("Running on an unsupported windowing system - keystrokes may not arrive");
        }
        DisplayServer::Unknown => {
            tracing::debug!("Windowing system not yet detected");
        }
    }
    server
}

/// The window level the panel asks for.
#[must_use]
pub fn window_level() -> window::Level {
    window::Level::AlwaysOnTop
}

/// Shows the panel and puts it back above other windows.
pub fn raise<T: Send + 'static>(id: window::Id) -> Task<T> {
    Task::batch([
        window::set_mode(id, window::Mode::Windowed),
        window::set_level(id, window_level()),
    ])
}

/// Hides the panel, e.g. while the user picks a window.
pub fn hide<T: Send + 'static>(id: window::Id) -> Task<T> {
    window::set_mode(id, window::Mode::Hidden)
}
