// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.floatboard.Floatboard";

/// Title of the keyboard panel window.
///
/// Also used to recognise the panel itself when adopting the focused window
/// at startup, so it must stay stable.
pub const WINDOW_TITLE: &str = "On-Screen Keyboard";

/// Default injection tool looked up on `PATH`.
pub const DEFAULT_TOOL: &str = "xdotool";

/// Default window width in pixels. Also the design width for font scaling.
pub const DEFAULT_WIDTH: f32 = 920.0;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 250.0;

/// Default horizontal screen position of the panel.
pub const DEFAULT_X: f32 = 100.0;

/// Default vertical screen position of the panel.
pub const DEFAULT_Y: f32 = 500.0;

/// Minimum window width reachable by the resize grip.
pub const MIN_WIDTH: f32 = 500.0;

/// Minimum window height reachable by the resize grip.
pub const MIN_HEIGHT: f32 = 150.0;

/// Height of the title strip, and of the whole panel while minimized.
pub const TITLE_BAR_HEIGHT: f32 = 25.0;

/// Edge length of the square resize grip.
pub const RESIZE_GRIP_SIZE: f32 = 15.0;

/// Maximum number of characters of a target title shown in the status label.
pub const TARGET_TITLE_MAX_CHARS: usize = 20;

/// Font size of title strip captions.
pub const TITLE_FONT_SIZE: f32 = 10.0;
