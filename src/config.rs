// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

use crate::app_settings;
use crate::renderer::theme::ThemeName;

/// User configuration read at startup and watched for changes.
///
/// The keyboard only reads these values; interaction state such as the
/// target window or the panel position is never written back.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Palette used when the panel opens.
    pub theme: ThemeName,
    /// Injection tool, looked up on `PATH` unless it is a path.
    pub tool: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            tool: app_settings::DEFAULT_TOOL.to_string(),
        }
    }
}
