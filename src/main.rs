// SPDX-License-Identifier: GPL-3.0-only

//! Floatboard Main Application
//!
//! Entry point of the floating on-screen keyboard. Checks that the injection
//! tool is installed, then opens the always-on-top keyboard panel.

use cosmic::cosmic_config::{self, CosmicConfigEntry};
use floatboard::config::Config;
use floatboard::input::{locate_tool, XdotoolBackend};
use floatboard::{app, app_settings, fl, i18n};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("floatboard=info".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Load configuration
    let config = cosmic_config::Config::new(app_settings::APP_ID, Config::VERSION)
        .map(|context| match Config::get_entry(&context) {
            Ok(config) => config,
            Err((errors, config)) => {
                for why in errors {
                    tracing::warn!("Error loading config: {:?}", why);
                }
                config
            }
        })
        .unwrap_or_default();

    // Without the injection tool there is nothing useful to show
    let Some(tool) = locate_tool(&config.tool) else {
        eprintln!("{}", fl!("xdotool-required", tool = config.tool.clone()));
        return Ok(());
    };

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        // The grip enforces the full minimum; the window itself must be able
        // to shrink to the title strip when minimized
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::TITLE_BAR_HEIGHT),
        )
        // Use client-side decorations (no window manager decorations)
        .client_decorations(true)
        .exit_on_close(true);

    let backend = XdotoolBackend::new(tool);
    tracing::info!("Using injection tool {}", backend.program().display());

    let flags = app::Flags { backend, config };

    // Starts the application's event loop with the backend and config as flags.
    cosmic::app::run::<app::AppModel>(settings, flags)
}
