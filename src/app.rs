// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use crate::app_settings;
use crate::config::Config;
use crate::fl;
use crate::input::{InputBackend, XdotoolBackend};
use crate::keyboard::KeyboardController;
use crate::overlay::{self, DisplayServer};
use crate::renderer::{palette, render_panel, Hovered, PanelView, RendererMessage, TitleCaptions};
use crate::state::{Gesture, WindowState};
use crate::target::{self, TargetWindow};
use cosmic::iced::{event, mouse, window, Event, Point, Size, Subscription};
use cosmic::prelude::*;

/// Time given to the window manager to unmap the panel before the picker
/// grabs the pointer.
const PICKER_DELAY: Duration = Duration::from_millis(150);

/// Data handed to the application at startup.
pub struct Flags<B = XdotoolBackend> {
    /// Backend used for injection and window queries.
    pub backend: B,
    /// Configuration loaded before the window was created.
    pub config: Config,
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel<B = XdotoolBackend> {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// User configuration, read-only.
    config: Config,
    /// Modifier state, target window, theme and dispatch.
    keyboard: KeyboardController<B>,
    /// Panel position, size and gesture in progress.
    window_state: WindowState,
    /// Last pointer position inside the panel.
    cursor: Point,
    /// Element under the pointer that is drawn highlighted.
    hovered: Option<Hovered>,
    /// Display server detected at startup.
    display: DisplayServer,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A widget of the panel was used.
    Renderer(RendererMessage),
    /// The panel title is set; adopt the focused window as the target.
    AdoptFocusedWindow,
    /// The window picker finished.
    TargetPicked(Option<TargetWindow>),
    /// Pointer moved inside the panel.
    CursorMoved(Point),
    /// Left mouse button released.
    PointerReleased,
    /// The window system moved the panel.
    WindowMoved(Point),
    /// The window system resized the panel.
    WindowResized(Size),
    /// Configuration has been updated.
    UpdateConfig(Config),
}

/// Create a COSMIC application from the app model
impl<B> cosmic::Application for AppModel<B>
where
    B: InputBackend + Clone + Send + Sync + 'static,
{
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = Flags<B>;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        mut core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Set chromeless appearance - the panel draws its own title strip
        core.window.show_headerbar = false;

        let display = overlay::detect();

        let mut app = AppModel::new(core, flags);
        app.display = display;

        // The panel is recognised by its title, so adopting whatever had
        // focus at launch has to wait until the title is set
        let adopt = Task::done(cosmic::Action::App(Message::AdoptFocusedWindow));

        let task = match app.core.main_window_id() {
            Some(id) => Task::batch([
                app.set_window_title(app_settings::WINDOW_TITLE.to_string(), id)
                    .chain(adopt),
                window::move_to(id, app.window_state.position()),
                overlay::raise(id),
            ]),
            None => adopt,
        };

        (app, task)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let view = PanelView {
            layout: self.keyboard.layout(),
            modifiers: self.keyboard.modifiers(),
            palette: palette(self.keyboard.theme()),
            window: &self.window_state,
            has_target: self.keyboard.target().is_some(),
            hovered: self.hovered,
        };

        render_panel(&view, self.captions()).map(Message::Renderer)
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for configuration changes
        let config_subscription = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Pointer and window events drive the drag and resize gestures
        let events = event::listen_with(|event, _, _id| match event {
            Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved(position)),
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            _ => None,
        });

        Subscription::batch([config_subscription, events])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::Renderer(message) => return self.update_renderer(message),
            Message::AdoptFocusedWindow => {
                self.keyboard.adopt_focused_window(app_settings::WINDOW_TITLE);
            }
            Message::TargetPicked(picked) => {
                self.keyboard.select_target(picked);
                return self.raise();
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                return self.continue_gesture();
            }
            Message::PointerReleased => {
                self.window_state.end_gesture();
            }
            Message::WindowMoved(position) => {
                self.window_state.sync_position(position);
            }
            Message::WindowResized(size) => {
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                self.window_state.sync_size(size);
            }
            Message::UpdateConfig(config) => {
                if config.tool != self.config.tool {
                    tracing::info!("Injection tool changed to {}; restart to use it", config.tool);
                }
                self.keyboard.set_theme(config.theme);
                self.config = config;
            }
        }

        Task::none()
    }
}

impl<B> AppModel<B>
where
    B: InputBackend + Clone + Send + Sync + 'static,
{
    fn new(core: cosmic::Core, flags: Flags<B>) -> Self {
        Self {
            core,
            keyboard: KeyboardController::new(flags.backend, flags.config.theme),
            config: flags.config,
            window_state: WindowState::new(),
            cursor: Point::ORIGIN,
            hovered: None,
            display: DisplayServer::Unknown,
        }
    }

    fn update_renderer(&mut self, message: RendererMessage) -> Task<cosmic::Action<Message>> {
        match message {
            RendererMessage::KeyPressed(index) => {
                let outcome = self.keyboard.press(index);
                // Activating the target may have covered the panel
                if outcome.reached_backend() {
                    return self.raise();
                }
            }
            RendererMessage::HoverEnter(hovered) => {
                self.hovered = Some(hovered);
            }
            RendererMessage::HoverExit(hovered) => {
                if self.hovered == Some(hovered) {
                    self.hovered = None;
                }
            }
            RendererMessage::SelectWindow => return self.select_window(),
            RendererMessage::ToggleTheme => {
                self.keyboard.toggle_theme();
            }
            RendererMessage::ToggleMinimize => {
                let (position, size) = self.window_state.toggle_minimize();
                return self.apply_geometry(Some(position), Some(size));
            }
            RendererMessage::Close => {
                tracing::info!("Closing keyboard");
                return cosmic::iced::exit();
            }
            RendererMessage::DragStart => {
                self.window_state.begin_drag(self.cursor);
            }
            RendererMessage::ResetSize => {
                if let Some(size) = self.window_state.reset_size() {
                    tracing::debug!("Size reset to {}x{}", size.width, size.height);
                    return self.apply_geometry(None, Some(size));
                }
            }
            RendererMessage::ResizeStart => {
                let pointer = self.screen_cursor();
                self.window_state.begin_resize(pointer);
            }
        }

        Task::none()
    }

    /// Hides the panel, runs the picker off the UI thread and reports back.
    fn select_window(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.display.supports_injection() {
            tracing::warn!("Window picking may not see native Wayland windows");
        }

        let backend = self.keyboard.backend().clone();
        let pick = Task::perform(
            async move {
                tokio::time::sleep(PICKER_DELAY).await;
                match tokio::task::spawn_blocking(move || target::pick_target(&backend)).await {
                    Ok(picked) => picked,
                    Err(e) => {
                        tracing::error!("Window picker task failed: {}", e);
                        None
                    }
                }
            },
            |picked| cosmic::Action::App(Message::TargetPicked(picked)),
        );

        match self.core.main_window_id() {
            Some(id) => overlay::hide(id).chain(pick),
            None => pick,
        }
    }

    /// Applies drag or resize progress for the current pointer position.
    fn continue_gesture(&mut self) -> Task<cosmic::Action<Message>> {
        let pointer = self.screen_cursor();
        match self.window_state.gesture() {
            Some(Gesture::Drag { .. }) => {
                let position = self.window_state.drag_to(pointer);
                self.apply_geometry(position, None)
            }
            Some(Gesture::Resize { .. }) => {
                let size = self.window_state.resize_to(pointer);
                self.apply_geometry(None, size)
            }
            None => Task::none(),
        }
    }

    /// Pointer position in screen coordinates.
    fn screen_cursor(&self) -> Point {
        self.window_state.to_screen(self.cursor)
    }

    fn apply_geometry(
        &self,
        position: Option<Point>,
        size: Option<Size>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(id) = self.core.main_window_id() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        if let Some(position) = position {
            tasks.push(window::move_to(id, position));
        }
        if let Some(size) = size {
            tasks.push(window::resize(id, size));
        }
        Task::batch(tasks)
    }

    fn raise(&self) -> Task<cosmic::Action<Message>> {
        match self.core.main_window_id() {
            Some(id) => overlay::raise(id),
            None => Task::none(),
        }
    }

    /// Localized captions for the title strip.
    fn captions(&self) -> TitleCaptions {
        let status = match self.keyboard.target() {
            Some(target) => {
                let name = target
                    .title
                    .clone()
                    .unwrap_or_else(|| fl!("unknown-window"));
                fl!("target", name = name)
            }
            None => fl!("no-target"),
        };

        TitleCaptions {
            status,
            select_window: fl!("select-window"),
            toggle_theme: fl!("toggle-theme"),
            minimize: if self.window_state.is_minimized() {
                fl!("restore")
            } else {
                fl!("minimize")
            },
            close: fl!("close"),
        }
    }

    /// Get the keyboard controller (for testing).
    #[cfg(test)]
    pub fn keyboard(&self) -> &KeyboardController<B> {
        &self.keyboard
    }

    /// Get the current window state (for testing).
    #[cfg(test)]
    pub fn window_state(&self) -> &WindowState {
        &self.window_state
    }

    /// Check if headerbar is hidden (for testing).
    #[cfg(test)]
    pub fn is_headerbar_hidden(&self) -> bool {
        !self.core.window.show_headerbar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::backend::testing::{Call, RecordingBackend, Script};
    use crate::input::WindowId;
    use crate::renderer::ThemeName;
    use cosmic::Application;

    fn app_with(script: Script) -> AppModel<RecordingBackend> {
        AppModel::new(
            cosmic::Core::default(),
            Flags {
                backend: RecordingBackend::with_script(script),
                config: Config::default(),
            },
        )
    }

    fn key(app: &AppModel<RecordingBackend>, keysym: &str) -> Message {
        let index = app
            .keyboard()
            .layout()
            .keys()
            .iter()
            .position(|key| key.keysym == keysym)
            .unwrap();
        Message::Renderer(RendererMessage::KeyPressed(index))
    }

    /// Test: Picked window becomes the target; an empty pick keeps it
    #[test]
    fn test_target_picked() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::TargetPicked(Some(TargetWindow::new(
            WindowId::new("12"),
            "gedit",
        ))));
        let _ = app.update(Message::TargetPicked(None));

        assert_eq!(
            app.keyboard().target().map(|t| t.id.as_str()),
            Some("12")
        );
        assert_eq!(app.captions().status, fl!("target", name = "gedit"));
    }

    /// Test: Key presses reach the backend once a target is set
    #[test]
    fn test_key_press_dispatches() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::TargetPicked(Some(TargetWindow::new(
            WindowId::new("12"),
            "",
        ))));
        let _ = app.update(key(&app, "b"));

        assert_eq!(
            app.keyboard().backend().calls(),
            vec![Call::Activate("12".to_string()), Call::Type("b".to_string())]
        );
        assert_eq!(
            app.captions().status,
            fl!("target", name = fl!("unknown-window"))
        );
    }

    /// Test: Drag follows the pointer and stops on release
    #[test]
    fn test_drag_gesture() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::CursorMoved(Point::new(40.0, 240.0)));
        let _ = app.update(Message::Renderer(RendererMessage::DragStart));
        let _ = app.update(Message::CursorMoved(Point::new(60.0, 250.0)));

        assert_eq!(app.window_state().position(), Point::new(120.0, 510.0));

        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::CursorMoved(Point::new(0.0, 0.0)));
        assert_eq!(app.window_state().position(), Point::new(120.0, 510.0));
    }

    /// Test: Pointer events that arrive before the window system reports the
    /// move do not push the panel away from the pointer
    #[test]
    fn test_drag_with_pending_moves() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::CursorMoved(Point::new(40.0, 240.0)));
        let _ = app.update(Message::Renderer(RendererMessage::DragStart));

        let _ = app.update(Message::CursorMoved(Point::new(50.0, 240.0)));
        assert_eq!(app.window_state().position(), Point::new(110.0, 500.0));

        let _ = app.update(Message::CursorMoved(Point::new(60.0, 240.0)));
        assert_eq!(app.window_state().position(), Point::new(120.0, 500.0));

        let _ = app.update(Message::WindowMoved(Point::new(110.0, 500.0)));
        let _ = app.update(Message::CursorMoved(Point::new(50.0, 240.0)));
        assert_eq!(app.window_state().position(), Point::new(120.0, 500.0));

        let _ = app.update(Message::WindowMoved(Point::new(120.0, 500.0)));
        let _ = app.update(Message::PointerReleased);
        assert_eq!(app.window_state().origin(), Point::new(120.0, 500.0));
    }

    /// Test: Resize grip clamps to the minimum size
    #[test]
    fn test_resize_gesture() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::CursorMoved(Point::new(910.0, 240.0)));
        let _ = app.update(Message::Renderer(RendererMessage::ResizeStart));
        let _ = app.update(Message::CursorMoved(Point::new(450.0, 100.0)));

        assert_eq!(app.window_state().size(), Size::new(500.0, 150.0));
        assert_eq!(app.window_state().scaled_font_size(12), 6);
    }

    /// Test: Minimize swaps the caption and restore brings the height back
    #[test]
    fn test_minimize_restore() {
        let mut app = app_with(Script::default());
        let minimize = Message::Renderer(RendererMessage::ToggleMinimize);

        let _ = app.update(minimize.clone());
        assert!(app.window_state().is_minimized());
        assert_eq!(app.captions().minimize, fl!("restore"));

        let _ = app.update(minimize);
        assert_eq!(app.window_state().size(), Size::new(920.0, 250.0));
        assert_eq!(app.captions().minimize, fl!("minimize"));
    }

    /// Test: Hover only clears for the element that was left
    #[test]
    fn test_hover_tracking() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::Renderer(RendererMessage::HoverEnter(Hovered::Key(1))));
        let _ = app.update(Message::Renderer(RendererMessage::HoverEnter(Hovered::Close)));
        let _ = app.update(Message::Renderer(RendererMessage::HoverExit(Hovered::Key(1))));
        assert_eq!(app.hovered, Some(Hovered::Close));

        let _ = app.update(Message::Renderer(RendererMessage::HoverExit(Hovered::Close)));
        assert_eq!(app.hovered, None);
    }

    /// Test: Theme follows both the button and config changes
    #[test]
    fn test_theme_updates() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::Renderer(RendererMessage::ToggleTheme));
        assert_eq!(app.keyboard().theme(), ThemeName::Light);

        let _ = app.update(Message::UpdateConfig(Config {
            theme: ThemeName::Dark,
            ..Config::default()
        }));
        assert_eq!(app.keyboard().theme(), ThemeName::Dark);
    }

    /// Test: Stale window reports do not disturb a minimized panel
    #[test]
    fn test_window_events_sync_geometry() {
        let mut app = app_with(Script::default());
        let _ = app.update(Message::WindowMoved(Point::new(10.0, 20.0)));
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 300.0)));
        assert_eq!(app.window_state().position(), Point::new(10.0, 20.0));
        assert_eq!(app.window_state().size(), Size::new(1000.0, 300.0));

        let _ = app.update(Message::Renderer(RendererMessage::ToggleMinimize));
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 300.0)));
        assert_eq!(app.window_state().size().height, app_settings::TITLE_BAR_HEIGHT);
    }

    /// Test: The header bar is replaced by the title strip
    #[test]
    fn test_headerbar_hidden_by_init() {
        let (app, _task) = AppModel::<RecordingBackend>::init(
            cosmic::Core::default(),
            Flags {
                backend: RecordingBackend::new(),
                config: Config::default(),
            },
        );
        assert!(app.is_headerbar_hidden());
        assert!(app.keyboard().target().is_none());
    }

    /// Test: The focused window is only queried once adoption is requested,
    /// and the panel itself is never adopted
    #[test]
    fn test_focused_window_adopted_after_init() {
        let script = Script {
            active: Some("51".to_string()),
            own_windows: vec!["51".to_string()],
            ..Script::default()
        };
        let (mut app, _task) = AppModel::<RecordingBackend>::init(
            cosmic::Core::default(),
            Flags {
                backend: RecordingBackend::with_script(script),
                config: Config::default(),
            },
        );
        assert!(app.keyboard().backend().calls().is_empty());

        let _ = app.update(Message::AdoptFocusedWindow);
        assert_eq!(
            app.keyboard().backend().calls()[0],
            Call::Search(app_settings::WINDOW_TITLE.to_string())
        );
        assert!(app.keyboard().target().is_none());
    }
}
