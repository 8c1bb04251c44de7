// SPDX-License-Identifier: GPL-3.0-only

//! Title strip rendering.
//!
//! The strip runs along the bottom edge of the panel and stays visible while
//! the panel is minimized. Layout, left to right:
//!
//! ```text
//! [ status label ........ (drag area) ][Select Window][☀/🌙][-][X][◢]
//! ```
//!
//! The grip is only shown while the keyboard grid is visible.

use cosmic::iced::mouse;
use cosmic::iced::widget::mouse_area as hover_area;
use cosmic::iced::{Alignment, Background, Color, Length, Padding};
use cosmic::widget::{self, container, mouse_area, row};
use cosmic::Element;

use crate::app_settings::{RESIZE_GRIP_SIZE, TITLE_BAR_HEIGHT, TITLE_FONT_SIZE};
use crate::renderer::message::{Hovered, RendererMessage};
use crate::renderer::theme::{status_color, Palette};

/// Glyph drawn on the resize grip.
const GRIP_GLYPH: &str = "◢";

/// Captions of the title strip controls, already localized.
#[derive(Debug, Clone)]
pub struct TitleCaptions {
    pub status: String,
    pub select_window: String,
    pub toggle_theme: String,
    pub minimize: String,
    pub close: String,
}

/// Renders the title strip.
///
/// # Arguments
///
/// * `captions` - Localized label texts
/// * `palette` - Active color palette
/// * `has_target` - Whether a target window is set (status color)
/// * `minimized` - Whether the panel is minimized (hides the grip)
/// * `close_hovered` - Whether the pointer is over the close control
pub fn render_title_bar<'a>(
    captions: TitleCaptions,
    palette: &Palette,
    has_target: bool,
    minimized: bool,
    close_hovered: bool,
) -> Element<'a, RendererMessage> {
    let status = widget::text(captions.status)
        .size(TITLE_FONT_SIZE)
        .width(Length::Fill);

    let status_style = filled(palette.title_background, status_color(palette, has_target));
    let drag_area = mouse_area(
        container(status)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::from([0, 6]))
            .align_y(Alignment::Center)
            .class(cosmic::style::Container::custom(status_style)),
    )
    .on_press(RendererMessage::DragStart)
    .on_double_click(RendererMessage::ResetSize)
    .interaction(mouse::Interaction::Grab);

    let close_background = if close_hovered {
        palette.close_hover
    } else {
        palette.title_background
    };
    let close = hover_area(caption(captions.close, close_background, palette.title_foreground))
        .on_press(RendererMessage::Close)
        .on_enter(RendererMessage::HoverEnter(Hovered::Close))
        .on_exit(RendererMessage::HoverExit(Hovered::Close))
        .interaction(mouse::Interaction::Pointer);

    let mut strip = row::row()
        .push(drag_area)
        .push(caption_button(
            captions.select_window,
            RendererMessage::SelectWindow,
            palette,
        ))
        .push(caption_button(
            captions.toggle_theme,
            RendererMessage::ToggleTheme,
            palette,
        ))
        .push(caption_button(
            captions.minimize,
            RendererMessage::ToggleMinimize,
            palette,
        ))
        .push(close)
        .spacing(1)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT));

    if !minimized {
        strip = strip.push(render_grip(palette));
    }

    container(strip)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .class(cosmic::style::Container::custom(filled(palette.title_background, palette.title_foreground)))
        .into()
}

/// Renders the bottom-right resize grip.
pub fn render_grip<'a>(palette: &Palette) -> Element<'a, RendererMessage> {
    let grip = container(widget::text(GRIP_GLYPH).size(TITLE_FONT_SIZE))
        .width(Length::Fixed(RESIZE_GRIP_SIZE))
        .height(Length::Fixed(RESIZE_GRIP_SIZE))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(cosmic::style::Container::custom(filled(palette.active_background, palette.foreground)));

    // Keep the grip in the bottom-right corner of the strip
    let corner = container(
        mouse_area(grip)
            .on_press(RendererMessage::ResizeStart)
            .interaction(mouse::Interaction::ResizingDiagonallyDown),
    )
    .height(Length::Fill)
    .align_y(Alignment::End);

    corner.into()
}

fn caption_button<'a>(
    label: String,
    message: RendererMessage,
    palette: &Palette,
) -> Element<'a, RendererMessage> {
    mouse_area(caption(label, palette.title_background, palette.title_foreground))
        .on_press(message)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn caption<'a>(label: String, background: Color, foreground: Color) -> Element<'a, RendererMessage> {
    container(widget::text(label).size(TITLE_FONT_SIZE))
        .height(Length::Fill)
        .padding(Padding::from([0, 8]))
        .align_y(Alignment::Center)
        .class(cosmic::style::Container::custom(filled(background, foreground)))
        .into()
}

fn filled(background: Color, foreground: Color) -> impl Fn(&cosmic::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(foreground),
        ..Default::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::theme::{palette, ThemeName};

    fn captions() -> TitleCaptions {
        TitleCaptions {
            status: "Target: xterm".to_string(),
            select_window: "Select Window".to_string(),
            toggle_theme: "☀/🌙".to_string(),
            minimize: "-".to_string(),
            close: "X".to_string(),
        }
    }

    #[test]
    fn test_title_bar_renders_in_all_states() {
        for theme in [ThemeName::Dark, ThemeName::Light] {
            for (has_target, minimized, hovered) in
                [(false, false, false), (true, true, true), (true, false, true)]
            {
                let _element: Element<'_, RendererMessage> =
                    render_title_bar(captions(), &palette(theme), has_target, minimized, hovered);
            }
        }
    }
}
