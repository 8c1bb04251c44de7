// SPDX-License-Identifier: GPL-3.0-only

//! Panel rendering: the key grid above the title strip.
//!
//! Rows share the grid height equally and keys share a row by their column
//! span, so the grid follows the window size without explicit pixel math.
//! Only the label size is computed, from the panel width.

use cosmic::iced::{Background, Length, Padding};
use cosmic::widget::{self, container};
use cosmic::Element;

use crate::input::ModifierState;
use crate::layout::Layout;
use crate::renderer::key::render_key;
use crate::renderer::message::{Hovered, RendererMessage};
use crate::renderer::theme::Palette;
use crate::renderer::title::{render_title_bar, TitleCaptions};
use crate::state::WindowState;

/// Gap between keys, and between the grid and the panel border.
const KEY_SPACING: f32 = 2.0;

/// Everything the panel view reads.
pub struct PanelView<'s> {
    pub layout: &'s Layout,
    pub modifiers: &'s ModifierState,
    pub palette: Palette,
    pub window: &'s WindowState,
    pub has_target: bool,
    pub hovered: Option<Hovered>,
}

/// Renders the key grid.
pub fn render_keyboard<'a>(view: &PanelView<'_>) -> Element<'a, RendererMessage> {
    let mut grid = widget::column::column()
        .spacing(KEY_SPACING)
        .width(Length::Fill)
        .height(Length::Fill);

    for row_index in 0..view.layout.row_count() {
        let mut row = widget::row::row()
            .spacing(KEY_SPACING)
            .width(Length::Fill)
            .height(Length::Fill);

        for (index, key) in view.layout.row(row_index) {
            row = row.push(render_key(
                index,
                key,
                view.modifiers,
                &view.palette,
                view.window.scaled_font_size(key.font_size),
                view.hovered == Some(Hovered::Key(index)),
            ));
        }

        grid = grid.push(row);
    }

    container(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::from(KEY_SPACING))
        .into()
}

/// Renders the whole panel.
///
/// While minimized only the title strip is shown.
pub fn render_panel<'a>(view: &PanelView<'_>, captions: TitleCaptions) -> Element<'a, RendererMessage> {
    let minimized = view.window.is_minimized();
    let title_bar = render_title_bar(
        captions,
        &view.palette,
        view.has_target,
        minimized,
        view.hovered == Some(Hovered::Close),
    );

    let mut content = widget::column::column()
        .width(Length::Fill)
        .height(Length::Fill);
    if !minimized {
        content = content.push(render_keyboard(view));
    }
    content = content.push(title_bar);

    let background = view.palette.background;
    let foreground = view.palette.foreground;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .class(cosmic::style::Container::custom(move |_theme| {
            container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(foreground),
                ..Default::default()
            }
        }))
        .into()
}

// ============================================================================
// Tests
// ============================================================================
