// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering for the keyboard grid.
//!
//! Each key is a flat colored cell spanning its share of the grid columns.
//! The label and background reflect the current modifier state.

use cosmic::iced::widget::mouse_area;
use cosmic::iced::{Alignment, Background, Length};
use cosmic::widget::{self, container};
use cosmic::Element;

use crate::input::{display_label, ModifierState};
use crate::layout::Key;
use crate::renderer::message::{Hovered, RendererMessage};
use crate::renderer::theme::{key_background_color, key_hover_color, Palette};

/// Renders a single key as an Element.
///
/// # Arguments
///
/// * `index` - Layout index of the key, sent back on click
/// * `key` - The key definition from the layout
/// * `modifiers` - Current modifier state, for label and highlight
/// * `palette` - Active color palette
/// * `font_size` - Label size already scaled to the panel width
/// * `hovered` - Whether the pointer is over the key
pub fn render_key<'a>(
    index: usize,
    key: &Key,
    modifiers: &ModifierState,
    palette: &Palette,
    font_size: u16,
    hovered: bool,
) -> Element<'a, RendererMessage> {
    let background = if hovered {
        key_hover_color(palette, key, modifiers)
    } else {
        key_background_color(palette, key, modifiers)
    };
    let foreground = palette.key_foreground;

    let label = widget::text(display_label(key, modifiers)).size(f32::from(font_size));

    let cell = container(label)
        .width(Length::FillPortion(key.span))
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(cosmic::style::Container::custom(move |_theme| {
            container::Style {
                background: Some(Background::Color(background)),
                text_color: Some(foreground),
                ..Default::default()
            }
        }));

    mouse_area(cell)
        .on_press(RendererMessage::KeyPressed(index))
        .on_enter(RendererMessage::HoverEnter(Hovered::Key(index)))
        .on_exit(RendererMessage::HoverExit(Hovered::Key(index)))
        .into()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Layout, Modifier};
    use crate::renderer::theme::{palette, ThemeName};

    /// Every key of the layout renders in every modifier state.
    #[test]
    fn test_all_keys_render() {
        let layout = Layout::qwerty();
        let theme = &palette(ThemeName::Light);
        let mut modifiers = ModifierState::new();
        modifiers.activate(Modifier::Shift);
        modifiers.activate(Modifier::CapsLock);

        for (index, key) in layout.keys().iter().enumerate() {
            let _plain: Element<'_, RendererMessage> =
                render_key(index, key, &ModifierState::new(), theme, key.font_size, false);
            let _modified: Element<'_, RendererMessage> =
                render_key(index, key, &modifiers, theme, 1, true);
        }
    }
}
