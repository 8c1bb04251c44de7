// SPDX-License-Identifier: GPL-3.0-only

//! Renderer message types for key and title strip interactions.

/// Element of the panel under the pointer that changes color on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hovered {
    /// Key at the given layout index.
    Key(usize),
    /// The close control.
    Close,
}

/// Messages emitted by the panel widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererMessage {
    /// The key at the given layout index was clicked.
    KeyPressed(usize),

    /// Pointer entered a hoverable element.
    HoverEnter(Hovered),

    /// Pointer left a hoverable element.
    HoverExit(Hovered),

    /// "Select Window" was clicked.
    SelectWindow,

    /// The theme button was clicked.
    ToggleTheme,

    /// The minimize/restore button was clicked.
    ToggleMinimize,

    /// The close button was clicked.
    Close,

    /// Pointer pressed on the title strip.
    DragStart,

    /// Title strip was double-clicked.
    ResetSize,

    /// Pointer pressed on the resize grip.
    ResizeStart,
}
