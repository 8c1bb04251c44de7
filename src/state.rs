// SPDX-License-Identifier: GPL-3.0-only

//! Panel geometry and pointer gestures.
//!
//! [`WindowState`] keeps the screen position and size of the panel and does
//! the arithmetic behind dragging, resizing, minimizing and resetting it.
//! The application turns the returned geometry into window tasks.
//!
//! Pointer positions passed in are screen coordinates, except for the drag
//! anchor which is the pointer position inside the panel.
//!
//! The requested position and the origin last reported by the window system
//! are kept apart. Pointer events are relative to the window as it actually
//! is, which lags behind the moves requested during a drag.

use cosmic::iced::{Point, Size};

use crate::app_settings::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y, MIN_HEIGHT, MIN_WIDTH, TITLE_BAR_HEIGHT,
};

/// A pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Moving the panel. `offset` is where the pointer grabbed it.
    Drag { offset: Point },
    /// Resizing from the bottom-right grip.
    Resize { origin: Point, start: Size },
}

/// Position, size and minimize state of the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    position: Point,
    /// Top-left corner last reported by the window system.
    origin: Point,
    size: Size,
    minimized: bool,
    /// Height to restore when leaving the minimized state.
    restored_height: f32,
    gesture: Option<Gesture>,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            position: Point::new(DEFAULT_X, DEFAULT_Y),
            origin: Point::new(DEFAULT_X, DEFAULT_Y),
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            minimized: false,
            restored_height: DEFAULT_HEIGHT,
            gesture: None,
        }
    }
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Converts a pointer position inside the panel to screen coordinates.
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(self.origin.x + local.x, self.origin.y + local.y)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Starts moving the panel with the pointer at `offset` inside it.
    pub fn begin_drag(&mut self, offset: Point) {
        tracing::debug!("Drag started at offset {:?}", offset);
        self.gesture = Some(Gesture::Drag { offset });
    }

    /// Moves the panel so the pointer keeps its grab offset.
    ///
    /// Returns the new position, or `None` if no drag is in progress.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Point> {
        let Some(Gesture::Drag { offset }) = self.gesture else {
            return None;
        };
        self.position = Point::new(pointer.x - offset.x, pointer.y - offset.y);
        Some(self.position)
    }

    /// Starts resizing from the grip. Ignored while minimized.
    ///
    /// Returns whether a resize started.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        if self.minimized {
            return false;
        }
        tracing::debug!("Resize started at {:?} from {:?}", pointer, self.size);
        self.gesture = Some(Gesture::Resize {
            origin: pointer,
            start: self.size,
        });
        true
    }

    /// Resizes by the pointer's travel since the resize started, never
    /// going below the minimum size.
    ///
    /// Returns the new size, or `None` if no resize is in progress.
    pub fn resize_to(&mut self, pointer: Point) -> Option<Size> {
        let Some(Gesture::Resize { origin, start }) = self.gesture else {
            return None;
        };
        if self.minimized {
            return None;
        }
        self.size = Size::new(
            (start.width + pointer.x - origin.x).max(MIN_WIDTH),
            (start.height + pointer.y - origin.y).max(MIN_HEIGHT),
        );
        Some(self.size)
    }

    /// Finishes the current gesture, if any.
    pub fn end_gesture(&mut self) -> Option<Gesture> {
        let gesture = self.gesture.take();
        if gesture.is_some() {
            tracing::debug!("Gesture ended at {:?} {:?}", self.position, self.size);
        }
        gesture
    }

    /// Minimizes to the title strip or restores the full panel.
    ///
    /// The bottom edge stays where it is in both directions. Returns the
    /// new position and size.
    pub fn toggle_minimize(&mut self) -> (Point, Size) {
        if self.minimized {
            let shift = self.restored_height - TITLE_BAR_HEIGHT;
            self.position.y -= shift;
            self.size.height = self.restored_height;
            self.minimized = false;
        } else {
            self.restored_height = self.size.height;
            self.position.y += self.size.height - TITLE_BAR_HEIGHT;
            self.size.height = TITLE_BAR_HEIGHT;
            self.minimized = true;
            // A resize cannot outlive the grip it started on
            if matches!(self.gesture, Some(Gesture::Resize { .. })) {
                self.gesture = None;
            }
        }
        tracing::debug!("Minimized: {}", self.minimized);
        (self.position, self.size)
    }

    /// Restores the default size, keeping the top-left corner.
    ///
    /// Returns the new size, or `None` while minimized.
    pub fn reset_size(&mut self) -> Option<Size> {
        if self.minimized {
            return None;
        }
        self.size = Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        Some(self.size)
    }

    /// Records a position reported by the window system.
    ///
    /// The origin always follows the report. During a drag the requested
    /// position is left alone, since reports trail the requested moves.
    pub fn sync_position(&mut self, position: Point) {
        self.origin = position;
        if !matches!(self.gesture, Some(Gesture::Drag { .. })) {
            self.position = position;
        }
    }

    /// Records a size reported by the window system.
    ///
    /// Reports arriving during a gesture or while minimized are stale and
    /// ignored.
    pub fn sync_size(&mut self, size: Size) {
        if self.gesture.is_none() && !self.minimized {
            self.size = size;
        }
    }

    /// Ratio of the current width to the design width.
    pub fn font_scale(&self) -> f32 {
        self.size.width / DEFAULT_WIDTH
    }

    /// Scales a base font size to the current width, never below 1.
    pub fn scaled_font_size(&self, base: u16) -> u16 {
        let scaled = (f32::from(base) * self.font_scale()).floor();
        scaled.max(1.0) as u16
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
