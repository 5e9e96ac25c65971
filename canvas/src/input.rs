//! Input model: modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Modifiers`, `Button`, `Key` and `WheelDelta` describe raw host events.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying the geometry captured at pointer-down so every move
//! event can be computed from the start of the gesture rather than from the
//! previous frame.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{Shape, ShapeId};
use crate::geometry::Handle;
use crate::overlay::ActiveState;

/// Modifier keys down when an event fired.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt (Option on macOS).
    pub alt: bool,
    /// Meta (Command on macOS).
    pub meta: bool,
}

/// Pointer button that triggered a down/up event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Selects, drags and pans while space is held.
    Primary,
    /// Always pans.
    Middle,
    /// Ignored by the controller.
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"z"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the space bar, reported either by value or by code.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == " " || self.0 == "Space"
    }

    /// Whether this key deletes the selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }

    /// Case-insensitive match against a single-letter key.
    #[must_use]
    pub fn is_letter(&self, letter: char) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.eq_ignore_ascii_case(&letter))
    }
}

/// Scroll delta from a wheel or trackpad.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal delta; unused by zoom.
    pub dx: f64,
    /// Vertical delta; negative zooms in.
    pub dy: f64,
}

/// Persistent UI state visible to the render surface and property editors.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
    /// Owner of property edits: the base shapes or a named state.
    pub active_state: ActiveState,
    /// Space is held; the next pointer-down on the canvas pans.
    pub pan_armed: bool,
}

/// Gesture in progress between pointer-down and pointer-up.
///
/// Each active variant carries the pointer-down context needed to compute
/// the current frame from scratch.
#[derive(Debug, Clone)]
pub enum InputState {
    /// Waiting for a pointer-down.
    Idle,
    /// The user is dragging the view.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is moving a shape and the rest of its component.
    Moving {
        /// Id of the shape under the pointer at pointer-down.
        id: ShapeId,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Full shape list at pointer-down; the move's reference frame.
        start_shapes: Vec<Shape>,
    },
    /// The user is resizing the selected shape by one of its handles.
    Resizing {
        id: ShapeId,
        /// Which handle is being dragged.
        handle: Handle,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Shape geometry at pointer-down.
        start_shape: Shape,
    },
    /// The user is rotating the selected shape by its rotate handle.
    Rotating {
        id: ShapeId,
        /// Rotation pivot: the shape's center at pointer-down.
        center: Point,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Rotation in degrees at pointer-down.
        start_rotation: f64,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the gesture edits shapes (as opposed to the view).
    #[must_use]
    pub fn edits_scene(&self) -> bool {
        matches!(self, Self::Moving { .. } | Self::Resizing { .. } | Self::Rotating { .. })
    }
}
