//! Input model: tools, modifier keys, mouse buttons, and the gesture
//! state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a
//! pointer event. `GestureState` is the active gesture being tracked
//! between pointer-down and pointer-up, carrying the context needed to
//! compute incremental deltas. The engine guarantees each gesture is
//! bracketed by exactly one transaction begin/end pair.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::path_edit::HandleSide;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw a rectangle.
    Rect,
    /// Draw an ellipse.
    Ellipse,
    /// Edit path points and handles.
    PathEdit,
}

impl Tool {
    /// Whether this tool draws a new shape by dragging.
    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(self, Self::Rect | Self::Ellipse)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, by host-reported name (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Internal state for the gesture state machine.
///
/// Each active variant carries the context needed to compute deltas and
/// emit final actions on pointer-up.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging the canvas itself; inertia samples accumulate.
    Panning {
        /// Viewport position of the previous pointer event.
        last_viewport: Point,
    },
    /// Moving one or more selected shapes. The transaction opens on the
    /// first actual move, so a click-release without motion never emits
    /// an empty undo step.
    MovingShapes {
        /// Canvas position of the previous pointer event.
        last_canvas: Point,
    },
    /// Sizing a newly created provisional shape from its anchor corner.
    DrawingShape {
        /// Store index of the provisional shape.
        index: usize,
        /// Canvas position where the drag started.
        anchor_canvas: Point,
    },
    /// Dragging a path anchor point in edit mode.
    DraggingPoint {
        /// Point index within the active path.
        point: usize,
    },
    /// Dragging a bezier handle in edit mode.
    DraggingHandle {
        /// Point index within the active path.
        point: usize,
        /// Which handle of the point.
        side: HandleSide,
    },
}
