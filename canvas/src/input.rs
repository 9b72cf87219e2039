//! Input model: pointer payloads and the drawing state machine.
//!
//! The host translates raw DOM events into [`PointerInput`] values carrying
//! client-space coordinates. [`InputState`] tracks whether a stroke is in
//! progress; it flips to `Drawing` on pointer-down and back to `Idle` on
//! pointer-up, pointer-leave, or touch-end.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};

/// A pointer event payload in client (viewport) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse event; `client` is `(clientX, clientY)`.
    Mouse { client: Point },
    /// Touch event; `touches` lists the active touch points in order.
    Touch { touches: Vec<Point> },
}

impl PointerInput {
    /// Convenience constructor for a mouse event.
    #[must_use]
    pub fn mouse(x: f64, y: f64) -> Self {
        Self::Mouse { client: Point::new(x, y) }
    }

    /// Convenience constructor for a single-finger touch event.
    #[must_use]
    pub fn touch(x: f64, y: f64) -> Self {
        Self::Touch { touches: vec![Point::new(x, y)] }
    }

    /// The client-space point this event refers to.
    ///
    /// Mouse events always have one. Touch events use the first active touch
    /// and yield `None` when the list is empty.
    #[must_use]
    pub fn client_point(&self) -> Option<Point> {
        match self {
            Self::Mouse { client } => Some(*client),
            Self::Touch { touches } => touches.first().copied(),
        }
    }

    /// Canvas-local point for this event given the canvas bounding box.
    #[must_use]
    pub fn local_point(&self, bounds: &Rect) -> Option<Point> {
        self.client_point().map(|p| bounds.to_local(p))
    }
}

/// Why a stroke ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeEnd {
    /// Mouse button released over the canvas.
    PointerUp,
    /// Pointer left the canvas element.
    PointerLeave,
    /// Last touch lifted.
    TouchEnd,
}

/// Drawing state machine. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No stroke in progress; movement is ignored.
    #[default]
    Idle,
    /// A stroke is in progress; movement extends it.
    Drawing,
}

impl InputState {
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing)
    }
}
