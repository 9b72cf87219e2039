#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in either screen (client) or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of the canvas element, in CSS pixels.
///
/// Mirrors what `getBoundingClientRect()` reports. Only the top-left corner
/// participates in coordinate mapping; the size is carried for callers that
/// want to compare rendered size against raster size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space point into canvas-local coordinates.
    ///
    /// Pure translation: no scaling is applied when the rendered size differs
    /// from the raster size.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point {
            x: client.x - self.left,
            y: client.y - self.top,
        }
    }
}
