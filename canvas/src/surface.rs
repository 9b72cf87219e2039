//! Raster surface: the fixed-size pixel buffer strokes are painted into.
//!
//! The buffer is RGBA8, row-major, and always fully opaque. Strokes are
//! committed to the buffer as soon as they are extended; there is no path
//! list or stroke history, so the buffer itself is the only state.
//!
//! Rasterization is a capsule fill: a pixel is inked when its center lies
//! within half the stroke width of the segment. Consecutive segments share an
//! endpoint disc, which gives round caps and round joins for free.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::consts::{BACKGROUND, BYTES_PER_PIXEL, INK, STROKE_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::geom::Point;

/// An RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

/// How segment ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Semicircular end centered on the endpoint.
    #[default]
    Round,
}

/// Stroke parameters applied to every path on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels.
    pub width: f64,
    /// End cap shape.
    pub cap: LineCap,
    /// Ink color.
    pub color: Rgba,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: STROKE_WIDTH, cap: LineCap::Round, color: INK }
    }
}

/// Fixed-size drawing buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    background: Rgba,
    style: StrokeStyle,
    pixels: Vec<u8>,
    /// Current point of the open path, if a stroke has begun.
    cursor: Option<Point>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    /// Create and initialize a 280×280 surface: black background, white
    /// 15px round-capped ink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    /// Create and initialize a surface with arbitrary dimensions and the
    /// default style.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let mut surface = Self {
            width,
            height,
            background: BACKGROUND,
            style: StrokeStyle::default(),
            pixels: vec![0; len],
            cursor: None,
        };
        surface.initialize();
        surface
    }

    /// Paint the whole buffer with the background and drop any open path.
    ///
    /// Stroke style is fixed at construction; this only restores pixels.
    fn initialize(&mut self) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&self.background.0);
        }
        self.cursor = None;
    }

    // --- Stroke operations ---

    /// Start a new path at `at`. Nothing is painted until the path is
    /// extended.
    pub fn begin_stroke(&mut self, at: Point) {
        self.cursor = Some(at);
    }

    /// Paint a segment from the current point to `to` and advance the
    /// current point. No-op when no stroke has begun.
    pub fn extend_stroke(&mut self, to: Point) {
        let Some(from) = self.cursor else {
            return;
        };
        self.fill_capsule(from, to);
        self.cursor = Some(to);
    }

    /// Repaint the full background, discarding every visible stroke.
    pub fn reset(&mut self) {
        self.initialize();
    }

    // --- Queries ---

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    #[must_use]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
        Some(Rgba(rgba))
    }

    /// Whether every pixel still holds the background color.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .all(|px| px == self.background.0)
    }

    // --- Rasterization ---

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Ink every pixel whose center is within `width / 2` of segment `a..b`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fill_capsule(&mut self, a: Point, b: Point) {
        let radius = self.style.width * 0.5;
        let min_x = (a.x.min(b.x) - radius).floor().max(0.0);
        let min_y = (a.y.min(b.y) - radius).floor().max(0.0);
        let max_x = (a.x.max(b.x) + radius).ceil().min(f64::from(self.width));
        let max_y = (a.y.max(b.y) + radius).ceil().min(f64::from(self.height));
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let color = self.style.color.0;
        let r2 = radius * radius;
        for y in (min_y as u32)..(max_y as u32) {
            for x in (min_x as u32)..(max_x as u32) {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if dist_sq_to_segment(center, a, b) <= r2 {
                    let i = self.index(x, y);
                    self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&color);
                }
            }
        }
    }
}

/// Squared distance from `p` to the closed segment `a..b`.
fn dist_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = a.x + t * dx - p.x;
    let cy = a.y + t * dy - p.y;
    cx * cx + cy * cy
}
