//! Shared numeric constants for the canvas crate.

use crate::surface::Rgba;

// ── Surface ─────────────────────────────────────────────────────

/// Raster width in pixels.
pub const SURFACE_WIDTH: u32 = 280;

/// Raster height in pixels.
pub const SURFACE_HEIGHT: u32 = 280;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

// ── Stroke style ────────────────────────────────────────────────

/// Stroke width in pixels. Caps are round, so each segment end is a disc of
/// half this diameter.
pub const STROKE_WIDTH: f64 = 15.0;

/// Opaque black background.
pub const BACKGROUND: Rgba = Rgba([0, 0, 0, 255]);

/// Opaque white ink.
pub const INK: Rgba = Rgba([255, 255, 255, 255]);

