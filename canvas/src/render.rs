//! Rendering: copies the raster buffer onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! The surface already holds final pixels, so drawing is a single
//! `putImageData` at the origin.

use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use crate::surface::RasterSurface;

/// Blit `surface` to `ctx` at `(0, 0)`.
///
/// # Errors
///
/// Returns `Err` if the `ImageData` constructor or `putImageData` fails.
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &RasterSurface) -> Result<(), JsValue> {
    let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(surface.pixels()), surface.width(), surface.height())?;
    ctx.put_image_data(&data, 0.0, 0.0)
}
