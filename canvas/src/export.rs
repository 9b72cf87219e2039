//! PNG export of the raster surface.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::surface::RasterSurface;

/// MIME type of the exported image.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Error returned by [`encode_png`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Encode the surface as an 8-bit RGBA PNG.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the encoder rejects the header or data.
pub fn encode_png(surface: &RasterSurface) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, surface.width(), surface.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(surface.pixels())?;
    writer.finish()?;
    Ok(out)
}
