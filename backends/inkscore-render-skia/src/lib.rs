//! Skia rasterizers - reference glyphs and pen traces via tiny-skia
//!
//! Both sides of a comparison are drawn here, black on an opaque white
//! pixmap the size of the drawing canvas:
//!
//! - [`SkiaGlyphRasterizer`] pulls the glyph outline with skrifa (or strokes
//!   the built-in font) and centres its measured box on the canvas
//! - [`SkiaStrokeRasterizer`] joins consecutive pen samples with fixed-width
//!   segments
//!
//! Pixmaps come back as `Rgb8` rasters; the metric collapses them to gray.

mod glyph;
mod stroke;

pub use glyph::{GlyphPlacement, Measurement, SkiaGlyphRasterizer};
pub use stroke::SkiaStrokeRasterizer;

use inkscore_core::{error::RenderError, types::CanvasSpec, PixelFormat, Raster};
use tiny_skia::{Color, Pixmap};

/// Opaque white pixmap covering the canvas
fn white_pixmap(canvas: CanvasSpec) -> Result<Pixmap, RenderError> {
    let mut pixmap =
        Pixmap::new(canvas.width, canvas.height).ok_or(RenderError::InvalidDimensions {
            width: canvas.width,
            height: canvas.height,
        })?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

/// Drop the alpha channel of an opaque pixmap
///
/// Every pixel is opaque, so premultiplied and straight colour agree.
fn pixmap_to_raster(pixmap: &Pixmap) -> Result<Raster, RenderError> {
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    Raster::from_raw(pixmap.width(), pixmap.height(), PixelFormat::Rgb8, rgb)
}

/// Solid black, anti-aliased
fn ink_paint() -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = true;
    paint
}
