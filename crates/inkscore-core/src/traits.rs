//! The contracts that bind every backend together
//!
//! - [`FontRef`] - Your window into font data and metrics
//! - [`GlyphRasterizer`] - Where a target symbol becomes a reference raster
//! - [`StrokeRasterizer`] - Where a pen trace becomes a drawn raster

use crate::{
    error::Result,
    raster::Raster,
    types::{CanvasSpec, Point},
};

/// Font-wide vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    /// Distance above the baseline, positive
    pub ascent: i16,
    /// Distance below the baseline, usually negative
    pub descent: i16,
    pub line_gap: i16,
}

/// Your key to unlocking font secrets
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<u32> {
///         Some(42)
///     }
///
///     fn advance_width(&self, glyph_id: u32) -> f32 {
///         500.0
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Which face inside a collection these bytes describe
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<u32>;

    /// How wide this glyph stands in font units
    fn advance_width(&self, glyph_id: u32) -> f32;

    /// Ascent, descent and line gap, when the font carries them
    fn metrics(&self) -> Option<FontMetrics> {
        None
    }
}

/// Where a target symbol becomes the reference raster
///
/// Implementations render the symbol in black on white, centered on the
/// canvas, and must not panic on fonts they cannot use.
pub trait GlyphRasterizer: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Render `symbol` onto a fresh canvas
    fn rasterize_glyph(&self, symbol: char, canvas: CanvasSpec) -> Result<Raster>;
}

/// Where a user's pen trace becomes the drawn raster
///
/// Consecutive points are joined by fixed-width segments; fewer than two
/// points give a blank raster.
pub trait StrokeRasterizer: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Render the trace onto a fresh canvas
    fn rasterize_trace(&self, points: &[Point], canvas: CanvasSpec) -> Result<Raster>;
}
