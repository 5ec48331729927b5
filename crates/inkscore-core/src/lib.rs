//! Inkscore Core: from pen traces to a score
//!
//! A handwriting drill shows the user a symbol and asks them to draw it.
//! This crate holds the pieces every backend agrees on: the shapes of the
//! data that flow between stages, the traits that rasterizers implement,
//! and the pixel metric that turns two rasters into a similarity value.
//!
//! ## The Flow
//!
//! 1. **Glyph rasterization** - the target symbol becomes a reference [`Raster`]
//! 2. **Stroke rasterization** - the user's points become a drawn [`Raster`]
//! 3. **Comparison** - [`similarity()`] measures how close the two are
//! 4. **Scoring** - [`types::Score::from_similarity`] maps that to 0..=100
//!
//! ```rust
//! use inkscore_core::{similarity, Raster};
//!
//! let reference = Raster::blank(4, 4);
//! let drawn = Raster::blank(4, 4);
//! assert_eq!(similarity(&reference, &drawn)?, 1.0);
//! # Ok::<(), inkscore_core::error::CompareError>(())
//! ```
//!
//! ## The Traits
//!
//! - [`GlyphRasterizer`] - where symbols become reference rasters
//! - [`StrokeRasterizer`] - where pen traces become drawn rasters
//! - [`traits::FontRef`] - your window into font data

pub mod error;
pub mod raster;
pub mod similarity;
pub mod traits;

pub use error::{InkscoreError, Result};
pub use raster::{PixelFormat, Raster};
pub use similarity::similarity;
pub use traits::{GlyphRasterizer, StrokeRasterizer};

/// The data structures shared by every stage
pub mod types {
    /// Canvas width the drawing client captures on, in pixels
    pub const CANVAS_WIDTH: u32 = 400;

    /// Canvas height the drawing client captures on, in pixels
    pub const CANVAS_HEIGHT: u32 = 400;

    /// Width of each segment drawn between consecutive points
    pub const STROKE_WIDTH: f32 = 5.0;

    /// Pixel size the reference glyph is rendered at
    pub const GLYPH_SIZE: f32 = 200.0;

    /// Traces shorter than this are too sparse to evaluate
    pub const MIN_POINTS: usize = 10;

    /// Score reported when rendering or comparison fails
    pub const FALLBACK_SCORE: u8 = 50;

    /// One sample of the user's pen, in canvas pixels
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Point {
        pub x: f32,
        pub y: f32,
    }

    impl Point {
        pub const fn new(x: f32, y: f32) -> Self {
            Self { x, y }
        }

        pub fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl From<(f32, f32)> for Point {
        fn from((x, y): (f32, f32)) -> Self {
            Self { x, y }
        }
    }

    /// Points in the order the pen visited them
    pub type StrokeTrace = Vec<Point>;

    /// Size of the raster both sides of a comparison are drawn on
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CanvasSpec {
        pub width: u32,
        pub height: u32,
    }

    impl CanvasSpec {
        pub const fn new(width: u32, height: u32) -> Self {
            Self { width, height }
        }

        pub fn pixel_count(&self) -> usize {
            self.width as usize * self.height as usize
        }
    }

    impl Default for CanvasSpec {
        fn default() -> Self {
            Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
        }
    }

    /// A drawing grade between 0 and 100 inclusive
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Score(u8);

    impl Score {
        pub const ZERO: Score = Score(0);
        pub const MAX: Score = Score(100);

        /// Clamps anything above 100 down to 100
        pub const fn new(value: u8) -> Self {
            if value > 100 {
                Score(100)
            } else {
                Score(value)
            }
        }

        /// `floor(similarity * 100)`, clamped into range.
        ///
        /// NaN maps to zero.
        pub fn from_similarity(similarity: f64) -> Self {
            if similarity.is_nan() {
                return Score::ZERO;
            }
            let scaled = (similarity * 100.0).floor().clamp(0.0, 100.0);
            Score(scaled as u8)
        }

        pub const fn value(self) -> u8 {
            self.0
        }
    }

    impl From<Score> for u8 {
        fn from(score: Score) -> u8 {
            score.0
        }
    }

    impl std::fmt::Display for Score {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn test_score_from_similarity_floors() {
        assert_eq!(Score::from_similarity(0.999).value(), 99);
        assert_eq!(Score::from_similarity(1.0).value(), 100);
        assert_eq!(Score::from_similarity(0.0).value(), 0);
        assert_eq!(Score::from_similarity(0.505).value(), 50);
    }

    #[test]
    fn test_score_clamps_out_of_range() {
        assert_eq!(Score::from_similarity(1.7), Score::MAX);
        assert_eq!(Score::from_similarity(-0.3), Score::ZERO);
        assert_eq!(Score::from_similarity(f64::NAN), Score::ZERO);
        assert_eq!(Score::new(250).value(), 100);
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_default_canvas() {
        let canvas = CanvasSpec::default();
        assert_eq!((canvas.width, canvas.height), (400, 400));
        assert_eq!(canvas.pixel_count(), 160_000);
    }
}
