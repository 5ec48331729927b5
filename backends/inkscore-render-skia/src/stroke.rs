//! Pen trace rasterization

use tiny_skia::{PathBuilder, Stroke, Transform};

use inkscore_core::{
    error::{RenderError, Result},
    traits::StrokeRasterizer,
    types::{CanvasSpec, Point, STROKE_WIDTH},
    Raster,
};

use crate::{ink_paint, pixmap_to_raster, white_pixmap};

/// Joins each pair of consecutive points with a butt-capped segment
///
/// Segments are independent sub-paths, so nothing is smoothed or joined
/// between them. Points are used exactly as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkiaStrokeRasterizer {
    stroke_width: f32,
}

impl SkiaStrokeRasterizer {
    pub fn new(stroke_width: f32) -> Self {
        Self { stroke_width }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
}

impl Default for SkiaStrokeRasterizer {
    fn default() -> Self {
        Self::new(STROKE_WIDTH)
    }
}

impl StrokeRasterizer for SkiaStrokeRasterizer {
    fn name(&self) -> &'static str {
        "skia-stroke"
    }

    fn rasterize_trace(&self, points: &[Point], canvas: CanvasSpec) -> Result<Raster> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(RenderError::MalformedPoint {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }

        let mut pixmap = white_pixmap(canvas)?;

        let mut builder = PathBuilder::new();
        let mut segments = 0usize;
        for pair in points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            // Zero-length segments have no direction for a butt cap
            if from == to {
                continue;
            }
            builder.move_to(from.x, from.y);
            builder.line_to(to.x, to.y);
            segments += 1;
        }

        if let Some(path) = builder.finish() {
            let stroke = Stroke {
                width: self.stroke_width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &ink_paint(), &stroke, Transform::identity(), None);
        }

        log::trace!(
            "trace: {} points, {} segments at width {}",
            points.len(),
            segments,
            self.stroke_width
        );

        Ok(pixmap_to_raster(&pixmap)?)
    }
}
