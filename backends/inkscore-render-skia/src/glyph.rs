//! Reference glyph rasterization

use kurbo::{BezPath, PathEl, Shape};
use skrifa::MetadataProvider;
use tiny_skia::{FillRule, LineCap, LineJoin, PathBuilder, Pixmap, Stroke, Transform};

use inkscore_core::{
    error::{RenderError, Result},
    traits::{FontRef, GlyphRasterizer},
    types::{CanvasSpec, GLYPH_SIZE},
    Raster,
};
use inkscore_fontdb::{
    builtin::{GRID, STROKE_WEIGHT},
    Font, FontChain, ResolvedFont, StrokeGlyph,
};

use crate::{ink_paint, pixmap_to_raster, white_pixmap};

/// How the glyph box used for centering was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Tight box around the drawn ink
    InkBounds,
    /// Advance width by ascent-to-descent, when the outline has no extent
    FontMetrics,
}

/// Where the glyph ended up on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub source: String,
    pub measurement: Measurement,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Renders target symbols centred on the canvas at a fixed pixel size
///
/// Fonts are resolved per call through the [`FontChain`]; nothing is cached
/// between calls.
#[derive(Debug, Clone)]
pub struct SkiaGlyphRasterizer {
    chain: FontChain,
    font_size: f32,
}

impl SkiaGlyphRasterizer {
    pub fn new(chain: FontChain, font_size: f32) -> Self {
        Self { chain, font_size }
    }

    pub fn chain(&self) -> &FontChain {
        &self.chain
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Render and report where the glyph was placed
    pub fn rasterize_with_placement(
        &self,
        symbol: char,
        canvas: CanvasSpec,
    ) -> Result<(Raster, GlyphPlacement)> {
        let mut pixmap = white_pixmap(canvas)?;

        let resolved = self.chain.resolve(symbol);
        let placement = match &resolved {
            ResolvedFont::Outline {
                font, glyph_id, ..
            } => self.draw_outline(font, *glyph_id, canvas, &mut pixmap)?,
            ResolvedFont::Builtin(builtin) => {
                self.draw_strokes(builtin.glyph(symbol), canvas, &mut pixmap)?
            },
        };
        let placement = GlyphPlacement {
            source: resolved.source(),
            ..placement
        };

        log::debug!(
            "glyph {:?}: {} {:?} box {:.1}x{:.1} at ({:.1}, {:.1})",
            symbol,
            placement.source,
            placement.measurement,
            placement.width,
            placement.height,
            placement.left,
            placement.top
        );

        Ok((pixmap_to_raster(&pixmap)?, placement))
    }

    /// Fill the outline of `glyph_id`, centred by its ink box
    fn draw_outline(
        &self,
        font: &Font,
        glyph_id: u32,
        canvas: CanvasSpec,
        pixmap: &mut Pixmap,
    ) -> Result<GlyphPlacement> {
        let font_ref = skrifa::FontRef::from_index(font.data(), font.face_index())
            .map_err(|_| RenderError::InvalidFont)?;
        let outlines = font_ref.outline_glyphs();
        let glyph = outlines
            .get(skrifa::GlyphId::new(glyph_id))
            .ok_or(RenderError::GlyphNotFound(glyph_id))?;

        // skrifa scales to pixels for us; coordinates come back y-up
        let mut path = BezPath::new();
        let mut pen = PathPen { path: &mut path };
        let size = skrifa::instance::Size::new(self.font_size);
        let settings = skrifa::outline::DrawSettings::unhinted(
            size,
            skrifa::instance::LocationRef::default(),
        );
        glyph
            .draw(settings, &mut pen)
            .map_err(|_| RenderError::OutlineExtractionFailed)?;

        let bbox = path.bounding_box();
        let has_extent = bbox.width() > 0.0
            && bbox.height() > 0.0
            && [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
                .iter()
                .all(|v| v.is_finite());

        // Top-left of the measured box lands at ((W - w) / 2, (H - h) / 2);
        // `above` is how far the box's top edge sits above the baseline
        let (measurement, width, height, above) = if has_extent {
            (
                Measurement::InkBounds,
                bbox.width() as f32,
                bbox.height() as f32,
                bbox.y1 as f32,
            )
        } else {
            let scale = self.font_size / font.units_per_em().max(1) as f32;
            let (ascent, descent) = font
                .metrics()
                .map(|m| (m.ascent as f32 * scale, m.descent as f32 * scale))
                .unwrap_or((self.font_size, 0.0));
            (
                Measurement::FontMetrics,
                font.advance_width(glyph_id) * scale,
                ascent - descent,
                ascent,
            )
        };
        let left = (canvas.width as f32 - width) / 2.0;
        let top = (canvas.height as f32 - height) / 2.0;

        // Flip y, then shift the box onto (left, top)
        let tx = match measurement {
            Measurement::InkBounds => left - bbox.x0 as f32,
            Measurement::FontMetrics => left,
        };
        let ty = top + above;

        if let Some(skia_path) = to_skia_path(&path) {
            let transform = Transform::from_row(1.0, 0.0, 0.0, -1.0, tx, ty);
            pixmap.fill_path(
                &skia_path,
                &ink_paint(),
                FillRule::Winding,
                transform,
                None,
            );
        }

        Ok(GlyphPlacement {
            source: String::new(),
            measurement,
            left,
            top,
            width,
            height,
        })
    }

    /// Stroke a built-in glyph, centred by its ink box
    fn draw_strokes(
        &self,
        glyph: StrokeGlyph,
        canvas: CanvasSpec,
        pixmap: &mut Pixmap,
    ) -> Result<GlyphPlacement> {
        let scale = self.font_size / GRID;
        let stroke_width = self.font_size * STROKE_WEIGHT;
        let half = stroke_width / 2.0;

        // Round caps reach half a stroke past every end point
        let (x0, y0, x1, y1) = glyph.bounds();
        let width = (x1 - x0) * scale + stroke_width;
        let height = (y1 - y0) * scale + stroke_width;
        let left = (canvas.width as f32 - width) / 2.0;
        let top = (canvas.height as f32 - height) / 2.0;

        let origin_x = left + half - x0 * scale;
        let origin_y = top + half - y0 * scale;

        let mut builder = PathBuilder::new();
        for polyline in glyph.strokes {
            let mut points = polyline
                .iter()
                .map(|&(x, y)| (origin_x + x as f32 * scale, origin_y + y as f32 * scale));
            if let Some((x, y)) = points.next() {
                builder.move_to(x, y);
                for (x, y) in points {
                    builder.line_to(x, y);
                }
            }
        }
        let path = builder.finish().ok_or(RenderError::PathBuildingFailed)?;

        let stroke = Stroke {
            width: stroke_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &ink_paint(), &stroke, Transform::identity(), None);

        Ok(GlyphPlacement {
            source: String::new(),
            measurement: Measurement::InkBounds,
            left,
            top,
            width,
            height,
        })
    }
}

impl Default for SkiaGlyphRasterizer {
    fn default() -> Self {
        Self::new(FontChain::system_default(), GLYPH_SIZE)
    }
}

impl GlyphRasterizer for SkiaGlyphRasterizer {
    fn name(&self) -> &'static str {
        "skia-glyph"
    }

    fn rasterize_glyph(&self, symbol: char, canvas: CanvasSpec) -> Result<Raster> {
        self.rasterize_with_placement(symbol, canvas)
            .map(|(raster, _)| raster)
    }
}

/// Translate kurbo's path format into tiny-skia's; `None` for an empty outline
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(ctrl, end) => {
                builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
            },
            PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                end.x as f32,
                end.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

struct PathPen<'a> {
    path: &'a mut BezPath,
}

impl skrifa::outline::OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to((cx0 as f64, cy0 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
