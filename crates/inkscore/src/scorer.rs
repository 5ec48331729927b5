//! The scoring orchestrator
//!
//! Validates the trace, renders both rasters, compares them and turns the
//! result into a score. Failures inside rendering or comparison never reach
//! the caller: they come back as [`ScoreOutcome::RenderingFailed`] and map to
//! the configured fallback score.

use std::sync::Arc;

use inkscore_core::{
    error::{InkscoreError, Result},
    similarity,
    traits::{GlyphRasterizer, StrokeRasterizer},
    types::{Point, Score},
};
use inkscore_render_skia::{SkiaGlyphRasterizer, SkiaStrokeRasterizer};

use crate::config::ScoringConfig;

/// Immutable bundle of configuration and rasterizers
///
/// Built once at start-up and shared by every scoring call.
#[derive(Clone)]
pub struct ScoringContext {
    config: ScoringConfig,
    glyphs: Arc<dyn GlyphRasterizer>,
    strokes: Arc<dyn StrokeRasterizer>,
}

impl ScoringContext {
    /// Start building a context
    pub fn builder() -> ScoringContextBuilder {
        ScoringContextBuilder::new()
    }

    /// Validated context with the tiny-skia rasterizers
    pub fn from_config(config: ScoringConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn glyph_rasterizer(&self) -> &dyn GlyphRasterizer {
        self.glyphs.as_ref()
    }

    pub fn stroke_rasterizer(&self) -> &dyn StrokeRasterizer {
        self.strokes.as_ref()
    }
}

impl std::fmt::Debug for ScoringContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringContext")
            .field("config", &self.config)
            .field("glyphs", &self.glyphs.name())
            .field("strokes", &self.strokes.name())
            .finish()
    }
}

/// Build a context piece by piece
///
/// Rasterizers left unset default to the tiny-skia ones configured from the
/// [`ScoringConfig`].
#[derive(Default)]
pub struct ScoringContextBuilder {
    config: Option<ScoringConfig>,
    glyphs: Option<Arc<dyn GlyphRasterizer>>,
    strokes: Option<Arc<dyn StrokeRasterizer>>,
}

impl ScoringContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ScoringConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn glyph_rasterizer(mut self, rasterizer: Arc<dyn GlyphRasterizer>) -> Self {
        self.glyphs = Some(rasterizer);
        self
    }

    pub fn stroke_rasterizer(mut self, rasterizer: Arc<dyn StrokeRasterizer>) -> Self {
        self.strokes = Some(rasterizer);
        self
    }

    pub fn build(self) -> Result<ScoringContext> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let glyphs = self.glyphs.unwrap_or_else(|| {
            Arc::new(SkiaGlyphRasterizer::new(
                config.font_chain(),
                config.glyph_size,
            ))
        });
        let strokes = self
            .strokes
            .unwrap_or_else(|| Arc::new(SkiaStrokeRasterizer::new(config.stroke_width)));

        Ok(ScoringContext {
            config,
            glyphs,
            strokes,
        })
    }
}

/// What happened to one scoring request
#[derive(Debug)]
pub enum ScoreOutcome {
    /// Too few points to judge; scores zero
    TooSparse { points: usize },
    /// Both rasters rendered and compared
    Scored { score: Score, similarity: f64 },
    /// Something inside rendering or comparison failed
    RenderingFailed(InkscoreError),
}

impl ScoreOutcome {
    /// Collapse to the number the caller sees
    pub fn score(&self, fallback: Score) -> Score {
        match self {
            ScoreOutcome::TooSparse { .. } => Score::ZERO,
            ScoreOutcome::Scored { score, .. } => *score,
            ScoreOutcome::RenderingFailed(_) => fallback,
        }
    }
}

/// Judges drawings against reference glyphs
///
/// Stateless between calls and `Send + Sync`; share one across threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    context: ScoringContext,
}

impl Scorer {
    pub fn new(context: ScoringContext) -> Self {
        Self { context }
    }

    /// Scorer over a validated config with the default rasterizers
    pub fn from_config(config: ScoringConfig) -> Result<Self> {
        Ok(Self::new(ScoringContext::from_config(config)?))
    }

    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Score a drawing of `target`, always in 0..=100
    pub fn score(&self, points: &[Point], target: char) -> Score {
        let fallback = Score::new(self.context.config.fallback_score);
        self.evaluate(points, target).score(fallback)
    }

    /// Score with the full outcome, for callers that want to know why
    pub fn evaluate(&self, points: &[Point], target: char) -> ScoreOutcome {
        if points.len() < self.context.config.min_points {
            return ScoreOutcome::TooSparse {
                points: points.len(),
            };
        }

        match self.similarity(points, target) {
            Ok(similarity) => ScoreOutcome::Scored {
                score: Score::from_similarity(similarity),
                similarity,
            },
            Err(err) => {
                log::warn!(
                    "scoring {:?} with {} points failed, using fallback score {}: {}",
                    target,
                    points.len(),
                    self.context.config.fallback_score,
                    err
                );
                ScoreOutcome::RenderingFailed(err)
            },
        }
    }

    /// Render both sides and compare them
    pub fn similarity(&self, points: &[Point], target: char) -> Result<f64> {
        let canvas = self.context.config.canvas();
        let reference = self.context.glyphs.rasterize_glyph(target, canvas)?;
        let drawn = self.context.strokes.rasterize_trace(points, canvas)?;
        let value = similarity(&reference, &drawn)?;

        log::debug!(
            "{:?}: {} points, similarity {:.4} ({} / {})",
            target,
            points.len(),
            value,
            self.context.glyphs.name(),
            self.context.strokes.name()
        );
        Ok(value)
    }
}
