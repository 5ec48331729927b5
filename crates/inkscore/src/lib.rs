//! Inkscore: how close is a drawing to the symbol it was meant to be?
//!
//! A drill shows a symbol, the user draws it on a 400×400 canvas, and the
//! client sends the pen points here. The [`Scorer`] renders the symbol with
//! the first font that covers it, renders the points as a 5px polyline, and
//! compares the two rasters pixel by pixel.
//!
//! ```rust,no_run
//! use inkscore::{Point, Scorer, ScoringConfig};
//!
//! let scorer = Scorer::from_config(ScoringConfig::default())?;
//! let points: Vec<Point> = (0..20)
//!     .map(|i| Point::new(100.0 + i as f32 * 10.0, 200.0))
//!     .collect();
//!
//! let score = scorer.score(&points, '一');
//! assert!(score.value() <= 100);
//! # Ok::<(), inkscore::InkscoreError>(())
//! ```
//!
//! Scores follow three rules:
//!
//! - fewer than ten points score 0 without rendering anything
//! - a failure while rendering or comparing scores 50
//! - otherwise the score is `floor(similarity × 100)`
//!
//! Web layers should go through [`handle_request`], which parses the JSON
//! body and decides the status code.

pub mod config;
pub mod request;
pub mod scorer;
pub mod symbols;

pub use config::{FontEntry, ScoringConfig};
pub use request::{handle, handle_request, ScoreRequest, ScoreResponse, WirePoint};
pub use scorer::{ScoreOutcome, Scorer, ScoringContext, ScoringContextBuilder};

pub use inkscore_core::{
    error::{InkscoreError, Result},
    types::{CanvasSpec, Point, Score, StrokeTrace},
    GlyphRasterizer, Raster, StrokeRasterizer,
};
