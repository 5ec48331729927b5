//! End-to-end scoring with the built-in stroke font
//!
//! These tests never touch system fonts, so they behave the same on every
//! machine.

use std::sync::Arc;

use inkscore::{
    handle_request, CanvasSpec, Point, Raster, Score, ScoreOutcome, ScoreResponse, Scorer,
    ScoringConfig, ScoringContext, StrokeRasterizer,
};
use proptest::prelude::*;

fn builtin_scorer() -> Scorer {
    Scorer::from_config(ScoringConfig::builtin_font_only()).unwrap()
}

fn diagonal(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = 20.0 + 360.0 * i as f32 / (count - 1) as f32;
            Point::new(t, t)
        })
        .collect()
}

/// Returns a raster one pixel too narrow
struct WrongSizeStrokes;

impl StrokeRasterizer for WrongSizeStrokes {
    fn name(&self) -> &'static str {
        "wrong-size"
    }

    fn rasterize_trace(&self, _: &[Point], canvas: CanvasSpec) -> inkscore::Result<Raster> {
        Ok(Raster::blank(canvas.width - 1, canvas.height))
    }
}

#[test]
fn empty_trace_scores_zero() {
    let scorer = builtin_scorer();
    assert_eq!(scorer.score(&[], '一'), Score::ZERO);

    let (status, response) = handle_request(&scorer, r#"{"points": [], "target_char": "一"}"#);
    assert_eq!(status, 200);
    assert_eq!(response, ScoreResponse::Score { score: 0 });
}

#[test]
fn nine_points_score_zero_ten_do_not_short_circuit() {
    let scorer = builtin_scorer();
    assert!(matches!(
        scorer.evaluate(&diagonal(9), '人'),
        ScoreOutcome::TooSparse { points: 9 }
    ));
    assert!(matches!(
        scorer.evaluate(&diagonal(10), '人'),
        ScoreOutcome::Scored { .. }
    ));
}

#[test]
fn simple_glyph_beats_dense_glyph_for_a_thin_diagonal() {
    let scorer = builtin_scorer();
    let points = diagonal(15);

    let thin = scorer.score(&points, '一');
    let dense = scorer.score(&points, '心');
    assert!(
        thin > dense,
        "expected 一 ({}) to score above 心 ({})",
        thin,
        dense
    );
}

#[test]
fn missing_fonts_still_produce_a_score() {
    let config = ScoringConfig::default().with_fonts([
        "/nonexistent/PingFang.ttc",
        "/nonexistent/SimHei.ttf",
    ]);
    let scorer = Scorer::from_config(config).unwrap();

    match scorer.evaluate(&diagonal(15), '水') {
        ScoreOutcome::Scored { score, similarity } => {
            assert!(score.value() <= 100);
            assert!((0.0..=1.0).contains(&similarity));
        },
        other => panic!("expected a score, got {:?}", other),
    }
}

#[test]
fn mismatched_rasters_score_exactly_fifty() {
    let context = ScoringContext::builder()
        .config(ScoringConfig::builtin_font_only())
        .stroke_rasterizer(Arc::new(WrongSizeStrokes))
        .build()
        .unwrap();
    let scorer = Scorer::new(context);

    assert_eq!(scorer.score(&diagonal(15), '一').value(), 50);
    assert!(matches!(
        scorer.evaluate(&diagonal(15), '一'),
        ScoreOutcome::RenderingFailed(_)
    ));
}

#[test]
fn scoring_is_idempotent() {
    let scorer = builtin_scorer();
    let points: Vec<Point> = (0..40)
        .map(|i| {
            let angle = i as f32 * 0.3;
            Point::new(200.0 + 120.0 * angle.cos(), 200.0 + 120.0 * angle.sin())
        })
        .collect();

    let first = scorer.evaluate(&points, '口');
    let second = scorer.evaluate(&points, '口');
    match (first, second) {
        (
            ScoreOutcome::Scored {
                score: a,
                similarity: x,
            },
            ScoreOutcome::Scored {
                score: b,
                similarity: y,
            },
        ) => {
            assert_eq!(a, b);
            assert_eq!(x, y);
        },
        other => panic!("expected two scores, got {:?}", other),
    }
}

#[test]
fn scorer_is_shareable_across_threads() {
    let scorer = Arc::new(builtin_scorer());
    let points = diagonal(20);
    let expected = scorer.score(&points, '十');

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            let points = points.clone();
            std::thread::spawn(move || scorer.score(&points, '十'))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scores_stay_in_range(
        coords in prop::collection::vec((-50.0f32..450.0, -50.0f32..450.0), 0..40),
        seed in any::<u64>(),
    ) {
        let scorer = builtin_scorer();
        let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
        let score = scorer.score(&points, inkscore::symbols::pick(seed));

        prop_assert!(score.value() <= 100);
        if points.len() < 10 {
            prop_assert_eq!(score, Score::ZERO);
        }
    }
}
