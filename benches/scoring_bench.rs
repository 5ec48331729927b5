//! Scoring performance - one request end to end, and each stage alone
//!
//! Every request renders two 400×400 rasters and walks 160k pixels, so
//! the stages are measured separately to see where the time goes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use inkscore::{CanvasSpec, GlyphRasterizer, Point, Scorer, ScoringConfig, StrokeRasterizer};
use inkscore_core::similarity;
use inkscore_fontdb::FontChain;
use inkscore_render_skia::{SkiaGlyphRasterizer, SkiaStrokeRasterizer};

fn spiral(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let angle = t * 12.0;
            let radius = 20.0 + 150.0 * t;
            Point::new(200.0 + radius * angle.cos(), 200.0 + radius * angle.sin())
        })
        .collect()
}

fn bench_stroke_rasterizer(c: &mut Criterion) {
    let rasterizer = SkiaStrokeRasterizer::default();
    let canvas = CanvasSpec::default();
    let mut group = c.benchmark_group("stroke_rasterizer");

    for count in [10, 100, 1000] {
        let points = spiral(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| rasterizer.rasterize_trace(black_box(points), canvas).unwrap())
        });
    }
    group.finish();
}

fn bench_glyph_rasterizer(c: &mut Criterion) {
    let rasterizer = SkiaGlyphRasterizer::new(FontChain::builtin_only(), 200.0);
    let canvas = CanvasSpec::default();

    c.bench_function("glyph_builtin_xin", |b| {
        b.iter(|| rasterizer.rasterize_glyph(black_box('心'), canvas).unwrap())
    });
}

fn bench_similarity(c: &mut Criterion) {
    let canvas = CanvasSpec::default();
    let reference = SkiaGlyphRasterizer::new(FontChain::builtin_only(), 200.0)
        .rasterize_glyph('木', canvas)
        .unwrap();
    let drawn = SkiaStrokeRasterizer::default()
        .rasterize_trace(&spiral(200), canvas)
        .unwrap();

    c.bench_function("similarity_400x400", |b| {
        b.iter(|| similarity(black_box(&reference), black_box(&drawn)).unwrap())
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let scorer = Scorer::from_config(ScoringConfig::builtin_font_only()).unwrap();
    let points = spiral(150);

    c.bench_function("score_builtin", |b| {
        b.iter(|| scorer.score(black_box(&points), black_box('水')))
    });
}

criterion_group!(
    benches,
    bench_stroke_rasterizer,
    bench_glyph_rasterizer,
    bench_similarity,
    bench_end_to_end
);
criterion_main!(benches);
