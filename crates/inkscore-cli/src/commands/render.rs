//! Render command: write either side of a comparison as PNG

use std::fs;

use anyhow::{anyhow, Context, Result};
use inkscore::{request::WirePoint, Point, ScoringConfig};
use inkscore_core::StrokeRasterizer;
use inkscore_export::write_png;
use inkscore_render_skia::{SkiaGlyphRasterizer, SkiaStrokeRasterizer};

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs, config: &ScoringConfig) -> Result<()> {
    config.validate().context("Invalid scoring configuration")?;
    let canvas = config.canvas();

    let raster = match &args.points {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let wire: Vec<WirePoint> = serde_json::from_str(&text)
                .with_context(|| format!("{} is not a JSON array of points", path.display()))?;
            let points: Vec<Point> = wire.into_iter().map(Point::from).collect();

            let raster = SkiaStrokeRasterizer::new(config.stroke_width)
                .rasterize_trace(&points, canvas)
                .context("Failed to rasterize trace")?;
            eprintln!("Trace: {} points", points.len());
            raster
        },
        None => {
            let symbol = args
                .symbol
                .ok_or_else(|| anyhow!("--char is required unless --points is given"))?;
            let rasterizer = SkiaGlyphRasterizer::new(config.font_chain(), config.glyph_size);
            let (raster, placement) = rasterizer
                .rasterize_with_placement(symbol, canvas)
                .with_context(|| format!("Failed to rasterize {:?}", symbol))?;
            eprintln!(
                "Glyph {:?} from {} ({:?}): {:.1}x{:.1} at ({:.1}, {:.1})",
                symbol,
                placement.source,
                placement.measurement,
                placement.width,
                placement.height,
                placement.left,
                placement.top
            );
            raster
        },
    };

    write_png(&raster, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    let coverage = raster.ink_coverage().context("Failed to measure ink")?;
    eprintln!(
        "Wrote {}x{} PNG to {} ({:.1}% ink)",
        raster.width,
        raster.height,
        args.output.display(),
        coverage * 100.0
    );
    Ok(())
}
