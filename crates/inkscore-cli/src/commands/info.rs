//! Info command implementation
//!
//! Shows the scoring constants, the font search list and which font each
//! drill symbol resolves to on this machine.

use anyhow::Result;
use inkscore::{symbols, ScoringConfig};

pub fn run(config: &ScoringConfig) -> Result<()> {
    println!("Inkscore v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print_settings(config);
    println!();
    print_search_list(config);
    println!();
    print_symbols(config);

    Ok(())
}

fn print_settings(config: &ScoringConfig) {
    println!("Scoring:");
    println!(
        "  canvas            {}x{}",
        config.canvas_width, config.canvas_height
    );
    println!("  glyph size        {}px", config.glyph_size);
    println!("  stroke width      {}px", config.stroke_width);
    println!("  minimum points    {}", config.min_points);
    println!("  fallback score    {}", config.fallback_score);
}

fn print_search_list(config: &ScoringConfig) {
    println!("Font search list:");
    if config.fonts.is_empty() {
        println!("  (empty, built-in font only)");
    }
    for entry in &config.fonts {
        let marker = if entry.path.exists() { "found" } else { "missing" };
        println!(
            "  [{:7}] {}#{}",
            marker,
            entry.path.display(),
            entry.face_index
        );
    }
}

fn print_symbols(config: &ScoringConfig) {
    let chain = config.font_chain();
    println!("Symbols:");
    for &symbol in symbols::all() {
        let resolved = chain.resolve(symbol);
        match resolved.glyph_count() {
            Some(count) => println!("  {}  {} ({} glyphs)", symbol, resolved.source(), count),
            None => println!("  {}  {}", symbol, resolved.source()),
        }
    }
}
