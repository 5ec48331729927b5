//! CLI argument definitions using Clap v4

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inkscore - score handwriting against reference glyphs
#[derive(Parser, Debug)]
#[command(name = "inkscore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Scoring configuration file (JSON)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Font file to try, in order; replaces the configured search list
    #[arg(long = "font", action = ArgAction::Append, global = true)]
    pub fonts: Vec<PathBuf>,

    /// Skip font files and draw reference glyphs with the built-in font
    #[arg(long = "builtin-font", global = true, conflicts_with = "fonts")]
    pub builtin_font: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one request: {"points": [...], "target_char": "..."}
    #[command(alias = "s")]
    Score(ScoreArgs),

    /// Score a JSONL file of requests in parallel
    Batch(BatchArgs),

    /// Render the reference glyph, or a pen trace, to a PNG file
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Display fonts, symbols and canvas settings
    #[command(alias = "i")]
    Info,
}

/// Arguments for the score command
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Request file (reads stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input JSONL file, one request per line (reads stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Number of parallel worker threads (0 = auto)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Symbol to render (not needed with --points)
    #[arg(short = 'c', long = "char", required_unless_present = "points")]
    pub symbol: Option<char>,

    /// JSON array of pen points; renders the trace instead of the glyph
    #[arg(short = 'p', long = "points")]
    pub points: Option<PathBuf>,

    /// Output PNG file
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
}
