//! Command implementations

pub mod batch;
pub mod info;
pub mod render;
pub mod score;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use inkscore::ScoringConfig;

use crate::cli::GlobalArgs;

/// Config file (or defaults) with the font flags applied on top
pub fn load_config(args: &GlobalArgs) -> Result<ScoringConfig> {
    let mut config = match &args.config {
        Some(path) => ScoringConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    if args.builtin_font {
        config.fonts.clear();
    } else if !args.fonts.is_empty() {
        config = config.with_fonts(args.fonts.iter().cloned());
    }

    log::debug!("{} font candidates configured", config.fonts.len());
    Ok(config)
}

/// Whole input as a string, from a file or stdin
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        },
    }
}
