//! Inkscore CLI: score handwriting from the command line

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.global.verbose);

    let config = commands::load_config(&cli.global)?;

    match cli.command {
        Commands::Score(args) => commands::score::run(&args, config),
        Commands::Batch(args) => {
            if args.jobs > 0 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(args.jobs)
                    .build_global()
                    .context("Failed to initialize thread pool")?;
            }
            commands::batch::run(&args, config)
        },
        Commands::Render(args) => commands::render::run(&args, &config),
        Commands::Info => commands::info::run(&config),
    }
}

/// Initialize logging based on verbosity flag; `RUST_LOG` still applies.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
