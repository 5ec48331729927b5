//! Batch command implementation
//!
//! Scores a JSONL file of requests in parallel; results come out in input
//! order, one JSON object per line, tagged with the line they answer.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use inkscore::{handle_request, ScoreResponse, ScoringConfig, Scorer};
use rayon::prelude::*;
use serde::Serialize;

use super::read_input;
use crate::cli::BatchArgs;

/// One output line
#[derive(Debug, Serialize)]
struct BatchResult {
    line: usize,
    status: u16,
    #[serde(flatten)]
    response: ScoreResponse,
}

fn score_lines(scorer: &Scorer, input: &str) -> Vec<BatchResult> {
    let jobs: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    log::info!("Scoring {} requests", jobs.len());

    jobs.par_iter()
        .map(|&(line, body)| {
            let (status, response) = handle_request(scorer, body);
            if status != inkscore::request::STATUS_OK {
                log::warn!("Line {}: status {}", line, status);
            }
            BatchResult {
                line,
                status,
                response,
            }
        })
        .collect()
}

pub fn run(args: &BatchArgs, config: ScoringConfig) -> Result<()> {
    let start = Instant::now();
    let scorer = Scorer::from_config(config).context("Invalid scoring configuration")?;
    let input = read_input(args.input.as_deref())?;

    let results = score_lines(&scorer, &input);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for result in &results {
        serde_json::to_writer(&mut handle, result).context("Failed to write JSON result")?;
        writeln!(&mut handle).context("Failed to write newline")?;
    }
    handle.flush().context("Failed to flush stdout")?;

    let elapsed = start.elapsed();
    log::info!(
        "Completed {} requests in {:.2}s",
        results.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}
