//! Score command: one request in, one response out

use anyhow::{bail, Context, Result};
use inkscore::{handle_request, ScoringConfig, Scorer};

use super::read_input;
use crate::cli::ScoreArgs;

pub fn run(args: &ScoreArgs, config: ScoringConfig) -> Result<()> {
    let scorer = Scorer::from_config(config).context("Invalid scoring configuration")?;
    let body = read_input(args.input.as_deref())?;

    let (status, response) = handle_request(&scorer, &body);
    println!("{}", response.to_json());

    if status != inkscore::request::STATUS_OK {
        bail!("request rejected with status {}", status);
    }
    Ok(())
}
