//! # Random Games
//!
//! Builds the configured environment, plays the configured number of
//! episodes with uniformly random actions and streams every step to the
//! given writer.
//!
//! With the default [`RunConfig`] this plays ten episodes of `CartPole-v1`
//! with a budget of 500 steps each, closing the environment whenever an
//! episode ends on a terminal state.

use std::io::Write;

use anyhow::{Context, Result};
use rl::{make_with, EpisodeRunner, JsonLinesSink, RunSummary, TextSink};

use crate::config::{OutputFormat, RunConfig};

/// Run the random-action episodes described by `config`, writing step
/// records to `out`.
///
/// # Errors
///
/// Returns an error if the environment cannot be built, fails mid-run, or
/// `out` cannot be written.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<RunSummary> {
    let env = make_with(&config.env_id, config.physics.clone())
        .with_context(|| format!("creating environment {}", config.env_id))?;

    let mut runner = EpisodeRunner::new(env).with_close_policy(config.close_policy);
    if let Some(seed) = config.seed {
        runner = runner.with_seed(seed);
    }

    let summary = match config.format {
        OutputFormat::Text => runner.run(config.episodes, config.max_steps, &mut TextSink::new(out)),
        OutputFormat::Jsonl => {
            runner.run(config.episodes, config.max_steps, &mut JsonLinesSink::new(out))
        }
    }
    .context("running episodes")?;

    tracing::info!(
        env_id = %config.env_id,
        episodes = summary.episodes.len(),
        total_steps = summary.total_steps(),
        mean_reward = ?summary.mean_reward(),
        close_calls = summary.close_calls,
        "run finished"
    );
    Ok(summary)
}
