use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rl::ClosePolicy;

use crate::config::{OutputFormat, RunConfig};

/// Play CartPole episodes with uniformly random actions, printing every step.
#[derive(Parser, Debug)]
#[command(name = "cartpole", version)]
pub struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Registered environment id
    #[arg(long = "env")]
    pub env_id: Option<String>,

    /// Number of episodes to play
    #[arg(long)]
    pub episodes: Option<usize>,

    /// Step budget per episode
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Seed for action sampling and the first reset
    #[arg(long)]
    pub seed: Option<u64>,

    /// When to close the environment: on-termination or after-all
    #[arg(long)]
    pub close_policy: Option<ClosePolicy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Merge defaults, the config file and the flags into one config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn resolve(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(env_id) = self.env_id {
            config.env_id = env_id;
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(close_policy) = self.close_policy {
            config.close_policy = close_policy;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}
