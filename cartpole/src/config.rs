//! Run configuration.
//!
//! Values come from three layers, later ones winning: the built-in defaults,
//! an optional JSON file, and command-line flags (see [`crate::cli`]).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use physics::CartPoleConfig;
use rl::ClosePolicy;
use serde::Deserialize;

/// How step records are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `step observation reward done truncated info action`
    #[default]
    Text,
    /// One JSON object per step
    Jsonl,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Registered environment id, e.g. `CartPole-v1`
    pub env_id: String,
    pub episodes: usize,
    /// Step budget per episode
    pub max_steps: usize,
    pub seed: Option<u64>,
    pub close_policy: ClosePolicy,
    pub format: OutputFormat,
    /// Overrides for the cart-pole physics
    pub physics: CartPoleConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            env_id: "CartPole-v1".to_owned(),
            episodes: 10,
            max_steps: 500,
            seed: None,
            close_policy: ClosePolicy::OnTermination,
            format: OutputFormat::Text,
            physics: CartPoleConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, has unknown fields, or the
    /// physics block does not validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing run config")?;
        config.physics.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_reference_run() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.episodes, 10);
        assert_eq!(config.max_steps, 500);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(RunConfig::from_json(r#"{ "episodez": 3 }"#).is_err());
    }

    #[test]
    fn misspelled_physics_key_is_rejected() {
        let err = RunConfig::from_json(r#"{ "physics": { "tua": 0.5 } }"#).unwrap_err();
        assert!(format!("{err:#}").contains("tua"));
    }

    #[test]
    fn invalid_physics_is_rejected() {
        let err = RunConfig::from_json(r#"{ "physics": { "tau": -0.1 } }"#).unwrap_err();
        assert!(format!("{err:#}").contains("tau"));
    }

    #[test]
    fn enums_use_kebab_case() {
        let config =
            RunConfig::from_json(r#"{ "close_policy": "after-all-episodes", "format": "jsonl" }"#).unwrap();
        assert_eq!(config.close_policy, ClosePolicy::AfterAllEpisodes);
        assert_eq!(config.format, OutputFormat::Jsonl);
    }
}
