//! Drives an environment through episodes of uniformly random actions.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::env::Env;
use crate::error::{EnvError, RunError};
use crate::record::{RecordSink, StepRecord};
use crate::space::Space;

/// When the runner calls [`Env::close`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosePolicy {
    /// Close right after a step reports `done`; the next episode's reset
    /// re-acquires the environment.
    #[default]
    OnTermination,
    /// Close exactly once, after the last episode.
    #[serde(alias = "after-all")]
    AfterAllEpisodes,
}

impl FromStr for ClosePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-termination" => Ok(Self::OnTermination),
            "after-all" | "after-all-episodes" => Ok(Self::AfterAllEpisodes),
            other => Err(format!(
                "unknown close policy `{other}`, expected `on-termination` or `after-all`"
            )),
        }
    }
}

impl fmt::Display for ClosePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OnTermination => "on-termination",
            Self::AfterAllEpisodes => "after-all",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f32,
    /// The episode ended on a terminal state rather than the step budget.
    pub done: bool,
    /// Some step in the episode reported `truncated`.
    pub truncated: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub episodes: Vec<EpisodeSummary>,
    /// Number of times [`Env::close`] was called.
    pub close_calls: usize,
}

impl RunSummary {
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.episodes.iter().map(|e| e.steps).sum()
    }

    /// Mean episode return, `None` when no episode ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_reward(&self) -> Option<f32> {
        if self.episodes.is_empty() {
            return None;
        }
        let total: f32 = self.episodes.iter().map(|e| e.total_reward).sum();
        Some(total / self.episodes.len() as f32)
    }
}

/// Repeatedly resets an environment and feeds it random actions sampled from
/// its action space, writing every step to a [`RecordSink`].
#[derive(Debug)]
pub struct EpisodeRunner<E> {
    env: E,
    rng: fastrand::Rng,
    seed: Option<u64>,
    close_policy: ClosePolicy,
}

impl<E: Env> EpisodeRunner<E> {
    #[must_use]
    pub fn new(env: E) -> Self {
        Self {
            env,
            rng: fastrand::Rng::new(),
            seed: None,
            close_policy: ClosePolicy::default(),
        }
    }

    /// Seed both the action sampler and the first reset of every run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_close_policy(mut self, close_policy: ClosePolicy) -> Self {
        self.close_policy = close_policy;
        self
    }

    #[must_use]
    pub fn env(&self) -> &E {
        &self.env
    }

    #[must_use]
    pub fn into_env(self) -> E {
        self.env
    }

    /// Run `episode_count` episodes of at most `max_steps` steps each.
    ///
    /// An episode ends early when a step reports `done`; `truncated` alone
    /// does not end it.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Env`] if the environment fails and
    /// [`RunError::Sink`] if a record cannot be written. Nothing is retried.
    pub fn run<S>(
        &mut self,
        episode_count: usize,
        max_steps: usize,
        sink: &mut S,
    ) -> Result<RunSummary, RunError>
    where
        S: RecordSink<E::Observation, E::Action> + ?Sized,
    {
        if let Some(seed) = self.seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        tracing::info!(
            episode_count,
            max_steps,
            seed = ?self.seed,
            close_policy = %self.close_policy,
            "starting random episodes"
        );

        let mut summary = RunSummary::default();
        for episode in 0..episode_count {
            let env_err = |source: EnvError| RunError::Env { episode, source };
            let seed = if episode == 0 { self.seed } else { None };
            self.env.reset(seed).map_err(env_err)?;

            let mut stats = EpisodeSummary { episode, ..EpisodeSummary::default() };
            for step in 0..max_steps {
                let action = self.env.action_space().sample(&mut self.rng);
                let result = self.env.step(action).map_err(env_err)?;

                stats.steps += 1;
                stats.total_reward += result.reward;
                stats.truncated |= result.truncated;
                let done = result.done;

                sink.record(&StepRecord {
                    episode,
                    step,
                    observation: result.observation,
                    reward: result.reward,
                    done,
                    truncated: result.truncated,
                    info: result.info,
                    action,
                })?;

                if done {
                    stats.done = true;
                    if self.close_policy == ClosePolicy::OnTermination {
                        self.env.close().map_err(env_err)?;
                        summary.close_calls += 1;
                    }
                    break;
                }
            }

            tracing::info!(
                episode,
                steps = stats.steps,
                total_reward = stats.total_reward,
                done = stats.done,
                "episode finished"
            );
            summary.episodes.push(stats);
        }

        if self.close_policy == ClosePolicy::AfterAllEpisodes {
            self.env
                .close()
                .map_err(|source| RunError::Env { episode: episode_count, source })?;
            summary.close_calls += 1;
        }
        sink.flush()?;

        Ok(summary)
    }
}
