//! Environment wrappers.

use crate::env::{Env, StepResult};
use crate::error::EnvError;

/// Info key set on the step that hits the limit without a terminal state.
pub const TRUNCATED_KEY: &str = "TimeLimit.truncated";

/// Sets `truncated` once an episode has run for `max_episode_steps` steps.
#[derive(Debug)]
pub struct TimeLimit<E> {
    inner: E,
    max_episode_steps: usize,
    elapsed_steps: Option<usize>,
}

impl<E: Env> TimeLimit<E> {
    #[must_use]
    pub fn new(inner: E, max_episode_steps: usize) -> Self {
        Self { inner, max_episode_steps, elapsed_steps: None }
    }

    #[must_use]
    pub fn max_episode_steps(&self) -> usize {
        self.max_episode_steps
    }

    /// Steps taken since the last reset, `None` before the first.
    #[must_use]
    pub fn elapsed_steps(&self) -> Option<usize> {
        self.elapsed_steps
    }

    #[must_use]
    pub fn inner(&self) -> &E {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Env> Env for TimeLimit<E> {
    type Observation = E::Observation;
    type Action = E::Action;
    type ActionSpace = E::ActionSpace;
    type ObservationSpace = E::ObservationSpace;

    fn reset(&mut self, seed: Option<u64>) -> Result<Self::Observation, EnvError> {
        let observation = self.inner.reset(seed)?;
        self.elapsed_steps = Some(0);
        Ok(observation)
    }

    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, EnvError> {
        let elapsed = self.elapsed_steps.as_mut().ok_or(EnvError::ResetNeeded)?;
        let mut result = self.inner.step(action)?;
        *elapsed += 1;
        if *elapsed >= self.max_episode_steps {
            if !result.done {
                result.info.insert(TRUNCATED_KEY.to_owned(), serde_json::Value::Bool(true));
            }
            result.truncated = true;
        }
        Ok(result)
    }

    fn action_space(&self) -> &Self::ActionSpace {
        self.inner.action_space()
    }

    fn observation_space(&self) -> &Self::ObservationSpace {
        self.inner.observation_space()
    }

    fn close(&mut self) -> Result<(), EnvError> {
        self.inner.close()
    }
}
