use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::EnvError;
use crate::space::Space;

/// Auxiliary diagnostics returned alongside each step.
pub type Info = BTreeMap<String, serde_json::Value>;

/// Outcome of a single [`Env::step`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult<O> {
    /// Observation after the action was applied.
    pub observation: O,
    pub reward: f32,
    /// The episode reached a terminal state.
    pub done: bool,
    /// The episode was cut short by an external limit.
    pub truncated: bool,
    pub info: Info,
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. [`reset`] starts an episode, each
/// call to [`step`] advances the simulation by one action, actions are drawn
/// from the [`action_space`], and [`close`] releases whatever the environment
/// holds. Calling [`reset`] after [`close`] re-acquires the environment.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
/// [`action_space`]: Env::action_space
/// [`close`]: Env::close
pub trait Env {
    type Observation: Clone + fmt::Debug + Serialize;
    type Action: Copy + fmt::Debug + Serialize;
    type ActionSpace: Space<Element = Self::Action>;
    type ObservationSpace: Space<Element = Self::Observation>;

    /// Reset the environment to a starting state and return the initial
    /// observation. `Some(seed)` reseeds the environment's random generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot produce a starting state.
    fn reset(&mut self, seed: Option<u64>) -> Result<Self::Observation, EnvError>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] for actions outside the action
    /// space and [`EnvError::ResetNeeded`] when no episode is in progress.
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::Observation>, EnvError>;

    fn action_space(&self) -> &Self::ActionSpace;

    fn observation_space(&self) -> &Self::ObservationSpace;

    /// Release the environment. Closing twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if releasing held resources fails.
    fn close(&mut self) -> Result<(), EnvError>;
}
