//! Named environment constructors.

use physics::CartPoleConfig;

use crate::cartpole::CartPoleEnv;
use crate::error::EnvError;
use crate::wrappers::TimeLimit;

/// An environment id together with the episode length it is registered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvSpec {
    pub id: &'static str,
    pub max_episode_steps: usize,
}

pub(crate) const REGISTRY: &[EnvSpec] = &[
    EnvSpec { id: "CartPole-v0", max_episode_steps: 200 },
    EnvSpec { id: "CartPole-v1", max_episode_steps: 500 },
];

/// # Errors
///
/// Returns [`EnvError::UnknownEnv`] if `id` is not registered.
pub(crate) fn spec(id: &str) -> Result<&'static EnvSpec, EnvError> {
    REGISTRY
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| EnvError::UnknownEnv(id.to_owned()))
}

/// Build a registered environment with the default physics.
///
/// # Errors
///
/// Returns [`EnvError::UnknownEnv`] if `id` is not registered.
pub fn make(id: &str) -> Result<TimeLimit<CartPoleEnv>, EnvError> {
    make_with(id, CartPoleConfig::default())
}

/// Build a registered environment with custom physics.
///
/// # Errors
///
/// Returns [`EnvError::UnknownEnv`] if `id` is not registered, or the physics
/// error if `config` is invalid.
pub fn make_with(id: &str, config: CartPoleConfig) -> Result<TimeLimit<CartPoleEnv>, EnvError> {
    let spec = spec(id)?;
    tracing::debug!(id = spec.id, max_episode_steps = spec.max_episode_steps, "making environment");
    Ok(TimeLimit::new(CartPoleEnv::new(config)?, spec.max_episode_steps))
}
