//! The CartPole balancing task.

use physics::{CartPole, CartPoleConfig, CartPoleState, Push};

use crate::env::{Env, Info, StepResult};
use crate::error::EnvError;
use crate::space::{BoxSpace, Discrete, Space};

/// Half-width of the interval each state component is drawn from on reset.
const RESET_BOUND: f32 = 0.05;

/// Environment for balancing a pole by pushing its cart left (action 0) or
/// right (action 1).
///
/// Observations are `[x, x_dot, theta, theta_dot]`. Every step earns a reward
/// of 1.0 up to and including the one that ends the episode; stepping on
/// after that earns 0.0 and logs a warning.
#[derive(Debug)]
pub struct CartPoleEnv {
    cartpole: CartPole,
    action_space: Discrete,
    observation_space: BoxSpace,
    rng: fastrand::Rng,
    /// `false` until the first reset and again after close.
    active: bool,
    steps_beyond_terminated: Option<u32>,
}

impl CartPoleEnv {
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: CartPoleConfig) -> Result<Self, EnvError> {
        let cartpole = CartPole::new(config)?;
        let c = cartpole.config();
        // Observation bounds are twice the failure thresholds so that the
        // terminal state itself is still observable.
        let observation_space = BoxSpace::symmetric(vec![
            c.position_limit * 2.0,
            f32::INFINITY,
            c.failure_angle * 2.0,
            f32::INFINITY,
        ])?;
        Ok(Self {
            cartpole,
            action_space: Discrete::new(2)?,
            observation_space,
            rng: fastrand::Rng::new(),
            active: false,
            steps_beyond_terminated: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> CartPoleState {
        self.cartpole.state()
    }

    #[must_use]
    pub fn config(&self) -> &CartPoleConfig {
        self.cartpole.config()
    }
}

impl Env for CartPoleEnv {
    type Observation = Vec<f32>;
    type Action = usize;
    type ActionSpace = Discrete;
    type ObservationSpace = BoxSpace;

    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, EnvError> {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        let draw = || -RESET_BOUND + 2.0 * RESET_BOUND * self.rng.f32();
        let state = CartPoleState::from_array([draw(), draw(), draw(), draw()]);
        self.cartpole.set_state(state);
        self.active = true;
        self.steps_beyond_terminated = None;
        tracing::debug!(?state, "cartpole reset");
        Ok(state.to_array().to_vec())
    }

    fn step(&mut self, action: usize) -> Result<StepResult<Vec<f32>>, EnvError> {
        if !self.action_space.contains(&action) {
            return Err(EnvError::InvalidAction {
                action: action.to_string(),
                space: self.action_space.to_string(),
            });
        }
        if !self.active {
            return Err(EnvError::ResetNeeded);
        }

        let push = if action == 1 { Push::Right } else { Push::Left };
        let state = self.cartpole.apply(push);
        let done = self.cartpole.is_terminal();

        let reward = if !done {
            1.0
        } else if let Some(beyond) = self.steps_beyond_terminated.as_mut() {
            if *beyond == 0 {
                tracing::warn!(
                    "step() called after the episode already returned done = true; \
                     call reset() before stepping again"
                );
            }
            *beyond += 1;
            0.0
        } else {
            // Pole just fell.
            self.steps_beyond_terminated = Some(0);
            1.0
        };

        Ok(StepResult {
            observation: state.to_array().to_vec(),
            reward,
            done,
            truncated: false,
            info: Info::new(),
        })
    }

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    fn close(&mut self) -> Result<(), EnvError> {
        if self.active {
            tracing::debug!("cartpole closed");
        }
        self.active = false;
        Ok(())
    }
}
