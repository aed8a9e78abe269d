//! # Kinematics Integration
//!
//! Advances a cart-pole state by one time step given the accelerations
//! produced by the equations of motion.

use serde::Deserialize;

use crate::cartpole::CartPoleState;

/// Numerical scheme used to advance positions and velocities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Integrator {
    /// Positions move with the velocities from the start of the step.
    #[default]
    Euler,
    /// Velocities are updated first and positions move with the new values.
    SemiImplicitEuler,
}

impl Integrator {
    /// Advance `state` by `tau` seconds under cart acceleration `x_acc` and
    /// pole angular acceleration `theta_acc`.
    #[must_use]
    pub fn advance(self, state: CartPoleState, x_acc: f32, theta_acc: f32, tau: f32) -> CartPoleState {
        let CartPoleState { x, x_dot, theta, theta_dot } = state;
        match self {
            Integrator::Euler => CartPoleState {
                x: x + tau * x_dot,
                x_dot: x_dot + tau * x_acc,
                theta: theta + tau * theta_dot,
                theta_dot: theta_dot + tau * theta_acc,
            },
            Integrator::SemiImplicitEuler => {
                let x_dot = x_dot + tau * x_acc;
                let theta_dot = theta_dot + tau * theta_acc;
                CartPoleState {
                    x: x + tau * x_dot,
                    x_dot,
                    theta: theta + tau * theta_dot,
                    theta_dot,
                }
            }
        }
    }
}
