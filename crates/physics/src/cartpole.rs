//! CartPole dynamics for reinforcement learning environments
//!
//! A pole is hinged on top of a cart that moves along a frictionless track.
//! The cart is pushed left or right with a fixed force each step, and the
//! equations of motion are integrated with a fixed time step.

use serde::Deserialize;

use crate::error::PhysicsError;
use crate::integrator::Integrator;

/// Configuration for a CartPole system
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CartPoleConfig {
    /// Gravitational acceleration in m/s^2
    pub gravity: f32,
    /// Cart mass in kg
    pub cart_mass: f32,
    /// Pole mass in kg
    pub pole_mass: f32,
    /// Half of the pole length in meters
    pub half_pole_length: f32,
    /// Force magnitude applied to the cart on every push
    pub force_magnitude: f32,
    /// Seconds between state updates
    pub tau: f32,
    /// Integration scheme
    pub integrator: Integrator,
    /// Angle threshold for failure detection (radians)
    pub failure_angle: f32,
    /// Position threshold for failure detection (meters)
    pub position_limit: f32,
}

impl Default for CartPoleConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            half_pole_length: 0.5,
            force_magnitude: 10.0,
            tau: 0.02,
            integrator: Integrator::Euler,
            failure_angle: 12.0 * 2.0 * std::f32::consts::PI / 360.0,
            position_limit: 2.4,
        }
    }
}

impl CartPoleConfig {
    /// Check that every value is finite and that quantities which must be
    /// positive are.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = [
            ("cart_mass", self.cart_mass),
            ("pole_mass", self.pole_mass),
            ("half_pole_length", self.half_pole_length),
            ("tau", self.tau),
            ("failure_angle", self.failure_angle),
            ("position_limit", self.position_limit),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(PhysicsError::InvalidConfig { field, value, reason: "must be finite" });
            }
            if value <= 0.0 {
                return Err(PhysicsError::InvalidConfig { field, value, reason: "must be positive" });
            }
        }
        for (field, value) in [("gravity", self.gravity), ("force_magnitude", self.force_magnitude)] {
            if !value.is_finite() {
                return Err(PhysicsError::InvalidConfig { field, value, reason: "must be finite" });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn total_mass(&self) -> f32 {
        self.cart_mass + self.pole_mass
    }

    #[must_use]
    pub fn pole_mass_length(&self) -> f32 {
        self.pole_mass * self.half_pole_length
    }
}

/// Full cart-pole state: `[x, x_dot, theta, theta_dot]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartPoleState {
    /// Cart position along the track
    pub x: f32,
    /// Cart velocity
    pub x_dot: f32,
    /// Pole angle from vertical (radians), positive leaning right
    pub theta: f32,
    /// Pole angular velocity
    pub theta_dot: f32,
}

impl CartPoleState {
    #[must_use]
    pub const fn from_array([x, x_dot, theta, theta_dot]: [f32; 4]) -> Self {
        Self { x, x_dot, theta, theta_dot }
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.x_dot, self.theta, self.theta_dot]
    }
}

/// Direction of the force applied to the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Push {
    Left,
    Right,
}

/// A CartPole system
#[derive(Clone, Debug)]
pub struct CartPole {
    config: CartPoleConfig,
    state: CartPoleState,
}

impl CartPole {
    /// Create a cart-pole at rest in the upright position.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: CartPoleConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self { config, state: CartPoleState::default() })
    }

    #[must_use]
    pub fn config(&self) -> &CartPoleConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> CartPoleState {
        self.state
    }

    pub fn set_state(&mut self, state: CartPoleState) {
        self.state = state;
    }

    /// Cart and pole accelerations `(x_acc, theta_acc)` under `force`.
    #[must_use]
    pub fn accelerations(&self, force: f32) -> (f32, f32) {
        let c = &self.config;
        let CartPoleState { theta, theta_dot, .. } = self.state;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let total_mass = c.total_mass();
        let pole_mass_length = c.pole_mass_length();

        let temp = (force + pole_mass_length * theta_dot * theta_dot * sin_theta) / total_mass;
        let theta_acc = (c.gravity * sin_theta - cos_theta * temp)
            / (c.half_pole_length * (4.0 / 3.0 - c.pole_mass * cos_theta * cos_theta / total_mass));
        let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;
        (x_acc, theta_acc)
    }

    /// Push the cart and advance the system by one time step.
    pub fn apply(&mut self, push: Push) -> CartPoleState {
        let force = match push {
            Push::Left => -self.config.force_magnitude,
            Push::Right => self.config.force_magnitude,
        };
        let (x_acc, theta_acc) = self.accelerations(force);
        self.state = self
            .config
            .integrator
            .advance(self.state, x_acc, theta_acc, self.config.tau);
        self.state
    }

    /// Whether the cart left the track or the pole fell past the failure angle.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.x.abs() > self.config.position_limit
            || self.state.theta.abs() > self.config.failure_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_thresholds_match_classic_control() {
        let config = CartPoleConfig::default();
        assert_relative_eq!(config.failure_angle, 0.209_439_5, epsilon = 1e-6);
        assert_relative_eq!(config.total_mass(), 1.1);
        assert_relative_eq!(config.pole_mass_length(), 0.05);
    }

    #[test]
    fn rejects_non_positive_tau() {
        let config = CartPoleConfig { tau: 0.0, ..CartPoleConfig::default() };
        let err = CartPole::new(config).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfig { field: "tau", .. }));
    }

    #[test]
    fn rejects_nan_gravity() {
        let config = CartPoleConfig { gravity: f32::NAN, ..CartPoleConfig::default() };
        assert!(CartPole::new(config).is_err());
    }

    #[test]
    fn push_from_rest_moves_cart_and_tilts_pole_opposite() {
        let mut cp = CartPole::new(CartPoleConfig::default()).unwrap();
        // Euler: first step only changes velocities.
        let s = cp.apply(Push::Right);
        assert_relative_eq!(s.x, 0.0);
        assert!(s.x_dot > 0.0);
        assert!(s.theta_dot < 0.0);

        let s = cp.apply(Push::Right);
        assert!(s.x > 0.0);
        assert!(s.theta < 0.0);
    }

    #[test]
    fn first_step_matches_reference_values() {
        let mut cp = CartPole::new(CartPoleConfig::default()).unwrap();
        let s = cp.apply(Push::Right);
        // temp = 10 / 1.1, theta_acc = -temp / (0.5 * (4/3 - 0.1/1.1))
        assert_relative_eq!(s.x_dot, 0.195_121_95, epsilon = 1e-6);
        assert_relative_eq!(s.theta_dot, -0.292_682_93, epsilon = 1e-6);
    }

    #[test]
    fn terminal_outside_track_or_angle() {
        let mut cp = CartPole::new(CartPoleConfig::default()).unwrap();
        assert!(!cp.is_terminal());
        cp.set_state(CartPoleState::from_array([2.5, 0.0, 0.0, 0.0]));
        assert!(cp.is_terminal());
        cp.set_state(CartPoleState::from_array([0.0, 0.0, -0.25, 0.0]));
        assert!(cp.is_terminal());
        cp.set_state(CartPoleState::from_array([2.4, 0.0, 0.2, 0.0]));
        assert!(!cp.is_terminal());
    }
}
