#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-Pole Physics
//!
//! Classic-control dynamics for a pole balanced on a moving cart.
//!
//! This crate is the physics layer underneath the `rl` crate's CartPole
//! environment. It knows nothing about actions, rewards or episodes: it holds
//! a [`CartPoleState`], applies a left or right [`Push`] of fixed magnitude,
//! integrates the equations of motion with the configured [`Integrator`] and
//! reports whether the system left its safe region.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{CartPole, CartPoleConfig, Push};
//!
//! let mut cartpole = CartPole::new(CartPoleConfig::default())?;
//! while !cartpole.is_terminal() {
//!     cartpole.apply(Push::Right);
//! }
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod cartpole;
pub mod error;
pub mod integrator;

pub use cartpole::{CartPole, CartPoleConfig, CartPoleState, Push};
pub use error::PhysicsError;
pub use integrator::Integrator;
