#![deny(clippy::all, clippy::pedantic)]
//! # CartPole Random Games
//!
//! Library half of the `cartpole` binary. The binary only parses flags,
//! installs logging and calls [`app::run`]; everything it does can be driven
//! from here without touching stdout.
//!
//! ## Crates
//!
//! -   **[`physics`]:** cart-pole equations of motion and integrators.
//! -   **[`rl`]:** the environment trait, spaces, the CartPole environment,
//!     the time-limit wrapper and the episode runner.
//! -   **`cartpole`:** configuration, command line and the application loop.

pub mod app;
pub mod cli;
pub mod config;

pub use physics;
pub use rl;
