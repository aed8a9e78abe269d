#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Random-Action Episodes
//!
//! Gym-style environment interface, the CartPole task built on the
//! [`physics`] crate, and an [`EpisodeRunner`] that plays episodes with
//! uniformly random actions.
//!
//! ```rust
//! use rl::{make, ClosePolicy, EpisodeRunner, StepRecord};
//!
//! let env = make("CartPole-v1")?;
//! let mut records: Vec<StepRecord<Vec<f32>, usize>> = Vec::new();
//! let summary = EpisodeRunner::new(env)
//!     .with_seed(42)
//!     .with_close_policy(ClosePolicy::AfterAllEpisodes)
//!     .run(3, 500, &mut records)?;
//! assert_eq!(summary.total_steps(), records.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cartpole;
pub mod env;
pub mod error;
pub mod record;
pub mod registry;
pub mod runner;
pub mod space;
pub mod wrappers;

pub use cartpole::CartPoleEnv;
pub use env::{Env, Info, StepResult};
pub use error::{EnvError, RunError};
pub use record::{JsonLinesSink, RecordSink, StepRecord, TextSink};
pub use registry::{make, make_with, EnvSpec};
pub use runner::{ClosePolicy, EpisodeRunner, EpisodeSummary, RunSummary};
pub use space::{BoxSpace, Discrete, Space};
pub use wrappers::TimeLimit;
