use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("action {action} is not a member of {space}")]
    InvalidAction { action: String, space: String },
    #[error("step called before reset")]
    ResetNeeded,
    #[error("unknown environment id: {0}")]
    UnknownEnv(String),
    #[error("invalid space: {0}")]
    InvalidSpace(&'static str),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("environment failed during episode {episode}")]
    Env {
        episode: usize,
        #[source]
        source: EnvError,
    },
    #[error("failed to write step record")]
    Sink(#[from] std::io::Error),
}
