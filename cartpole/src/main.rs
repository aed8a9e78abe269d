//! # CartPole Runner
//!
//! Entry point for the `cartpole` binary.
//!
//! Step records go to stdout; logs go to stderr and follow `RUST_LOG`
//! (default `info`).

use std::io::{self, BufWriter};

use anyhow::Result;
use cartpole::{app, cli::Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().resolve()?;
    let stdout = io::stdout();
    app::run(&config, BufWriter::new(stdout.lock()))?;
    Ok(())
}
