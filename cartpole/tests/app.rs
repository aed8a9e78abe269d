use std::path::PathBuf;

use cartpole::app;
use cartpole::cli::Cli;
use cartpole::config::{OutputFormat, RunConfig};
use clap::Parser;
use physics::Integrator;
use rl::ClosePolicy;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn seeded(seed: u64) -> RunConfig {
    RunConfig { seed: Some(seed), ..RunConfig::default() }
}

#[test]
fn default_run_prints_one_line_per_step() {
    let mut out = Vec::new();
    let summary = app::run(&seeded(3), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(summary.episodes.len(), 10);
    assert_eq!(text.lines().count(), summary.total_steps());
    assert!(summary.episodes.iter().all(|e| e.steps <= 500));
    for line in text.lines() {
        let action = line.rsplit(' ').next().unwrap();
        assert!(action == "0" || action == "1", "{line}");
    }
}

#[test]
fn seeded_runs_print_identical_output() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    app::run(&seeded(99), &mut first).unwrap();
    app::run(&seeded(99), &mut second).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn jsonl_output_parses_line_by_line() {
    let config = RunConfig { format: OutputFormat::Jsonl, episodes: 2, ..seeded(5) };
    let mut out = Vec::new();
    let summary = app::run(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let records: Vec<serde_json::Value> =
        text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(records.len(), summary.total_steps());
    assert_eq!(records[0]["episode"], 0);
    assert_eq!(records[0]["step"], 0);
    assert_eq!(records[0]["observation"].as_array().unwrap().len(), 4);
    let last = records.last().unwrap();
    assert_eq!(last["episode"], 1);
    assert_eq!(last["done"], true);
}

#[test]
fn zero_step_budget_prints_nothing() {
    let config = RunConfig { max_steps: 0, ..seeded(1) };
    let mut out = Vec::new();
    let summary = app::run(&config, &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(summary.close_calls, 0);
}

#[test]
fn unknown_environment_fails() {
    let config = RunConfig { env_id: "Pendulum-v1".into(), ..RunConfig::default() };
    let err = app::run(&config, Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("unknown environment id: Pendulum-v1"));
}

#[test]
fn config_file_is_loaded() {
    let config = RunConfig::load(&data("short_run.json")).unwrap();
    assert_eq!(config.env_id, "CartPole-v0");
    assert_eq!(config.episodes, 3);
    assert_eq!(config.max_steps, 50);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.close_policy, ClosePolicy::AfterAllEpisodes);
    assert_eq!(config.physics.integrator, Integrator::SemiImplicitEuler);
    assert_eq!(config.format, OutputFormat::Text);

    let summary = app::run(&config, Vec::new()).unwrap();
    assert_eq!(summary.close_calls, 1);
    assert!(summary.episodes.iter().all(|e| e.steps <= 50));
}

#[test]
fn missing_config_file_is_reported() {
    let err = RunConfig::load(&data("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn flags_override_config_file() {
    let path = data("short_run.json");
    let cli = Cli::try_parse_from([
        "cartpole",
        "--config",
        path.to_str().unwrap(),
        "--episodes",
        "7",
        "--close-policy",
        "on-termination",
        "--format",
        "jsonl",
    ])
    .unwrap();
    let config = cli.resolve().unwrap();

    assert_eq!(config.episodes, 7);
    assert_eq!(config.close_policy, ClosePolicy::OnTermination);
    assert_eq!(config.format, OutputFormat::Jsonl);
    // Untouched values come from the file.
    assert_eq!(config.max_steps, 50);
    assert_eq!(config.seed, Some(11));
}

#[test]
fn no_flags_means_reference_defaults() {
    let config = Cli::try_parse_from(["cartpole"]).unwrap().resolve().unwrap();
    assert_eq!(config, RunConfig::default());
}

#[test]
fn bad_close_policy_flag_is_rejected() {
    assert!(Cli::try_parse_from(["cartpole", "--close-policy", "sometimes"]).is_err());
}
