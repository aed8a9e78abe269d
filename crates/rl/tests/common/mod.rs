#![allow(dead_code)]

use rl::{BoxSpace, Discrete, Env, EnvError, Info, StepResult};

/// Deterministic environment that reports `done` on a chosen step and counts
/// how it is driven.
#[derive(Debug)]
pub struct ScriptedEnv {
    pub done_at: Option<usize>,
    pub action_space: Discrete,
    pub observation_space: BoxSpace,
    pub fail_at: Option<usize>,
    pub step_in_episode: usize,
    pub resets: usize,
    pub close_calls: usize,
    pub seeds: Vec<Option<u64>>,
    pub actions: Vec<usize>,
}

impl ScriptedEnv {
    /// `done_at` is the 1-based step on which `done` is reported.
    pub fn new(done_at: Option<usize>) -> Self {
        Self {
            done_at,
            action_space: Discrete::new(2).unwrap(),
            observation_space: BoxSpace::symmetric(vec![f32::INFINITY]).unwrap(),
            fail_at: None,
            step_in_episode: 0,
            resets: 0,
            close_calls: 0,
            seeds: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, n: usize) -> Self {
        self.action_space = Discrete::new(n).unwrap();
        self
    }

    pub fn failing_at(mut self, step: usize) -> Self {
        self.fail_at = Some(step);
        self
    }
}

impl Env for ScriptedEnv {
    type Observation = Vec<f32>;
    type Action = usize;
    type ActionSpace = Discrete;
    type ObservationSpace = BoxSpace;

    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f32>, EnvError> {
        self.resets += 1;
        self.seeds.push(seed);
        self.step_in_episode = 0;
        Ok(vec![0.0])
    }

    fn step(&mut self, action: usize) -> Result<StepResult<Vec<f32>>, EnvError> {
        self.step_in_episode += 1;
        if self.fail_at == Some(self.step_in_episode) {
            return Err(EnvError::ResetNeeded);
        }
        self.actions.push(action);
        #[allow(clippy::cast_precision_loss)]
        let observation = vec![self.step_in_episode as f32];
        Ok(StepResult {
            observation,
            reward: 1.0,
            done: self.done_at == Some(self.step_in_episode),
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
        self.close_calls += 1;
        Ok(())
    }
}
