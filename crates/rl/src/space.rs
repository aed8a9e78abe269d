//! Action and observation spaces.
//!
//! A space knows which values are valid and can draw one at random. Sampling
//! takes the caller's [`fastrand::Rng`] so that a single seeded generator
//! drives every random choice in a run.

use std::fmt;

use crate::error::EnvError;

pub trait Space: fmt::Display {
    type Element;

    /// Draw a random member of the space.
    fn sample(&self, rng: &mut fastrand::Rng) -> Self::Element;

    /// Whether `value` is a member of the space.
    fn contains(&self, value: &Self::Element) -> bool;
}

/// The integers `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    n: usize,
}

impl Discrete {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] when `n` is zero.
    pub fn new(n: usize) -> Result<Self, EnvError> {
        if n == 0 {
            return Err(EnvError::InvalidSpace("discrete space needs at least one element"));
        }
        Ok(Self { n })
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Space for Discrete {
    type Element = usize;

    fn sample(&self, rng: &mut fastrand::Rng) -> usize {
        rng.usize(..self.n)
    }

    fn contains(&self, value: &usize) -> bool {
        *value < self.n
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discrete({})", self.n)
    }
}

/// A box in `R^n` with per-dimension bounds, which may be infinite.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidSpace`] when the bounds differ in length,
    /// contain NaN, or `low > high` in some dimension.
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Result<Self, EnvError> {
        if low.len() != high.len() {
            return Err(EnvError::InvalidSpace("low and high bounds differ in length"));
        }
        if low.iter().chain(&high).any(|v| v.is_nan()) {
            return Err(EnvError::InvalidSpace("bounds must not be NaN"));
        }
        if low.iter().zip(&high).any(|(l, h)| l > h) {
            return Err(EnvError::InvalidSpace("low bound exceeds high bound"));
        }
        Ok(Self { low, high })
    }

    /// Box symmetric around the origin with bounds `[-high, high]`.
    ///
    /// # Errors
    ///
    /// See [`BoxSpace::new`].
    pub fn symmetric(high: Vec<f32>) -> Result<Self, EnvError> {
        let low = high.iter().map(|h| -h).collect();
        Self::new(low, high)
    }

    #[must_use]
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.low.len()
    }
}

impl Space for BoxSpace {
    type Element = Vec<f32>;

    /// Uniform on bounded dimensions, shifted exponential on half-bounded
    /// ones and standard normal on unbounded ones.
    fn sample(&self, rng: &mut fastrand::Rng) -> Vec<f32> {
        self.low
            .iter()
            .zip(&self.high)
            .map(|(&low, &high)| match (low.is_finite(), high.is_finite()) {
                (true, true) => low + (high - low) * rng.f32(),
                (true, false) => low + exponential(rng),
                (false, true) => high - exponential(rng),
                (false, false) => standard_normal(rng),
            })
            .collect()
    }

    fn contains(&self, value: &Vec<f32>) -> bool {
        value.len() == self.dim()
            && value
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (low, high))| v >= low && v <= high)
    }
}

impl fmt::Display for BoxSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box({:?}, {:?})", self.low, self.high)
    }
}

fn exponential(rng: &mut fastrand::Rng) -> f32 {
    // 1 - f32() lies in (0, 1], keeping ln finite.
    -(1.0 - rng.f32()).ln()
}

fn standard_normal(rng: &mut fastrand::Rng) -> f32 {
    // Box-Muller
    let u1 = 1.0 - rng.f32();
    let u2 = rng.f32();
    (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
}
