//! Variate Sources
//!
//! Injected randomizer strategies. A variate source produces one multiplier
//! per agent per step; all randomness flows through the model-owned seeded
//! RNG, so the sources themselves are stateless and safe to share across
//! every agent in a model.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

/// Errors from variate source construction
#[derive(Debug, Error, PartialEq)]
pub enum VariateError {
    #[error("invalid range: low {low} must be less than high {high}")]
    InvalidRange { low: f64, high: f64 },
    #[error("mode {mode} outside range [{low}, {high}]")]
    ModeOutOfRange { low: f64, high: f64, mode: f64 },
}

/// Strategy for drawing production multipliers.
///
/// Implementations draw against the caller-supplied RNG rather than carrying
/// generator state of their own. Reproducibility therefore depends only on the
/// seed and on agent activation order, which the schedule owns.
pub trait VariateSource: Send + Sync {
    /// Draw the next multiplier.
    fn sample(&mut self, rng: &mut SmallRng) -> f64;

    /// Short human-readable description for diagnostics.
    fn describe(&self) -> String;
}

/// Always 1.0 - the explicit form of "no randomizer"
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitVariate;

impl VariateSource for UnitVariate {
    fn sample(&mut self, _rng: &mut SmallRng) -> f64 {
        1.0
    }

    fn describe(&self) -> String {
        "unit".to_string()
    }
}

/// Always the same fixed multiplier
#[derive(Debug, Clone, Copy)]
pub struct ConstantVariate(pub f64);

impl VariateSource for ConstantVariate {
    fn sample(&mut self, _rng: &mut SmallRng) -> f64 {
        self.0
    }

    fn describe(&self) -> String {
        format!("constant({})", self.0)
    }
}

/// Uniform draw in `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformVariate {
    low: f64,
    high: f64,
}

impl UniformVariate {
    pub fn new(low: f64, high: f64) -> Result<Self, VariateError> {
        if !(low < high) {
            return Err(VariateError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }
}

impl VariateSource for UniformVariate {
    fn sample(&mut self, rng: &mut SmallRng) -> f64 {
        rng.gen_range(self.low..self.high)
    }

    fn describe(&self) -> String {
        format!("uniform({}, {})", self.low, self.high)
    }
}

/// Triangular draw over `[low, high]` peaking at `mode`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularVariate {
    low: f64,
    high: f64,
    mode: f64,
}

impl TriangularVariate {
    pub fn new(low: f64, high: f64, mode: f64) -> Result<Self, VariateError> {
        if !(low < high) {
            return Err(VariateError::InvalidRange { low, high });
        }
        if mode < low || mode > high {
            return Err(VariateError::ModeOutOfRange { low, high, mode });
        }
        Ok(Self { low, high, mode })
    }
}

impl VariateSource for TriangularVariate {
    fn sample(&mut self, rng: &mut SmallRng) -> f64 {
        // Inverse CDF of the triangular distribution
        let u: f64 = rng.gen();
        let span = self.high - self.low;
        let cut = (self.mode - self.low) / span;
        if u < cut {
            self.low + (span * (self.mode - self.low) * u).sqrt()
        } else {
            self.high - (span * (self.high - self.mode) * (1.0 - u)).sqrt()
        }
    }

    fn describe(&self) -> String {
        format!("triangular({}, {}, mode={})", self.low, self.high, self.mode)
    }
}

/// Resource holding the variate source shared by every agent in a model.
///
/// `None` means agents accrue their raw production rate (multiplier 1.0)
/// without consuming any randomness.
#[derive(Resource, Default)]
pub struct ActiveVariate(pub Option<Box<dyn VariateSource>>);

impl ActiveVariate {
    pub fn new(source: Option<Box<dyn VariateSource>>) -> Self {
        Self(source)
    }

    /// Draw the next multiplier, or 1.0 when no source is active.
    pub fn sample(&mut self, rng: &mut SmallRng) -> f64 {
        match self.0 {
            Some(ref mut source) => source.sample(rng),
            None => 1.0,
        }
    }

    pub fn describe(&self) -> String {
        match self.0 {
            Some(ref source) => source.describe(),
            None => "none".to_string(),
        }
    }
}
