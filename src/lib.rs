//! Stochastic Production Simulation Library
//!
//! Public API for the simulation: a handful of agents accrue work each
//! discrete timestep, optionally scaled by an injected variate source.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod model;
pub mod output;
pub mod systems;
pub mod variate;

pub use components::*;
pub use model::{Model, ModelParams};
pub use variate::{
    ActiveVariate, ConstantVariate, TriangularVariate, UniformVariate, UnitVariate, VariateError,
    VariateSource,
};

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
