//! Production Model
//!
//! The owning container: holds the ECS world with its agents, drives
//! simulation time forward one step at a time, and aggregates total
//! production after each step.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::agent::{Agent, AgentId, Production, WorkToDate, DEFAULT_PRODUCTION};
use crate::output::StepRecord;
use crate::systems::advance_production;
use crate::variate::{ActiveVariate, VariateSource};
use crate::SimRng;

/// Parameters for constructing a model
pub struct ModelParams {
    /// Number of agents to spawn
    pub num_agents: usize,
    /// Production rate assigned to every agent
    pub default_production: f64,
    /// Seed for the model-owned RNG
    pub seed: u64,
    /// Variate source shared by all agents; `None` means multiplier 1.0
    pub variate: Option<Box<dyn VariateSource>>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            num_agents: 1,
            default_production: DEFAULT_PRODUCTION,
            seed: 42,
            variate: None,
        }
    }
}

/// The simulation model.
///
/// Agents are spawned once at construction and never added or removed later.
/// Each `step()` delegates one activation pass to the schedule, which invokes
/// every agent exactly once; activation order is the schedule's concern.
pub struct Model {
    world: World,
    schedule: Schedule,
    num_agents: usize,
    num_steps: u64,
}

impl Model {
    /// Build a model with `params.num_agents` agents, all sharing the same
    /// production rate and variate source.
    pub fn new(params: ModelParams) -> Self {
        let mut world = World::new();

        world.insert_resource(SimRng(SmallRng::seed_from_u64(params.seed)));

        let variate = ActiveVariate::new(params.variate);
        let variate_desc = variate.describe();
        world.insert_resource(variate);

        // Spawn order defines identity order
        for i in 0..params.num_agents {
            let id = AgentId(i as u32);
            world.spawn((
                Agent,
                id,
                Production(params.default_production),
                WorkToDate::default(),
            ));
            tracing::debug!(
                "Agent {} initialized: production={}, variate={}",
                id.0,
                params.default_production,
                variate_desc
            );
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(advance_production);

        Self {
            world,
            schedule,
            num_agents: params.num_agents,
            num_steps: 0,
        }
    }

    /// Advance the model by one step.
    ///
    /// Increments the step counter, runs one activation pass over all agents,
    /// then aggregates and reports total production.
    pub fn step(&mut self) -> StepRecord {
        self.num_steps += 1;
        self.schedule.run(&mut self.world);

        let total = self.total_production();
        tracing::info!("Step {}, Production to date: {:.0}", self.num_steps, total);

        StepRecord {
            step: self.num_steps,
            total_production: total,
        }
    }

    /// Number of agents in the model
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Number of steps run so far
    pub fn num_steps(&self) -> u64 {
        self.num_steps
    }

    /// Sum of all agents' work to date
    pub fn total_production(&mut self) -> f64 {
        let mut query = self.world.query_filtered::<&WorkToDate, With<Agent>>();
        query.iter(&self.world).map(|work| work.0).sum()
    }

    /// Per-agent accumulated work, sorted by identity
    pub fn agent_work(&mut self) -> Vec<(AgentId, f64)> {
        let mut query = self
            .world
            .query_filtered::<(&AgentId, &WorkToDate), With<Agent>>();
        let mut work: Vec<(AgentId, f64)> = query
            .iter(&self.world)
            .map(|(id, work)| (*id, work.0))
            .collect();
        work.sort_by_key(|(id, _)| *id);
        work
    }
}
