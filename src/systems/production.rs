//! Production System
//!
//! Activates every agent once per step: each agent accrues its production
//! rate scaled by one fresh draw from the shared variate source.

use bevy_ecs::prelude::*;

use crate::components::agent::{Agent, Production, WorkToDate};
use crate::variate::ActiveVariate;
use crate::SimRng;

/// System: advance every agent's accumulated work by one step.
///
/// One draw per agent per step. Activation order is the schedule's; with a
/// stateless source and a single seeded RNG, that order is the only thing
/// besides the seed that affects reproducibility.
pub fn advance_production(
    mut rng: ResMut<SimRng>,
    mut variate: ResMut<ActiveVariate>,
    mut agents: Query<(&Production, &mut WorkToDate), With<Agent>>,
) {
    for (production, mut work) in agents.iter_mut() {
        let multiplier = variate.sample(&mut rng.0);
        work.accrue(production.0, multiplier);
    }
}
