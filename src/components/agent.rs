//! Agent Components
//!
//! Components for production agents: identity, production rate, accumulated work.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Default production rate for an agent when none is configured
pub const DEFAULT_PRODUCTION: f64 = 10.0;

/// Marker component identifying an entity as a production agent
#[derive(Component, Debug, Clone, Default)]
pub struct Agent;

/// Unique identifier for an agent.
///
/// Identities are dense from 0 in spawn order and unique within one model.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AgentId(pub u32);

/// Production rate per step - fixed at spawn
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Production(pub f64);

impl Default for Production {
    fn default() -> Self {
        Self(DEFAULT_PRODUCTION)
    }
}

/// Work accumulated so far.
///
/// Monotonically non-decreasing; only the production system touches it,
/// once per step per agent.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorkToDate(pub f64);

impl WorkToDate {
    /// Add one step's production to the running total.
    pub fn accrue(&mut self, production: f64, multiplier: f64) {
        self.0 += production * multiplier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrue_adds_scaled_production() {
        let mut work = WorkToDate::default();
        work.accrue(10.0, 1.0);
        work.accrue(10.0, 2.0);
        assert_eq!(work.0, 30.0);
    }

    #[test]
    fn test_default_production() {
        assert_eq!(Production::default().0, 10.0);
    }
}
