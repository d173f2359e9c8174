//! ECS Components
//!
//! Component definitions for production agents.

pub mod agent;

pub use agent::{Agent, AgentId, Production, WorkToDate};
