//! Simulation Systems
//!
//! Systems registered with the activation schedule.

pub mod production;

pub use production::advance_production;
