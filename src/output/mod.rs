//! Step Output
//!
//! Step records and the append-only JSONL step log.

pub mod log;

pub use log::{StepLog, StepRecord};
