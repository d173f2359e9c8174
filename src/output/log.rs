//! Step Log
//!
//! Append-only JSONL logging of per-step records, decoupled from the
//! model's own computation.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One model step's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number
    pub step: u64,
    /// Sum of all agents' work to date after this step
    pub total_production: f64,
}

/// Writes one `StepRecord` per line to a JSONL file
pub struct StepLog {
    writer: Option<BufWriter<File>>,
    record_count: u64,
}

impl StepLog {
    /// Create a new step log writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            record_count: 0,
        })
    }

    /// Create a log that discards records (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            record_count: 0,
        }
    }

    /// Get the number of records logged so far
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Log a record to the file
    pub fn log(&mut self, record: &StepRecord) -> std::io::Result<()> {
        self.record_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for StepLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("Warning: Failed to flush step log: {}", e);
        }
    }
}
