//! Run statistics collection and reporting.

use serde::Serialize;

/// Counters collected over one run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RunStats {
    /// Instructions fully retired before the run ended.
    pub instructions: u64,
    /// Wall-clock runtime in milliseconds.
    pub runtime_ms: f64,
}

impl RunStats {
    /// Execution speed in millions of instructions per second.
    ///
    /// Zero when the run was too short to time.
    pub fn mips(&self) -> f64 {
        if self.runtime_ms > 0.0 {
            self.instructions as f64 / self.runtime_ms / 1_000.0
        } else {
            0.0
        }
    }
}
