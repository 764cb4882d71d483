//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::common::constants::DEFAULT_MAX_INSTRUCTIONS;

/// Configuration for a budgeted run.
///
/// The machine itself has no intrinsic timeout; the budget belongs to
/// the run loop that drives it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Maximum number of instructions to execute before the run is
    /// reported as timed out.
    pub max_instructions: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_instructions: DEFAULT_MAX_INSTRUCTIONS,
        }
    }
}
