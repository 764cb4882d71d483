//! Budgeted run loop.
//!
//! Drives [`Cpu::step`] until the machine halts, faults, or the
//! configured instruction budget is exhausted. The timeout belongs here,
//! not to the machine: the core never terminates a run on its own except
//! through its Halt and Fault outcomes.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::common::error::{Fault, Outcome};
use crate::config::RunConfig;
use crate::core::Cpu;
use crate::stats::RunStats;

/// Why a run ended.
///
/// All three causes are distinguishable so diagnostics can report the
/// correct one: a deliberate halt, a machine fault, or the caller's
/// budget running out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// The program terminated deliberately (zero-offset JAL).
    Halted,
    /// The machine raised a terminal fault.
    Faulted(Fault),
    /// The instruction budget was exhausted before the program ended.
    TimedOut,
}

/// Result of a complete run: the terminal outcome plus statistics.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct RunReport {
    /// Why the run ended.
    pub outcome: RunOutcome,
    /// Counters collected over the run.
    pub stats: RunStats,
}

/// Runs the machine until a terminal outcome or the budget is exhausted.
///
/// Instructions that end the run (the halting JAL, a faulting access)
/// are not counted as retired.
pub fn run(cpu: &mut Cpu, config: &RunConfig) -> RunReport {
    debug!(max_instructions = config.max_instructions, "run started");
    let start = Instant::now();

    let mut retired: u64 = 0;
    let outcome = loop {
        match cpu.step() {
            Outcome::Continue => {
                retired += 1;
                if retired >= config.max_instructions {
                    break RunOutcome::TimedOut;
                }
            }
            Outcome::Halt => break RunOutcome::Halted,
            Outcome::Fault(fault) => break RunOutcome::Faulted(fault),
        }
    };

    let stats = RunStats {
        instructions: retired,
        runtime_ms: start.elapsed().as_secs_f64() * 1000.0,
    };
    info!(?outcome, instructions = retired, "run finished");

    RunReport { outcome, stats }
}
