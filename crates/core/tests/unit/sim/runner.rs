//! Run-loop tests.
//!
//! The runner owns the timeout; the machine owns Halt and Fault. All
//! three terminal causes must be distinguishable in the report.

use pretty_assertions::assert_eq;

use crate::common::harness::{cpu_with_program, i_type, j_type};
use rv32emu_core::isa::rv32i::{funct3, opcodes};
use rv32emu_core::sim::{RunOutcome, run};
use rv32emu_core::{Fault, RunConfig};

fn budget(max_instructions: u64) -> RunConfig {
    RunConfig { max_instructions }
}

#[test]
fn halting_program_reports_halted() {
    // Two ADDIs, then the zero-offset JAL sentinel.
    let mut cpu = cpu_with_program(&[
        i_type(opcodes::OP_IMM, 1, funct3::ADD_SUB, 0, 5),
        i_type(opcodes::OP_IMM, 2, funct3::ADD_SUB, 1, 5),
        j_type(opcodes::OP_JAL, 0, 0),
    ]);
    let report = run(&mut cpu, &RunConfig::default());

    assert_eq!(report.outcome, RunOutcome::Halted);
    // The halting JAL itself is not counted as retired.
    assert_eq!(report.stats.instructions, 2);
    assert_eq!(cpu.regs.read(2), 10);
}

#[test]
fn infinite_loop_reports_timeout_at_budget() {
    // ADDI x1, x1, 1 ; JAL x0, -4 — never halts.
    let mut cpu = cpu_with_program(&[
        i_type(opcodes::OP_IMM, 1, funct3::ADD_SUB, 1, 1),
        j_type(opcodes::OP_JAL, 0, -4),
    ]);
    let report = run(&mut cpu, &budget(100));

    assert_eq!(report.outcome, RunOutcome::TimedOut);
    assert_eq!(report.stats.instructions, 100);
}

#[test]
fn faulting_program_reports_fault_kind() {
    let mut cpu = cpu_with_program(&[0xFFFF_FFFF]);
    let report = run(&mut cpu, &RunConfig::default());

    assert_eq!(
        report.outcome,
        RunOutcome::Faulted(Fault::IllegalInstruction(0xFFFF_FFFF))
    );
    assert_eq!(report.stats.instructions, 0);
}

#[test]
fn zeroed_memory_faults_immediately() {
    // An all-zero word is not a defined instruction.
    let mut cpu = cpu_with_program(&[]);
    let report = run(&mut cpu, &RunConfig::default());
    assert_eq!(
        report.outcome,
        RunOutcome::Faulted(Fault::IllegalInstruction(0))
    );
}

#[test]
fn default_budget_matches_reference_run_loop() {
    assert_eq!(RunConfig::default().max_instructions, 10_000_000);
}
