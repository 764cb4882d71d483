//! RISC-V RV32IMAFD emulator CLI.
//!
//! Loads a raw program image at address 0, runs it under an instruction
//! budget, and reports the outcome plus the final register file — as
//! plain text or as JSON.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rv32emu_core::common::constants::DEFAULT_MAX_INSTRUCTIONS;
use rv32emu_core::sim::{self, RunOutcome, RunReport};
use rv32emu_core::{Cpu, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rv32emu",
    version,
    about = "RISC-V RV32IMAFD emulator",
    long_about = "Run a raw little-endian RV32 image.\n\n\
        The image is loaded at address 0 and executed from there until the \
        program halts (zero-offset JAL), faults, or the instruction budget \
        runs out.\n\nExamples:\n  rv32emu program.bin\n  rv32emu program.bin --max-steps 1000000 --json"
)]
struct Cli {
    /// Raw program image (little-endian 32-bit instruction words).
    image: PathBuf,

    /// Instruction budget before the run is reported as timed out.
    #[arg(long, default_value_t = DEFAULT_MAX_INSTRUCTIONS)]
    max_steps: u64,

    /// Emit the run report and register file as JSON.
    #[arg(long)]
    json: bool,
}

/// JSON output document: the run report plus the final register file.
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a RunReport,
    registers: [u32; 32],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cpu = Cpu::new();
    if let Err(e) = sim::load_image(&mut cpu, &cli.image) {
        eprintln!("rv32emu: {e}");
        process::exit(1);
    }

    if !cli.json {
        println!("loading {}", cli.image.display());
        println!("running");
    }

    let config = RunConfig {
        max_instructions: cli.max_steps,
    };
    let report = sim::run(&mut cpu, &config);

    if cli.json {
        print_json(&report, &cpu);
    } else {
        print_text(&report, &cpu);
    }

    let code = match report.outcome {
        RunOutcome::Halted => 0,
        RunOutcome::Faulted(_) => 1,
        RunOutcome::TimedOut => 2,
    };
    process::exit(code);
}

fn print_text(report: &RunReport, cpu: &Cpu) {
    println!("-----");
    match report.outcome {
        RunOutcome::Halted => println!("program ended"),
        RunOutcome::Faulted(fault) => println!("program failed: {fault}"),
        RunOutcome::TimedOut => println!("program timed out"),
    }

    println!(
        "ran {} instructions in {:.0} ms",
        report.stats.instructions, report.stats.runtime_ms
    );
    println!("execution speed: {:.0} MHz", report.stats.mips());

    println!("registers:");
    let regs = cpu.registers();
    for (i, value) in regs.iter().enumerate().skip(1) {
        println!(
            "  {:>3} = 0x{:08x} {}",
            format!("x{i}"),
            value,
            *value as i32
        );
    }
}

fn print_json(report: &RunReport, cpu: &Cpu) {
    let doc = JsonOutput {
        report,
        registers: cpu.registers(),
    };
    match serde_json::to_string_pretty(&doc) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("rv32emu: failed to serialize report: {e}");
            process::exit(1);
        }
    }
}
