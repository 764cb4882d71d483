//! Emulator-wide constants.
//!
//! Memory geometry and the field widths used by the decoder and the
//! execution engine.

/// Total memory size in bytes (64 KiB).
pub const MEMORY_SIZE: usize = 64 * 1024;

/// Number of 32-bit instruction words that fit in memory.
///
/// The program counter is a *word index*; it is valid iff it is below
/// this bound.
pub const MEMORY_WORDS: u32 = (MEMORY_SIZE / 4) as u32;

/// Number of integer and floating-point registers.
pub const REG_COUNT: usize = 32;

/// Mask applied to shift amounts (low 5 bits of the immediate or of rs2).
pub const SHAMT_MASK: u32 = 0b11111;

/// Default instruction budget for a run (matches the reference run loop).
pub const DEFAULT_MAX_INSTRUCTIONS: u64 = 10_000_000;
