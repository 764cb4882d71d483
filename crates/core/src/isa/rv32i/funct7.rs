//! Base integer (I) function codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share
//! the same `funct3`.

/// Default operation (ADD, SRL, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI); bit 5 of funct7.
pub const SUB: u32 = 0b0100000;
/// Alias for [`SUB`] (used for the arithmetic right shifts).
pub const SRA: u32 = 0b0100000;
