//! Multiply/divide extension (RV32M).
//!
//! M-extension instructions share [`OP_REG`](crate::isa::rv32i::opcodes::OP_REG)
//! with the base set and are selected by bit 0 of `funct7`.

/// Function code 3 definitions for multiply/divide operations.
pub mod funct3;

/// Function code 7 definitions for multiply/divide operations.
pub mod funct7;
