//! Double-precision floating-point extension (RV32D).
//!
//! Double-precision instructions share the opcodes in
//! [`rv32f::opcodes`](crate::isa::rv32f::opcodes); only their funct7
//! encodings (format bits `01`) differ.

/// Function code 7 definitions for double-precision operations.
pub mod funct7;
