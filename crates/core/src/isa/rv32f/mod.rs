//! Single-precision floating-point extension (RV32F).
//!
//! Holds the opcodes shared by both floating-point extensions and the
//! single-precision (fmt = 00) function codes. The double-precision
//! (fmt = 01) funct7 variants live in [`rv32d`](crate::isa::rv32d).

/// Function code 3 definitions for floating-point operations.
pub mod funct3;

/// Function code 7 definitions for single-precision operations.
pub mod funct7;

/// Floating-point opcodes (loads, stores, arithmetic, fused).
pub mod opcodes;
