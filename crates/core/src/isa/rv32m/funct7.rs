//! Multiply/divide (M) function codes (funct7).

/// Selects the M extension within `OP_REG` (bit 0 of funct7).
pub const MULDIV: u32 = 0b0000001;
