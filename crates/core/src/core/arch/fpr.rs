//! Floating-point register file.
//!
//! This module implements the 32 floating-point registers of the hart. It
//! performs the following:
//! 1. **Storage:** 32 slots of 64-bit raw storage (`f0`-`f31`).
//! 2. **NaN Boxing:** Single-precision writes force the upper 32 bits of
//!    the slot to all-ones, so a later double-width read can reliably tell
//!    that the slot does not hold a genuine double.
//! 3. **Raw Access:** Bit-pattern accessors for the move, store, and
//!    classify instructions.
//!
//! No slot is hardwired to zero.

use crate::common::constants::REG_COUNT;
use crate::core::units::fpu;

/// Floating-point register file.
#[derive(Debug)]
pub struct Fpr {
    regs: [u64; REG_COUNT],
}

impl Fpr {
    /// Creates a register file with all slots initialized to zero bits.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads the raw 64-bit pattern of a slot.
    #[inline(always)]
    pub fn read_raw(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes a raw 64-bit pattern to a slot (no boxing).
    #[inline(always)]
    pub fn write_raw(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Reads a slot as a single-precision value.
    ///
    /// If the slot is not a valid NaN box, the canonical quiet NaN is
    /// returned instead of reinterpreted garbage.
    #[inline(always)]
    pub fn read_f32(&self, idx: usize) -> f32 {
        fpu::unbox_f32(self.regs[idx])
    }

    /// Writes a single-precision value, NaN-boxing it into the slot.
    #[inline(always)]
    pub fn write_f32(&mut self, idx: usize, val: f32) {
        self.regs[idx] = fpu::box_f32(val);
    }

    /// Reads a slot as a double-precision value.
    #[inline(always)]
    pub fn read_f64(&self, idx: usize) -> f64 {
        f64::from_bits(self.regs[idx])
    }

    /// Writes a double-precision value, occupying the full slot width.
    #[inline(always)]
    pub fn write_f64(&mut self, idx: usize, val: f64) {
        self.regs[idx] = val.to_bits();
    }

    /// Returns a copy of all raw slot values for inspection.
    pub fn snapshot(&self) -> [u64; REG_COUNT] {
        self.regs
    }
}

impl Default for Fpr {
    fn default() -> Self {
        Self::new()
    }
}
