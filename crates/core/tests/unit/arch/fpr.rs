//! # Floating-Point Register Tests
//!
//! Tests for the floating-point register file, with a specific focus on
//! NaN boxing: single-precision writes must force the upper 32 bits of
//! the 64-bit slot to all ones, and reads of an improperly boxed slot
//! must fall back to the canonical NaN rather than reinterpreting
//! garbage bits.

use rv32emu_core::core::arch::fpr::Fpr;
use rv32emu_core::core::units::fpu;

#[test]
fn fpr_all_registers_initially_zero() {
    let fpr = Fpr::new();
    for i in 0..32 {
        assert_eq!(fpr.read_raw(i), 0, "f{i} should be 0 initially");
    }
}

#[test]
fn fpr_single_write_is_nan_boxed() {
    let mut fpr = Fpr::new();
    fpr.write_f32(3, 1.0);
    let raw = fpr.read_raw(3);
    assert_eq!(raw >> 32, 0xFFFF_FFFF);
    assert_eq!(raw as u32, 1.0f32.to_bits());
}

#[test]
fn fpr_single_roundtrip() {
    let mut fpr = Fpr::new();
    fpr.write_f32(7, -2.5);
    assert_eq!(fpr.read_f32(7), -2.5);
}

#[test]
fn fpr_unboxed_slot_reads_as_canonical_nan() {
    let mut fpr = Fpr::new();
    // A genuine double is not a valid NaN box.
    fpr.write_f64(4, 1.0);
    let single = fpr.read_f32(4);
    assert!(single.is_nan());
    assert_eq!(single.to_bits(), fpu::CANONICAL_NAN_F32);
}

#[test]
fn fpr_double_roundtrip_uses_full_width() {
    let mut fpr = Fpr::new();
    #[allow(clippy::approx_constant)]
    let value = 3.14159_f64;
    fpr.write_f64(0, value);
    assert_eq!(fpr.read_f64(0), value);
    assert_eq!(fpr.read_raw(0), value.to_bits());
}

#[test]
fn fpr_negative_zero_preserved() {
    let mut fpr = Fpr::new();
    fpr.write_f64(1, -0.0);
    assert_eq!(fpr.read_raw(1), f64::to_bits(-0.0));
}

#[test]
fn fpr_raw_write_preserves_bit_pattern() {
    let mut fpr = Fpr::new();
    let boxed: u64 = 0xFFFF_FFFF_3F80_0000; // 1.0f32, NaN-boxed
    fpr.write_raw(10, boxed);
    assert_eq!(fpr.read_raw(10), boxed);
    assert_eq!(fpr.read_f32(10), 1.0);
}

#[test]
fn fpr_no_slot_is_hardwired() {
    let mut fpr = Fpr::new();
    fpr.write_f64(0, 42.0);
    assert_eq!(fpr.read_f64(0), 42.0);
}
