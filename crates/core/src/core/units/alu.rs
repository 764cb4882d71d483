//! Multiply/divide arithmetic for the M extension.
//!
//! The MULH family returns the upper 32 bits of a full 64-bit product,
//! computed with a native widened multiply; the signedness of each operand
//! follows the mnemonic (MULH signed x signed, MULHSU signed x unsigned,
//! MULHU unsigned x unsigned). Division and remainder implement the
//! RISC-V edge-case contracts instead of trapping.

/// Upper 32 bits of the signed x signed 64-bit product.
#[inline]
pub fn mulh(a: i32, b: i32) -> i32 {
    ((i64::from(a) * i64::from(b)) >> 32) as i32
}

/// Upper 32 bits of the signed x unsigned 64-bit product.
///
/// `a` is sign-extended to 64 bits, `b` zero-extended.
#[inline]
pub fn mulhsu(a: i32, b: u32) -> i32 {
    ((i64::from(a) * i64::from(b)) >> 32) as i32
}

/// Upper 32 bits of the unsigned x unsigned 64-bit product.
#[inline]
pub fn mulhu(a: u32, b: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) >> 32) as u32
}

/// Signed division.
///
/// Divide by zero yields `-1`; overflow (`i32::MIN / -1`) yields
/// `i32::MIN`.
#[inline]
pub fn div(a: i32, b: i32) -> i32 {
    if b == 0 {
        -1
    } else if a == i32::MIN && b == -1 {
        i32::MIN
    } else {
        a.wrapping_div(b)
    }
}

/// Unsigned division. Divide by zero yields all-ones.
#[inline]
pub fn divu(a: u32, b: u32) -> u32 {
    if b == 0 { u32::MAX } else { a / b }
}

/// Signed remainder.
///
/// Remainder by zero yields the dividend unchanged; overflow
/// (`i32::MIN % -1`) yields `0`.
#[inline]
pub fn rem(a: i32, b: i32) -> i32 {
    if b == 0 {
        a
    } else if a == i32::MIN && b == -1 {
        0
    } else {
        a.wrapping_rem(b)
    }
}

/// Unsigned remainder. Remainder by zero yields the dividend unchanged.
#[inline]
pub fn remu(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { a % b }
}
