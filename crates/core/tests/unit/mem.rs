//! Memory subsystem tests.
//!
//! Round trips for every access width, the bounds/alignment contract,
//! the explicit little-endian layout, and image loading.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rv32emu_core::Fault;
use rv32emu_core::common::constants::MEMORY_SIZE;
use rv32emu_core::mem::Memory;

// ══════════════════════════════════════════════════════════
// 1. Round trips
// ══════════════════════════════════════════════════════════

#[test]
fn byte_roundtrip() {
    let mut mem = Memory::new();
    mem.write_u8(17, 0xAB).unwrap();
    assert_eq!(mem.read_u8(17).unwrap(), 0xAB);
}

#[test]
fn halfword_roundtrip() {
    let mut mem = Memory::new();
    mem.write_u16(20, 0xBEEF).unwrap();
    assert_eq!(mem.read_u16(20).unwrap(), 0xBEEF);
}

#[test]
fn word_roundtrip() {
    let mut mem = Memory::new();
    mem.write_u32(64, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read_u32(64).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn doubleword_roundtrip() {
    let mut mem = Memory::new();
    mem.write_u64(8, 0x0123_4567_89AB_CDEF).unwrap();
    assert_eq!(mem.read_u64(8).unwrap(), 0x0123_4567_89AB_CDEF);
}

#[test]
fn memory_is_zero_initialized() {
    let mem = Memory::new();
    assert_eq!(mem.read_u64(0).unwrap(), 0);
    assert_eq!(mem.read_u64((MEMORY_SIZE - 8) as u32).unwrap(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Endianness is a contract, not a platform accident
// ══════════════════════════════════════════════════════════

#[test]
fn word_write_is_little_endian() {
    let mut mem = Memory::new();
    mem.write_u32(0, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read_u8(0).unwrap(), 0xEF);
    assert_eq!(mem.read_u8(1).unwrap(), 0xBE);
    assert_eq!(mem.read_u8(2).unwrap(), 0xAD);
    assert_eq!(mem.read_u8(3).unwrap(), 0xDE);
}

#[test]
fn doubleword_aliases_two_words() {
    let mut mem = Memory::new();
    mem.write_u64(0, 0x1111_2222_3333_4444).unwrap();
    assert_eq!(mem.read_u32(0).unwrap(), 0x3333_4444);
    assert_eq!(mem.read_u32(4).unwrap(), 0x1111_2222);
}

// ══════════════════════════════════════════════════════════
// 3. Bounds and alignment
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::byte_past_end(MEMORY_SIZE as u32, 1)]
#[case::half_straddles_end((MEMORY_SIZE - 1) as u32, 2)]
#[case::word_straddles_end((MEMORY_SIZE - 2) as u32, 4)]
#[case::double_straddles_end((MEMORY_SIZE - 4) as u32, 8)]
#[case::half_misaligned(1, 2)]
#[case::word_misaligned(2, 4)]
#[case::double_misaligned(4, 8)]
#[case::far_out(0x8000_0000, 4)]
fn invalid_access_faults(#[case] addr: u32, #[case] width: u32) {
    let mem = Memory::new();
    assert_eq!(mem.check(addr, width), Err(Fault::OutOfBounds(addr)));
}

#[test]
fn failing_write_mutates_nothing() {
    let mut mem = Memory::new();
    // Misaligned word write over bytes that are individually valid.
    assert!(mem.write_u32(2, 0xFFFF_FFFF).is_err());
    for addr in 0..8 {
        assert_eq!(mem.read_u8(addr).unwrap(), 0);
    }
}

#[test]
fn last_aligned_slots_are_valid() {
    let mut mem = Memory::new();
    mem.write_u8((MEMORY_SIZE - 1) as u32, 1).unwrap();
    mem.write_u16((MEMORY_SIZE - 2) as u32, 2).unwrap();
    mem.write_u32((MEMORY_SIZE - 4) as u32, 3).unwrap();
    mem.write_u64((MEMORY_SIZE - 8) as u32, 4).unwrap();
    assert_eq!(mem.read_u8((MEMORY_SIZE - 1) as u32).unwrap(), 1);
}

// ══════════════════════════════════════════════════════════
// 4. Image loading
// ══════════════════════════════════════════════════════════

#[test]
fn load_image_places_bytes_at_zero() {
    let mut mem = Memory::new();
    mem.load_image(&[0xEF, 0xBE, 0xAD, 0xDE]).unwrap();
    assert_eq!(mem.read_u32(0).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn load_image_rejects_oversized() {
    let mut mem = Memory::new();
    let image = vec![0u8; MEMORY_SIZE + 1];
    assert!(mem.load_image(&image).is_err());
    // Nothing was copied.
    assert_eq!(mem.read_u32(0).unwrap(), 0);
}

#[test]
fn load_image_accepts_exact_fit() {
    let mut mem = Memory::new();
    let image = vec![0x5A; MEMORY_SIZE];
    mem.load_image(&image).unwrap();
    assert_eq!(mem.read_u8((MEMORY_SIZE - 1) as u32).unwrap(), 0x5A);
}
