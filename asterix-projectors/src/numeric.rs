//! Raw multi-byte two's-complement helpers (C9) for projectors.
//!
//! This is deliberately separate from [`asterix_core::subitem`]'s internal
//! sign extension: that one operates on a pre-extracted, already bit-packed
//! value of known width. This one operates on a raw byte span a projector
//! pulled out of an item's payload directly (e.g. a 3-byte latitude field),
//! before any bit-level extraction has happened.

/// Sign-extends the low `bits` bits of `value` to a full `i32`.
///
/// `bits` must be in `1..=32`. Values with `bits == 32` are returned as-is
/// reinterpreted as signed.
pub fn sign_extend(value: u32, bits: u8) -> i32 {
    assert!((1..=32).contains(&bits), "bits must be in 1..=32, got {}", bits);
    if bits == 32 {
        return value as i32;
    }
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Packs a big-endian byte span (up to 4 bytes) into a `u32`, left-padded
/// with zero bytes.
pub fn be_bytes_to_u32(data: &[u8]) -> u32 {
    assert!(data.len() <= 4, "be_bytes_to_u32 supports at most 4 bytes, got {}", data.len());
    data.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32)
}
