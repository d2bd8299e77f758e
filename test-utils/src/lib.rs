//! Shared test utilities for the asterix workspace.
//!
//! Turns hex-string fixtures into byte buffers, matching how ASTERIX test
//! vectors are conventionally written (octets separated by spaces) rather
//! than as `[u8; N]` array literals.

/// Parses a whitespace-separated hex string into bytes, e.g. `"30 00 06 80"`.
///
/// # Panics
///
/// Panics if any token is not exactly two hex digits.
pub fn hex_to_bytes(input: &str) -> Vec<u8> {
    input
        .split_whitespace()
        .map(|tok| {
            u8::from_str_radix(tok, 16)
                .unwrap_or_else(|e| panic!("invalid hex byte '{}': {}", tok, e))
        })
        .collect()
}
