//! Sequence fingerprinting.
//!
//! Uses FNV-1a for a fast, deterministic digest of an assignment
//! sequence. Two sequences with the same fingerprint are, for practical
//! purposes, the same allocation; this is how a regenerated seeded run is
//! checked against a recorded one. Not cryptographically secure.

use blockrand_core::Assignment;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Digest of every assignment's block index, subject index, and label.
///
/// Returns `FNV_OFFSET` for an empty sequence.
pub fn sequence_fingerprint(sequence: &[Assignment]) -> u64 {
    sequence.iter().fold(FNV_OFFSET, |hash, a| {
        let hash = fnv1a_u64(hash, a.block_index as u64);
        let hash = fnv1a_u64(hash, a.subject_index as u64);
        fnv1a_byte(hash, a.treatment.as_char() as u8)
    })
}
