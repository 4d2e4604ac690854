//! Test utilities for blockrand development.
//!
//! Invariant checkers that any successful [`Allocation`] must satisfy,
//! plus small fixtures shared across unit, integration, and property
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeMap;

use blockrand_core::{Allocation, TreatmentLabel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for tests that need one outside an `Allocator`.
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Concatenate label letters, e.g. `[A, B, B]` -> `"ABB"`.
pub fn letters(labels: &[TreatmentLabel]) -> String {
    labels.iter().map(|l| l.as_char()).collect()
}

/// Label counts within one slice of labels.
pub fn tally<'a, I>(labels: I) -> BTreeMap<TreatmentLabel, usize>
where
    I: IntoIterator<Item = &'a TreatmentLabel>,
{
    let mut counts = BTreeMap::new();
    for &l in labels {
        *counts.entry(l).or_insert(0) += 1;
    }
    counts
}

/// Check every structural invariant of a successful allocation.
///
/// Returns a description of the first violation found.
pub fn check_allocation_invariants(a: &Allocation) -> Result<(), String> {
    let seq = a.sequence();

    if a.actual_allocation_size() != a.num_blocks() * a.block_size() {
        return Err(format!(
            "actual size {} != {} blocks * {}",
            a.actual_allocation_size(),
            a.num_blocks(),
            a.block_size()
        ));
    }
    if a.num_blocks() != a.target_sample_size().div_ceil(a.block_size()) {
        return Err(format!(
            "num_blocks {} != ceil({} / {})",
            a.num_blocks(),
            a.target_sample_size(),
            a.block_size()
        ));
    }
    if seq.len() != a.actual_allocation_size() {
        return Err(format!(
            "sequence length {} != actual size {}",
            seq.len(),
            a.actual_allocation_size()
        ));
    }
    if a.warning().is_some() != (a.actual_allocation_size() != a.target_sample_size()) {
        return Err("warning present iff padded".to_string());
    }

    for (pos, s) in seq.iter().enumerate() {
        if s.subject_index != pos {
            return Err(format!("subject_index {} at position {pos}", s.subject_index));
        }
        if s.block_index != pos / a.block_size() {
            return Err(format!(
                "block_index {} at position {pos} (block size {})",
                s.block_index,
                a.block_size()
            ));
        }
        if s.treatment.index() >= a.num_treatments() {
            return Err(format!(
                "label {} beyond {} treatments",
                s.treatment,
                a.num_treatments()
            ));
        }
    }

    let per_block = a.block_size() / a.num_treatments();
    for (b, block) in a.blocks().enumerate() {
        let counts = tally(block.iter().map(|s| &s.treatment));
        if counts.len() != a.num_treatments() {
            return Err(format!(
                "block {b} has {} distinct labels, expected {}",
                counts.len(),
                a.num_treatments()
            ));
        }
        if let Some((label, n)) = counts.iter().find(|(_, n)| **n != per_block) {
            return Err(format!("block {b}: label {label} appears {n} times, expected {per_block}"));
        }
    }
    Ok(())
}

/// Panic with the violation if `a` breaks any allocation invariant.
pub fn assert_allocation_invariants(a: &Allocation) {
    if let Err(msg) = check_allocation_invariants(a) {
        panic!("allocation invariant violated: {msg}");
    }
}
