//! Benchmark profiles for the blockrand allocator.
//!
//! Provides pre-built [`AllocationRequest`] profiles for benchmarking:
//!
//! - [`reference_profile`]: the default 24 subjects, blocks of 6, 3 arms
//! - [`stress_profile`]: the largest accepted study, 500 subjects across 10 arms
//! - [`padded_profile`]: a target that needs rounding up to whole blocks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blockrand_alloc::AllocationRequest;
use blockrand_core::limits::{MAX_SUBJECTS, MAX_TREATMENTS};

/// 24 subjects in blocks of 6 across 3 treatments. No padding.
pub fn reference_profile() -> AllocationRequest {
    AllocationRequest::default()
}

/// 500 subjects in blocks of 20 across 10 treatments. No padding.
pub fn stress_profile() -> AllocationRequest {
    AllocationRequest::new(MAX_SUBJECTS, 2 * MAX_TREATMENTS, MAX_TREATMENTS)
}

/// 499 subjects in blocks of 8 across 4 treatments; padded to 504.
pub fn padded_profile() -> AllocationRequest {
    AllocationRequest::new(MAX_SUBJECTS - 1, 8, 4)
}
