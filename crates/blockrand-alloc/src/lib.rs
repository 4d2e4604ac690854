//! Blocked randomization allocator.
//!
//! Turns an [`AllocationRequest`] (target sample size, block size,
//! treatment count) into an [`Allocation`](blockrand_core::Allocation):
//! a sequence of treatment assignments split into blocks, each block
//! holding every treatment equally often in a random order.
//!
//! The entry points differ only in where randomness comes from:
//!
//! - [`generate_blocked_randomization`] draws from the thread-local generator.
//! - [`generate_blocked_randomization_with`] takes any caller-supplied [`rand::Rng`].
//! - [`Allocator`] owns a generator, seedable for reproducible sequences.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod hash;
pub mod labels;
pub mod report;
pub mod request;
pub mod shuffle;

pub use allocator::{generate_blocked_randomization, generate_blocked_randomization_with, Allocator};
pub use hash::sequence_fingerprint;
pub use labels::generate_treatment_labels;
pub use report::{render_report, AllocationRecord};
pub use request::{AllocationPlan, AllocationRequest};
pub use shuffle::shuffle_in_place;
