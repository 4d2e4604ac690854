//! blockrand: blocked randomization sequences for study allocation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the blockrand sub-crates. For most users, adding `blockrand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blockrand::prelude::*;
//!
//! // 25 subjects in blocks of 6 across treatments A, B, C.
//! let request = AllocationRequest::new(25, 6, 3);
//! let allocation = Allocator::seeded(42).generate(&request).unwrap();
//!
//! // Rounded up to five whole blocks.
//! assert_eq!(allocation.num_blocks(), 5);
//! assert_eq!(allocation.sequence().len(), 30);
//! assert!(allocation.warning().is_some());
//!
//! // Every block holds each treatment twice.
//! for block in allocation.blocks() {
//!     let a_count = block.iter().filter(|s| s.treatment.as_char() == 'A').count();
//!     assert_eq!(a_count, 2);
//! }
//!
//! // Invalid requests come back as errors, never panics.
//! let err = generate_blocked_randomization(20, 5, 3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BlockSizeNotDivisible);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blockrand-core` | Labels, assignments, allocations, errors, limits |
//! | [`allocate`] | `blockrand-alloc` | Requests, shuffling, generation, reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`blockrand-core`).
///
/// Contains [`types::TreatmentLabel`], [`types::Assignment`],
/// [`types::Allocation`], [`types::AllocationError`], and the input
/// [`types::limits`].
pub use blockrand_core as types;

/// Allocation requests and sequence generation (`blockrand-alloc`).
///
/// [`allocate::Allocator`] for seeded or injected randomness,
/// [`allocate::generate_blocked_randomization`] for one-off calls, and
/// [`allocate::render_report`] / [`allocate::AllocationRecord`] for output.
pub use blockrand_alloc as allocate;

pub use blockrand_alloc::generate_blocked_randomization;

/// Common imports for typical blockrand usage.
///
/// ```rust
/// use blockrand::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use blockrand_core::{
        Allocation, AllocationError, Assignment, ErrorKind, TreatmentLabel,
    };

    // Generation
    pub use blockrand_alloc::{
        generate_blocked_randomization, generate_blocked_randomization_with, AllocationPlan,
        AllocationRequest, Allocator,
    };

    // Output
    pub use blockrand_alloc::{render_report, sequence_fingerprint, AllocationRecord};
}
