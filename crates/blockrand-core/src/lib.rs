//! Core types and errors for blocked randomization.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the allocator and its callers: treatment labels,
//! per-subject assignments, the finished [`Allocation`], the input limits,
//! and the [`AllocationError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocation;
pub mod error;
pub mod label;
pub mod limits;

pub use allocation::{Allocation, Assignment};
pub use error::{AllocationError, ErrorKind};
pub use label::{TreatmentLabel, TREATMENT_ALPHABET};
