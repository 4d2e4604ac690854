//! Accepted input ranges for a randomization request.
//!
//! Bounds are inclusive. Block size must also divide evenly by the
//! treatment count.

/// Smallest accepted target sample size.
pub const MIN_SUBJECTS: i64 = 2;

/// Largest accepted target sample size.
pub const MAX_SUBJECTS: i64 = 500;

/// Smallest accepted number of treatments.
pub const MIN_TREATMENTS: i64 = 2;

/// Largest accepted number of treatments. Matches the label alphabet size.
pub const MAX_TREATMENTS: i64 = 10;

/// Largest accepted block size. Twice `MAX_SUBJECTS`, so one block can
/// always cover the largest study, and the generated sequence stays
/// below `MAX_SUBJECTS + MAX_BLOCK_SIZE` slots.
pub const MAX_BLOCK_SIZE: i64 = 2 * MAX_SUBJECTS;
