//! Error types for randomization requests.
//!
//! Every failure is returned as a value. The `Display` text of each variant
//! is the user-facing message shown by existing front ends, so the wording
//! is stable.

use thiserror::Error;

use crate::limits::{MAX_BLOCK_SIZE, MAX_SUBJECTS, MAX_TREATMENTS, MIN_SUBJECTS, MIN_TREATMENTS};

/// Errors from validating or generating an allocation.
///
/// Validation variants are checked in declaration order (after
/// [`InvalidNumber`](Self::InvalidNumber), which only textual input can
/// produce); the first failing check is the one reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A textual input did not parse as an integer.
    #[error("Please ensure all inputs are valid numbers.")]
    InvalidNumber {
        /// Which input failed (`targetNumSubjects`, `blockSize`, `numTreatments`).
        field: &'static str,
        /// The rejected text.
        input: String,
    },

    /// Target sample size outside `[MIN_SUBJECTS, MAX_SUBJECTS]`.
    #[error("Target Sample Size must be between {} and {}.", MIN_SUBJECTS, MAX_SUBJECTS)]
    SampleSizeOutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// Treatment count outside `[MIN_TREATMENTS, MAX_TREATMENTS]`.
    #[error("Number of Treatments must be between {} and {}.", MIN_TREATMENTS, MAX_TREATMENTS)]
    TreatmentCountOutOfRange {
        /// The rejected value.
        value: i64,
    },

    /// Block size is zero or negative.
    #[error("Block Size must be a positive number.")]
    NonPositiveBlockSize {
        /// The rejected value.
        value: i64,
    },

    /// Block size is smaller than the treatment count.
    #[error(
        "Block Size ({block_size}) must be greater than or equal to the number of treatments ({num_treatments})."
    )]
    BlockSizeBelowTreatmentCount {
        /// Requested block size.
        block_size: i64,
        /// Requested treatment count.
        num_treatments: i64,
    },

    /// Block size is not a multiple of the treatment count.
    #[error(
        "Block size ({block_size}) must be divisible by the number of treatments ({num_treatments}) to ensure equal allocation within blocks."
    )]
    BlockSizeNotDivisible {
        /// Requested block size.
        block_size: i64,
        /// Requested treatment count.
        num_treatments: i64,
    },

    /// Block size is larger than `MAX_BLOCK_SIZE`.
    #[error("Block Size ({block_size}) must not exceed {}.", MAX_BLOCK_SIZE)]
    BlockSizeTooLarge {
        /// Requested block size.
        block_size: i64,
    },

    /// The generated sequence length disagrees with the planned size.
    /// Indicates a logic defect in the allocator.
    #[error(
        "Internal error: Generated sequence length ({generated}) does not match calculated allocation size ({expected})."
    )]
    InternalConsistency {
        /// Length of the sequence actually produced.
        generated: usize,
        /// `num_blocks * block_size`.
        expected: usize,
    },
}

/// Discriminant of an [`AllocationError`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`AllocationError::InvalidNumber`].
    InvalidNumber,
    /// See [`AllocationError::SampleSizeOutOfRange`].
    OutOfRangeSampleSize,
    /// See [`AllocationError::TreatmentCountOutOfRange`].
    OutOfRangeTreatmentCount,
    /// See [`AllocationError::NonPositiveBlockSize`].
    NonPositiveBlockSize,
    /// See [`AllocationError::BlockSizeBelowTreatmentCount`].
    BlockSizeBelowTreatmentCount,
    /// See [`AllocationError::BlockSizeNotDivisible`].
    BlockSizeNotDivisible,
    /// See [`AllocationError::BlockSizeTooLarge`].
    BlockSizeTooLarge,
    /// See [`AllocationError::InternalConsistency`].
    InternalConsistencyFailure,
}

impl AllocationError {
    /// The error kind, for callers that branch on category rather than message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            Self::SampleSizeOutOfRange { .. } => ErrorKind::OutOfRangeSampleSize,
            Self::TreatmentCountOutOfRange { .. } => ErrorKind::OutOfRangeTreatmentCount,
            Self::NonPositiveBlockSize { .. } => ErrorKind::NonPositiveBlockSize,
            Self::BlockSizeBelowTreatmentCount { .. } => ErrorKind::BlockSizeBelowTreatmentCount,
            Self::BlockSizeNotDivisible { .. } => ErrorKind::BlockSizeNotDivisible,
            Self::BlockSizeTooLarge { .. } => ErrorKind::BlockSizeTooLarge,
            Self::InternalConsistency { .. } => ErrorKind::InternalConsistencyFailure,
        }
    }

    /// True for errors caused by caller input rather than an allocator defect.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::InternalConsistency { .. })
    }
}
