//! Randomization requests, validation, and derived plans.
//!
//! [`AllocationRequest`] is the caller-facing input. [`validate()`](AllocationRequest::validate)
//! checks it against the limits in [`blockrand_core::limits`] and, on
//! success, yields an [`AllocationPlan`] with every derived quantity the
//! allocator needs.

use blockrand_core::limits::{
    MAX_BLOCK_SIZE, MAX_SUBJECTS, MAX_TREATMENTS, MIN_SUBJECTS, MIN_TREATMENTS,
};
use blockrand_core::AllocationError;
use serde::{Deserialize, Serialize};

// ── AllocationRequest ──────────────────────────────────────────────

/// Parameters for one blocked randomization.
///
/// Fields are signed so that zero and negative inputs reach validation
/// and are reported, rather than being unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    /// Number of subjects the study intends to enrol.
    pub target_num_subjects: i64,
    /// Slots per block. Must be a positive multiple of `num_treatments`.
    pub block_size: i64,
    /// Number of treatment arms, labelled `A` onwards.
    pub num_treatments: i64,
}

impl Default for AllocationRequest {
    /// 24 subjects in blocks of 6 across 3 treatments.
    fn default() -> Self {
        Self {
            target_num_subjects: 24,
            block_size: 6,
            num_treatments: 3,
        }
    }
}

impl AllocationRequest {
    /// Build a request from its three parameters.
    pub fn new(target_num_subjects: i64, block_size: i64, num_treatments: i64) -> Self {
        Self {
            target_num_subjects,
            block_size,
            num_treatments,
        }
    }

    /// Set the target sample size.
    pub fn target_num_subjects(mut self, n: i64) -> Self {
        self.target_num_subjects = n;
        self
    }

    /// Set the block size.
    pub fn block_size(mut self, n: i64) -> Self {
        self.block_size = n;
        self
    }

    /// Set the number of treatments.
    pub fn num_treatments(mut self, n: i64) -> Self {
        self.num_treatments = n;
        self
    }

    /// Parse a request from free-text form inputs.
    ///
    /// Each input is read the way a web form's integer parse reads it:
    /// leading whitespace and an optional sign, then the leading run of
    /// decimal digits. Anything after the digits is ignored, so `"2.5"`
    /// reads as 2 and `"24abc"` as 24. An input with no leading digits is
    /// rejected. Only parsing is done here; call
    /// [`validate()`](Self::validate) for range checks.
    pub fn parse(
        target_num_subjects: &str,
        block_size: &str,
        num_treatments: &str,
    ) -> Result<Self, AllocationError> {
        Ok(Self {
            target_num_subjects: parse_field("targetNumSubjects", target_num_subjects)?,
            block_size: parse_field("blockSize", block_size)?,
            num_treatments: parse_field("numTreatments", num_treatments)?,
        })
    }

    /// Check every constraint and derive the allocation plan.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// sample size range, treatment count range, block size positive,
    /// block size at least the treatment count, block size divisible by
    /// the treatment count, block size at most `MAX_BLOCK_SIZE`.
    pub fn validate(&self) -> Result<AllocationPlan, AllocationError> {
        let Self {
            target_num_subjects: target,
            block_size,
            num_treatments,
        } = *self;

        if !(MIN_SUBJECTS..=MAX_SUBJECTS).contains(&target) {
            return Err(AllocationError::SampleSizeOutOfRange { value: target });
        }
        if !(MIN_TREATMENTS..=MAX_TREATMENTS).contains(&num_treatments) {
            return Err(AllocationError::TreatmentCountOutOfRange {
                value: num_treatments,
            });
        }
        if block_size <= 0 {
            return Err(AllocationError::NonPositiveBlockSize { value: block_size });
        }
        if block_size < num_treatments {
            return Err(AllocationError::BlockSizeBelowTreatmentCount {
                block_size,
                num_treatments,
            });
        }
        if block_size % num_treatments != 0 {
            return Err(AllocationError::BlockSizeNotDivisible {
                block_size,
                num_treatments,
            });
        }

        if block_size > MAX_BLOCK_SIZE {
            return Err(AllocationError::BlockSizeTooLarge { block_size });
        }

        // All three are now known positive and bounded.
        Ok(AllocationPlan::derive(
            target as usize,
            block_size as usize,
            num_treatments as usize,
        ))
    }
}

fn parse_field(field: &'static str, input: &str) -> Result<i64, AllocationError> {
    let invalid = || AllocationError::InvalidNumber {
        field,
        input: input.to_string(),
    };

    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(invalid());
    }
    // Too many digits for i64 is far outside every limit; report as invalid.
    s[..sign_len + digits_len]
        .parse::<i64>()
        .map_err(|_| invalid())
}

// ── AllocationPlan ─────────────────────────────────────────────────

/// Quantities derived from a validated request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationPlan {
    /// Requested sample size.
    pub target_sample_size: usize,
    /// Slots per block.
    pub block_size: usize,
    /// Number of treatment arms.
    pub num_treatments: usize,
    /// `ceil(target_sample_size / block_size)`.
    pub num_blocks: usize,
    /// `num_blocks * block_size`.
    pub actual_allocation_size: usize,
    /// `block_size / num_treatments`; exact by validation.
    pub per_treatment_per_block: usize,
}

impl AllocationPlan {
    fn derive(target_sample_size: usize, block_size: usize, num_treatments: usize) -> Self {
        let num_blocks = target_sample_size.div_ceil(block_size);
        Self {
            target_sample_size,
            block_size,
            num_treatments,
            num_blocks,
            actual_allocation_size: num_blocks * block_size,
            per_treatment_per_block: block_size / num_treatments,
        }
    }

    /// True when the target is not a whole number of blocks.
    pub fn is_padded(&self) -> bool {
        self.actual_allocation_size != self.target_sample_size
    }

    /// Padding notice for callers, or `None` for an exact fit.
    pub fn warning(&self) -> Option<String> {
        self.is_padded().then(|| {
            format!(
                "Target sample size ({}) is not a multiple of block size ({}). \
                 Allocation generated for {} subjects.",
                self.target_sample_size, self.block_size, self.actual_allocation_size
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockrand_core::ErrorKind;

    fn kind_of(t: i64, b: i64, n: i64) -> Option<ErrorKind> {
        AllocationRequest::new(t, b, n).validate().err().map(|e| e.kind())
    }

    #[test]
    fn default_is_exact_fit() {
        let plan = AllocationRequest::default().validate().unwrap();
        assert_eq!(plan.num_blocks, 4);
        assert_eq!(plan.actual_allocation_size, 24);
        assert_eq!(plan.per_treatment_per_block, 2);
        assert!(plan.warning().is_none());
    }

    #[test]
    fn padded_plan_warns() {
        let plan = AllocationRequest::new(25, 6, 3).validate().unwrap();
        assert_eq!(plan.num_blocks, 5);
        assert_eq!(plan.actual_allocation_size, 30);
        assert_eq!(
            plan.warning().as_deref(),
            Some(
                "Target sample size (25) is not a multiple of block size (6). \
                 Allocation generated for 30 subjects."
            )
        );
    }

    #[test]
    fn sample_size_bounds() {
        assert_eq!(kind_of(1, 2, 2), Some(ErrorKind::OutOfRangeSampleSize));
        assert_eq!(kind_of(501, 2, 2), Some(ErrorKind::OutOfRangeSampleSize));
        assert_eq!(kind_of(2, 2, 2), None);
        assert_eq!(kind_of(500, 2, 2), None);
    }

    #[test]
    fn treatment_count_bounds() {
        assert_eq!(kind_of(20, 10, 1), Some(ErrorKind::OutOfRangeTreatmentCount));
        assert_eq!(kind_of(20, 22, 11), Some(ErrorKind::OutOfRangeTreatmentCount));
        assert_eq!(kind_of(20, 2, 2), None);
        assert_eq!(kind_of(20, 10, 10), None);
    }

    #[test]
    fn block_size_checks_in_order() {
        assert_eq!(kind_of(20, 0, 2), Some(ErrorKind::NonPositiveBlockSize));
        assert_eq!(kind_of(20, -4, 2), Some(ErrorKind::NonPositiveBlockSize));
        assert_eq!(kind_of(20, 2, 3), Some(ErrorKind::BlockSizeBelowTreatmentCount));
        assert_eq!(kind_of(20, 5, 3), Some(ErrorKind::BlockSizeNotDivisible));
    }

    #[test]
    fn block_size_upper_bound() {
        assert_eq!(kind_of(2, 1000, 2), None);
        assert_eq!(kind_of(2, 1002, 2), Some(ErrorKind::BlockSizeTooLarge));
        assert_eq!(kind_of(2, i64::MAX - 1, 2), Some(ErrorKind::BlockSizeTooLarge));
        assert_eq!(kind_of(500, 1 << 36, 2), Some(ErrorKind::BlockSizeTooLarge));
        // Divisibility is still reported first.
        assert_eq!(kind_of(2, 1001, 2), Some(ErrorKind::BlockSizeNotDivisible));
    }

    #[test]
    fn first_failure_wins() {
        // Both sample size and treatment count are bad; sample size is checked first.
        assert_eq!(kind_of(0, 5, 0), Some(ErrorKind::OutOfRangeSampleSize));
        // Treatment count is checked before block size.
        assert_eq!(kind_of(10, 0, 12), Some(ErrorKind::OutOfRangeTreatmentCount));
    }

    #[test]
    fn block_larger_than_target_is_one_block() {
        let plan = AllocationRequest::new(3, 8, 4).validate().unwrap();
        assert_eq!(plan.num_blocks, 1);
        assert_eq!(plan.actual_allocation_size, 8);
    }

    #[test]
    fn parse_reads_leading_integer() {
        let req = AllocationRequest::parse(" 30 ", "6", "2").unwrap();
        assert_eq!(req, AllocationRequest::new(30, 6, 2));

        let req = AllocationRequest::parse("24abc", "+6", "2.5").unwrap();
        assert_eq!(req, AllocationRequest::new(24, 6, 2));
        assert_eq!(
            AllocationRequest::parse("-4", "6", "3").unwrap().target_num_subjects,
            -4
        );

        let err = AllocationRequest::parse("30", "six", "2").unwrap_err();
        assert_eq!(
            err,
            AllocationError::InvalidNumber {
                field: "blockSize",
                input: "six".into()
            }
        );
        assert!(AllocationRequest::parse("", "6", "2").is_err());
        assert!(AllocationRequest::parse("30", "-", "2").is_err());
        assert!(AllocationRequest::parse("30", "6", ".5").is_err());
        assert!(AllocationRequest::parse("99999999999999999999", "6", "2").is_err());
    }

    #[test]
    fn builder_setters() {
        let req = AllocationRequest::default()
            .target_num_subjects(40)
            .block_size(4)
            .num_treatments(2);
        assert_eq!(req, AllocationRequest::new(40, 4, 2));
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_string(&AllocationRequest::new(25, 6, 3)).unwrap();
        assert_eq!(json, r#"{"targetNumSubjects":25,"blockSize":6,"numTreatments":3}"#);
    }
}
