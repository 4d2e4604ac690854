//! Assignments and the finished allocation.

use serde::{Deserialize, Serialize};

use crate::label::{TreatmentLabel, TREATMENT_ALPHABET};

/// One subject's slot in the randomization sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Treatment arm allocated to this slot.
    pub treatment: TreatmentLabel,
    /// Zero-based index of the block containing this slot.
    pub block_index: usize,
    /// Zero-based position of this slot in the whole sequence.
    pub subject_index: usize,
}

/// A generated blocked randomization sequence and the parameters behind it.
///
/// The sequence is a concatenation of `num_blocks` blocks of `block_size`
/// assignments each. Its length is `actual_allocation_size`, which is the
/// target sample size rounded up to a whole number of blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    sequence: Vec<Assignment>,
    target_sample_size: usize,
    actual_allocation_size: usize,
    num_blocks: usize,
    block_size: usize,
    num_treatments: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl Allocation {
    /// Assemble an allocation from a generated sequence and its parameters.
    ///
    /// Does not re-check the sequence against the parameters; the
    /// allocator verifies length before calling this.
    pub fn new(
        sequence: Vec<Assignment>,
        target_sample_size: usize,
        num_blocks: usize,
        block_size: usize,
        num_treatments: usize,
        warning: Option<String>,
    ) -> Self {
        Self {
            sequence,
            target_sample_size,
            actual_allocation_size: num_blocks * block_size,
            num_blocks,
            block_size,
            num_treatments,
            warning,
        }
    }

    /// The full assignment sequence in subject order.
    pub fn sequence(&self) -> &[Assignment] {
        &self.sequence
    }

    /// Consume the allocation, keeping only the sequence.
    pub fn into_sequence(self) -> Vec<Assignment> {
        self.sequence
    }

    /// Requested sample size.
    pub fn target_sample_size(&self) -> usize {
        self.target_sample_size
    }

    /// Number of allocated slots: `num_blocks * block_size`.
    pub fn actual_allocation_size(&self) -> usize {
        self.actual_allocation_size
    }

    /// Number of blocks in the sequence.
    pub fn num_blocks(&self) -> usize {
        self.num_blocks
    }

    /// Slots per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of treatment arms.
    pub fn num_treatments(&self) -> usize {
        self.num_treatments
    }

    /// Padding notice, present only when the target was rounded up.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// True when more slots were allocated than requested.
    pub fn is_padded(&self) -> bool {
        self.actual_allocation_size > self.target_sample_size
    }

    /// Iterate over blocks in order, each as a contiguous slice of assignments.
    pub fn blocks(&self) -> impl ExactSizeIterator<Item = &[Assignment]> + '_ {
        // chunks() panics on zero; an allocation always has block_size >= 2.
        self.sequence.chunks(self.block_size.max(1))
    }

    /// Assignments belonging to block `index`, or `None` if out of range.
    pub fn block(&self, index: usize) -> Option<&[Assignment]> {
        self.blocks().nth(index)
    }

    /// Total slots per treatment, indexed by treatment index.
    ///
    /// Every arm receives `actual_allocation_size / num_treatments` slots.
    pub fn treatment_counts(&self) -> Vec<(TreatmentLabel, usize)> {
        let arms = self.num_treatments.min(TREATMENT_ALPHABET.len());
        let mut counts = vec![0usize; arms];
        for a in &self.sequence {
            if let Some(c) = counts.get_mut(a.treatment.index()) {
                *c += 1;
            }
        }
        counts
            .into_iter()
            .enumerate()
            .filter_map(|(i, n)| TreatmentLabel::from_index(i).map(|l| (l, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(i: usize) -> TreatmentLabel {
        TreatmentLabel::from_index(i).unwrap()
    }

    /// Two blocks of AB / BA.
    fn small() -> Allocation {
        let order = [0, 1, 1, 0];
        let sequence = order
            .iter()
            .enumerate()
            .map(|(i, &t)| Assignment {
                treatment: label(t),
                block_index: i / 2,
                subject_index: i,
            })
            .collect();
        Allocation::new(sequence, 3, 2, 2, 2, Some("padded".into()))
    }

    #[test]
    fn derived_size_and_padding() {
        let a = small();
        assert_eq!(a.actual_allocation_size(), 4);
        assert!(a.is_padded());
        assert_eq!(a.warning(), Some("padded"));
    }

    #[test]
    fn blocks_are_contiguous_chunks() {
        let a = small();
        let blocks: Vec<_> = a.blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[1].iter().all(|s| s.block_index == 1));
        assert_eq!(a.block(0).unwrap()[0].treatment, label(0));
        assert!(a.block(2).is_none());
    }

    #[test]
    fn counts_per_treatment() {
        assert_eq!(small().treatment_counts(), vec![(label(0), 2), (label(1), 2)]);
    }

    #[test]
    fn json_uses_camel_case_and_omits_missing_warning() {
        let mut a = small();
        a.warning = None;
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["actualAllocationSize"], 4);
        assert_eq!(json["sequence"][2]["subjectIndex"], 2);
        assert_eq!(json["sequence"][2]["treatment"], "B");
        assert!(json.get("warning").is_none());
    }
}
