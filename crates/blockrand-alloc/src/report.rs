//! Human-readable and JSON renderings of an allocation.

use blockrand_core::{Allocation, AllocationError, Assignment};
use serde::{Deserialize, Serialize};

/// Render an allocation as a plain-text report.
///
/// Header lines give the request and derived sizes, followed by the
/// warning if one was issued, then each block with its subjects.
/// Blocks and subjects are numbered from 1 for readers.
pub fn render_report(a: &Allocation) -> String {
    let mut out = format!(
        "Target Sample Size: {}\n\
         Actual Allocation Size: {}\n\
         Number of Blocks: {}\n\
         Block Size: {}\n\
         Number of Treatments: {}\n",
        a.target_sample_size(),
        a.actual_allocation_size(),
        a.num_blocks(),
        a.block_size(),
        a.num_treatments(),
    );
    if let Some(w) = a.warning() {
        out.push_str(&format!("Warning: {w}\n"));
    }

    out.push_str("\nGenerated Sequence:");
    for (i, block) in a.blocks().enumerate() {
        out.push_str(&format!("\n\n--- Block {} ---", i + 1));
        for s in block {
            out.push_str(&format!(
                "\n  Subject {}: Treatment {}",
                s.subject_index + 1,
                s.treatment
            ));
        }
    }
    out.push('\n');

    out.push_str("\nTotals:");
    for (label, n) in a.treatment_counts() {
        out.push_str(&format!(" {label}={n}"));
    }
    out.push('\n');
    out
}

/// Serializable outcome of one generation request.
///
/// On success this is the allocation itself (`sequence`,
/// `targetSampleSize`, `actualAllocationSize`, `numBlocks`, `blockSize`,
/// `numTreatments`, and `warning` when padded). On failure it is an empty
/// `sequence` with the `error` message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllocationRecord {
    /// A generated allocation.
    Success(Allocation),
    /// A rejected request.
    Failure {
        /// Always empty.
        sequence: Vec<Assignment>,
        /// The error message.
        error: String,
    },
}

impl AllocationRecord {
    /// The error message, if this records a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// The assignment sequence; empty on failure.
    pub fn sequence(&self) -> &[Assignment] {
        match self {
            Self::Success(a) => a.sequence(),
            Self::Failure { sequence, .. } => sequence,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Result<Allocation, AllocationError>> for AllocationRecord {
    fn from(result: Result<Allocation, AllocationError>) -> Self {
        match result {
            Ok(a) => Self::Success(a),
            Err(e) => Self::Failure {
                sequence: Vec::new(),
                error: e.to_string(),
            },
        }
    }
}
