//! Treatment label generation.

use blockrand_core::{TreatmentLabel, TREATMENT_ALPHABET};

/// The first `num_treatments` labels of the alphabet, in order.
///
/// Silently capped at the alphabet size (10). Request validation rejects
/// larger counts before this is reached, so the cap only matters for
/// direct callers.
pub fn generate_treatment_labels(num_treatments: usize) -> Vec<TreatmentLabel> {
    (0..num_treatments.min(TREATMENT_ALPHABET.len()))
        .filter_map(TreatmentLabel::from_index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockrand_test_utils::letters;

    #[test]
    fn five_treatments() {
        assert_eq!(letters(&generate_treatment_labels(5)), "ABCDE");
    }

    #[test]
    fn zero_is_empty() {
        assert!(generate_treatment_labels(0).is_empty());
    }

    #[test]
    fn capped_at_ten() {
        assert_eq!(letters(&generate_treatment_labels(10)), "ABCDEFGHIJ");
        assert_eq!(generate_treatment_labels(26).len(), 10);
    }
}
