//! Treatment labels.
//!
//! A study has at most ten treatment arms, named positionally by the
//! letters `A` through `J`. [`TreatmentLabel`] stores the arm index and
//! renders as its letter.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The ordered label alphabet. Treatment `i` is labelled `TREATMENT_ALPHABET[i]`.
pub const TREATMENT_ALPHABET: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// One treatment arm, identified by its position in [`TREATMENT_ALPHABET`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreatmentLabel(u8);

impl TreatmentLabel {
    /// Label for the treatment at `index`, or `None` past the end of the alphabet.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < TREATMENT_ALPHABET.len() {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based treatment index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The label letter.
    pub fn as_char(self) -> char {
        TREATMENT_ALPHABET[self.index()]
    }
}

impl fmt::Display for TreatmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a string is not one of the label letters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown treatment label {0:?} (expected a single letter A-J)")]
pub struct ParseLabelError(pub String);

impl FromStr for TreatmentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => TREATMENT_ALPHABET
                .iter()
                .position(|&a| a == c)
                .and_then(Self::from_index)
                .ok_or_else(|| ParseLabelError(s.to_string())),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

impl Serialize for TreatmentLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TreatmentLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_and_letter_agree() {
        let c = TreatmentLabel::from_index(2).unwrap();
        assert_eq!(c.index(), 2);
        assert_eq!(c.as_char(), 'C');
        assert_eq!(c.to_string(), "C");
    }

    #[test]
    fn from_index_stops_at_alphabet_end() {
        assert!(TreatmentLabel::from_index(9).is_some());
        assert!(TreatmentLabel::from_index(10).is_none());
    }

    #[test]
    fn parse_rejects_non_labels() {
        assert!("K".parse::<TreatmentLabel>().is_err());
        assert!("a".parse::<TreatmentLabel>().is_err());
        assert!("AB".parse::<TreatmentLabel>().is_err());
        assert!("".parse::<TreatmentLabel>().is_err());
    }

    #[test]
    fn serializes_as_letter() {
        let j = TreatmentLabel::from_index(9).unwrap();
        assert_eq!(serde_json::to_string(&j).unwrap(), "\"J\"");
        let back: TreatmentLabel = serde_json::from_str("\"J\"").unwrap();
        assert_eq!(back, j);
    }

    proptest! {
        #[test]
        fn ordering_follows_alphabet(a in 0usize..10, b in 0usize..10) {
            let la = TreatmentLabel::from_index(a).unwrap();
            let lb = TreatmentLabel::from_index(b).unwrap();
            prop_assert_eq!(la.cmp(&lb), la.as_char().cmp(&lb.as_char()));
        }
    }
}
