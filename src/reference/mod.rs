// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reference values the enumeration is checked against.
//!
//! These numbers are never consulted by the generator or the classifier;
//! the verifier compares its counts with them after each n.

pub mod series;
pub mod tables;

use crate::state::AdmissibleCounts;

/// Largest n covered by the tables.
pub const MAX_N: u32 = tables::TABLE_LEN as u32 - 1;

/// Largest n for which the identities were checked when the tables were
/// published. Mismatches above this bound are informational.
pub const CERTIFIED_MAX: u32 = 170;

/// The expected outcome of enumerating the partitions of one n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    pub partitions: u64,
    pub admissible: AdmissibleCounts,
}

/// Look up the expected values for `n`, if it is within the tables.
pub fn expected(n: u32) -> Option<Expected> {
    let i = n as usize;
    if i >= tables::TABLE_LEN {
        return None;
    }
    Some(Expected {
        partitions: tables::PARTITIONS[i],
        admissible: AdmissibleCounts::from_counts([
            tables::FOUR_ZERO[i],
            tables::TWO_ONE[i],
            tables::ZERO_TWO[i],
        ]),
    })
}

/// Whether a mismatch at `n` contradicts a checked result.
pub fn is_certified(n: u32) -> bool {
    n <= CERTIFIED_MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RuleSet;

    #[test]
    fn test_expected_small() {
        let e = expected(4).unwrap();
        assert_eq!(e.partitions, 5);
        assert_eq!(e.admissible.get(RuleSet::FourZero), 2);
        assert_eq!(e.admissible.get(RuleSet::TwoOne), 2);
        assert_eq!(e.admissible.get(RuleSet::ZeroTwo), 1);
    }

    #[test]
    fn test_expected_bounds() {
        assert!(expected(0).is_some());
        assert_eq!(expected(MAX_N).unwrap().partitions, 3_972_999_029_388);
        assert!(expected(MAX_N + 1).is_none());
    }

    #[test]
    fn test_certified_bound() {
        assert!(is_certified(170));
        assert!(!is_certified(171));
    }
}
