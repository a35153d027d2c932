// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-n verification results and their printed form.
//!
//! A report block looks like
//!
//! ```text
//! Computing Partitions of n=4...
//! 	All=            5	Got=            5
//! 	X40=            2	Got=            2
//! 	X21=            2	Got=            2
//! 	X02=            1	Got=            1
//! ```
//!
//! with a `**` prefix on any line whose counts disagree.

use crate::classify::RuleSet;
use crate::reference::{self, Expected};
use crate::state::AdmissibleCounts;
use std::fmt;
use strum::IntoEnumIterator;

/// One of the four numbers compared for every n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// P(n), the number of partitions produced.
    Partitions,
    /// The number of partitions admissible under a rule set.
    Admissible(RuleSet),
}

impl Quantity {
    /// All quantities in report order.
    pub fn all() -> impl Iterator<Item = Quantity> {
        std::iter::once(Quantity::Partitions).chain(RuleSet::iter().map(Quantity::Admissible))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Partitions => write!(f, "All"),
            Quantity::Admissible(RuleSet::FourZero) => write!(f, "X40"),
            Quantity::Admissible(RuleSet::TwoOne) => write!(f, "X21"),
            Quantity::Admissible(RuleSet::ZeroTwo) => write!(f, "X02"),
        }
    }
}

/// A computed count that disagrees with the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub n: u32,
    pub quantity: Quantity,
    pub expected: u64,
    pub computed: u64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}: {} expected {} but enumeration gave {}",
            self.n, self.quantity, self.expected, self.computed
        )
    }
}

/// The outcome of enumerating and classifying the partitions of one n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    n: u32,
    partitions: u64,
    counts: AdmissibleCounts,
    expected: Expected,
}

impl Verification {
    pub fn new(n: u32, partitions: u64, counts: AdmissibleCounts, expected: Expected) -> Self {
        Self {
            n,
            partitions,
            counts,
            expected,
        }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    /// Number of partitions the generator produced.
    pub fn partitions(&self) -> u64 {
        self.partitions
    }

    pub fn counts(&self) -> &AdmissibleCounts {
        &self.counts
    }

    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    /// (expected, computed) for one quantity.
    pub fn values(&self, quantity: Quantity) -> (u64, u64) {
        match quantity {
            Quantity::Partitions => (self.expected.partitions, self.partitions),
            Quantity::Admissible(rule_set) => (
                self.expected.admissible.get(rule_set),
                self.counts.get(rule_set),
            ),
        }
    }

    pub fn mismatches(&self) -> Vec<Mismatch> {
        Quantity::all()
            .filter_map(|quantity| {
                let (expected, computed) = self.values(quantity);
                (expected != computed).then_some(Mismatch {
                    n: self.n,
                    quantity,
                    expected,
                    computed,
                })
            })
            .collect()
    }

    /// True when all four counts agree with the tables.
    pub fn is_consistent(&self) -> bool {
        Quantity::all().all(|quantity| {
            let (expected, computed) = self.values(quantity);
            expected == computed
        })
    }

    /// Whether a mismatch for this n would contradict a checked result.
    pub fn is_certified(&self) -> bool {
        reference::is_certified(self.n)
    }
}

impl fmt::Display for Verification {
    /// The four comparison lines; the "Computing Partitions" header is
    /// written by the driver before any listing output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quantity in Quantity::all() {
            let (expected, computed) = self.values(quantity);
            if expected != computed {
                write!(f, "**")?;
            }
            writeln!(f, "\t{}={:>13}\tGot={:>13}", quantity, expected, computed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::expected;

    #[test]
    fn test_report_lines() {
        let v = Verification::new(
            4,
            5,
            AdmissibleCounts::from_counts([2, 2, 1]),
            expected(4).unwrap(),
        );
        assert!(v.is_consistent());
        assert_eq!(
            v.to_string(),
            "\tAll=            5\tGot=            5\n\
             \tX40=            2\tGot=            2\n\
             \tX21=            2\tGot=            2\n\
             \tX02=            1\tGot=            1\n"
        );
    }

    #[test]
    fn test_mismatch_is_flagged() {
        let v = Verification::new(
            4,
            5,
            AdmissibleCounts::from_counts([2, 3, 1]),
            expected(4).unwrap(),
        );
        assert!(!v.is_consistent());
        assert_eq!(
            v.mismatches(),
            vec![Mismatch {
                n: 4,
                quantity: Quantity::Admissible(RuleSet::TwoOne),
                expected: 2,
                computed: 3,
            }]
        );
        assert!(v.to_string().contains("**\tX21=            2\tGot=            3\n"));
    }

    #[test]
    fn test_quantity_order() {
        let labels: Vec<String> = Quantity::all().map(|q| q.to_string()).collect();
        assert_eq!(labels, vec!["All", "X40", "X21", "X02"]);
    }
}
