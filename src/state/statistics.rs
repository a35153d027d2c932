// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Running counts of admissible partitions, one counter per rule set. The
//! driver owns one table per n; the classifier increments it.

use crate::classify::{RuleSet, RuleSetFlags};
use strum::{EnumCount, IntoEnumIterator};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdmissibleCounts {
    stats: [u64; RuleSet::COUNT],
}

impl AdmissibleCounts {
    pub fn new() -> Self {
        AdmissibleCounts::default()
    }

    /// Build a table from counts in (4,0), (2,1), (0,2) order.
    pub fn from_counts(stats: [u64; RuleSet::COUNT]) -> Self {
        AdmissibleCounts { stats }
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, rule_set: RuleSet) {
        self.stats[rule_set.index()] += 1;
    }

    /// Credit one partition: every rule set not in `reducible` gains one.
    pub fn credit(&mut self, reducible: RuleSetFlags) {
        for rule_set in reducible.complement().iter() {
            self.increment(rule_set);
        }
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, rule_set: RuleSet) -> u64 {
        self.stats[rule_set.index()]
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.stats = [0; RuleSet::COUNT];
    }

    /// (rule set, count) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleSet, u64)> + '_ {
        RuleSet::iter().map(move |rule_set| (rule_set, self.get(rule_set)))
    }
}
