// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rule sets and sets of rule sets.
//!
//! Each rule set is the admissibility grammar of one level 4 standard
//! module of A2(2), labelled by its highest weight: (4,0), (2,1), (0,2).
//! A [`RuleSetFlags`] is a bitset over the three, where bit i represents
//! the rule set with discriminant i.
//!
//! # Examples
//!
//! ```
//! use partition_identities::classify::{RuleSet, RuleSetFlags};
//!
//! let mut reducible = RuleSetFlags::empty();
//! reducible.insert(RuleSet::FourZero);
//! reducible.insert(RuleSet::ZeroTwo);
//!
//! assert!(!reducible.contains(RuleSet::TwoOne));
//! assert_eq!(format!("{}", reducible), "{(4,0),(0,2)}");
//! ```

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// One of the three admissibility grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Display)]
#[repr(u8)]
pub enum RuleSet {
    /// Spans the (4,0)-module; its counts match partitions into parts ≡ ±2, ±3, ±4 (mod 14).
    #[strum(serialize = "(4,0)")]
    FourZero,
    /// Spans the (2,1)-module; its counts match partitions into parts ≡ ±1, ±4, ±6 (mod 14).
    #[strum(serialize = "(2,1)")]
    TwoOne,
    /// Spans the (0,2)-module; its counts match partitions into parts ≡ ±2, ±5, ±6 (mod 14).
    #[strum(serialize = "(0,2)")]
    ZeroTwo,
}

impl RuleSet {
    /// Position of this rule set in per-rule-set arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of rule sets, stored as a bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleSetFlags(u8);

impl RuleSetFlags {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All three rule sets.
    pub const fn all() -> Self {
        Self((1 << RuleSet::COUNT) - 1)
    }

    /// A set holding exactly the given rule sets.
    pub fn from_rule_sets(rule_sets: &[RuleSet]) -> Self {
        let mut set = Self::empty();
        for &rule_set in rule_sets {
            set.insert(rule_set);
        }
        set
    }

    pub fn contains(self, rule_set: RuleSet) -> bool {
        self.0 & rule_set.bit() != 0
    }

    pub fn insert(&mut self, rule_set: RuleSet) {
        self.0 |= rule_set.bit();
    }

    /// Add every member of `other` to this set.
    pub fn insert_all(&mut self, other: RuleSetFlags) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every rule set is a member.
    pub fn is_full(self) -> bool {
        self == Self::all()
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The rule sets not in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::all().0)
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = RuleSet> {
        RuleSet::iter().filter(move |&rule_set| self.contains(rule_set))
    }
}

impl fmt::Display for RuleSetFlags {
    /// Format as "{(4,0),(0,2)}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, rule_set) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", rule_set)?;
        }
        write!(f, "}}")
    }
}

impl From<&[RuleSet]> for RuleSetFlags {
    fn from(rule_sets: &[RuleSet]) -> Self {
        Self::from_rule_sets(rule_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(RuleSet::FourZero.to_string(), "(4,0)");
        assert_eq!(RuleSet::TwoOne.to_string(), "(2,1)");
        assert_eq!(RuleSet::ZeroTwo.to_string(), "(0,2)");
    }

    #[test]
    fn test_index_matches_iteration_order() {
        for (i, rule_set) in RuleSet::iter().enumerate() {
            assert_eq!(rule_set.index(), i);
        }
        assert_eq!(RuleSet::COUNT, 3);
    }

    #[test]
    fn test_all_and_complement() {
        let all = RuleSetFlags::all();
        assert!(all.is_full());
        assert_eq!(all.len(), 3);
        assert!(all.complement().is_empty());

        let two_one = RuleSetFlags::from_rule_sets(&[RuleSet::TwoOne]);
        assert_eq!(
            two_one.complement(),
            RuleSetFlags::from_rule_sets(&[RuleSet::FourZero, RuleSet::ZeroTwo])
        );
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = RuleSetFlags::empty();
        set.insert(RuleSet::ZeroTwo);
        set.insert(RuleSet::ZeroTwo);
        assert_eq!(set.len(), 1);
        set.insert_all(RuleSetFlags::all());
        assert!(set.is_full());
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleSetFlags::empty().to_string(), "{}");
        assert_eq!(RuleSetFlags::all().to_string(), "{(4,0),(2,1),(0,2)}");
    }
}
