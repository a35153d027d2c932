// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for enumeration and classification.
//!
//! Uses proptest to check invariants over arbitrary n and arbitrary
//! (not necessarily generated) partitions.

mod common;

use common::classify_both;
use partition_identities::classify::{Classifier, RuleSetFlags};
use partition_identities::reference::tables::PARTITIONS;
use partition_identities::{AdmissibleCounts, Partition, PartitionGenerator};
use proptest::prelude::*;

/// An arbitrary partition, as a non-decreasing vector of positive parts.
fn partition_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=24, 0..12).prop_map(|mut parts| {
        parts.sort_unstable();
        parts
    })
}

// =============================================================================
// Generator Properties
// =============================================================================

proptest! {
    /// The generator produces P(n) partitions, each summing to n.
    #[test]
    fn prop_generator_counts_and_sums(n in 0u32..=26) {
        let mut bad = 0u64;
        let count = PartitionGenerator::for_each(n, &mut |parts: &[u32]| {
            if Partition::new(parts).total() != u64::from(n) {
                bad += 1;
            }
        });
        prop_assert_eq!(bad, 0);
        prop_assert_eq!(count, PARTITIONS[n as usize]);
    }

    /// Consecutive partitions strictly increase, so none repeats.
    #[test]
    fn prop_generator_strictly_increasing(n in 0u32..=26) {
        let mut generator = PartitionGenerator::new(n);
        let mut previous: Option<Vec<u32>> = None;
        while let Some(parts) = generator.next_partition() {
            if let Some(prev) = &previous {
                prop_assert!(prev.as_slice() < parts);
            }
            previous = Some(parts.to_vec());
        }
    }
}

// =============================================================================
// Classifier Properties
// =============================================================================

proptest! {
    /// Short-circuit and exhaustive scans agree, and the shortcut only
    /// fires on partitions reducible for all three rule sets.
    #[test]
    fn prop_shortcut_is_sound(parts in partition_strategy()) {
        let (short, full) = classify_both(&parts);
        prop_assert_eq!(short.reducible(), full.reducible());
        if short.short_circuited() {
            prop_assert_eq!(full.reducible(), RuleSetFlags::all());
        }
    }

    /// A partition is credited to exactly the rule sets it is admissible under.
    #[test]
    fn prop_tally_credits_complement(parts in partition_strategy()) {
        let mut counts = AdmissibleCounts::new();
        let classification = Classifier::default().tally(&parts, &mut counts);
        for (rule_set, c) in counts.iter() {
            prop_assert_eq!(c == 1, classification.is_admissible(rule_set));
        }
    }

    /// Any partition containing a gap of exactly 1 is reducible for all.
    #[test]
    fn prop_unit_gap_fully_reducible(mut parts in partition_strategy(), at in any::<prop::sample::Index>()) {
        prop_assume!(!parts.is_empty());
        let i = at.index(parts.len());
        let insert = parts[i] + 1;
        parts.insert(i + 1, insert);
        parts.sort_unstable();
        prop_assert!(Classifier::default().classify(&parts).reducible().is_full());
    }
}
