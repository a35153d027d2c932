// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the partition generator.
//!
//! These tests validate that, for every n checked, the generator:
//! - Produces exactly P(n) partitions
//! - Produces each partition once, in increasing lexicographic order
//! - Produces only non-decreasing sequences of positive parts summing to n
//! - Gives the same sequence when run again

mod common;

use common::all_partitions;
use partition_identities::reference::tables::PARTITIONS;
use partition_identities::{Partition, PartitionGenerator, Partitions};
use std::collections::HashSet;

const MAX_CHECKED: u32 = 30;

#[test]
fn test_counts_match_partition_function() {
    for n in 0..=MAX_CHECKED {
        let count = PartitionGenerator::for_each(n, &mut |_: &[u32]| {});
        assert_eq!(count, PARTITIONS[n as usize], "P({})", n);
    }
}

#[test]
fn test_every_partition_is_valid() {
    for n in 0..=MAX_CHECKED {
        PartitionGenerator::for_each(n, &mut |parts: &[u32]| {
            assert!(parts.iter().all(|&p| p > 0), "zero part in {:?}", parts);
            assert!(
                parts.windows(2).all(|w| w[0] <= w[1]),
                "not non-decreasing: {:?}",
                parts
            );
            assert_eq!(Partition::new(parts).total(), u64::from(n));
        });
    }
}

#[test]
fn test_partitions_are_distinct_and_ordered() {
    for n in 0..=MAX_CHECKED {
        let all = all_partitions(n);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "{:?} then {:?}", pair[0], pair[1]);
        }
        let unique: HashSet<&Vec<u32>> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}

#[test]
fn test_first_and_last() {
    for n in 1..=MAX_CHECKED {
        let all = all_partitions(n);
        assert_eq!(all.first(), Some(&vec![1; n as usize]));
        assert_eq!(all.last(), Some(&vec![n]));
    }
}

#[test]
fn test_reversed_reads_as_partition() {
    // Read largest part first, every sequence is non-increasing and sums to n.
    for parts in all_partitions(12) {
        let reversed: Vec<u32> = Partition::new(&parts).largest_first().collect();
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(reversed.iter().sum::<u32>(), 12);
    }
}

#[test]
fn test_rerun_is_identical() {
    let first: Vec<Vec<u32>> = Partitions::new(18).collect();
    let second: Vec<Vec<u32>> = Partitions::new(18).collect();
    assert_eq!(first, second);
}

#[test]
fn test_lending_and_owning_agree() {
    let mut lent = Vec::new();
    let mut generator = PartitionGenerator::new(15);
    while let Some(parts) = generator.next_partition() {
        lent.push(parts.to_vec());
    }
    assert_eq!(lent, all_partitions(15));
    assert_eq!(generator.produced(), PARTITIONS[15]);
}

#[test]
fn test_zero_has_only_the_empty_partition() {
    let mut lengths = Vec::new();
    let count = PartitionGenerator::for_each(0, &mut |parts: &[u32]| lengths.push(parts.len()));
    assert_eq!(count, 1);
    assert_eq!(lengths, vec![0]);
}
