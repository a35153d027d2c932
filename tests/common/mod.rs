// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use partition_identities::classify::{Classification, Classifier, ScanMode};
use partition_identities::Partitions;

/// Every partition of `n`, in generation order.
pub fn all_partitions(n: u32) -> Vec<Vec<u32>> {
    Partitions::new(n).collect()
}

/// Classify `parts` under both scan modes.
///
/// Returns (short-circuit result, exhaustive result).
pub fn classify_both(parts: &[u32]) -> (Classification, Classification) {
    (
        Classifier::new(ScanMode::ShortCircuit).classify(parts),
        Classifier::new(ScanMode::Exhaustive).classify(parts),
    )
}
