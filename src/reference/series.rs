// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Power-series expansion of the product sides of the identities.
//!
//! The coefficient of q^n in ∏_{k allowed} 1/(1 - q^k) is the number of
//! partitions of n into allowed parts. Multiplying in one factor at a time
//! is the usual coin-change recurrence.
//!
//! # Example
//!
//! ```
//! use partition_identities::classify::RuleSet;
//! use partition_identities::reference::series;
//!
//! assert_eq!(series::partition_counts(6), vec![1, 1, 2, 3, 5, 7, 11]);
//! assert_eq!(series::module_counts(RuleSet::FourZero, 6), vec![1, 0, 1, 1, 2, 1, 3]);
//! ```

use crate::classify::RuleSet;

/// Modulus of the residue conditions on the product side.
pub const MODULUS: u32 = 14;

/// Residues modulo [`MODULUS`] of the parts allowed on the product side of
/// the identity for `rule_set`.
pub const fn residues(rule_set: RuleSet) -> [u32; 6] {
    match rule_set {
        RuleSet::FourZero => [2, 3, 4, 10, 11, 12],
        RuleSet::TwoOne => [1, 4, 6, 8, 10, 13],
        RuleSet::ZeroTwo => [2, 5, 6, 8, 9, 12],
    }
}

/// Number of partitions of each n in `0..=limit` into parts satisfying `allowed`.
///
/// Counts are exact while they fit in a u64 (every n up to about 400 for
/// the unrestricted case).
pub fn restricted_partition_counts<F: Fn(u32) -> bool>(limit: u32, allowed: F) -> Vec<u64> {
    let limit = limit as usize;
    let mut ways = vec![0u64; limit + 1];
    ways[0] = 1;
    for part in 1..=limit {
        if !allowed(part as u32) {
            continue;
        }
        for m in part..=limit {
            ways[m] += ways[m - part];
        }
    }
    ways
}

/// P(n) for every n in `0..=limit`.
pub fn partition_counts(limit: u32) -> Vec<u64> {
    restricted_partition_counts(limit, |_| true)
}

/// Product-side coefficients for `rule_set`, for every n in `0..=limit`.
pub fn module_counts(rule_set: RuleSet, limit: u32) -> Vec<u64> {
    let allowed = residues(rule_set);
    restricted_partition_counts(limit, |part| allowed.contains(&(part % MODULUS)))
}
