// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partitions and their enumeration.
//!
//! A partition of n is stored as a non-decreasing slice of positive parts
//! summing to n. [`Partition`] is a borrowed view over such a slice that
//! prints the conventional way, largest part first.
//!
//! # Example
//!
//! ```
//! use partition_identities::partition::Partition;
//!
//! let p = Partition::new(&[2, 5, 6]);
//! assert_eq!(p.to_string(), "[6,5,2]");
//! assert_eq!(p.total(), 13);
//! ```

pub mod generator;

pub use generator::{PartitionGenerator, PartitionVisitor, Partitions};

use std::fmt;

/// A borrowed partition in non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition<'a>(&'a [u32]);

impl<'a> Partition<'a> {
    /// Wrap a non-decreasing slice of positive parts.
    pub fn new(parts: &'a [u32]) -> Self {
        debug_assert!(
            parts.windows(2).all(|w| w[0] <= w[1]),
            "parts must be non-decreasing: {:?}",
            parts
        );
        Self(parts)
    }

    /// The parts, smallest first.
    pub fn parts(self) -> &'a [u32] {
        self.0
    }

    /// Number of parts.
    pub fn len(self) -> usize {
        self.0.len()
    }

    /// True only for the empty partition of 0.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The number being partitioned.
    pub fn total(self) -> u64 {
        self.0.iter().map(|&p| u64::from(p)).sum()
    }

    /// Parts from the largest to the smallest.
    pub fn largest_first(self) -> impl Iterator<Item = u32> + 'a {
        self.0.iter().rev().copied()
    }
}

impl fmt::Display for Partition<'_> {
    /// Format as "[6,5,2]", largest part first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.largest_first().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, "]")
    }
}

impl<'a> From<&'a [u32]> for Partition<'a> {
    fn from(parts: &'a [u32]) -> Self {
        Self::new(parts)
    }
}
