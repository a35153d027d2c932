// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accelerated ascending-composition enumeration of integer partitions.
//!
//! Partitions are produced as non-decreasing sequences, following Kelleher's
//! `accelAsc` rule. The working buffer holds at most `n` parts and is
//! overwritten in place for every partition, so the memory cost of a run is
//! O(n) regardless of how many partitions are produced.
//!
//! # Example
//!
//! ```
//! use partition_identities::partition::PartitionGenerator;
//!
//! let mut seen = Vec::new();
//! let count = PartitionGenerator::for_each(4, &mut |parts: &[u32]| seen.push(parts.to_vec()));
//!
//! assert_eq!(count, 5);
//! assert_eq!(
//!     seen,
//!     vec![vec![1, 1, 1, 1], vec![1, 1, 2], vec![1, 3], vec![2, 2], vec![4]]
//! );
//! ```

/// Something that consumes partitions one at a time.
///
/// The slice is the generator's working buffer; it is only valid for the
/// duration of the call.
pub trait PartitionVisitor {
    fn visit(&mut self, parts: &[u32]);
}

impl<F: FnMut(&[u32])> PartitionVisitor for F {
    fn visit(&mut self, parts: &[u32]) {
        self(parts)
    }
}

/// Position of the generator within the `accelAsc` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// n = 0: the empty partition is still to be produced.
    Empty,
    /// Top of the outer loop: pop the last part and pack equal parts.
    Descend,
    /// Splitting the remainder into the two trailing parts `x <= y`.
    Pairs,
    /// Emitting the partition whose last part absorbs the whole remainder.
    Tail,
    Done,
}

/// Resumable partition generator.
///
/// Each call to [`next_partition`](Self::next_partition) runs the `accelAsc`
/// loop up to the next partition and lends out the working buffer.
#[derive(Debug, Clone)]
pub struct PartitionGenerator {
    parts: Vec<u32>,
    /// Next write index.
    k: usize,
    /// Smallest candidate for the part at index `k`.
    x: u32,
    /// Sum still to be distributed.
    y: u32,
    phase: Phase,
    produced: u64,
}

impl PartitionGenerator {
    /// Create a generator for the partitions of `n`.
    pub fn new(n: u32) -> Self {
        let phase = if n == 0 { Phase::Empty } else { Phase::Descend };
        Self {
            parts: vec![0; n as usize],
            k: 1,
            x: 0,
            y: n.saturating_sub(1),
            phase,
            produced: 0,
        }
    }

    /// Enumerate every partition of `n`, calling `visitor` once for each.
    ///
    /// Returns the number of partitions produced, which is P(n).
    pub fn for_each<V: PartitionVisitor + ?Sized>(n: u32, visitor: &mut V) -> u64 {
        let mut generator = Self::new(n);
        while let Some(parts) = generator.next_partition() {
            visitor.visit(parts);
        }
        generator.produced()
    }

    /// Number of partitions handed out so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Advance to the next partition, in non-decreasing form.
    ///
    /// Returns `None` once every partition has been produced. The returned
    /// slice is overwritten by the following call.
    pub fn next_partition(&mut self) -> Option<&[u32]> {
        loop {
            match self.phase {
                Phase::Empty => {
                    self.phase = Phase::Done;
                    self.produced += 1;
                    return Some(&self.parts[..0]);
                }
                Phase::Descend => {
                    if self.k == 0 {
                        self.phase = Phase::Done;
                        continue;
                    }
                    let mut x = self.parts[self.k - 1] + 1;
                    self.k -= 1;
                    while 2 * x <= self.y {
                        self.parts[self.k] = x;
                        self.y -= x;
                        self.k += 1;
                    }
                    self.x = x;
                    self.phase = Phase::Pairs;
                }
                Phase::Pairs => {
                    if self.x > self.y {
                        self.phase = Phase::Tail;
                        continue;
                    }
                    let k = self.k;
                    self.parts[k] = self.x;
                    self.parts[k + 1] = self.y;
                    self.x += 1;
                    self.y -= 1;
                    self.produced += 1;
                    return Some(&self.parts[..k + 2]);
                }
                Phase::Tail => {
                    let k = self.k;
                    let last = self.x + self.y;
                    self.parts[k] = last;
                    self.y = last - 1;
                    self.phase = Phase::Descend;
                    self.produced += 1;
                    return Some(&self.parts[..k + 1]);
                }
                Phase::Done => return None,
            }
        }
    }
}

/// Owning iterator over the partitions of `n`.
///
/// Every item is a fresh copy of the generator's buffer. Prefer
/// [`PartitionGenerator::for_each`] when the partitions are only inspected.
#[derive(Debug, Clone)]
pub struct Partitions {
    generator: PartitionGenerator,
}

impl Partitions {
    pub fn new(n: u32) -> Self {
        Self {
            generator: PartitionGenerator::new(n),
        }
    }
}

impl Iterator for Partitions {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_partition().map(<[u32]>::to_vec)
    }
}
