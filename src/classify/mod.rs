// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-pass classification of partitions under the three rule sets.
//!
//! The classifier reads a non-decreasing partition from index 0 upward, i.e.
//! the conventional (largest-first) partition from right to left. For the
//! partition (6,5,2), stored as `[2, 5, 6]`, the step that reads 6 sees:
//!
//! ```text
//! part      = 6
//! previous  = 5
//! gap       = 1
//! last_gap  = 3
//! ```
//!
//! # State
//!
//! Three small state machines share one scan:
//!
//! - `odd`: the current part is odd
//! - `s03`: the scan is inside a `[2*,3,0]` difference run
//! - `s2`: the scan is inside a `[2*]` run that started at a first part of 2
//!
//! and three monotone reducibility flags, one per [`RuleSet`].
//!
//! # Initial conditions
//!
//! - first part 1 ⇒ reducible for (4,0) and (0,2)
//! - first part 3 ⇒ reducible for (0,2)
//! - first two parts (1,1) or (3,3) ⇒ reducible for (2,1)
//! - first two parts (2,2) ⇒ reducible for (2,1) and (0,2)
//! - `[3-,2*]` starting at 2 ⇒ reducible for (0,2)
//!
//! Everything in [`patterns::FORBIDDEN_GAPS`] is reducible for all three.
//!
//! # Example
//!
//! ```
//! use partition_identities::classify::{Classifier, RuleSet};
//!
//! let classifier = Classifier::default();
//! let result = classifier.classify(&[1, 3]);
//!
//! assert!(result.is_admissible(RuleSet::TwoOne));
//! assert!(!result.is_admissible(RuleSet::FourZero));
//! assert!(!result.is_admissible(RuleSet::ZeroTwo));
//! ```

pub mod patterns;
pub mod rule_set;

pub use rule_set::{RuleSet, RuleSetFlags};

use crate::partition::PartitionVisitor;
use crate::state::AdmissibleCounts;
use std::ops::ControlFlow;

/// Whether the scan may stop as soon as all three rule sets are reducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Stop at the first step that makes the partition reducible for all
    /// three rule sets.
    #[default]
    ShortCircuit,
    /// Read every part. Gives the same classification as `ShortCircuit`.
    Exhaustive,
}

/// Per-partition scan state. Created fresh for every partition.
#[derive(Debug, Default)]
struct ScanState {
    odd: bool,
    s03: bool,
    s2: bool,
    reducible: RuleSetFlags,
    previous: u32,
    /// Absent until the second part has been read.
    last_gap: Option<u32>,
}

impl ScanState {
    fn mark(&mut self, rule_sets: &[RuleSet]) {
        for &rule_set in rule_sets {
            self.reducible.insert(rule_set);
        }
    }

    fn stop_if_full(&self, mode: ScanMode) -> ControlFlow<()> {
        if mode == ScanMode::ShortCircuit && self.reducible.is_full() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Read the part at `index`. Breaks when the scan may stop early.
    fn step(&mut self, index: usize, part: u32, mode: ScanMode) -> ControlFlow<()> {
        self.odd = part % 2 == 1;

        if index == 0 {
            match part {
                1 => self.mark(&[RuleSet::FourZero, RuleSet::ZeroTwo]),
                2 => self.s2 = true,
                3 => self.mark(&[RuleSet::ZeroTwo]),
                _ => {}
            }
            self.previous = part;
            return ControlFlow::Continue(());
        }

        debug_assert!(part >= self.previous, "parts must be non-decreasing");
        let gap = part - self.previous;

        if patterns::is_forbidden(gap, self.last_gap, self.odd, self.s03) {
            self.reducible.insert_all(RuleSetFlags::all());
            self.stop_if_full(mode)?;
        }

        if self.s2 {
            match gap {
                2 => {}
                3 => {
                    self.mark(&[RuleSet::ZeroTwo]);
                    self.stop_if_full(mode)?;
                    self.s2 = false;
                }
                _ => self.s2 = false,
            }
        }

        if self.s03 && gap != 2 {
            self.s03 = false;
        } else if gap == 3 && self.last_gap == Some(0) {
            self.s03 = true;
        }

        if index == 1 && part == self.previous {
            match part {
                1 | 3 => {
                    self.mark(&[RuleSet::TwoOne]);
                    self.stop_if_full(mode)?;
                }
                2 => {
                    self.mark(&[RuleSet::TwoOne, RuleSet::ZeroTwo]);
                    self.stop_if_full(mode)?;
                }
                _ => {}
            }
        }

        self.last_gap = Some(gap);
        self.previous = part;
        ControlFlow::Continue(())
    }
}

/// Outcome of classifying one partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    reducible: RuleSetFlags,
    short_circuited: bool,
}

impl Classification {
    /// Rule sets under which the partition is reducible.
    pub fn reducible(&self) -> RuleSetFlags {
        self.reducible
    }

    /// Rule sets under which the partition is admissible.
    pub fn admissible(&self) -> RuleSetFlags {
        self.reducible.complement()
    }

    pub fn is_admissible(&self, rule_set: RuleSet) -> bool {
        !self.reducible.contains(rule_set)
    }

    /// True if the scan stopped before reading every part.
    pub fn short_circuited(&self) -> bool {
        self.short_circuited
    }
}

/// Stateless classifier; all scan state lives in a per-call `ScanState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    mode: ScanMode,
}

impl Classifier {
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Classify a non-decreasing partition. The empty partition is
    /// admissible for every rule set.
    pub fn classify(&self, parts: &[u32]) -> Classification {
        let mut state = ScanState::default();
        for (index, &part) in parts.iter().enumerate() {
            if state.step(index, part, self.mode).is_break() {
                return Classification {
                    reducible: state.reducible,
                    short_circuited: true,
                };
            }
        }
        Classification {
            reducible: state.reducible,
            short_circuited: false,
        }
    }

    /// Classify and credit `counts` for every rule set the partition is
    /// admissible under.
    pub fn tally(&self, parts: &[u32], counts: &mut AdmissibleCounts) -> Classification {
        let classification = self.classify(parts);
        counts.credit(classification.reducible());
        classification
    }
}

/// Visitor that classifies every partition it is shown and keeps the counts.
#[derive(Debug, Default)]
pub struct Tally {
    classifier: Classifier,
    counts: AdmissibleCounts,
}

impl Tally {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            counts: AdmissibleCounts::new(),
        }
    }

    pub fn counts(&self) -> &AdmissibleCounts {
        &self.counts
    }

    pub fn into_counts(self) -> AdmissibleCounts {
        self.counts
    }
}

impl PartitionVisitor for Tally {
    fn visit(&mut self, parts: &[u32]) {
        self.classifier.tally(parts, &mut self.counts);
    }
}
