// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Difference conditions that are forbidden under every rule set.
//!
//! A partition is read part by part; `gap` is the difference between the
//! current part and the one read before it, and `last_gap` is the gap one
//! step earlier. Writing difference sequences as in the literature, the
//! patterns below are `[1]`, `[0,0]`, `[0,2]`, `[2,0]`, `[0,3]`, and, when the
//! current part is odd, `[3-,0]`, `[0-,4]`, `[4-,0]`. Matching any of them
//! makes the partition reducible for all three rule sets at once.
//!
//! The table was derived from the algebra, not from first principles here;
//! it must be kept exactly as is.

/// Constraint on the gap preceding the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastGap {
    Any,
    /// The previous gap must exist and equal this value.
    Exactly(u32),
}

/// Constraint on the parity of the current part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Any,
    Odd,
}

/// One forbidden (gap, last gap, parity) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapPattern {
    pub gap: u32,
    pub last_gap: LastGap,
    pub parity: Parity,
}

impl GapPattern {
    const fn new(gap: u32, last_gap: LastGap, parity: Parity) -> Self {
        Self {
            gap,
            last_gap,
            parity,
        }
    }

    /// Does this pattern match the current step of a scan?
    pub fn matches(&self, gap: u32, last_gap: Option<u32>, odd: bool) -> bool {
        if self.gap != gap {
            return false;
        }
        if self.parity == Parity::Odd && !odd {
            return false;
        }
        match self.last_gap {
            LastGap::Any => true,
            LastGap::Exactly(expected) => last_gap == Some(expected),
        }
    }
}

/// The forbidden local patterns shared by all three rule sets.
pub const FORBIDDEN_GAPS: [GapPattern; 8] = [
    GapPattern::new(1, LastGap::Any, Parity::Any),
    GapPattern::new(0, LastGap::Exactly(0), Parity::Any),
    GapPattern::new(0, LastGap::Exactly(2), Parity::Any),
    GapPattern::new(2, LastGap::Exactly(0), Parity::Any),
    GapPattern::new(0, LastGap::Exactly(3), Parity::Any),
    GapPattern::new(3, LastGap::Exactly(0), Parity::Odd),
    GapPattern::new(0, LastGap::Exactly(4), Parity::Odd),
    GapPattern::new(4, LastGap::Exactly(0), Parity::Odd),
];

/// Gap that closes a `[3-,2*,3,0]` run on an odd part.
///
/// Only forbidden while the scan is inside a `[2*,3,0]` run (the S03 state).
pub const S03_CLOSING_GAP: u32 = 3;

/// True if the step (`gap`, `last_gap`, parity) is forbidden outright, or
/// closes an S03 run on an odd part.
pub fn is_forbidden(gap: u32, last_gap: Option<u32>, odd: bool, in_s03: bool) -> bool {
    FORBIDDEN_GAPS
        .iter()
        .any(|pattern| pattern.matches(gap, last_gap, odd))
        || (in_s03 && odd && gap == S03_CLOSING_GAP)
}
