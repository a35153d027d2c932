// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable state owned by the driver for the duration of one n.
//!
//! The only state that outlives a single partition is the table of
//! admissible counts; everything the classifier tracks is per partition.

pub mod statistics;

pub use statistics::AdmissibleCounts;
