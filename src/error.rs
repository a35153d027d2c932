// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the verification driver.
//!
//! Enumeration and classification cannot fail; errors only arise at the
//! boundary, before any partitions are generated, or while writing the
//! optional listing of admissible partitions.

use std::io;
use thiserror::Error;

/// Errors that can occur while setting up or running a verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The requested range of n is empty or outside the reference tables.
    #[error("invalid range {min}..={max}: {reason}")]
    InvalidRange {
        min: u32,
        max: u32,
        reason: &'static str,
    },

    /// Writing the listing of admissible partitions failed.
    #[error("failed to write partition listing: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
