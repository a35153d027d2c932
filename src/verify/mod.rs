// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verification driver.
//!
//! For every n in a range, the driver runs the generator once with a
//! classifying visitor, then compares the total and the three admissible
//! counts with the reference tables. A mismatch is reported and the run
//! moves on to the next n.
//!
//! # Example
//!
//! ```
//! use partition_identities::verify::{VerifyConfig, VerifyRange, Verifier};
//!
//! let config = VerifyConfig::new(VerifyRange::new(0, 12).unwrap());
//! let summary = Verifier::new(config).run(&mut std::io::sink()).unwrap();
//!
//! assert_eq!(summary.verifications().len(), 13);
//! assert!(summary.failures().is_empty());
//! ```

pub mod report;

pub use report::{Mismatch, Quantity, Verification};

use crate::classify::{Classifier, ScanMode, Tally};
use crate::error::{Result, VerifyError};
use crate::partition::{Partition, PartitionGenerator, PartitionVisitor};
use crate::reference::{self, MAX_N};
use crate::state::AdmissibleCounts;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// An inclusive range of n, validated against the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyRange {
    min: u32,
    max: u32,
}

impl VerifyRange {
    /// Fails with [`VerifyError::InvalidRange`] if `min > max` or `max`
    /// is beyond the reference tables.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(VerifyError::InvalidRange {
                min,
                max,
                reason: "minimum exceeds maximum",
            });
        }
        if max > MAX_N {
            return Err(VerifyError::InvalidRange {
                min,
                max,
                reason: "reference tables stop at n = 200",
            });
        }
        Ok(Self { min, max })
    }

    pub fn single(n: u32) -> Result<Self> {
        Self::new(n, n)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Settings for one verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyConfig {
    pub range: VerifyRange,
    /// Write every admissible partition, per rule set, before each report.
    pub list_admissible: bool,
    pub scan_mode: ScanMode,
}

impl VerifyConfig {
    pub fn new(range: VerifyRange) -> Self {
        Self {
            range,
            list_admissible: false,
            scan_mode: ScanMode::default(),
        }
    }
}

/// Enumerate the partitions of `n` and count the admissible ones.
///
/// Returns the number of partitions produced together with the counts.
pub fn count(n: u32, classifier: Classifier) -> (u64, AdmissibleCounts) {
    let mut tally = Tally::new(classifier);
    let partitions = PartitionGenerator::for_each(n, &mut tally);
    (partitions, tally.into_counts())
}

/// Visitor that counts like [`Tally`] and also lists admissible partitions.
///
/// The first write error stops further output; it is reported by
/// [`finish`](Self::finish).
struct ListingTally<'w, W: Write> {
    classifier: Classifier,
    counts: AdmissibleCounts,
    out: &'w mut W,
    error: Option<io::Error>,
}

impl<'w, W: Write> ListingTally<'w, W> {
    fn new(classifier: Classifier, out: &'w mut W) -> Self {
        Self {
            classifier,
            counts: AdmissibleCounts::new(),
            out,
            error: None,
        }
    }

    fn finish(self) -> Result<AdmissibleCounts> {
        match self.error {
            Some(error) => Err(error.into()),
            None => Ok(self.counts),
        }
    }
}

impl<W: Write> PartitionVisitor for ListingTally<'_, W> {
    fn visit(&mut self, parts: &[u32]) {
        let classification = self.classifier.tally(parts, &mut self.counts);
        if self.error.is_some() {
            return;
        }
        for rule_set in classification.admissible().iter() {
            if let Err(error) = writeln!(self.out, "{}-module: {}", rule_set, Partition::new(parts)) {
                self.error = Some(error);
                return;
            }
        }
    }
}

/// Runs the generator and classifier over a range of n.
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifyConfig,
}

impl Verifier {
    pub fn new(config: VerifyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Verify a single n, writing the listing (if enabled) to `out`.
    pub fn verify_one<W: Write>(&self, n: u32, out: &mut W) -> Result<Verification> {
        let expected = reference::expected(n).ok_or(VerifyError::InvalidRange {
            min: n,
            max: n,
            reason: "reference tables stop at n = 200",
        })?;
        let classifier = Classifier::new(self.config.scan_mode);

        debug!(n, "enumerating partitions");
        let (partitions, counts) = if self.config.list_admissible {
            let mut listing = ListingTally::new(classifier, out);
            let partitions = PartitionGenerator::for_each(n, &mut listing);
            (partitions, listing.finish()?)
        } else {
            count(n, classifier)
        };

        let verification = Verification::new(n, partitions, counts, expected);
        log_outcome(&verification);
        Ok(verification)
    }

    /// Verify every n in the configured range, writing a report block per n.
    ///
    /// Mismatches do not stop the run; they are collected in the summary.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Summary> {
        let mut verifications = Vec::with_capacity(self.config.range.iter().count());
        for n in self.config.range.iter() {
            writeln!(out, "Computing Partitions of n={}...", n)?;
            let verification = self.verify_one(n, out)?;
            writeln!(out, "{}", verification)?;
            verifications.push(verification);
        }
        Ok(Summary { verifications })
    }
}

fn log_outcome(verification: &Verification) {
    let n = verification.n();
    let mismatches = verification.mismatches();
    if mismatches.is_empty() {
        info!(n, partitions = verification.partitions(), "counts agree with reference tables");
        return;
    }
    for mismatch in &mismatches {
        if verification.is_certified() {
            warn!(
                n,
                quantity = %mismatch.quantity,
                expected = mismatch.expected,
                computed = mismatch.computed,
                "verification mismatch"
            );
        } else {
            info!(
                n,
                quantity = %mismatch.quantity,
                expected = mismatch.expected,
                computed = mismatch.computed,
                "mismatch beyond the certified bound"
            );
        }
    }
}

/// Results of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    verifications: Vec<Verification>,
}

impl Summary {
    pub fn verifications(&self) -> &[Verification] {
        &self.verifications
    }

    /// Every mismatch in the run.
    pub fn failures(&self) -> Vec<Mismatch> {
        self.verifications
            .iter()
            .flat_map(Verification::mismatches)
            .collect()
    }

    /// Mismatches for n within the certified bound.
    pub fn certified_failures(&self) -> Vec<Mismatch> {
        self.verifications
            .iter()
            .filter(|v| v.is_certified())
            .flat_map(Verification::mismatches)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::RuleSet;

    #[test]
    fn test_range_validation() {
        assert!(VerifyRange::new(0, 200).is_ok());
        assert!(VerifyRange::new(5, 5).is_ok());
        assert!(matches!(
            VerifyRange::new(6, 5),
            Err(VerifyError::InvalidRange { min: 6, max: 5, .. })
        ));
        assert!(matches!(
            VerifyRange::new(0, 201),
            Err(VerifyError::InvalidRange { max: 201, .. })
        ));
    }

    #[test]
    fn test_count_six() {
        let (partitions, counts) = count(6, Classifier::default());
        assert_eq!(partitions, 11);
        assert_eq!(counts.get(RuleSet::FourZero), 3);
        assert_eq!(counts.get(RuleSet::TwoOne), 3);
        assert_eq!(counts.get(RuleSet::ZeroTwo), 2);
    }

    #[test]
    fn test_listing_for_four() {
        let mut config = VerifyConfig::new(VerifyRange::single(4).unwrap());
        config.list_admissible = true;
        let mut out = Vec::new();
        let v = Verifier::new(config).verify_one(4, &mut out).unwrap();
        assert!(v.is_consistent());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(2,1)-module: [3,1]\n\
             (4,0)-module: [2,2]\n\
             (4,0)-module: [4]\n\
             (2,1)-module: [4]\n\
             (0,2)-module: [4]\n"
        );
    }

    #[test]
    fn test_run_writes_report() {
        let config = VerifyConfig::new(VerifyRange::new(0, 1).unwrap());
        let mut out = Vec::new();
        let summary = Verifier::new(config).run(&mut out).unwrap();
        assert!(summary.failures().is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Computing Partitions of n=0...\n\tAll=            1\tGot=            1\n"));
        assert!(text.contains("Computing Partitions of n=1...\n"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_listing_write_error() {
        let mut config = VerifyConfig::new(VerifyRange::single(3).unwrap());
        config.list_admissible = true;
        let result = Verifier::new(config).verify_one(3, &mut FailingWriter);
        assert!(matches!(result, Err(VerifyError::Io(_))));
    }
}
