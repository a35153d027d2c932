// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Verification of the level 4 A2(2) partition identities.
//!
//! Every partition of n is enumerated and checked against three
//! difference-condition grammars, one for each level 4 standard module
//! (4,0), (2,1), (0,2). The number of partitions admissible under each
//! grammar is compared with the product side of the corresponding identity,
//! tabulated for n <= 200.
//!
//! # Architecture
//!
//! Two components work in lock-step:
//!
//! 1. **Generator** ([`partition::PartitionGenerator`]): Kelleher's
//!    accelerated ascending-composition rule. Produces every partition of n
//!    once, as a non-decreasing slice of a reused O(n) buffer.
//! 2. **Classifier** ([`classify::Classifier`]): a single pass over each
//!    partition with a handful of state flags that marks it reducible for
//!    some subset of the rule sets, stopping early when all three are.
//!
//! The generator calls the classifier through [`partition::PartitionVisitor`]
//! once per partition; the only data flowing back is the table of
//! [`state::AdmissibleCounts`].
//!
//! Around the core:
//!
//! - [`reference`]: the expected counts, and the power-series expansion
//!   they come from
//! - [`verify`]: the driver over a range of n, with report formatting
//!
//! # Example
//!
//! ```
//! use partition_identities::classify::{Classifier, RuleSet};
//! use partition_identities::verify::count;
//!
//! let (partitions, counts) = count(6, Classifier::default());
//! assert_eq!(partitions, 11);
//! assert_eq!(counts.get(RuleSet::FourZero), 3);
//! assert_eq!(counts.get(RuleSet::TwoOne), 3);
//! assert_eq!(counts.get(RuleSet::ZeroTwo), 2);
//! ```
//!
//! # References
//!
//! - Kelleher, J. (2006). "Encoding partitions as ascending compositions." PhD thesis,
//!   University College Cork.
//! - Nandi, D. (2014). "Partition identities arising from the standard A2(2)-modules
//!   of level 4." PhD thesis, Rutgers University.

pub mod classify;
pub mod error;
pub mod partition;
pub mod reference;
pub mod state;
pub mod verify;

// Re-export commonly used types
pub use classify::{Classifier, RuleSet, ScanMode};
pub use error::VerifyError;
pub use partition::{Partition, PartitionGenerator, PartitionVisitor, Partitions};
pub use state::AdmissibleCounts;
pub use verify::{Verifier, VerifyConfig, VerifyRange};
