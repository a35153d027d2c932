// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `verify`: check the level 4 A2(2) partition identities over a range of n.
//!
//! **Usage:**
//! ```text
//! verify [MIN] [MAX] [--list] [--exhaustive]
//! ```
//!
//! Without a range the program asks for one on stdin. Exits non-zero if any
//! count disagrees with the reference tables for n <= 170.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use partition_identities::reference::CERTIFIED_MAX;
use partition_identities::{ScanMode, Verifier, VerifyConfig, VerifyRange};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "partition_identities=warn,verify=info";

/// Enumerate partitions of n and compare admissible counts with the
/// product sides of the three identities.
#[derive(Parser)]
#[command(name = "verify", about = "Verify the level 4 A2(2) partition identities")]
struct Args {
    /// Smallest n to check (asked for on stdin when omitted).
    min: Option<u32>,

    /// Largest n to check (asked for on stdin when omitted).
    max: Option<u32>,

    /// List every admissible partition, per rule set, largest part first.
    #[arg(long)]
    list: bool,

    /// Read every part of every partition instead of stopping as soon as
    /// the partition is reducible for all three rule sets.
    #[arg(long)]
    exhaustive: bool,
}

/// Whitespace-separated numbers read from an interactive input.
struct Prompt<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompt<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn number(&mut self, label: &str) -> Result<u32> {
        print!("{}", label);
        io::stdout().flush()?;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token
                    .parse()
                    .with_context(|| format!("expected a non-negative integer, got {:?}", token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended before {:?} was answered", label.trim());
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }
}

fn main() -> Result<ExitCode> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let (min, max) = match (args.min, args.max) {
        (Some(min), Some(max)) => (min, max),
        (min, _) => {
            let mut prompt = Prompt::new(io::stdin().lock());
            let min = match min {
                Some(min) => min,
                None => prompt.number("Starting from: ")?,
            };
            (min, prompt.number("Ending at: ")?)
        }
    };

    let range = VerifyRange::new(min, max)?;
    let config = VerifyConfig {
        range,
        list_admissible: args.list,
        scan_mode: if args.exhaustive {
            ScanMode::Exhaustive
        } else {
            ScanMode::ShortCircuit
        },
    };
    tracing::info!(min, max, list = args.list, exhaustive = args.exhaustive, "starting verification");

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = Verifier::new(config).run(&mut out)?;
    out.flush()?;

    let certified = summary.certified_failures();
    let informational = summary.failures().len() - certified.len();
    if informational > 0 {
        tracing::info!(
            count = informational,
            "mismatches above n = {} are outside the checked range",
            CERTIFIED_MAX
        );
    }
    if certified.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    for mismatch in &certified {
        eprintln!("verification failed: {}", mismatch);
    }
    Ok(ExitCode::FAILURE)
}
