//! Counts coin flips through a data-dependent branch and prints the final count.
use std::io::Write;

use anyhow::Result;

use microbench::branch::branch_count;
use microbench::harness::{init_logging, timed};

const ITERATIONS: u64 = 100_000_000;

/// Fixed seed for reproducibility
const SEED: u64 = 42;

fn main() -> Result<()> {
    init_logging();

    let count = timed("branchy", || branch_count(ITERATIONS, SEED));

    writeln!(std::io::stdout().lock(), "Final count = {count}")?;
    Ok(())
}
