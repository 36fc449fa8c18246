//! qsbench — quicksort checksum microbenchmark runner.
//!
//! This crate wraps `qsbench-core` with parameter validation, repeated
//! timed runs, and checksum verification.

pub use anyhow::{Context, Result};
use anyhow::bail;
use qsbench_core::{SortStrategy, Variant, ARR_LEN, ITERATIONS};
use std::time::{Duration, Instant};

/// Seed used when none is given on the command line or in `SEED`.
pub const DEFAULT_SEED: i64 = 0;

/// Configuration options for a benchmark session
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Parameter-width variant (A, B or C)
    pub variant: Variant,
    /// Generator seed, reinterpreted as unsigned
    pub seed: i64,
    /// Working array length (must be at least 1)
    pub arr_len: i64,
    /// Fill/sort rounds per run
    pub iterations: i64,
    /// Recursion strategy for the sort
    pub strategy: SortStrategy,
    /// Number of timed runs; every run must produce the same checksum
    pub repeat: u32,
    /// Checksum every run must equal, if any
    pub expect: Option<u64>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            variant: Variant::A,
            seed: DEFAULT_SEED,
            arr_len: ARR_LEN as i64,
            iterations: ITERATIONS as i64,
            strategy: SortStrategy::Recursive,
            repeat: 1,
            expect: None,
        }
    }
}

/// Outcome of a benchmark session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Checksum shared by every run (low 32 bits only for variant B).
    pub checksum: u64,
    /// Number of runs performed.
    pub runs: u32,
    /// Wall-clock time summed over all runs.
    pub total: Duration,
}

impl Report {
    /// Mean wall-clock time per run.
    pub fn mean(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        self.total / self.runs
    }
}

/// Run the benchmark `options.repeat` times and return the shared checksum.
///
/// # Errors
/// - parameters out of range for the variant (negative, zero length,
///   beyond 32 bits for variant B)
/// - two runs producing different checksums
/// - a checksum different from `options.expect`
pub fn execute(options: &BenchOptions) -> Result<Report> {
    if options.repeat == 0 {
        bail!("repeat count must be at least 1");
    }
    if options.variant == Variant::B {
        check_fits_i32("seed", options.seed)?;
        check_fits_i32("array length", options.arr_len)?;
        check_fits_i32("iteration count", options.iterations)?;
    }

    let mut total = Duration::ZERO;
    let mut first: Option<u64> = None;
    for run in 0..options.repeat {
        let start = Instant::now();
        let checksum = options
            .variant
            .run_signed(
                options.strategy,
                options.seed,
                options.arr_len,
                options.iterations,
            )
            .with_context(|| format!("variant {:?} rejected its parameters", options.variant))?;
        total += start.elapsed();

        match first {
            None => first = Some(checksum),
            Some(previous) if previous != checksum => {
                bail!("run {run} produced checksum {checksum}, earlier runs produced {previous}")
            }
            Some(_) => {}
        }
    }

    let checksum = first.context("no runs were performed")?;
    if let Some(expected) = options.expect {
        if checksum != expected {
            bail!("invalid checksum: expected {expected}, got {checksum}");
        }
    }

    Ok(Report {
        checksum,
        runs: options.repeat,
        total,
    })
}

fn check_fits_i32(what: &str, value: i64) -> Result<()> {
    i32::try_from(value)
        .map(|_| ())
        .with_context(|| format!("{what} {value} does not fit variant B's 32-bit parameters"))
}
