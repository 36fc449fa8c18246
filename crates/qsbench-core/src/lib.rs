//! `qsbench-core` — deterministic quicksort checksum benchmark.
//!
//! This crate is `#![no_std]` by default. It provides:
//! - `Lcg64` / `Lcg32` linear-congruential generators behind `RandomSource`
//! - `fill` to overwrite a working array with generator output
//! - `quick_sort`, an in-place Hoare-partition quicksort
//! - `QuicksortBenchmark` and the variant entry points (`alloc` feature)
//!
//! The checksum is compared across ports of the benchmark, so the generator
//! and the partition scheme are reproduced bit for bit.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod rng;
pub use rng::{Lcg32, Lcg64, RandomSource, LCG_INCREMENT, LCG_MASK, LCG_MULTIPLIER};

mod randomize;
pub use randomize::{fill, Reduction, REDUCTION_MODULUS};

mod sort;
pub use sort::{quick_sort, sort_all, SortStrategy};
#[cfg(feature = "alloc")]
pub use sort::quick_sort_iterative;

mod bench;
pub use bench::checksum_in;
#[cfg(feature = "alloc")]
pub use bench::QuicksortBenchmark;

#[cfg(feature = "alloc")]
mod entry;
#[cfg(feature = "alloc")]
pub use entry::{run_fixed, run_fixed_with, run_i32, run_i64, Variant};

/// Seed used by the fixed-parameter variant.
pub const SEED: u64 = 7;
/// Working array length used by the fixed-parameter variant.
pub const ARR_LEN: usize = 1000;
/// Iteration count used by the fixed-parameter variant.
pub const ITERATIONS: usize = 100;
/// Cross-implementation parity checksum for `SEED` / `ARR_LEN` / `ITERATIONS`.
pub const CHECKSUM: u64 = 107_829_970_005;

/// Benchmark precondition violations — the only failures the benchmark has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchError {
    /// The working array has no elements; there is no middle element to sum.
    EmptyArray,
    /// A signed length parameter was negative.
    NegativeLength { len: i64 },
    /// A signed iteration count was negative.
    NegativeIterations { iterations: i64 },
    /// The requested length does not fit in `usize` on this target.
    LengthTooLarge { len: u64 },
    /// The requested iteration count does not fit in `usize` on this target.
    IterationsTooLarge { iterations: i64 },
    /// The working array could not be allocated.
    AllocationFailed { len: usize },
}

impl core::fmt::Display for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BenchError::EmptyArray => write!(f, "array length must be at least 1"),
            BenchError::NegativeLength { len } => {
                write!(f, "array length must not be negative (got {len})")
            }
            BenchError::NegativeIterations { iterations } => {
                write!(f, "iteration count must not be negative (got {iterations})")
            }
            BenchError::LengthTooLarge { len } => {
                write!(f, "array length {len} does not fit in usize")
            }
            BenchError::IterationsTooLarge { iterations } => {
                write!(f, "iteration count {iterations} does not fit in usize")
            }
            BenchError::AllocationFailed { len } => {
                write!(f, "cannot allocate a working array of {len} elements")
            }
        }
    }
}

impl core::error::Error for BenchError {}

/// Result type for benchmark operations — `Result<T, BenchError>`.
pub type BenchResult<T> = Result<T, BenchError>;
