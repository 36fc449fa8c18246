//! Variant entry points.
//!
//! | Variant | State | Values | Checksum |
//! |---|---|---|---|
//! | A | 64-bit | raw generator output | `u64` |
//! | B | 32-bit | `output % 1000` | truncated to 32 bits, returned as `i32` |
//! | C | 64-bit | `output % 1000` | `u64`, returned as `i64` |
//!
//! Signed parameters are validated here instead of being reinterpreted as
//! huge unsigned counts.

use crate::bench::QuicksortBenchmark;
use crate::randomize::Reduction;
use crate::rng::{Lcg32, Lcg64};
use crate::sort::SortStrategy;
use crate::{BenchError, BenchResult, ARR_LEN, ITERATIONS, SEED};

/// Parameter-width variant of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// 64-bit state, unreduced values, 64-bit checksum.
    #[default]
    A,
    /// 32-bit state, values mod 1000, 32-bit checksum.
    B,
    /// 64-bit state, values mod 1000, 64-bit checksum.
    C,
}

impl Variant {
    /// Value reduction applied after each generator step.
    pub fn reduction(self) -> Reduction {
        match self {
            Variant::A => Reduction::None,
            Variant::B | Variant::C => Reduction::Mod1000,
        }
    }

    /// Width in bits of the returned checksum.
    pub fn checksum_bits(self) -> u32 {
        match self {
            Variant::A | Variant::C => 64,
            Variant::B => 32,
        }
    }

    /// Run this variant with the recursive sort.
    ///
    /// For `B` the seed is truncated to 32 bits and the checksum to its low
    /// 32 bits (zero-extended into the returned `u64`).
    ///
    /// # Errors
    /// - `EmptyArray` if `len == 0`
    /// - `AllocationFailed` if the working array cannot be allocated
    pub fn run(self, seed: u64, len: usize, iterations: usize) -> BenchResult<u64> {
        self.run_with(SortStrategy::default(), seed, len, iterations)
    }

    /// Same as [`Variant::run`] with an explicit sort strategy.
    pub fn run_with(
        self,
        strategy: SortStrategy,
        seed: u64,
        len: usize,
        iterations: usize,
    ) -> BenchResult<u64> {
        let reduction = self.reduction();
        match self {
            Variant::A | Variant::C => {
                let mut bench = QuicksortBenchmark::try_new(Lcg64::new(seed), len, reduction)?
                    .with_strategy(strategy);
                Ok(bench.run(iterations))
            }
            Variant::B => {
                let mut bench =
                    QuicksortBenchmark::try_new(Lcg32::new(seed as u32), len, reduction)?
                        .with_strategy(strategy);
                Ok(bench.run(iterations) as u32 as u64)
            }
        }
    }

    /// Run with signed parameters, rejecting negative length or iteration
    /// counts. The seed is reinterpreted as unsigned.
    ///
    /// # Errors
    /// - `NegativeLength` / `NegativeIterations` for negative parameters
    /// - `LengthTooLarge` / `IterationsTooLarge` if a parameter does not fit in `usize`
    /// - `EmptyArray` if `arr_len == 0`
    pub fn run_signed(
        self,
        strategy: SortStrategy,
        seed: i64,
        arr_len: i64,
        iterations: i64,
    ) -> BenchResult<u64> {
        let len = checked_len(arr_len)?;
        let iterations = checked_iterations(iterations)?;
        self.run_with(strategy, seed as u64, len, iterations)
    }
}

/// Variant A with its fixed parameters: seed 7, 1000 elements, 100 iterations.
///
/// Always returns [`crate::CHECKSUM`].
pub fn run_fixed() -> u64 {
    run_fixed_with(SEED)
}

/// Variant A with fixed length and iteration count and a caller seed.
pub fn run_fixed_with(seed: u64) -> u64 {
    const _: () = assert!(ARR_LEN > 0, "fixed array length must be non-zero");
    match Variant::A.run(seed, ARR_LEN, ITERATIONS) {
        Ok(checksum) => checksum,
        // EmptyArray is ruled out by the assertion above; AllocationFailed
        // would mean a 4 KiB allocation failed.
        Err(err) => unreachable!("fixed-parameter run failed: {err}"),
    }
}

/// Variant B: 32-bit parameters and checksum.
///
/// The seed is reinterpreted as unsigned; the checksum's low 32 bits are
/// reinterpreted as signed.
///
/// # Errors
/// - `NegativeLength` / `NegativeIterations` for negative parameters
/// - `EmptyArray` if `arr_len == 0`
/// - `AllocationFailed` if the working array cannot be allocated
pub fn run_i32(seed: i32, arr_len: i32, iterations: i32) -> BenchResult<i32> {
    let checksum = Variant::B.run_signed(
        SortStrategy::default(),
        seed as i64,
        arr_len as i64,
        iterations as i64,
    )?;
    Ok(checksum as u32 as i32)
}

/// Variant C: 64-bit parameters and checksum.
///
/// # Errors
/// - `NegativeLength` / `NegativeIterations` for negative parameters
/// - `LengthTooLarge` / `IterationsTooLarge` if a parameter does not fit in `usize`
/// - `EmptyArray` if `arr_len == 0`
/// - `AllocationFailed` if the working array cannot be allocated
pub fn run_i64(seed: i64, arr_len: i64, iterations: i64) -> BenchResult<i64> {
    let checksum =
        Variant::C.run_signed(SortStrategy::default(), seed, arr_len, iterations)?;
    Ok(checksum as i64)
}

fn checked_len(len: i64) -> BenchResult<usize> {
    if len < 0 {
        return Err(BenchError::NegativeLength { len });
    }
    usize::try_from(len).map_err(|_| BenchError::LengthTooLarge { len: len as u64 })
}

fn checked_iterations(iterations: i64) -> BenchResult<usize> {
    if iterations < 0 {
        return Err(BenchError::NegativeIterations { iterations });
    }
    usize::try_from(iterations).map_err(|_| BenchError::IterationsTooLarge { iterations })
}
