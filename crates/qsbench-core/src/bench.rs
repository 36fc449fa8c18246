//! Benchmark driver — fill, sort, accumulate the middle element.
//!
//! `QuicksortBenchmark` owns its generator and working array (like a
//! process owning its memory); `checksum_in` runs the same loop over a
//! caller-provided buffer without allocating.

use crate::randomize::{fill, Reduction};
use crate::rng::RandomSource;
use crate::sort::SortStrategy;
use crate::{BenchError, BenchResult};

/// Run `iterations` rounds over a caller-provided working array.
///
/// Each round overwrites `buf` from `rng`, sorts all of it, and adds
/// `buf[buf.len() / 2]` to the checksum (wrapping on overflow).
///
/// # Errors
/// Returns `BenchError::EmptyArray` if `buf` is empty.
pub fn checksum_in<R: RandomSource + ?Sized>(
    buf: &mut [u32],
    rng: &mut R,
    reduction: Reduction,
    iterations: usize,
) -> BenchResult<u64> {
    if buf.is_empty() {
        return Err(BenchError::EmptyArray);
    }
    Ok(run_rounds(
        buf,
        rng,
        reduction,
        SortStrategy::Recursive,
        iterations,
    ))
}

/// The measured loop. `buf` must be non-empty.
#[inline(never)]
fn run_rounds<R: RandomSource + ?Sized>(
    buf: &mut [u32],
    rng: &mut R,
    reduction: Reduction,
    strategy: SortStrategy,
    iterations: usize,
) -> u64 {
    let right = buf.len() - 1;
    let middle = buf.len() / 2;
    let mut checksum: u64 = 0;
    for _ in 0..iterations {
        fill(buf, rng, reduction);
        strategy.sort(buf, 0, right);
        checksum = checksum.wrapping_add(buf[middle] as u64);
    }
    checksum
}

/// A single benchmark run: one generator, one reusable working array.
#[cfg(feature = "alloc")]
pub struct QuicksortBenchmark<R: RandomSource> {
    rng: R,
    arr: alloc::vec::Vec<u32>,
    reduction: Reduction,
    strategy: SortStrategy,
}

#[cfg(feature = "alloc")]
impl<R: RandomSource> QuicksortBenchmark<R> {
    /// Create a benchmark over a zero-filled array of `len` elements.
    ///
    /// # Errors
    /// - `EmptyArray` if `len == 0`
    /// - `AllocationFailed` if `len` elements cannot be allocated
    pub fn try_new(rng: R, len: usize, reduction: Reduction) -> BenchResult<Self> {
        if len == 0 {
            return Err(BenchError::EmptyArray);
        }
        let mut arr = alloc::vec::Vec::new();
        arr.try_reserve_exact(len)
            .map_err(|_| BenchError::AllocationFailed { len })?;
        arr.resize(len, 0);
        Ok(Self {
            rng,
            arr,
            reduction,
            strategy: SortStrategy::default(),
        })
    }

    /// Select how sub-ranges are sorted. Does not change the checksum.
    pub fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Run `iterations` rounds and return the accumulated checksum.
    ///
    /// The generator keeps advancing across calls, so a second `run`
    /// continues the sequence rather than repeating it.
    pub fn run(&mut self, iterations: usize) -> u64 {
        run_rounds(
            &mut self.arr,
            &mut self.rng,
            self.reduction,
            self.strategy,
            iterations,
        )
    }

    /// Working array as left by the last round.
    pub fn array(&self) -> &[u32] {
        &self.arr
    }

    /// Generator state.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Lcg32, Lcg64};
    use crate::{ARR_LEN, CHECKSUM, ITERATIONS, SEED};

    #[test]
    fn fixed_variant_parity_checksum() {
        let mut buf = [0u32; ARR_LEN];
        let mut rng = Lcg64::new(SEED);
        let checksum = checksum_in(&mut buf, &mut rng, Reduction::None, ITERATIONS).unwrap();
        assert_eq!(checksum, CHECKSUM);
    }

    #[test]
    fn reduced_checksums() {
        let mut buf = [0u32; 1000];
        let checksum =
            checksum_in(&mut buf, &mut Lcg32::new(0), Reduction::Mod1000, 100).unwrap();
        assert_eq!(checksum, 50091);

        let checksum =
            checksum_in(&mut buf, &mut Lcg32::new(7), Reduction::Mod1000, 100).unwrap();
        assert_eq!(checksum, 49760);
    }

    #[test]
    fn tiny_array_checksum() {
        let mut buf = [0u32; 5];
        let checksum = checksum_in(&mut buf, &mut Lcg32::new(0), Reduction::Mod1000, 3).unwrap();
        assert_eq!(checksum, 1113);
    }

    #[test]
    fn single_element_array() {
        let mut buf = [0u32; 1];
        let checksum = checksum_in(&mut buf, &mut Lcg64::new(42), Reduction::None, 1).unwrap();
        assert_eq!(checksum, 1250496027);
    }

    #[test]
    fn zero_iterations_yield_zero() {
        let mut buf = [0u32; 8];
        let mut rng = Lcg64::new(1);
        assert_eq!(checksum_in(&mut buf, &mut rng, Reduction::None, 0), Ok(0));
        assert_eq!(rng.seed(), 1);
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let mut buf: [u32; 0] = [];
        let result = checksum_in(&mut buf, &mut Lcg64::new(1), Reduction::None, 10);
        assert_eq!(result, Err(BenchError::EmptyArray));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_benchmark_matches_buffer_loop() {
        let mut bench = QuicksortBenchmark::try_new(Lcg64::new(SEED), ARR_LEN, Reduction::None)
            .unwrap();
        assert_eq!(bench.run(ITERATIONS), CHECKSUM);
        assert!(bench.array().windows(2).all(|w| w[0] <= w[1]));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn owned_benchmark_rejects_empty_array() {
        let result = QuicksortBenchmark::try_new(Lcg32::new(0), 0, Reduction::Mod1000);
        assert!(matches!(result, Err(BenchError::EmptyArray)));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn oversized_array_is_rejected_without_panicking() {
        let result = QuicksortBenchmark::try_new(Lcg64::new(0), usize::MAX, Reduction::None);
        assert!(matches!(
            result,
            Err(BenchError::AllocationFailed { len: usize::MAX })
        ));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn work_list_strategy_keeps_checksum() {
        let mut bench = QuicksortBenchmark::try_new(Lcg64::new(SEED), ARR_LEN, Reduction::None)
            .unwrap()
            .with_strategy(SortStrategy::WorkList);
        assert_eq!(bench.run(ITERATIONS), CHECKSUM);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn generator_advances_by_len_times_iterations() {
        let mut bench =
            QuicksortBenchmark::try_new(Lcg32::new(9), 10, Reduction::Mod1000).unwrap();
        bench.run(3);
        let mut shadow = Lcg32::new(9);
        for _ in 0..30 {
            shadow.next_u32();
        }
        assert_eq!(bench.rng(), &shadow);
    }
}
