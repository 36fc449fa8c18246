//! Linear-congruential generators — `Lcg64` and `Lcg32`.
//!
//! Both widths compute `state = (1103515245 * state + 12345) mod 2^31`.
//! The product is taken with wrapping arithmetic and then masked: 2^31
//! divides both 2^32 and 2^64, so discarding the overflowed high bits never
//! changes the low 31 bits. The two generators therefore emit the same
//! sequence for any pair of seeds whose low 32 bits agree.

/// LCG multiplier `a`.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// LCG increment `c`.
pub const LCG_INCREMENT: u32 = 12_345;
/// `mod 2^31` expressed as a bitmask.
pub const LCG_MASK: u32 = 0x7FFF_FFFF;

/// A deterministic source of unsigned 32-bit values.
pub trait RandomSource {
    /// Advance the generator by one step and return its output.
    fn next_u32(&mut self) -> u32;
}

/// Generator with a 64-bit state register.
///
/// Output is `state mod 2^32`. Since the state is always reduced below 2^31
/// after the first step, this is the state itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg64 {
    seed: u64,
}

impl Lcg64 {
    /// Create a generator. Any seed is accepted, zero included.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Current state register.
    #[inline(always)]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for Lcg64 {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER as u64)
            .wrapping_add(LCG_INCREMENT as u64)
            & LCG_MASK as u64;
        (self.seed & u32::MAX as u64) as u32
    }
}

/// Generator with a 32-bit state register. Output is the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg32 {
    seed: u32,
}

impl Lcg32 {
    /// Create a generator. Any seed is accepted, zero included.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Current state register.
    #[inline(always)]
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl RandomSource for Lcg32 {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.seed
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}


// ── Kani Formal Verification Proofs ──────────────────────────────────────
//
// Run with: cargo kani -p qsbench-core
//
// The proofs establish that:
// - One step of either width never panics and stays below 2^31
// - Both widths take identical steps from any 32-bit seed

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: a 64-bit step never overflows-panics for any seed.
    #[kani::proof]
    #[kani::unwind(1)]
    fn lcg64_step_in_range() {
        let mut rng = Lcg64::new(kani::any());
        let out = rng.next_u32();
        kani::assert(out <= LCG_MASK, "output must be reduced mod 2^31");
        kani::assert(rng.seed() == out as u64, "output is the state");
    }

    /// Proof: the 32-bit and 64-bit registers agree after one step.
    #[kani::proof]
    #[kani::unwind(1)]
    fn widths_agree() {
        let seed: u32 = kani::any();
        let mut wide = Lcg64::new(seed as u64);
        let mut narrow = Lcg32::new(seed);
        kani::assert(
            wide.next_u32() == narrow.next_u32(),
            "both widths must emit the same value",
        );
    }
}
