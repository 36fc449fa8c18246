//! Array randomizer — overwrites a working array with generator output.

use crate::rng::RandomSource;

/// Modulus applied by `Reduction::Mod1000`.
pub const REDUCTION_MODULUS: u32 = 1000;

/// Optional post-processing of each generated value.
///
/// Reducing modulo 1000 bounds the value range, which produces many equal
/// keys and changes how often the partition loop swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Store generator output unchanged.
    #[default]
    None,
    /// Store `output % 1000`.
    Mod1000,
}

impl Reduction {
    #[inline(always)]
    pub fn apply(self, value: u32) -> u32 {
        match self {
            Reduction::None => value,
            Reduction::Mod1000 => value % REDUCTION_MODULUS,
        }
    }
}

/// Overwrite every slot of `arr`, first to last, with one generator step each.
///
/// Advances `rng` by exactly `arr.len()` calls.
#[inline(never)]
pub fn fill<R: RandomSource + ?Sized>(arr: &mut [u32], rng: &mut R, reduction: Reduction) {
    for slot in arr.iter_mut() {
        *slot = reduction.apply(rng.next_u32());
    }
}
