//! Reference ("ground truth") implementations for the parity tests and
//! benchmarks. They share no code with `qsbench-core`.

/// LCG using exact `u128` arithmetic and a true `% 2^31`, no wrapping tricks.
pub struct LcgRef {
    state: u128,
}

impl LcgRef {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed as u128,
        }
    }

    pub fn next_value(&mut self) -> u32 {
        self.state = (1_103_515_245 * self.state + 12_345) % (1 << 31);
        (self.state % (u32::MAX as u128 + 1)) as u32
    }
}

/// Checksum computed with the standard library sort.
///
/// The sorted array is unique, so the middle element (and the checksum)
/// does not depend on which correct sort produced it.
pub fn checksum_orig(seed: u64, len: usize, iterations: usize, mod_1000: bool) -> u64 {
    let mut rng = LcgRef::new(seed);
    let mut arr = vec![0u32; len];
    let mut checksum: u64 = 0;
    for _ in 0..iterations {
        for slot in arr.iter_mut() {
            let value = rng.next_value();
            *slot = if mod_1000 { value % 1000 } else { value };
        }
        arr.sort_unstable();
        checksum = checksum.wrapping_add(arr[len / 2] as u64);
    }
    checksum
}

/// `len` values drawn from a seeded reference generator.
pub fn random_array(seed: u64, len: usize, mod_1000: bool) -> Vec<u32> {
    let mut rng = LcgRef::new(seed);
    (0..len)
        .map(|_| {
            let value = rng.next_value();
            if mod_1000 {
                value % 1000
            } else {
                value
            }
        })
        .collect()
}
