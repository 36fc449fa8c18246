//! Checksum parity: `qsbench-core` against the reference implementation.
//!
//! The checksum is the cross-port correctness oracle, so every variant is
//! checked against an independently written generator and the standard
//! library sort.

use qsbench_core::{
    checksum_in, fill, run_fixed, run_i32, run_i64, Lcg32, Lcg64, RandomSource, Reduction,
    Variant, ARR_LEN, CHECKSUM, ITERATIONS, SEED,
};
use qsbench_tests::{checksum_orig, LcgRef};

// ── Fixed variant ──

#[test]
fn test_fixed_variant_parity() {
    assert_eq!(run_fixed(), CHECKSUM);
    assert_eq!(checksum_orig(SEED, ARR_LEN, ITERATIONS, false), CHECKSUM);
}

#[test]
fn test_fixed_variant_is_deterministic() {
    assert_eq!(run_fixed(), run_fixed());
}

// ── Generator ──

#[test]
fn test_generators_match_reference() {
    for seed in [0u64, 7, 42, 0x7FFF_FFFF, 0xFFFF_FFFF] {
        let mut reference = LcgRef::new(seed);
        let mut wide = Lcg64::new(seed);
        let mut narrow = Lcg32::new(seed as u32);
        for step in 0..256 {
            let expected = reference.next_value();
            assert_eq!(wide.next_u32(), expected, "seed {seed}, step {step}");
            assert_eq!(narrow.next_u32(), expected, "seed {seed}, step {step}");
        }
    }
}

#[test]
fn test_zero_seed_first_outputs() {
    let mut rng = Lcg64::new(0);
    let first: Vec<u32> = (0..3).map(|_| rng.next_u32()).collect();
    assert_eq!(first, [12345, 1406932606, 654583775]);
}

#[test]
fn test_reduced_fill_bounds() {
    let mut arr = vec![0u32; 10_000];
    fill(&mut arr, &mut Lcg64::new(SEED), Reduction::Mod1000);
    assert!(arr.iter().all(|&v| v <= 999));
    // With 10k draws every residue class is hit at least once.
    assert!(arr.contains(&0));
    assert!(arr.contains(&999));
}

// ── Parameterized variants ──

#[test]
fn test_variants_match_reference() {
    let cases: [(u64, usize, usize); 6] = [
        (0, 1, 1),
        (0, 2, 5),
        (7, 1000, 100),
        (12345, 333, 17),
        (1, 4096, 3),
        (99, 7, 250),
    ];
    for (seed, len, iterations) in cases {
        assert_eq!(
            Variant::A.run(seed, len, iterations).unwrap(),
            checksum_orig(seed, len, iterations, false),
            "A seed {seed} len {len} iter {iterations}"
        );
        let reduced = checksum_orig(seed, len, iterations, true);
        assert_eq!(
            Variant::C.run(seed, len, iterations).unwrap(),
            reduced,
            "C seed {seed} len {len} iter {iterations}"
        );
        assert_eq!(
            Variant::B.run(seed, len, iterations).unwrap(),
            reduced & u32::MAX as u64,
            "B seed {seed} len {len} iter {iterations}"
        );
    }
}

#[test]
fn test_narrow_and_wide_entry_points_agree() {
    for (seed, len, iterations) in [(0, 1000, 100), (7, 10, 10), (-42, 64, 9)] {
        let narrow = run_i32(seed, len, iterations).unwrap();
        let wide = run_i64(seed as i64, len as i64, iterations as i64).unwrap();
        assert_eq!(narrow as i64, wide, "seed {seed}");
    }
}

#[test]
fn test_narrow_checksum_wraps_at_32_bits() {
    // Unreduced values average ~2^30, so a handful of rounds overflows u32.
    let wide = Variant::A.run(SEED, 101, 64).unwrap();
    assert!(wide > u32::MAX as u64);

    let mut buf = vec![0u32; 101];
    let mut rng = Lcg32::new(SEED as u32);
    let full = checksum_in(&mut buf, &mut rng, Reduction::None, 64).unwrap();
    assert_eq!(full, wide);
    assert_eq!(full as u32 as u64, wide & 0xFFFF_FFFF);
}

// ── Preconditions ──

#[test]
fn test_precondition_errors_display() {
    let err = run_i64(1, 0, 1).unwrap_err();
    assert_eq!(err.to_string(), "array length must be at least 1");

    let err = run_i32(1, 10, -1).unwrap_err();
    assert_eq!(err.to_string(), "iteration count must not be negative (got -1)");

    let err = run_i64(1, -8, 1).unwrap_err();
    assert_eq!(err.to_string(), "array length must not be negative (got -8)");
}

#[test]
fn test_zero_iterations_any_variant() {
    for variant in [Variant::A, Variant::B, Variant::C] {
        assert_eq!(variant.run(SEED, 50, 0), Ok(0), "{variant:?}");
    }
}
