use ai_core::rng::derive_seed;
use ai_core::{DeterministicRng, SplitMix64};

#[test]
fn same_seed_same_sequence() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_index_stays_in_range_and_covers_it() {
    let mut rng = SplitMix64::new(0xDEC0);
    let mut seen = [0u32; 5];
    for _ in 0..1000 {
        let i = rng.next_index(2, 7).unwrap();
        assert!((2..7).contains(&i));
        seen[i - 2] += 1;
    }
    assert!(seen.iter().all(|&n| n > 0), "every index drawn: {seen:?}");
}

#[test]
fn next_index_empty_range_is_none() {
    let mut rng = SplitMix64::new(1);
    assert_eq!(rng.next_index(3, 3), None);
    assert_eq!(rng.next_index(4, 1), None);
}

#[test]
fn derived_seeds_differ_per_agent() {
    assert_ne!(derive_seed(1, 10, 0), derive_seed(1, 11, 0));
    assert_ne!(derive_seed(1, 10, 0), derive_seed(1, 10, 1));
    assert_eq!(derive_seed(1, 10, 0), derive_seed(1, 10, 0));
}
