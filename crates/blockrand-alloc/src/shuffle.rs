//! Fisher-Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place, choosing uniformly among all permutations.
///
/// Walks from the last index down to 1, swapping each element with one
/// drawn uniformly from `0..=i`. Returns the same slice for chaining.
pub fn shuffle_in_place<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_and_single_are_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        assert!(shuffle_in_place(&mut empty, &mut rng).is_empty());
        let mut one = [7];
        assert_eq!(shuffle_in_place(&mut one, &mut rng), &[7]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut v: Vec<u32> = (0..32).collect();
            shuffle_in_place(&mut v, &mut rng);
            v
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43), "different seeds should permute differently");
    }

    #[test]
    fn all_permutations_of_three_appear() {
        // 3! = 6 outcomes; 6000 draws leave each well above zero.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = std::collections::HashMap::new();
        for _ in 0..6000 {
            let mut v = [0u8, 1, 2];
            shuffle_in_place(&mut v, &mut rng);
            *seen.entry(v).or_insert(0u32) += 1;
        }
        assert_eq!(seen.len(), 6);
        for (perm, n) in &seen {
            assert!(
                (700..=1300).contains(n),
                "permutation {perm:?} drawn {n} times, expected ~1000"
            );
        }
    }

    proptest! {
        #[test]
        fn preserves_multiset(
            mut items in proptest::collection::vec(0u8..5, 0..64),
            seed in any::<u64>(),
        ) {
            let mut before = items.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            shuffle_in_place(&mut items, &mut rng);
            before.sort_unstable();
            items.sort_unstable();
            prop_assert_eq!(before, items);
        }
    }
}
