use rand::Rng;

use crate::error::{NetError, Result};

/// Draws `k` distinct indices from `0..n`, uniformly, via a partial Fisher–Yates shuffle.
///
/// Only the first `k` positions of the permutation are materialized, and the
/// draw sequence depends solely on `rng`, so a seeded RNG reproduces the same
/// minibatches.
pub fn sample_without_replacement<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    if k > n {
        return Err(NetError::BatchTooLarge { batch_size: k, available: n });
    }

    let mut pool: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n);
        pool.swap(i, j);
    }
    pool.truncate(k);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn indices_are_distinct_and_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let idx = sample_without_replacement(50, 20, &mut rng).unwrap();
        assert_eq!(idx.len(), 20);
        assert!(idx.iter().all(|&i| i < 50));
        assert_eq!(idx.iter().collect::<HashSet<_>>().len(), 20);
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut idx = sample_without_replacement(30, 30, &mut rng).unwrap();
        idx.sort_unstable();
        assert_eq!(idx, (0..30).collect::<Vec<_>>());
    }

    #[test]
    fn oversized_draw_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            sample_without_replacement(10, 11, &mut rng),
            Err(NetError::BatchTooLarge { batch_size: 11, available: 10 })
        ));
    }

    #[test]
    fn same_seed_same_draws() {
        let a = sample_without_replacement(100, 10, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = sample_without_replacement(100, 10, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_index_gets_drawn_eventually() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(sample_without_replacement(12, 3, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 12);
    }
}
