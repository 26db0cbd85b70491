//! Outbound ports (driven side)
//!
//! Interfaces this subsystem consumes from its host.

use rand::Rng;

/// Source of uniformly distributed integers used for emit-time jitter.
///
/// Implementations own their state; callers sharing one source must
/// serialize access themselves (`&mut self` enforces this in safe code).
pub trait RandomSource {
    /// Draw an integer uniformly from `[0, bound)`.
    ///
    /// `bound` MUST be strictly positive.
    fn below(&mut self, bound: u64) -> u64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "random range bound must be positive");
        self.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in [1u64, 2, 10, 1_000_000] {
            for _ in 0..100 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<u64> = (0..16).map(|_| a.below(1_000)).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.below(1_000)).collect();
        assert_eq!(xs, ys);
    }
}
