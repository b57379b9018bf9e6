//! Union workload generator.
//!
//! Produces deterministic lists of `(p, q)` index pairs for a given element
//! count. The same [`WorkloadConfig`] always yields the same pairs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the index window used for local pairs.
const LOCAL_WINDOW: usize = 16;

/// Configuration for the workload generator.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of elements in the disjoint set.
    pub element_count: usize,
    /// Number of union pairs to generate.
    pub pair_count: usize,
    /// Fraction of pairs whose second index lies near the first (0.0-1.0).
    ///
    /// Local pairs grow many mid-sized components; uniform pairs quickly
    /// produce one giant component.
    pub locality: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1K elements, 1K pairs
    Small,
    /// 10K elements, 10K pairs
    Medium,
    /// 100K elements, 100K pairs
    Large,
    /// 1M elements, 1M pairs
    XLarge,
}

impl SizeTier {
    /// Returns the element count for this tier.
    pub fn element_count(self) -> usize {
        match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
            SizeTier::XLarge => 1_000_000,
        }
    }

    /// Returns the default `WorkloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> WorkloadConfig {
        let n = self.element_count();
        WorkloadConfig {
            seed,
            element_count: n,
            pair_count: n,
            locality: 0.5,
        }
    }
}

/// Generates `config.pair_count` in-range union pairs.
///
/// Returns an empty list when `element_count` is zero.
pub fn generate_pairs(config: &WorkloadConfig) -> Vec<(usize, usize)> {
    let n = config.element_count;
    if n == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let locality = config.locality.clamp(0.0, 1.0);

    (0..config.pair_count)
        .map(|_| {
            let p = rng.gen_range(0..n);
            let q = if rng.gen_bool(locality) {
                let lo = p.saturating_sub(LOCAL_WINDOW);
                let hi = (p + LOCAL_WINDOW).min(n - 1);
                rng.gen_range(lo..=hi)
            } else {
                rng.gen_range(0..n)
            };
            (p, q)
        })
        .collect()
}

/// Returns the chain `(0, 1), (1, 2), ..., (n-2, n-1)`.
///
/// Every union attaches one more element to a single growing component.
pub fn chain_pairs(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i - 1, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_pairs() {
        let config = SizeTier::Small.config(7);
        assert_eq!(generate_pairs(&config), generate_pairs(&config));
    }

    #[test]
    fn different_seed_different_pairs() {
        let a = generate_pairs(&SizeTier::Small.config(1));
        let b = generate_pairs(&SizeTier::Small.config(2));
        assert_ne!(a, b);
    }

    #[test]
    fn zero_elements_yields_no_pairs() {
        let config = WorkloadConfig {
            seed: 0,
            element_count: 0,
            pair_count: 10,
            locality: 0.5,
        };
        assert!(generate_pairs(&config).is_empty());
    }

    #[test]
    fn chain_has_n_minus_one_links() {
        assert_eq!(chain_pairs(4), vec![(0, 1), (1, 2), (2, 3)]);
        assert!(chain_pairs(1).is_empty());
        assert!(chain_pairs(0).is_empty());
    }
}
