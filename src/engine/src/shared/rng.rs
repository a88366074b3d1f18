use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single random source for a simulation run. Every stochastic decision in
/// the engine (personality assignment, shortlist draws, draft class noise)
/// goes through one of these, so a seeded instance replays a draft exactly.
#[derive(Debug, Clone)]
pub struct DraftRng {
    rng: StdRng,
}

impl DraftRng {
    pub fn from_entropy() -> Self {
        DraftRng {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        DraftRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn sample(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }

        self.rng.random_range(min..max)
    }

    /// Inclusive integer range.
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }

        self.rng.random_range(min..=max)
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        self.rng.random_range(0..len)
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        if probability <= 0.0 {
            return false;
        }

        if probability >= 1.0 {
            return true;
        }

        self.rng.random::<f32>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut left = DraftRng::seeded(77);
        let mut right = DraftRng::seeded(77);

        for _ in 0..50 {
            assert_eq!(left.sample(), right.sample());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut left = DraftRng::seeded(1);
        let mut right = DraftRng::seeded(2);

        let diverged = (0..20).any(|_| left.sample() != right.sample());

        assert!(diverged);
    }

    #[test]
    fn test_range_f32_stays_in_bounds() {
        let mut rng = DraftRng::seeded(5);

        for _ in 0..100 {
            let value = rng.range_f32(-6.0, 6.0);
            assert!((-6.0..6.0).contains(&value));
        }
    }

    #[test]
    fn test_range_u32_is_inclusive() {
        let mut rng = DraftRng::seeded(9);

        let mut seen_max = false;
        for _ in 0..200 {
            let value = rng.range_u32(0, 3);
            assert!(value <= 3);
            if value == 3 {
                seen_max = true;
            }
        }

        assert!(seen_max);
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = DraftRng::seeded(3);

        assert_eq!(rng.range_u32(7, 7), 7);
        assert_eq!(rng.range_f32(2.0, 2.0), 2.0);
        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = DraftRng::seeded(4);

        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
}
