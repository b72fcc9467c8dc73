use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws behind the easy policy and the medium coin flip.
///
/// Everything random in the engine goes through this trait so tests can pin
/// the draws and assert exact moves.
pub trait MoveRandom {
    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..len`. Callers never pass `len == 0`, and a result
    /// `>= len` is rejected with `EngineError::RandomOutOfRange`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded RNG for one client session. The seed is kept so a run can be replayed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl MoveRandom for SessionRng {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_draws() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let draws_a: Vec<usize> = (0..20).map(|_| a.pick(9)).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.pick(9)).collect();
        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = SessionRng::new(42);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::new(3);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
