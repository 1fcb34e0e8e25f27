use geowrr_application::ports::RandomSource;
use std::sync::Mutex;

/// Draws from `fastrand`'s thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self, upper: u64) -> u64 {
        debug_assert!(upper >= 1, "draw upper bound must be at least 1");
        fastrand::u64(1..=upper)
    }
}

/// Reproducible draws from a seeded generator.
pub struct SeededRandom {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self, upper: u64) -> u64 {
        debug_assert!(upper >= 1, "draw upper bound must be at least 1");
        match self.rng.lock() {
            Ok(mut rng) => rng.u64(1..=upper),
            Err(poisoned) => poisoned.into_inner().u64(1..=upper),
        }
    }
}
