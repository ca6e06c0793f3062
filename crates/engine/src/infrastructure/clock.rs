//! Clock and random implementations.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - thread RNG, or a seeded generator for reproducible runs.
pub struct SystemRandom {
    seeded: Option<Mutex<StdRng>>,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        match &self.seeded {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                rng.gen_range(min..=max)
            }
            None => rand::thread_rng().gen_range(min..=max),
        }
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rolls() {
        let a = SystemRandom::seeded(7);
        let b = SystemRandom::seeded(7);
        let rolls_a: Vec<i32> = (0..20).map(|_| a.gen_range(0, 100)).collect();
        let rolls_b: Vec<i32> = (0..20).map(|_| b.gen_range(0, 100)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn rolls_stay_in_inclusive_range() {
        let random = SystemRandom::new();
        for _ in 0..200 {
            let roll = random.gen_range(0, 3);
            assert!((0..=3).contains(&roll));
        }
    }
}
