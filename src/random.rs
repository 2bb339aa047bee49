/// Randomness used by the demand simulation.
/// Everything that draws goes through `RandomSource` so runs can be seeded or scripted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Uniform};

use crate::error::ConfigError;

pub trait RandomSource {
    /// Uniform integer in `[low, high]`
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Coin flip; a `SeededSource` may bias it
    fn coin(&mut self) -> bool;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniformly pick one element, `None` for an empty slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.pick_index(items.len()))
        }
    }
}

/// Production source backed by `StdRng`
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
    coin: Bernoulli,
}

impl SeededSource {
    pub fn from_seed(seed: u64, coin_probability: f64) -> Result<Self, ConfigError> {
        Self::with_rng(StdRng::seed_from_u64(seed), coin_probability)
    }

    pub fn from_entropy(coin_probability: f64) -> Result<Self, ConfigError> {
        Self::with_rng(StdRng::from_entropy(), coin_probability)
    }

    fn with_rng(rng: StdRng, coin_probability: f64) -> Result<Self, ConfigError> {
        let coin = Bernoulli::new(coin_probability)
            .map_err(|_| ConfigError::ProbabilityOutOfRange(coin_probability))?;
        Ok(SeededSource { rng, coin })
    }
}

impl RandomSource for SeededSource {
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.sample(Uniform::new_inclusive(low, high))
    }

    fn coin(&mut self) -> bool {
        self.rng.sample(self.coin)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.sample(Uniform::new(0, len))
    }
}

/// Replays a fixed list of draws, for tests that pin every random decision
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedSource {
    ints: std::collections::VecDeque<usize>,
    coins: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedSource {
    /// `ints` feeds both `int_inclusive` and `pick_index`, in call order
    pub fn new(ints: &[usize], coins: &[bool]) -> Self {
        ScriptedSource {
            ints: ints.iter().copied().collect(),
            coins: coins.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.coins.is_empty()
    }

    fn next_int(&mut self) -> usize {
        self.ints.pop_front().expect("scripted integer draws exhausted")
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, low: usize, high: usize) -> usize {
        let value = self.next_int();
        assert!((low..=high).contains(&value), "scripted draw {} outside [{}, {}]", value, low, high);
        value
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().expect("scripted coin flips exhausted")
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let value = self.next_int();
        assert!(value < len, "scripted pick {} outside [0, {})", value, len);
        value
    }
}
