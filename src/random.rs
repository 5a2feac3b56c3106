use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Range;

/// Source of uniform draws for the generator.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[range.min, range.max]`.
    fn uniform(&mut self, range: Range) -> f64 {
        if range.min == range.max {
            return range.min;
        }
        range.clamp(range.min + self.next_unit() * (range.max - range.min))
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_unit() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// The browser's `Math.random`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Deterministic source for tests and reproducible layouts.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of unit samples, cycling when exhausted.
#[cfg(test)]
pub(crate) struct Scripted {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn uniform_hits_both_ends() {
        let range = Range::new(-5.0, 5.0);
        let mut rng = Scripted::new(&[0.0, 0.5, 0.999_999_999]);
        assert_eq!(rng.uniform(range), -5.0);
        assert_eq!(rng.uniform(range), 0.0);
        assert!(range.contains(rng.uniform(range)));
    }

    #[test]
    fn uniform_on_degenerate_range_is_exact() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(rng.uniform(Range::new(0.5, 0.5)), 0.5);
    }

    #[test]
    fn pick_stays_in_bounds() {
        let mut rng = Scripted::new(&[0.0, 0.2, 0.999_999_999_999]);
        assert_eq!(rng.pick(5), 0);
        assert_eq!(rng.pick(5), 1);
        assert_eq!(rng.pick(5), 4);
        let mut seeded = SeededRandom::new(99);
        for _ in 0..1000 {
            assert!(seeded.pick(3) < 3);
        }
    }
}
