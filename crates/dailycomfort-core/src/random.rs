//! Randomness seam.
//!
//! Message picks and heart-burst decoration both go through [`RandomSource`]
//! so tests can replay exact choices.

use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::Rng;

/// Uniform random choices.
pub trait RandomSource: Send + Sync {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&self) -> f64;

    /// Uniform value in `[low, high)`.
    fn between(&self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays queued values, then falls back to fixed defaults.
///
/// Queued indices are reduced modulo `len`, so a script written for one
/// pool size stays in range for another. Once a queue runs dry, `index`
/// returns 0 and `unit` returns 0.5.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    indices: Mutex<VecDeque<usize>>,
    units: Mutex<VecDeque<f64>>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let scripted = Self::new();
        scripted.push_indices(indices);
        scripted
    }

    pub fn push_indices(&self, indices: impl IntoIterator<Item = usize>) {
        self.indices.lock().extend(indices);
    }

    pub fn push_units(&self, units: impl IntoIterator<Item = f64>) {
        self.units.lock().extend(units);
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&self, len: usize) -> usize {
        self.indices.lock().pop_front().unwrap_or(0) % len
    }

    fn unit(&self) -> f64 {
        self.units.lock().pop_front().unwrap_or(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for _ in 0..500 {
            assert!(rng.index(4) < 4);
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_scripted_indices_wrap_and_default() {
        let rng = ScriptedRandom::with_indices([1, 5]);
        assert_eq!(rng.index(3), 1);
        assert_eq!(rng.index(3), 2);
        assert_eq!(rng.index(3), 0);
    }

    #[test]
    fn test_between_scales_unit() {
        let rng = ScriptedRandom::new();
        rng.push_units([0.25]);
        assert_eq!(rng.between(10.0, 30.0), 15.0);
        assert_eq!(rng.between(0.0, 2.0), 1.0);
    }
}
