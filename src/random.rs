//! Uniform random sources for the shuffler.
//!
//! The engine only ever asks for "the next float in `[0, 1)`", once per
//! swap. [`RandomSource`] captures that primitive so a seeded generator or a
//! scripted [`SequenceSource`] can stand in for real randomness.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Produces uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
///
/// # Examples
///
/// ```
/// use road_roulette::random::{create_rng, RandomSource, RngSource};
///
/// let mut source = RngSource::new(create_rng(42));
/// let x = source.next_f64();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Source backed by a generator seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed list of floats, wrapping around at the end.
///
/// An empty list always yields `0.0`.
///
/// # Examples
///
/// ```
/// use road_roulette::random::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![0.5, 0.25]);
/// assert_eq!(source.next_f64(), 0.5);
/// assert_eq!(source.next_f64(), 0.25);
/// assert_eq!(source.next_f64(), 0.5);
/// assert_eq!(source.calls(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    calls: usize,
}

impl SequenceSource {
    /// Creates a source that replays `values` in order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, calls: 0 }
    }

    /// Cycles through `0/steps, 1/steps, ..., (steps-1)/steps`.
    pub fn stepped(steps: usize) -> Self {
        let steps = steps.max(1);
        Self::new((0..steps).map(|k| k as f64 / steps as f64).collect())
    }

    /// How many values have been drawn so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.calls % self.values.len()]
        };
        self.calls += 1;
        value
    }
}
