//! A seating engine bundled with its random source.

use rand::rngs::{StdRng, ThreadRng};

use crate::engine::assign_roles;
use crate::error::AssignmentError;
use crate::models::{Assignment, Traveler, Vehicle};
use crate::random::{RandomSource, RngSource};

/// Owns a [`RandomSource`] so repeated "shuffle again" calls only need the
/// roster.
///
/// # Examples
///
/// ```
/// use road_roulette::models::{Traveler, Vehicle};
/// use road_roulette::Roulette;
///
/// let cars = vec![Vehicle::new(1, 4)];
/// let travelers = vec![Traveler::new(1, "Ann").driver(), Traveler::new(2, "Ben")];
///
/// let mut a = Roulette::with_seed(42);
/// let mut b = Roulette::with_seed(42);
/// assert_eq!(a.assign(&cars, &travelers), b.assign(&cars, &travelers));
/// ```
#[derive(Debug, Clone)]
pub struct Roulette<S = RngSource<ThreadRng>> {
    source: S,
}

impl Roulette<RngSource<ThreadRng>> {
    /// Uses the thread-local generator.
    pub fn new() -> Self {
        Self::with_source(RngSource::thread())
    }
}

impl Default for Roulette<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl Roulette<RngSource<StdRng>> {
    /// Uses a generator seeded for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl<S: RandomSource> Roulette<S> {
    /// Uses the given source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Seats the roster; see [`assign_roles`].
    pub fn assign(
        &mut self,
        vehicles: &[Vehicle],
        travelers: &[Traveler],
    ) -> Result<Vec<Assignment>, AssignmentError> {
        assign_roles(vehicles, travelers, &mut self.source)
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the roulette, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    fn roster() -> (Vec<Vehicle>, Vec<Traveler>) {
        let cars = vec![Vehicle::new(1, 3), Vehicle::new(2, 3)];
        let travelers = vec![
            Traveler::new(1, "Ann").driver(),
            Traveler::new(2, "Ben").driver(),
            Traveler::new(3, "Cy").driver(),
            Traveler::new(4, "Di"),
            Traveler::new(5, "Ed").child(),
            Traveler::new(6, "Flo").child(),
        ];
        (cars, travelers)
    }

    #[test]
    fn test_seeded_roulette_reproducible() {
        let (cars, travelers) = roster();
        let mut a = Roulette::with_seed(9);
        let mut b = Roulette::with_seed(9);
        for _ in 0..5 {
            let left = a.assign(&cars, &travelers).expect("valid roster");
            let right = b.assign(&cars, &travelers).expect("valid roster");
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_shuffle_again_varies() {
        let (cars, travelers) = roster();
        let mut roulette = Roulette::with_seed(1);
        let first = roulette.assign(&cars, &travelers).expect("valid roster");
        let differs = (0..50).any(|_| {
            roulette.assign(&cars, &travelers).expect("valid roster") != first
        });
        assert!(differs);
    }

    #[test]
    fn test_default_roulette() {
        let (cars, travelers) = roster();
        let mut roulette: Roulette = Roulette::default();
        let result = roulette.assign(&cars, &travelers).expect("valid roster");
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_with_source_counts_draws() {
        let (cars, travelers) = roster();
        let mut roulette = Roulette::with_source(SequenceSource::new(vec![0.5]));
        roulette.assign(&cars, &travelers).expect("valid roster");
        // Three drivers need two swaps, three non-drivers need two more.
        assert_eq!(roulette.source().calls(), 4);
        assert_eq!(roulette.into_source().calls(), 4);
    }

    #[test]
    fn test_error_passthrough() {
        let mut roulette = Roulette::with_seed(0);
        assert_eq!(
            roulette.assign(&[Vehicle::new(1, 4)], &[]),
            Err(AssignmentError::NoTravelers)
        );
    }
}
