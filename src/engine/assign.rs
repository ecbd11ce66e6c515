//! Full seating pipeline.
//!
//! # Algorithm
//!
//! 1. Validate the roster.
//! 2. Split travelers into drivers and non-drivers; shuffle each on its own.
//! 3. Vehicle `i` gets shuffled driver `i`. Drivers left over join the
//!    passenger pool *after* the shuffled non-drivers (no combined shuffle).
//! 4. Deal the pool round-robin over the vehicles' free passenger seats.
//! 5. In each vehicle, the first adult placed becomes navigator.
//!
//! # Complexity
//!
//! O(v + t) for v vehicles and t travelers.

use tracing::debug;

use crate::error::AssignmentError;
use crate::models::{Assignment, Traveler, Vehicle};
use crate::random::RandomSource;

use super::distribute::{derive_roles, distribute};
use super::shuffle::shuffle;
use super::validate::validate;

/// Seats every traveler, or explains why that is impossible.
///
/// Returns one [`Assignment`] per vehicle, in the order given. Inputs are
/// only read; the result is freshly allocated. Calling again with the same
/// inputs is how a caller "shuffles again".
///
/// # Errors
///
/// Only the failures reported by [`validate`]. Once validation passes every
/// traveler is seated.
///
/// # Examples
///
/// ```
/// use road_roulette::engine::assign_roles;
/// use road_roulette::models::{Traveler, Vehicle};
/// use road_roulette::random::RngSource;
///
/// let cars = vec![Vehicle::new(1, 4), Vehicle::new(2, 4)];
/// let travelers = vec![
///     Traveler::new(1, "Alice").driver(),
///     Traveler::new(2, "Bob").driver(),
///     Traveler::new(3, "Charlie"),
/// ];
///
/// let mut source = RngSource::seeded(42);
/// let assignments = assign_roles(&cars, &travelers, &mut source).unwrap();
/// assert_eq!(assignments.len(), 2);
/// assert!(assignments.iter().all(|a| a.driver().can_drive()));
/// ```
pub fn assign_roles<S>(
    vehicles: &[Vehicle],
    travelers: &[Traveler],
    source: &mut S,
) -> Result<Vec<Assignment>, AssignmentError>
where
    S: RandomSource + ?Sized,
{
    if let Err(err) = validate(vehicles, travelers) {
        debug!(event = "assignment.rejected", reason = %err);
        return Err(err);
    }

    let (drivers, non_drivers): (Vec<Traveler>, Vec<Traveler>) =
        travelers.iter().cloned().partition(Traveler::can_drive);

    let mut at_wheel = shuffle(&drivers, source);
    let non_drivers = shuffle(&non_drivers, source);
    let extra_drivers = at_wheel.split_off(vehicles.len());

    let pool: Vec<Traveler> = non_drivers.into_iter().chain(extra_drivers).collect();
    let pool_size = pool.len();

    let dist = distribute(vehicles, pool);
    debug_assert!(
        dist.overflow.is_empty(),
        "validated roster left {} travelers unseated",
        dist.overflow.len()
    );

    let assignments: Vec<Assignment> = vehicles
        .iter()
        .zip(at_wheel)
        .zip(dist.seats)
        .map(|((vehicle, driver), passengers)| {
            let (navigator, back_seat) = derive_roles(passengers);
            Assignment::new(vehicle.clone(), driver, navigator, back_seat)
        })
        .collect();

    debug!(
        event = "assignment.completed",
        vehicles = vehicles.len(),
        travelers = travelers.len(),
        passengers = pool_size
    );

    Ok(assignments)
}
