//! Feasibility checks run before any seat is handed out.

use crate::error::AssignmentError;
use crate::models::{Traveler, Vehicle};

/// Checks that a seating can be produced at all.
///
/// Checks run in order and the first failure is returned:
///
/// 1. at least one vehicle
/// 2. at least one traveler
/// 3. at least one driver per vehicle
/// 4. total capacity covers every traveler
///
/// Passing does not mean every seat gets filled, only that there are enough
/// drivers and enough seats overall.
///
/// # Examples
///
/// ```
/// use road_roulette::engine::validate;
/// use road_roulette::error::AssignmentError;
/// use road_roulette::models::{Traveler, Vehicle};
///
/// let cars = vec![Vehicle::new(1, 2)];
/// let travelers = vec![
///     Traveler::new(1, "Ann").driver(),
///     Traveler::new(2, "Ben"),
///     Traveler::new(3, "Cy"),
/// ];
/// assert_eq!(
///     validate(&cars, &travelers),
///     Err(AssignmentError::InsufficientCapacity { capacity: 2, travelers: 3 })
/// );
/// ```
pub fn validate(vehicles: &[Vehicle], travelers: &[Traveler]) -> Result<(), AssignmentError> {
    if vehicles.is_empty() {
        return Err(AssignmentError::NoVehicles);
    }

    if travelers.is_empty() {
        return Err(AssignmentError::NoTravelers);
    }

    let drivers = travelers.iter().filter(|t| t.can_drive()).count();
    if drivers < vehicles.len() {
        return Err(AssignmentError::InsufficientDrivers {
            needed: vehicles.len(),
            available: drivers,
        });
    }

    let capacity: u64 = vehicles.iter().map(|v| u64::from(v.capacity())).sum();
    if (travelers.len() as u64) > capacity {
        return Err(AssignmentError::InsufficientCapacity {
            capacity,
            travelers: travelers.len(),
        });
    }

    Ok(())
}
