//! Vehicle type with a fixed seat capacity.

use serde::{Deserialize, Serialize};

/// A car taking part in the trip.
///
/// Capacity counts every seat, the driver's included. The engine does not
/// enforce a minimum. A one-seat vehicle gets a driver and no passengers.
/// Capacity 0 is unsupported: every vehicle gets a driver, so the driver
/// alone exceeds it.
///
/// # Examples
///
/// ```
/// use road_roulette::models::Vehicle;
///
/// let v = Vehicle::new(1, 5).with_name("Van");
/// assert_eq!(v.id(), 1);
/// assert_eq!(v.name(), "Van");
/// assert_eq!(v.capacity(), 5);
/// assert_eq!(v.passenger_seats(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: u64,
    name: String,
    capacity: u32,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    ///
    /// Default name: `"Car {id}"`.
    pub fn new(id: u64, capacity: u32) -> Self {
        Self {
            id,
            name: format!("Car {id}"),
            capacity,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total seats, driver included.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Seats left once the driver sits down.
    pub fn passenger_seats(&self) -> usize {
        self.capacity.saturating_sub(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(3, 4);
        assert_eq!(v.id(), 3);
        assert_eq!(v.name(), "Car 3");
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.passenger_seats(), 3);
    }

    #[test]
    fn test_vehicle_with_name() {
        let v = Vehicle::new(0, 2).with_name("Hatchback");
        assert_eq!(v.name(), "Hatchback");
        assert_eq!(v.passenger_seats(), 1);
    }

    #[test]
    fn test_passenger_seats_saturates() {
        assert_eq!(Vehicle::new(0, 1).passenger_seats(), 0);
        assert_eq!(Vehicle::new(0, 0).passenger_seats(), 0);
    }

    #[test]
    fn test_vehicle_json_shape() {
        let v = Vehicle::new(7, 4).with_name("Wagon");
        let json = serde_json::to_value(&v).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Wagon", "capacity": 4 })
        );
    }
}
