//! Per-vehicle seating result.

use serde::{Deserialize, Serialize};

use super::{Traveler, Vehicle};

/// The seating for one vehicle: a driver, an optional navigator, and
/// everyone else in the back.
///
/// # Examples
///
/// ```
/// use road_roulette::models::{Assignment, Traveler, Vehicle};
///
/// let a = Assignment::new(
///     Vehicle::new(1, 4),
///     Traveler::new(1, "Ann").driver(),
///     Some(Traveler::new(2, "Ben")),
///     vec![Traveler::new(3, "Cy").child()],
/// );
/// assert_eq!(a.occupant_count(), 3);
/// assert_eq!(a.navigator().map(|n| n.name()), Some("Ben"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "car")]
    vehicle: Vehicle,
    driver: Traveler,
    navigator: Option<Traveler>,
    back_seat: Vec<Traveler>,
}

impl Assignment {
    /// Creates an assignment from its parts.
    pub fn new(
        vehicle: Vehicle,
        driver: Traveler,
        navigator: Option<Traveler>,
        back_seat: Vec<Traveler>,
    ) -> Self {
        Self {
            vehicle,
            driver,
            navigator,
            back_seat,
        }
    }

    /// The vehicle this seating is for.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// The traveler at the wheel.
    pub fn driver(&self) -> &Traveler {
        &self.driver
    }

    /// The front passenger, if an adult was available.
    pub fn navigator(&self) -> Option<&Traveler> {
        self.navigator.as_ref()
    }

    /// Everyone else, in placement order.
    pub fn back_seat(&self) -> &[Traveler] {
        &self.back_seat
    }

    /// Number of people in the vehicle, driver included.
    pub fn occupant_count(&self) -> usize {
        1 + usize::from(self.navigator.is_some()) + self.back_seat.len()
    }

    /// Iterates over driver, navigator, then back seat.
    pub fn occupants(&self) -> impl Iterator<Item = &Traveler> {
        std::iter::once(&self.driver)
            .chain(self.navigator.iter())
            .chain(self.back_seat.iter())
    }
}

/// Total travelers seated across a set of assignments.
pub fn seated_count(assignments: &[Assignment]) -> usize {
    assignments.iter().map(Assignment::occupant_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        Assignment::new(
            Vehicle::new(1, 4).with_name("Sedan"),
            Traveler::new(1, "Ann").driver(),
            Some(Traveler::new(2, "Ben")),
            vec![Traveler::new(3, "Cy").child(), Traveler::new(4, "Di").child()],
        )
    }

    #[test]
    fn test_occupants_order() {
        let a = sample();
        let ids: Vec<u64> = a.occupants().map(Traveler::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(a.occupant_count(), 4);
    }

    #[test]
    fn test_occupants_without_navigator() {
        let a = Assignment::new(
            Vehicle::new(1, 2),
            Traveler::new(1, "Solo").driver(),
            None,
            Vec::new(),
        );
        assert_eq!(a.occupant_count(), 1);
        assert_eq!(a.occupants().count(), 1);
        assert!(a.navigator().is_none());
        assert!(a.back_seat().is_empty());
    }

    #[test]
    fn test_seated_count() {
        let solo = Assignment::new(
            Vehicle::new(2, 2),
            Traveler::new(5, "Eve").driver(),
            None,
            Vec::new(),
        );
        assert_eq!(seated_count(&[sample(), solo]), 5);
        assert_eq!(seated_count(&[]), 0);
    }

    #[test]
    fn test_assignment_json_shape() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["car"]["name"], "Sedan");
        assert_eq!(json["driver"]["canDrive"], true);
        assert_eq!(json["navigator"]["name"], "Ben");
        assert_eq!(json["backSeat"].as_array().map(Vec::len), Some(2));

        let empty = Assignment::new(
            Vehicle::new(1, 2),
            Traveler::new(1, "Solo").driver(),
            None,
            Vec::new(),
        );
        let json = serde_json::to_value(empty).expect("serialize");
        assert!(json["navigator"].is_null());
    }
}
