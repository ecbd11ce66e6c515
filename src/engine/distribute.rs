//! Round-robin passenger placement and role derivation.

use tracing::trace;

use crate::models::{Traveler, Vehicle};

/// Passengers placed per vehicle, plus any that found no seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<T> {
    /// One list per vehicle, in vehicle order, each in placement order.
    pub seats: Vec<Vec<T>>,
    /// Passengers left over once every vehicle was full.
    pub overflow: Vec<T>,
}

/// Deals `pool` out over `vehicles` one passenger at a time.
///
/// Cycles through the vehicles in order, giving the next passenger to each
/// vehicle that still has a free passenger seat (capacity minus one for the
/// driver). Stops when the pool is exhausted or a full cycle places nobody.
///
/// # Examples
///
/// ```
/// use road_roulette::engine::distribute;
/// use road_roulette::models::Vehicle;
///
/// let cars = vec![Vehicle::new(1, 3), Vehicle::new(2, 2)];
/// let dist = distribute(&cars, vec!['a', 'b', 'c', 'd']);
/// assert_eq!(dist.seats, vec![vec!['a', 'c'], vec!['b']]);
/// assert_eq!(dist.overflow, vec!['d']);
/// ```
pub fn distribute<T>(vehicles: &[Vehicle], pool: Vec<T>) -> Distribution<T> {
    let mut seats: Vec<Vec<T>> = vehicles
        .iter()
        .map(|v| Vec::with_capacity(v.passenger_seats()))
        .collect();

    let mut pending = pool.into_iter();
    let mut next = pending.next();

    while next.is_some() {
        let mut placed_any = false;

        for (index, vehicle) in vehicles.iter().enumerate() {
            if seats[index].len() >= vehicle.passenger_seats() {
                continue;
            }
            let Some(passenger) = next.take() else {
                break;
            };
            seats[index].push(passenger);
            trace!(
                event = "seat.placed",
                vehicle_id = vehicle.id(),
                seat = seats[index].len()
            );
            placed_any = true;
            next = pending.next();
        }

        if !placed_any {
            break;
        }
    }

    let overflow = next.into_iter().chain(pending).collect();
    Distribution { seats, overflow }
}

/// Splits one vehicle's passengers into navigator and back seat.
///
/// The first non-child in placement order becomes navigator; everyone else
/// keeps their relative order in the back. With no adult available there is
/// no navigator and the list is returned unchanged.
///
/// # Examples
///
/// ```
/// use road_roulette::engine::derive_roles;
/// use road_roulette::models::Traveler;
///
/// let kid = Traveler::new(1, "Kid").child();
/// let mum = Traveler::new(2, "Mum");
/// let (navigator, back) = derive_roles(vec![kid.clone(), mum.clone()]);
/// assert_eq!(navigator, Some(mum));
/// assert_eq!(back, vec![kid]);
/// ```
pub fn derive_roles(passengers: Vec<Traveler>) -> (Option<Traveler>, Vec<Traveler>) {
    match passengers.iter().position(|p| !p.is_child()) {
        Some(index) => {
            let mut back_seat = passengers;
            let navigator = back_seat.remove(index);
            (Some(navigator), back_seat)
        }
        None => (None, passengers),
    }
}
