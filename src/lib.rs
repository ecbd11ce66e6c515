//! # road-roulette
//!
//! Randomized road-trip seating: given a set of cars and a roster of
//! travelers, picks a driver for every car, deals the remaining passengers
//! out round-robin within seat capacity, and seats the first adult in each
//! car as navigator.
//!
//! ## Modules
//!
//! - [`models`] — Domain records (Vehicle, Traveler, Assignment, AssignmentOutcome)
//! - [`engine`] — Validation, Fisher-Yates shuffle, round-robin distribution, role derivation
//! - [`random`] — Injectable uniform random sources (seeded, thread-local, scripted)
//! - [`roulette`] — Engine bundled with a random source for repeated draws
//! - [`error`] — Failure reasons with user-facing messages
//! - `ffi` — C ABI over JSON (feature `ffi`)
//! - `wasm` — JavaScript bindings (feature `wasm`)
//!
//! ## Example
//!
//! ```
//! use road_roulette::models::{Traveler, Vehicle};
//! use road_roulette::Roulette;
//!
//! let cars = vec![Vehicle::new(1, 4).with_name("Wagon")];
//! let travelers = vec![
//!     Traveler::new(1, "Alice").driver(),
//!     Traveler::new(2, "Bob"),
//!     Traveler::new(3, "Chloe").child(),
//! ];
//!
//! let mut roulette = Roulette::new();
//! let seating = roulette.assign(&cars, &travelers).unwrap();
//! assert_eq!(seating[0].driver().name(), "Alice");
//! assert_eq!(seating[0].navigator().map(|n| n.name()), Some("Bob"));
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod random;
pub mod roulette;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::AssignmentError;
pub use roulette::Roulette;
