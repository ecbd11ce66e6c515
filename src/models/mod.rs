//! Domain model types for trip seating.
//!
//! Provides the plain records the engine reads and produces: vehicles with a
//! seat capacity, travelers with driving and child flags, and the per-vehicle
//! assignment that comes back, plus a serializable envelope for callers
//! outside Rust.

mod assignment;
mod outcome;
mod traveler;
mod vehicle;

pub use assignment::{seated_count, Assignment};
pub use outcome::AssignmentOutcome;
pub use traveler::Traveler;
pub use vehicle::Vehicle;
