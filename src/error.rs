//! Assignment failure reasons.

use thiserror::Error;

/// Why a seating could not be produced.
///
/// The `Display` text is meant to be shown to the end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// No vehicles were supplied.
    #[error("Please add at least one car")]
    NoVehicles,

    /// No travelers were supplied.
    #[error("Please add at least one traveler")]
    NoTravelers,

    /// Fewer travelers can drive than there are vehicles.
    #[error("Not enough drivers! You need {needed} drivers but only have {available}")]
    InsufficientDrivers {
        /// Vehicle count.
        needed: usize,
        /// Travelers able to drive.
        available: usize,
    },

    /// More travelers than seats across all vehicles.
    #[error("Not enough space! Total capacity is {capacity} but you have {travelers} travelers")]
    InsufficientCapacity {
        /// Summed vehicle capacity.
        capacity: u64,
        /// Traveler count.
        travelers: usize,
    },
}
