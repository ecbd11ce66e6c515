//! Traveler type.

use serde::{Deserialize, Serialize};

/// A person on the trip.
///
/// Callers are expected to keep children off the driver list, but the
/// engine does not rely on it: a child flagged as a driver is treated as
/// any other driver.
///
/// # Examples
///
/// ```
/// use road_roulette::models::Traveler;
///
/// let alice = Traveler::new(1, "Alice").driver();
/// assert!(alice.can_drive());
/// assert!(!alice.is_child());
///
/// let kid = Traveler::new(2, "Sam").child();
/// assert!(kid.is_child());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traveler {
    id: u64,
    name: String,
    can_drive: bool,
    is_child: bool,
}

impl Traveler {
    /// Creates an adult non-driver.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            can_drive: false,
            is_child: false,
        }
    }

    /// Marks this traveler as able to drive.
    pub fn driver(mut self) -> Self {
        self.can_drive = true;
        self
    }

    /// Marks this traveler as a child.
    pub fn child(mut self) -> Self {
        self.is_child = true;
        self
    }

    /// Traveler ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this traveler may take the wheel.
    pub fn can_drive(&self) -> bool {
        self.can_drive
    }

    /// Whether this traveler is a child (never seated as navigator).
    pub fn is_child(&self) -> bool {
        self.is_child
    }
}
