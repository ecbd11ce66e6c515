//! The seating engine.
//!
//! - [`validate`] — Feasibility checks, first failure wins
//! - [`shuffle`] — Fisher-Yates permutation into a fresh `Vec`, O(n)
//! - [`distribute`] — Capacity-aware round-robin of passengers over vehicles
//! - [`derive_roles`] — Picks the first adult passenger as navigator
//! - [`assign_roles`] — Full pipeline: validate, shuffle, distribute, derive
//!
//! Every function here is pure apart from draws on the supplied
//! [`RandomSource`](crate::random::RandomSource).

mod assign;
mod distribute;
mod shuffle;
mod validate;

pub use assign::assign_roles;
pub use distribute::{derive_roles, distribute, Distribution};
pub use shuffle::shuffle;
pub use validate::validate;
