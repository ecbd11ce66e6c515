//! JavaScript bindings.
//!
//! Exposes `assignRoles(cars, travelers)` and `validateAssignment(cars,
//! travelers)` to a browser front end. Shuffles draw from `Math.random`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::engine::{assign_roles, validate};
use crate::models::{AssignmentOutcome, Traveler, Vehicle};
use crate::random::RandomSource;

/// `Math.random` as a [`RandomSource`].
struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

fn roster(cars: JsValue, travelers: JsValue) -> Result<(Vec<Vehicle>, Vec<Traveler>), JsValue> {
    let vehicles: Vec<Vehicle> = serde_wasm_bindgen::from_value(cars)?;
    let travelers: Vec<Traveler> = serde_wasm_bindgen::from_value(travelers)?;
    Ok((vehicles, travelers))
}

/// Seats the roster.
///
/// Resolves to `{hasError: false, assignments}` or `{hasError: true,
/// message}`. Throws only when the inputs do not have the expected shape.
#[wasm_bindgen(js_name = assignRoles)]
pub fn assign_roles_js(cars: JsValue, travelers: JsValue) -> Result<JsValue, JsValue> {
    let (vehicles, travelers) = roster(cars, travelers)?;
    let outcome: AssignmentOutcome = assign_roles(&vehicles, &travelers, &mut MathRandom).into();
    Ok(outcome.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Returns the failure message, or `null` when the roster can be seated.
#[wasm_bindgen(js_name = validateAssignment)]
pub fn validate_js(cars: JsValue, travelers: JsValue) -> Result<Option<String>, JsValue> {
    let (vehicles, travelers) = roster(cars, travelers)?;
    Ok(validate(&vehicles, &travelers).err().map(|e| e.to_string()))
}
