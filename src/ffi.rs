//! C ABI over JSON.
//!
//! Rosters go in as JSON arrays using the same field names as the serde
//! models (`canDrive`, `isChild`, ...). The result comes back as an
//! [`AssignmentOutcome`] JSON string that must be released with
//! [`road_roulette_free_string`].
//!
//! # Basic Usage (C)
//! ```c
//! char *out = road_roulette_assign_json(
//!     "[{\"id\":1,\"name\":\"Van\",\"capacity\":4}]",
//!     "[{\"id\":1,\"name\":\"Ann\",\"canDrive\":true,\"isChild\":false}]");
//! // {"hasError":false,"assignments":[...]}
//! road_roulette_free_string(out);
//! ```

use std::ffi::{CStr, CString};

use libc::c_char;
use tracing::warn;

use crate::engine::assign_roles;
use crate::models::{AssignmentOutcome, Traveler, Vehicle};
use crate::random::{RandomSource, RngSource};

/// Seats a roster using the thread-local generator.
///
/// Returns null only if the result could not be encoded.
///
/// # Safety
///
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn road_roulette_assign_json(
    vehicles_json: *const c_char,
    travelers_json: *const c_char,
) -> *mut c_char {
    let mut source = RngSource::thread();
    // SAFETY: forwarded from the caller's contract.
    unsafe { assign_json(vehicles_json, travelers_json, &mut source) }
}

/// Seats a roster using a generator seeded with `seed`.
///
/// The same inputs and seed always produce the same seating.
///
/// # Safety
///
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn road_roulette_assign_json_seeded(
    vehicles_json: *const c_char,
    travelers_json: *const c_char,
    seed: u64,
) -> *mut c_char {
    let mut source = RngSource::seeded(seed);
    // SAFETY: forwarded from the caller's contract.
    unsafe { assign_json(vehicles_json, travelers_json, &mut source) }
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn road_roulette_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        // SAFETY: ptr came from CString::into_raw in this module.
        drop(unsafe { CString::from_raw(ptr) });
    }
}

unsafe fn assign_json<S: RandomSource>(
    vehicles_json: *const c_char,
    travelers_json: *const c_char,
    source: &mut S,
) -> *mut c_char {
    // SAFETY: forwarded from the caller's contract.
    let roster = unsafe {
        parse::<Vec<Vehicle>>(vehicles_json, "vehicles").and_then(|vehicles| {
            parse::<Vec<Traveler>>(travelers_json, "travelers").map(|t| (vehicles, t))
        })
    };

    let outcome: AssignmentOutcome = match roster {
        Ok((vehicles, travelers)) => assign_roles(&vehicles, &travelers, source).into(),
        Err(message) => {
            warn!(event = "ffi.bad_input", reason = %message);
            AssignmentOutcome::failure(message)
        }
    };

    encode(&outcome)
}

unsafe fn parse<T: serde::de::DeserializeOwned>(
    ptr: *const c_char,
    what: &str,
) -> Result<T, String> {
    if ptr.is_null() {
        return Err(format!("{what}: null pointer"));
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let text = unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|e| format!("{what}: {e}"))?;
    serde_json::from_str(text).map_err(|e| format!("{what}: {e}"))
}

fn encode(outcome: &AssignmentOutcome) -> *mut c_char {
    match serde_json::to_string(outcome).map(CString::new) {
        Ok(Ok(json)) => json.into_raw(),
        _ => std::ptr::null_mut(),
    }
}
