//! `tms-wasm` — browser entry point for the simulation engine.
//!
//! Exposes a single function to JavaScript:
//!
//! ```text
//! runSimulation(jsonString) -> jsonString | { error: string }
//! ```
//!
//! The input and output are JSON-encoded `SimulationInput` and
//! `SimulationLog` respectively, matching the contract used by the CLI.
//! The module stays resident after load; each call runs one complete,
//! independent simulation.

use wasm_bindgen::prelude::*;

/// Run a simulation from a JSON input string.
///
/// On success the return value is the output JSON as a string; on failure
/// it is a `{ error: string }` object, so callers can distinguish the two
/// by type without parsing.
#[wasm_bindgen(js_name = runSimulation)]
pub fn run_simulation(input: &str) -> JsValue {
    match tms_engine::run_json(input) {
        Ok(output) => JsValue::from_str(&output),
        Err(e) => error_object(&e.to_string()),
    }
}

fn error_object(message: &str) -> JsValue {
    let obj = js_sys::Object::new();
    // Reflect::set only fails on frozen objects; this one is freshly made.
    let _ = js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("error"),
        &JsValue::from_str(message),
    );
    obj.into()
}
