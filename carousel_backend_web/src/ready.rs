// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document readiness hook.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;

/// Runs `callback` once the document has been parsed.
///
/// If the document is no longer loading, `callback` runs immediately.
/// Otherwise it runs once on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error if there is no `window` or `document`, or if the
/// listener cannot be registered.
pub fn ready(callback: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let handler = Closure::once_into_js(callback);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        handler.unchecked_ref(),
        &options,
    )
}
