// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace sink.

use alloc::format;
use alloc::string::String;

use carousel_core::trace::{
    DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavigateEvent, StateEvent, TraceSink,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Logs one console line per controller event, prefixed with a label.
///
/// Host errors go to `console.warn`, everything else to `console.log`.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    label: String,
}

impl ConsoleSink {
    /// Creates a sink whose lines start with `[label]`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    fn log(&self, line: &str) {
        console::log_1(&JsValue::from_str(&format!("[{}] {line}", self.label)));
    }
}

impl TraceSink for ConsoleSink {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.log(&format!(
            "layout width={} slides={} pages={} gate={}",
            e.viewport_width,
            e.slides_to_show,
            e.page_count,
            if e.gate_open { "open" } else { "closed" },
        ));
    }

    fn on_state(&mut self, e: &StateEvent) {
        self.log(&format!(
            "state {:?} -> {:?} listeners={}",
            e.from, e.to, e.listeners
        ));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.log(&format!(
            "navigate {} -> {} of {} ({:?})",
            e.from, e.to, e.page_count, e.cause
        ));
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        self.log(&format!("dots containers={} pages={}", e.containers, e.pages));
    }

    fn on_drag(&mut self, e: &DragEvent) {
        self.log(&format!(
            "drag pointer={} dx={:.1} {:?}",
            e.pointer_id, e.dx, e.outcome
        ));
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        console::warn_1(&JsValue::from_str(&format!(
            "[{}] {:?} pointer={}: {}",
            self.label, e.op, e.pointer_id, e.error
        )));
    }
}
