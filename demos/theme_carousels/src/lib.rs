// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: the theme's two carousels.
//!
//! Once the document is parsed, mounts:
//!
//! - **testimonials**: always enabled, one review per page below 773px and
//!   two from 773px up. Every `.carousel-prev` / `.carousel-next` in the
//!   section drives it (header and footer copies).
//! - **why-us**: the cards row becomes a carousel only up to 772px and is a
//!   plain row above that.
//!
//! Build with: `wasm-pack build --target web demos/theme_carousels`
//!
//! Then load the generated module from a page containing the theme markup.
//! Enable the `trace` feature to log controller events to the console.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use carousel_backend_web::{CarouselElements, CarouselHandle, Targets, ready};
use carousel_core::{CarouselConfig, EnableGate};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Slides switch from one to two per page at this viewport width.
const SLIDES_BREAKPOINT: f64 = 773.0;

/// Widest viewport at which the why-us cards behave as a carousel.
const WHY_US_MAX_WIDTH: f64 = 772.0;

const TESTIMONIALS: CarouselConfig = CarouselConfig::new()
    .with_slides(1, 2)
    .with_breakpoint(SLIDES_BREAKPOINT)
    .with_draggable(true);

const WHY_US: CarouselConfig = CarouselConfig::new()
    .with_slides(1, 2)
    .with_breakpoint(SLIDES_BREAKPOINT)
    .with_gate(EnableGate::MaxWidth(WHY_US_MAX_WIDTH))
    .with_draggable(true);

fn query_one(document: &Document, selector: &str) -> Targets {
    Targets::from_element(document.query_selector(selector).ok().flatten())
}

fn query_all(document: &Document, selector: &str) -> Targets {
    document
        .query_selector_all(selector)
        .map(|list| Targets::from_node_list(&list))
        .unwrap_or_default()
}

fn testimonials(document: &Document) -> CarouselElements {
    CarouselElements {
        track: document
            .query_selector("#testimonials .carousel .reviews")
            .ok()
            .flatten(),
        prev: query_all(document, "#testimonials .carousel-prev"),
        next: query_all(document, "#testimonials .carousel-next"),
        dots: query_one(document, "#testimonials .footer .carousel-dots"),
    }
}

fn why_us(document: &Document) -> CarouselElements {
    CarouselElements {
        track: document.query_selector("#why-us .cards-section").ok().flatten(),
        prev: query_one(document, "#why-us .carousel-prev"),
        next: query_one(document, "#why-us .carousel-next"),
        dots: query_one(document, "#why-us .carousel-dots"),
    }
}

#[cfg(not(feature = "trace"))]
fn mount_named(
    window: &Window,
    _name: &str,
    elements: CarouselElements,
    config: CarouselConfig,
) -> Option<CarouselHandle> {
    carousel_backend_web::mount(window, elements, config)
}

#[cfg(feature = "trace")]
fn mount_named(
    window: &Window,
    name: &str,
    elements: CarouselElements,
    config: CarouselConfig,
) -> Option<CarouselHandle> {
    use alloc::boxed::Box;
    use carousel_backend_web::{ConsoleSink, mount_traced};

    mount_traced(window, elements, config, Box::new(ConsoleSink::new(name)))
}

fn mount_all(window: &Window, document: &Document) {
    let carousels = [
        ("testimonials", testimonials(document), TESTIMONIALS),
        ("why-us", why_us(document), WHY_US),
    ];
    for (name, elements, config) in carousels {
        // Sections missing from the page are skipped.
        if let Some(handle) = mount_named(window, name, elements, config) {
            // Keep the carousel alive; there is no teardown on the web.
            core::mem::forget(handle);
        }
    }
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    ready(move || {
        if let Some(document) = window.document() {
            mount_all(&window, &document);
        }
    })
}
