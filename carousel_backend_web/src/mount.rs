// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring a controller onto a page.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use carousel_core::debounce::Debouncer;
use carousel_core::trace::TraceSink;
use carousel_core::{Carousel, CarouselConfig, CarouselState};
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement, Window};

use crate::host::{DomHost, SharedCarousel, Targets, dispatch};
use crate::timer::ResizeWatcher;

/// The elements one carousel operates on.
#[derive(Clone, Debug, Default)]
pub struct CarouselElements {
    /// Horizontal strip whose element children are the items.
    pub track: Option<Element>,
    /// Previous-page controls.
    pub prev: Targets,
    /// Next-page controls.
    pub next: Targets,
    /// Dot containers.
    pub dots: Targets,
}

/// A mounted carousel.
///
/// Dropping the handle removes the resize listener and detaches the carousel,
/// unbinding every DOM listener. Keep it alive for as long as the page is,
/// e.g. with [`core::mem::forget`].
pub struct CarouselHandle {
    // Dropped before `carousel` so no refresh can run during teardown.
    resize: ResizeWatcher,
    carousel: SharedCarousel,
}

impl core::fmt::Debug for CarouselHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("CarouselHandle");
        if let Ok(carousel) = self.carousel.try_borrow() {
            s.field("state", &carousel.state())
                .field("current_index", &carousel.current_index());
        }
        s.field("resize", &self.resize).finish_non_exhaustive()
    }
}

impl CarouselHandle {
    fn with<R>(&self, f: impl FnOnce(&mut Carousel<DomHost>) -> R) -> Option<R> {
        let mut carousel = self.carousel.try_borrow_mut().ok()?;
        Some(f(&mut carousel))
    }

    /// See [`Carousel::attach`].
    pub fn attach(&self) {
        self.with(Carousel::attach);
    }

    /// See [`Carousel::detach`].
    pub fn detach(&self) {
        self.with(Carousel::detach);
    }

    /// See [`Carousel::refresh`].
    pub fn refresh(&self) {
        self.with(Carousel::refresh);
    }

    /// See [`Carousel::go_to`].
    pub fn go_to(&self, page: usize) {
        self.with(|c| c.go_to(page));
    }

    /// See [`Carousel::next`].
    pub fn next(&self) {
        self.with(Carousel::next);
    }

    /// See [`Carousel::prev`].
    pub fn prev(&self) {
        self.with(Carousel::prev);
    }

    /// Lifecycle state, or `None` if the controller is busy handling an event.
    #[must_use]
    pub fn state(&self) -> Option<CarouselState> {
        self.carousel.try_borrow().ok().map(|c| c.state())
    }

    /// Active page, or `None` if the controller is busy handling an event.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.carousel.try_borrow().ok().map(|c| c.current_index())
    }

    /// Returns `true` while a resize-triggered refresh is scheduled.
    #[must_use]
    pub fn refresh_pending(&self) -> bool {
        self.resize.is_pending()
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.with(Carousel::detach);
    }
}

/// Mounts a carousel on `elements`.
///
/// Returns `None` if the track is missing, is not an HTML element, or has no
/// element children. Otherwise the carousel is refreshed once immediately and
/// again 120 ms after each burst of window resizes.
#[must_use]
pub fn mount(
    window: &Window,
    elements: CarouselElements,
    config: CarouselConfig,
) -> Option<CarouselHandle> {
    mount_with(window, elements, |host| Carousel::new(host, config))
}

/// Like [`mount`], reporting controller events to `sink`.
///
/// Events are only delivered when the `trace` feature is enabled.
#[must_use]
pub fn mount_traced(
    window: &Window,
    elements: CarouselElements,
    config: CarouselConfig,
    sink: Box<dyn TraceSink>,
) -> Option<CarouselHandle> {
    mount_with(window, elements, |host| {
        Carousel::new_traced(host, config, sink)
    })
}

fn mount_with(
    window: &Window,
    elements: CarouselElements,
    build: impl FnOnce(DomHost) -> Option<Carousel<DomHost>>,
) -> Option<CarouselHandle> {
    let track = elements.track?.dyn_into::<HtmlElement>().ok()?;
    let host = DomHost::new(
        window.clone(),
        track,
        elements.prev,
        elements.next,
        elements.dots,
    );
    let slot = host.slot();

    let carousel = Rc::new(RefCell::new(build(host)?));
    // The slot is fresh, so this cannot fail.
    let _ = slot.set(Rc::downgrade(&carousel));

    let resize = ResizeWatcher::new(window.clone(), Debouncer::default(), move || {
        dispatch(&slot, Carousel::refresh);
    });

    Some(CarouselHandle { resize, carousel })
}
