// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host and trace sink for tests.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `testing` feature.

use alloc::vec;
use alloc::vec::Vec;

use crate::controller::CarouselState;
use crate::drag::DragOutcome;
use crate::host::{CarouselHost, HostError, ListenerTarget, NavControl, NavDirection};
use crate::trace::{
    DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavCause, NavigateEvent, StateEvent,
    TraceSink,
};

/// Listener handle issued by [`MockHost`]. Deliberately not `Clone` so a
/// handle can only be unbound once.
#[derive(Debug, PartialEq, Eq)]
pub struct MockListener {
    /// Unique id within the issuing host.
    pub id: u32,
    /// What the listener was bound on.
    pub target: ListenerTarget,
}

/// One dot container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockDots {
    /// Container display state.
    pub visible: bool,
    /// Active marker of each dot, in page order.
    pub active: Vec<bool>,
}

/// A [`CarouselHost`] that records every call in plain fields.
#[derive(Clone, Debug)]
pub struct MockHost {
    /// Reported viewport width.
    pub viewport_width: f64,
    /// Item offsets within the track.
    pub item_offsets: Vec<f64>,
    /// Visibility of each previous-page control.
    pub prev_visible: Vec<bool>,
    /// Visibility of each next-page control.
    pub next_visible: Vec<bool>,
    /// Dot containers.
    pub dots: Vec<MockDots>,
    /// Track translation; `None` means no transform.
    pub translate: Option<f64>,
    /// Track transition state.
    pub transition: bool,
    /// Number of [`flush_layout`](CarouselHost::flush_layout) calls.
    pub layout_flushes: usize,
    /// Currently bound listeners.
    pub bound: Vec<(u32, ListenerTarget)>,
    /// Listeners ever bound.
    pub total_binds: usize,
    /// Pointer holding capture.
    pub captured: Option<i32>,
    /// Makes both capture calls fail.
    pub fail_capture: bool,
    next_id: u32,
}

impl MockHost {
    /// A host with `count` items of `item_width` laid out edge to edge.
    #[must_use]
    pub fn uniform(viewport_width: f64, count: usize, item_width: f64) -> Self {
        let offsets = (0..count).map(|i| i as f64 * item_width);
        Self::with_offsets(viewport_width, offsets)
    }

    /// A host with explicit item offsets.
    #[must_use]
    pub fn with_offsets(viewport_width: f64, offsets: impl IntoIterator<Item = f64>) -> Self {
        Self {
            viewport_width,
            item_offsets: offsets.into_iter().collect(),
            prev_visible: Vec::new(),
            next_visible: Vec::new(),
            dots: Vec::new(),
            translate: None,
            transition: true,
            layout_flushes: 0,
            bound: Vec::new(),
            total_binds: 0,
            captured: None,
            fail_capture: false,
            next_id: 0,
        }
    }

    /// Adds navigation controls, initially visible.
    #[must_use]
    pub fn with_nav(mut self, prev: usize, next: usize) -> Self {
        self.prev_visible = vec![true; prev];
        self.next_visible = vec![true; next];
        self
    }

    /// Adds empty dot containers, initially visible.
    #[must_use]
    pub fn with_dot_containers(mut self, count: usize) -> Self {
        self.dots = vec![
            MockDots {
                visible: true,
                active: Vec::new(),
            };
            count
        ];
        self
    }

    /// Number of currently bound listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.bound.len()
    }

    /// Number of dots in `container`.
    #[must_use]
    pub fn dot_count(&self, container: usize) -> usize {
        self.dots.get(container).map_or(0, |d| d.active.len())
    }

    /// Page of the single active dot in `container`, if exactly one is active.
    #[must_use]
    pub fn active_dot(&self, container: usize) -> Option<usize> {
        let dots = self.dots.get(container)?;
        let mut active = dots.active.iter().enumerate().filter(|(_, a)| **a);
        let (page, _) = active.next()?;
        active.next().is_none().then_some(page)
    }
}

impl CarouselHost for MockHost {
    type Listener = MockListener;

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn item_count(&self) -> usize {
        self.item_offsets.len()
    }

    fn item_offset(&self, index: usize) -> Option<f64> {
        self.item_offsets.get(index).copied()
    }

    fn nav_count(&self, direction: NavDirection) -> usize {
        match direction {
            NavDirection::Prev => self.prev_visible.len(),
            NavDirection::Next => self.next_visible.len(),
        }
    }

    fn dot_container_count(&self) -> usize {
        self.dots.len()
    }

    fn set_track_transition(&mut self, enabled: bool) {
        self.transition = enabled;
    }

    fn set_track_translate(&mut self, x: Option<f64>) {
        self.translate = x;
    }

    fn flush_layout(&mut self) {
        self.layout_flushes += 1;
    }

    fn set_nav_visible(&mut self, control: NavControl, visible: bool) {
        let list = match control.direction {
            NavDirection::Prev => &mut self.prev_visible,
            NavDirection::Next => &mut self.next_visible,
        };
        if let Some(slot) = list.get_mut(control.index) {
            *slot = visible;
        }
    }

    fn set_dots_visible(&mut self, container: usize, visible: bool) {
        if let Some(dots) = self.dots.get_mut(container) {
            dots.visible = visible;
        }
    }

    fn clear_dots(&mut self, container: usize) {
        if let Some(dots) = self.dots.get_mut(container) {
            dots.active.clear();
        }
    }

    fn append_dot(&mut self, container: usize, page: usize) {
        if let Some(dots) = self.dots.get_mut(container) {
            debug_assert_eq!(dots.active.len(), page, "dots appended out of order");
            dots.active.push(false);
        }
    }

    fn set_dot_active(&mut self, container: usize, page: usize, active: bool) {
        if let Some(slot) = self
            .dots
            .get_mut(container)
            .and_then(|d| d.active.get_mut(page))
        {
            *slot = active;
        }
    }

    fn bind(&mut self, target: ListenerTarget) -> MockListener {
        let id = self.next_id;
        self.next_id += 1;
        self.total_binds += 1;
        self.bound.push((id, target));
        MockListener { id, target }
    }

    fn unbind(&mut self, listener: MockListener) {
        self.bound.retain(|(id, _)| *id != listener.id);
    }

    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError> {
        if self.fail_capture {
            return Err(HostError::CaptureFailed);
        }
        self.captured = Some(pointer_id);
        Ok(())
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError> {
        if self.fail_capture {
            return Err(HostError::ReleaseFailed);
        }
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
        Ok(())
    }
}

/// A [`TraceSink`] that keeps a compact log of every event.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    /// `(viewport_width, slides_to_show, gate_open)` per refresh.
    pub layouts: Vec<(f64, usize, bool)>,
    /// `(from, to)` per state change.
    pub states: Vec<(CarouselState, CarouselState)>,
    /// `(from, to, cause)` per navigation.
    pub navigations: Vec<(usize, usize, NavCause)>,
    /// Dots per container after each rebuild or teardown.
    pub dots: Vec<usize>,
    /// Outcome of each drag.
    pub drags: Vec<DragOutcome>,
    /// Failed host operations.
    pub host_errors: Vec<HostError>,
}

impl TraceSink for EventLog {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.layouts
            .push((e.viewport_width, e.slides_to_show, e.gate_open));
    }

    fn on_state(&mut self, e: &StateEvent) {
        self.states.push((e.from, e.to));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.navigations.push((e.from, e.to, e.cause));
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        self.dots.push(e.pages);
    }

    fn on_drag(&mut self, e: &DragEvent) {
        self.drags.push(e.outcome);
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        self.host_errors.push(e.error);
    }
}
