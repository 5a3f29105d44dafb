// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the controller.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! controller calls at each reconciliation step. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and the sink passed to
//! [`Tracer::new`] is dropped immediately. When **on**, each method performs
//! a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::controller::CarouselState;
use crate::drag::DragOutcome;
use crate::host::HostError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What triggered a page change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCause {
    /// Direct call to [`Carousel::go_to`](crate::Carousel::go_to).
    Api,
    /// A previous-page control (or [`Carousel::prev`](crate::Carousel::prev)).
    Prev,
    /// A next-page control (or [`Carousel::next`](crate::Carousel::next)).
    Next,
    /// A dot indicator.
    Dot,
    /// A committed swipe.
    Swipe,
}

/// Which pointer-capture call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureOp {
    /// Acquiring capture at pointer-down.
    Acquire,
    /// Releasing capture at pointer-up.
    Release,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted at the start of every refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// Viewport width the refresh was computed for.
    pub viewport_width: f64,
    /// Items per page at that width.
    pub slides_to_show: usize,
    /// Resulting page count.
    pub page_count: usize,
    /// Whether the enable gate admits this width.
    pub gate_open: bool,
}

/// Emitted when the lifecycle state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateEvent {
    /// State before the transition.
    pub from: CarouselState,
    /// State after the transition.
    pub to: CarouselState,
    /// Listeners bound after the transition.
    pub listeners: usize,
}

/// Emitted when the current page changes or is re-applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// Page before navigation.
    pub from: usize,
    /// Page after clamping.
    pub to: usize,
    /// Page count at the time of navigation.
    pub page_count: usize,
    /// What triggered it.
    pub cause: NavCause,
}

/// Emitted when dots are rebuilt (`pages > 0`) or destroyed (`pages == 0`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotsEvent {
    /// Number of dot containers affected.
    pub containers: usize,
    /// Dots per container.
    pub pages: usize,
}

/// Emitted when a drag session ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    /// Pointer that drove the drag.
    pub pointer_id: i32,
    /// Net horizontal displacement at the end of the drag.
    pub dx: f64,
    /// How the drag was resolved.
    pub outcome: DragOutcome,
}

/// Emitted when a host call fails and the controller carries on without it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostErrorEvent {
    /// The failed operation.
    pub op: CaptureOp,
    /// Pointer involved.
    pub pointer_id: i32,
    /// The host's error.
    pub error: HostError,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called at the start of every refresh.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called when the lifecycle state changes.
    fn on_state(&mut self, e: &StateEvent) {
        _ = e;
    }

    /// Called after each navigation.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called after dots are rebuilt or destroyed.
    fn on_dots(&mut self, e: &DotsEvent) {
        _ = e;
    }

    /// Called when a drag session ends.
    fn on_drag(&mut self, e: &DragEvent) {
        _ = e;
    }

    /// Called when a host operation fails.
    fn on_host_error(&mut self, e: &HostErrorEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Shares a sink between the controller and the code that reads it back.
///
/// Events arriving while the sink is already borrowed are dropped.
impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_layout(e);
        }
    }

    fn on_state(&mut self, e: &StateEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_state(e);
        }
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_navigate(e);
        }
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_dots(e);
        }
    }

    fn on_drag(&mut self, e: &DragEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_drag(e);
        }
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        if let Ok(mut s) = self.try_borrow_mut() {
            s.on_host_error(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owning wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StateEvent`].
    #[inline]
    pub fn state(&mut self, e: &StateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_state(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DotsEvent`].
    #[inline]
    pub fn dots(&mut self, e: &DotsEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_dots(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DragEvent`].
    #[inline]
    pub fn drag(&mut self, e: &DragEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_drag(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`HostErrorEvent`].
    #[inline]
    pub fn host_error(&mut self, e: &HostErrorEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_host_error(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_navigate() -> NavigateEvent {
        NavigateEvent {
            from: 0,
            to: 1,
            page_count: 3,
            cause: NavCause::Next,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_navigate(&sample_navigate());
        sink.on_dots(&DotsEvent {
            containers: 1,
            pages: 3,
        });
        sink.on_state(&StateEvent {
            from: CarouselState::Detached,
            to: CarouselState::Listening,
            listeners: 3,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_active());
        tracer.navigate(&sample_navigate());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_shared_sink() {
        use alloc::vec::Vec;

        #[derive(Default)]
        struct RecordingSink {
            pages: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.pages.push(e.to);
            }
        }

        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        let mut tracer = Tracer::new(Box::new(Rc::clone(&sink)));
        assert!(tracer.is_active());
        tracer.navigate(&sample_navigate());
        assert_eq!(sink.borrow().pages, &[1]);
    }
}
