// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.
//!
//! [`Carousel`] owns all mutable state of one carousel instance and drives a
//! [`CarouselHost`]. Every mutation goes through a small set of transition
//! methods so that the lifecycle can be tested without a DOM.
//!
//! # Lifecycle
//!
//! ```text
//!             attach()                      refresh(): pages > 1
//!  Detached ───────────► SinglePage ─────────────────────────────► Listening
//!     ▲                      │    ◄─────────────────────────────      │
//!     │      detach()        │       refresh(): pages <= 1           │
//!     └──────────────────────┴───────────────────────────────────────┘
//! ```
//!
//! `attach()` from `Detached` lands directly in `Listening` when there is more
//! than one page. Only `Listening` has listeners bound.

use alloc::vec::Vec;
use core::fmt;

use crate::config::CarouselConfig;
use crate::drag::{DragBounds, DragOutcome, DragSession, DragStep};
use crate::host::{
    CarouselHost, ListenerTarget, NavControl, NavDirection, PointerInput, PointerKind,
    PointerResponse,
};
use crate::pagination;
use crate::registry::ListenerRegistry;
use crate::trace::{
    CaptureOp, DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavCause, NavigateEvent,
    StateEvent, TraceSink, Tracer,
};

/// Lifecycle state of a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselState {
    /// Inert: no listeners, neutral track transform, navigation hidden.
    Detached,
    /// Enabled but everything fits on one page: navigation and dots hidden,
    /// no listeners.
    SinglePage,
    /// Enabled with several pages: navigation shown, dots built, listeners
    /// bound.
    Listening,
}

/// A responsive, paginated carousel bound to a [`CarouselHost`].
pub struct Carousel<H: CarouselHost> {
    host: H,
    config: CarouselConfig,
    item_count: usize,
    slides_to_show: usize,
    current_index: usize,
    state: CarouselState,
    listeners: ListenerRegistry<H::Listener>,
    /// Dots currently present in each container (identical across containers).
    dot_pages: usize,
    drag: Option<DragSession>,
    tracer: Tracer,
}

impl<H: CarouselHost> fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("item_count", &self.item_count)
            .field("slides_to_show", &self.slides_to_show)
            .field("current_index", &self.current_index)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dot_pages", &self.dot_pages)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl<H: CarouselHost> Carousel<H> {
    /// Creates a controller over `host` and reconciles it with the current
    /// viewport.
    ///
    /// Returns `None` if the track has no items. Invalid configuration values
    /// are corrected (see [`CarouselConfig::sanitized`]).
    #[must_use]
    pub fn new(host: H, config: CarouselConfig) -> Option<Self> {
        Self::with_tracer(host, config, Tracer::none())
    }

    /// Like [`new`](Self::new), reporting to `sink` from the first refresh on.
    #[must_use]
    pub fn new_traced(
        host: H,
        config: CarouselConfig,
        sink: alloc::boxed::Box<dyn TraceSink>,
    ) -> Option<Self> {
        Self::with_tracer(host, config, Tracer::new(sink))
    }

    fn with_tracer(host: H, config: CarouselConfig, tracer: Tracer) -> Option<Self> {
        let item_count = host.item_count();
        if item_count == 0 {
            return None;
        }
        let config = config.sanitized();
        let slides_to_show = config.slides_for_width(host.viewport_width());
        let mut carousel = Self {
            host,
            config,
            item_count,
            slides_to_show,
            current_index: 0,
            state: CarouselState::Detached,
            listeners: ListenerRegistry::new(),
            dot_pages: 0,
            drag: None,
            tracer,
        };
        carousel.refresh();
        Some(carousel)
    }

    // -- Accessors --

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    ///
    /// Changing what the host reports (e.g. viewport width) takes effect on
    /// the next [`refresh`](Self::refresh).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Returns `true` unless the carousel is [`Detached`](CarouselState::Detached).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state != CarouselState::Detached
    }

    /// Returns the active page.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of items per page as of the last refresh.
    #[must_use]
    pub fn slides_to_show(&self) -> usize {
        self.slides_to_show
    }

    /// Returns the number of items in the track.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the number of pages, never less than 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        pagination::page_count(self.item_count, self.slides_to_show)
    }

    /// Returns the bound listeners.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry<H::Listener> {
        &self.listeners
    }

    /// Returns `true` while a drag session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // -- Lifecycle --

    /// Makes the carousel interactive. No-op if already enabled.
    ///
    /// With a single page the navigation is hidden, dots are destroyed and no
    /// listeners are bound. Otherwise navigation is shown, one click listener
    /// per control is bound, dots are built and dragging is bound if
    /// configured. The track snaps to the current page without animation.
    pub fn attach(&mut self) {
        if self.is_enabled() {
            return;
        }
        self.apply_page_mode();
    }

    /// Makes the carousel inert. No-op if already disabled.
    ///
    /// Unbinds every listener, clears the track transform without animating
    /// back, hides navigation and destroys dots.
    pub fn detach(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.detach_buttons();
        self.detach_dragging();

        self.host.set_track_transition(false);
        self.host.set_track_translate(None);
        self.host.flush_layout();
        self.host.set_track_transition(true);

        self.set_nav_visible(false);
        self.destroy_dots();
        self.set_state(CarouselState::Detached);
    }

    /// Reconciles configuration, viewport and presentation state.
    ///
    /// Safe to call at any time and any number of times. Recomputes the slide
    /// count and clamps the current page, detaches if the enable gate is
    /// closed, otherwise attaches (or switches between single- and multi-page
    /// mode), rebuilds dots if the slide count changed and snaps the track without
    /// animation.
    pub fn refresh(&mut self) {
        let width = self.host.viewport_width();
        let previous_slides = self.slides_to_show;
        self.slides_to_show = self.config.slides_for_width(width);
        let gate_open = self.config.gate.is_enabled_for_width(width);

        self.tracer.layout(&LayoutEvent {
            viewport_width: width,
            slides_to_show: self.slides_to_show,
            page_count: self.page_count(),
            gate_open,
        });

        self.current_index = pagination::clamp_page(self.current_index, self.page_count());

        if !gate_open {
            self.detach();
            return;
        }

        let multi_page = self.page_count() > 1;
        match self.state {
            CarouselState::Detached => self.attach(),
            CarouselState::SinglePage if multi_page => self.apply_page_mode(),
            CarouselState::Listening if !multi_page => self.apply_page_mode(),
            _ => {
                if previous_slides != self.slides_to_show {
                    self.build_dots();
                }
            }
        }

        self.update_track(false);
        self.update_dots_active();
    }

    // -- Navigation --

    /// Goes to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.navigate(page, NavCause::Api);
    }

    /// Goes to the next page, wrapping to the first.
    pub fn next(&mut self) {
        let page = pagination::next_page(self.current_index, self.page_count());
        self.navigate(page, NavCause::Next);
    }

    /// Goes to the previous page, wrapping to the last.
    pub fn prev(&mut self) {
        let page = pagination::prev_page(self.current_index, self.page_count());
        self.navigate(page, NavCause::Prev);
    }

    fn navigate(&mut self, page: usize, cause: NavCause) {
        let page_count = self.page_count();
        let from = self.current_index;
        self.current_index = pagination::clamp_page(page, page_count);
        self.update_track(true);
        self.update_dots_active();
        self.tracer.navigate(&NavigateEvent {
            from,
            to: self.current_index,
            page_count,
            cause,
        });
    }

    // -- Event entry points --

    /// Handles a click delivered by the host for `target`.
    ///
    /// Clicks on targets that are not currently bound are ignored.
    pub fn click(&mut self, target: ListenerTarget) {
        if !self.listeners.contains(target) {
            return;
        }
        match target {
            ListenerTarget::Nav(NavControl {
                direction: NavDirection::Prev,
                ..
            }) => {
                let page = pagination::prev_page(self.current_index, self.page_count());
                self.navigate(page, NavCause::Prev);
            }
            ListenerTarget::Nav(NavControl {
                direction: NavDirection::Next,
                ..
            }) => {
                let page = pagination::next_page(self.current_index, self.page_count());
                self.navigate(page, NavCause::Next);
            }
            ListenerTarget::Dot { page, .. } => self.navigate(page, NavCause::Dot),
            ListenerTarget::Track => {}
        }
    }

    /// Handles pointer-down on the track: starts a drag session.
    pub fn pointer_down(&mut self, input: &PointerInput) {
        if !self.is_enabled() || !self.listeners.contains(ListenerTarget::Track) {
            return;
        }
        if input.kind == PointerKind::Mouse && input.button != 0 {
            return;
        }

        let start_offset = self.page_offset(self.current_index);
        self.drag = Some(DragSession::new(
            input.pointer_id,
            input.position,
            start_offset,
        ));
        self.host.set_track_transition(false);

        if let Err(error) = self.host.set_pointer_capture(input.pointer_id) {
            self.tracer.host_error(&HostErrorEvent {
                op: CaptureOp::Acquire,
                pointer_id: input.pointer_id,
                error,
            });
        }
    }

    /// Handles pointer-move: follows the pointer or aborts on vertical scroll.
    pub fn pointer_move(&mut self, input: &PointerInput) -> PointerResponse {
        if !self.is_enabled() {
            return PointerResponse::default();
        }
        let Some(session) = self.drag else {
            return PointerResponse::default();
        };

        let bounds = DragBounds {
            min: self.page_offset(self.page_count() - 1),
            max: self.page_offset(0),
        };
        match session.step(input.position, bounds) {
            DragStep::Abort => {
                self.drag = None;
                self.update_track(true);
                self.tracer.drag(&DragEvent {
                    pointer_id: session.pointer_id,
                    dx: session.delta(input.position).x,
                    outcome: DragOutcome::Aborted,
                });
                PointerResponse::default()
            }
            DragStep::Translate {
                offset,
                prevent_default,
            } => {
                self.host.set_track_translate(Some(offset));
                PointerResponse { prevent_default }
            }
        }
    }

    /// Handles pointer-up: commits a swipe or snaps back.
    pub fn pointer_up(&mut self, input: &PointerInput) {
        if !self.is_enabled() {
            return;
        }
        let Some(session) = self.drag.take() else {
            return;
        };

        self.host.set_track_transition(true);

        let outcome = session.release(input.position, self.config.swipe_threshold_px);
        match outcome {
            DragOutcome::Next => {
                let page = pagination::next_page(self.current_index, self.page_count());
                self.navigate(page, NavCause::Swipe);
            }
            DragOutcome::Prev => {
                let page = pagination::prev_page(self.current_index, self.page_count());
                self.navigate(page, NavCause::Swipe);
            }
            DragOutcome::SnapBack | DragOutcome::Aborted => self.update_track(true),
        }
        self.tracer.drag(&DragEvent {
            pointer_id: session.pointer_id,
            dx: session.delta(input.position).x,
            outcome,
        });

        if let Err(error) = self.host.release_pointer_capture(input.pointer_id) {
            self.tracer.host_error(&HostErrorEvent {
                op: CaptureOp::Release,
                pointer_id: input.pointer_id,
                error,
            });
        }
    }

    /// Handles pointer-cancel exactly like pointer-up.
    pub fn pointer_cancel(&mut self, input: &PointerInput) {
        self.pointer_up(input);
    }

    // -- Internals --

    fn set_state(&mut self, to: CarouselState) {
        if self.state == to {
            return;
        }
        let from = self.state;
        self.state = to;
        self.tracer.state(&StateEvent {
            from,
            to,
            listeners: self.listeners.len(),
        });
    }

    /// Enters `SinglePage` or `Listening` depending on the page count.
    fn apply_page_mode(&mut self) {
        if self.page_count() <= 1 {
            self.detach_buttons();
            self.detach_dragging();
            self.set_nav_visible(false);
            self.destroy_dots();
            self.update_track(false);
            self.set_state(CarouselState::SinglePage);
        } else {
            self.set_nav_visible(true);
            self.attach_buttons();
            self.build_dots();
            self.attach_dragging();
            self.update_track(false);
            self.set_state(CarouselState::Listening);
        }
    }

    fn page_offset(&self, page: usize) -> f64 {
        let host = &self.host;
        pagination::page_offset(page, self.slides_to_show, |i| host.item_offset(i))
    }

    fn set_translate(&mut self, x: f64, animate: bool) {
        self.host.set_track_transition(animate);
        self.host.set_track_translate(Some(x));
        if !animate {
            self.host.flush_layout();
            self.host.set_track_transition(true);
        }
    }

    fn update_track(&mut self, animate: bool) {
        let x = self.page_offset(self.current_index);
        self.set_translate(x, animate);
    }

    fn nav_controls(&self) -> Vec<NavControl> {
        let prev = (0..self.host.nav_count(NavDirection::Prev)).map(NavControl::prev);
        let next = (0..self.host.nav_count(NavDirection::Next)).map(NavControl::next);
        prev.chain(next).collect()
    }

    fn set_nav_visible(&mut self, visible: bool) {
        for control in self.nav_controls() {
            self.host.set_nav_visible(control, visible);
        }
    }

    fn attach_buttons(&mut self) {
        for control in self.nav_controls() {
            let target = ListenerTarget::Nav(control);
            if self.listeners.contains(target) {
                continue;
            }
            let listener = self.host.bind(target);
            self.listeners.insert(target, listener);
        }
    }

    fn detach_buttons(&mut self) {
        for listener in self.listeners.take_where(ListenerTarget::is_nav) {
            self.host.unbind(listener);
        }
    }

    fn attach_dragging(&mut self) {
        if !self.config.draggable || self.listeners.contains(ListenerTarget::Track) {
            return;
        }
        let listener = self.host.bind(ListenerTarget::Track);
        self.listeners.insert(ListenerTarget::Track, listener);
    }

    fn detach_dragging(&mut self) {
        let Some(listener) = self.listeners.remove(ListenerTarget::Track) else {
            return;
        };
        self.host.unbind(listener);
        if let Some(session) = self.drag.take() {
            // Capture may already be gone with the listeners.
            _ = self.host.release_pointer_capture(session.pointer_id);
        }
    }

    fn update_dots_active(&mut self) {
        for container in 0..self.host.dot_container_count() {
            for page in 0..self.dot_pages {
                self.host
                    .set_dot_active(container, page, page == self.current_index);
            }
        }
    }

    fn destroy_dots(&mut self) {
        for listener in self.listeners.take_where(ListenerTarget::is_dot) {
            self.host.unbind(listener);
        }
        let containers = self.host.dot_container_count();
        for container in 0..containers {
            self.host.clear_dots(container);
            self.host.set_dots_visible(container, false);
        }
        self.dot_pages = 0;
        if containers > 0 {
            self.tracer.dots(&DotsEvent {
                containers,
                pages: 0,
            });
        }
    }

    fn build_dots(&mut self) {
        let containers = self.host.dot_container_count();
        if containers == 0 {
            return;
        }
        self.destroy_dots();

        let pages = self.page_count();
        if pages <= 1 {
            return;
        }

        for container in 0..containers {
            self.host.set_dots_visible(container, true);
            self.host.clear_dots(container);
            for page in 0..pages {
                self.host.append_dot(container, page);
                let target = ListenerTarget::Dot { container, page };
                let listener = self.host.bind(target);
                if let Some(stale) = self.listeners.insert(target, listener) {
                    self.host.unbind(stale);
                }
            }
        }
        self.dot_pages = pages;
        self.update_dots_active();
        self.tracer.dots(&DotsEvent { containers, pages });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnableGate;
    use crate::testing::MockHost;
    use kurbo::Point;

    const ITEM_WIDTH: f64 = 300.0;

    /// Five 300px items, one prev and one next control, one dot container.
    fn five_items(width: f64) -> MockHost {
        MockHost::uniform(width, 5, ITEM_WIDTH)
            .with_nav(1, 1)
            .with_dot_containers(1)
    }

    fn carousel(host: MockHost, config: CarouselConfig) -> Carousel<MockHost> {
        Carousel::new(host, config).expect("host has items")
    }

    fn touch(x: f64, y: f64) -> PointerInput {
        PointerInput::primary(7, PointerKind::Touch, Point::new(x, y))
    }

    fn swipe(c: &mut Carousel<MockHost>, dx: f64) {
        c.pointer_down(&touch(400.0, 200.0));
        let _ = c.pointer_move(&touch(400.0 + dx / 2.0, 200.0));
        let _ = c.pointer_move(&touch(400.0 + dx, 200.0));
        c.pointer_up(&touch(400.0 + dx, 200.0));
    }

    #[test]
    fn empty_track_is_inert() {
        let host = MockHost::uniform(1000.0, 0, ITEM_WIDTH);
        assert!(Carousel::new(host, CarouselConfig::default()).is_none());
    }

    #[test]
    fn construction_refreshes_and_attaches() {
        let c = carousel(five_items(800.0), CarouselConfig::default());
        assert_eq!(c.state(), CarouselState::Listening);
        assert_eq!(c.slides_to_show(), 1);
        assert_eq!(c.page_count(), 5);
        // prev + next + 5 dots + track
        assert_eq!(c.listeners().len(), 8);
        assert_eq!(c.host().listener_count(), 8);
        assert_eq!(c.host().dot_count(0), 5);
        assert_eq!(c.host().active_dot(0), Some(0));
        assert!(c.host().dots[0].visible);
        assert_eq!(c.host().translate, Some(0.0));
    }

    #[test]
    fn resize_changes_slides_and_clamps_index() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        assert_eq!((c.slides_to_show(), c.page_count()), (1, 5));

        c.go_to(4);
        assert_eq!(c.current_index(), 4);

        c.host_mut().viewport_width = 1000.0;
        c.refresh();
        assert_eq!((c.slides_to_show(), c.page_count()), (2, 3));
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.host().dot_count(0), 3, "dots rebuilt for new page count");
        assert_eq!(c.host().active_dot(0), Some(2));
        assert_eq!(c.host().translate, Some(-1200.0));
    }

    #[test]
    fn index_stays_in_range_under_any_navigation() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        for page in [0, 3, 9, 100, 2] {
            c.go_to(page);
            assert!(c.current_index() < c.page_count());
        }
        for _ in 0..7 {
            c.next();
            assert!(c.current_index() < c.page_count());
        }
        for _ in 0..11 {
            c.prev();
            assert!(c.current_index() < c.page_count());
        }
    }

    #[test]
    fn go_to_animates_and_highlights() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.go_to(3);
        assert_eq!(c.host().translate, Some(-900.0));
        assert!(c.host().transition, "navigation animates");
        assert_eq!(c.host().active_dot(0), Some(3));
    }

    #[test]
    fn next_then_prev_round_trips() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        for start in 0..c.page_count() {
            c.go_to(start);
            c.next();
            c.prev();
            assert_eq!(c.current_index(), start);
        }
        c.go_to(4);
        c.next();
        assert_eq!(c.current_index(), 0, "next wraps to the first page");
        c.prev();
        assert_eq!(c.current_index(), 4, "prev wraps to the last page");
    }

    #[test]
    fn single_page_navigation_is_noop() {
        let host = MockHost::uniform(1000.0, 2, ITEM_WIDTH).with_nav(1, 1);
        let mut c = carousel(host, CarouselConfig::default());
        assert_eq!(c.page_count(), 1);
        c.next();
        assert_eq!(c.current_index(), 0);
        c.prev();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn attach_is_idempotent() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        let binds = c.host().total_binds;
        let snapshot = c.host().clone();
        c.attach();
        assert_eq!(c.host().total_binds, binds, "no double binding");
        assert_eq!(c.host().bound, snapshot.bound);
        assert_eq!(c.host().dots, snapshot.dots);
    }

    #[test]
    fn detach_releases_everything() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.go_to(2);
        c.detach();

        assert_eq!(c.state(), CarouselState::Detached);
        assert!(c.listeners().is_empty());
        assert_eq!(c.host().listener_count(), 0);
        assert_eq!(c.host().translate, None, "transform reset to neutral");
        assert!(c.host().transition, "transition restored after reset");
        assert!(c.host().prev_visible.iter().all(|v| !v));
        assert!(c.host().next_visible.iter().all(|v| !v));
        assert_eq!(c.host().dot_count(0), 0);
        assert!(!c.host().dots[0].visible);

        let flushes = c.host().layout_flushes;
        let snapshot = c.host().clone();
        c.detach();
        assert_eq!(c.host().layout_flushes, flushes, "second detach is a no-op");
        assert_eq!(c.host().bound, snapshot.bound);
    }

    #[test]
    fn detach_then_attach_rebinds_once() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.detach();
        c.attach();
        c.attach();
        assert_eq!(c.state(), CarouselState::Listening);
        assert_eq!(c.host().listener_count(), 8);
        assert!(c.host().prev_visible.iter().all(|v| *v));
    }

    #[test]
    fn drag_past_threshold_advances() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH).with_dot_containers(1),
            CarouselConfig::default(),
        );
        assert_eq!(c.page_count(), 3);

        swipe(&mut c, -60.0);
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_dragging());
        assert_eq!(c.host().captured, None, "capture released");
    }

    #[test]
    fn drag_within_threshold_snaps_back() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        swipe(&mut c, -40.0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.host().translate, Some(0.0));
        assert!(c.host().transition);
    }

    #[test]
    fn drag_right_goes_back() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        c.go_to(2);
        swipe(&mut c, 80.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn drag_follows_pointer_with_edge_resistance() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        c.pointer_down(&touch(400.0, 200.0));
        assert!(c.is_dragging());
        assert!(!c.host().transition, "transition off while dragging");
        assert_eq!(c.host().captured, Some(7));

        // Dragging right from page 0 overshoots the first page.
        let response = c.pointer_move(&touch(480.0, 200.0));
        assert!(response.prevent_default);
        assert_eq!(c.host().translate, Some(20.0));

        // Small movement does not block page scrolling.
        let response = c.pointer_move(&touch(404.0, 200.0));
        assert!(!response.prevent_default);
        assert_eq!(c.host().translate, Some(1.0));
    }

    #[test]
    fn vertical_gesture_aborts_drag() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        c.go_to(1);
        c.pointer_down(&touch(400.0, 200.0));
        let response = c.pointer_move(&touch(390.0, 260.0));
        assert!(!response.prevent_default);
        assert!(!c.is_dragging(), "session reset on abort");
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.host().translate, Some(-600.0));
        assert!(c.host().transition);

        // The trailing pointer-up belongs to no session.
        c.pointer_up(&touch(300.0, 260.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn secondary_mouse_button_does_not_drag() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        let mut input = PointerInput::primary(1, PointerKind::Mouse, Point::new(10.0, 10.0));
        input.button = 2;
        c.pointer_down(&input);
        assert!(!c.is_dragging());
    }

    #[test]
    fn capture_failure_is_swallowed() {
        let mut host = MockHost::uniform(1000.0, 6, ITEM_WIDTH);
        host.fail_capture = true;
        let mut c = carousel(host, CarouselConfig::default());
        swipe(&mut c, -100.0);
        assert_eq!(c.current_index(), 1, "drag proceeds without capture");
    }

    #[test]
    fn non_draggable_binds_no_track_listener() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::new().with_draggable(false),
        );
        assert!(!c.listeners().contains(ListenerTarget::Track));
        swipe(&mut c, -100.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn max_width_gate_toggles_interactivity() {
        let config = CarouselConfig::new()
            .with_breakpoint(773.0)
            .with_gate(EnableGate::MaxWidth(772.0));
        let mut c = carousel(five_items(800.0), config);
        assert_eq!(c.state(), CarouselState::Detached);
        assert!(!c.is_enabled());
        assert!(c.host().prev_visible.iter().all(|v| !v));
        assert_eq!(c.host().dot_count(0), 0);
        assert_eq!(c.host().listener_count(), 0);

        c.host_mut().viewport_width = 700.0;
        c.refresh();
        assert!(c.is_enabled());
        assert_eq!(c.host().dot_count(0), 5);
        assert!(c.host().dots[0].visible);

        c.host_mut().viewport_width = 800.0;
        c.refresh();
        assert_eq!(c.state(), CarouselState::Detached);
        assert_eq!(c.host().listener_count(), 0);
        assert_eq!(c.host().translate, None);
    }

    #[test]
    fn gated_refresh_clamps_index_for_a_later_attach() {
        let config = CarouselConfig::new().with_gate(EnableGate::MaxWidth(950.0));
        let mut c = carousel(five_items(800.0), config);
        c.go_to(4);
        assert_eq!(c.current_index(), 4);

        // Wider viewport: two slides per page and the gate closes.
        c.host_mut().viewport_width = 1000.0;
        c.refresh();
        assert!(!c.is_enabled());
        assert_eq!(c.page_count(), 3);
        assert_eq!(c.current_index(), 2);

        c.attach();
        assert_eq!(c.state(), CarouselState::Listening);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.host().translate, Some(-1200.0));
        assert_eq!(c.host().active_dot(0), Some(2));
    }

    #[test]
    fn min_width_gate() {
        let config = CarouselConfig::new().with_gate(EnableGate::MinWidth(1024.0));
        let mut c = carousel(five_items(800.0), config);
        assert!(!c.is_enabled());
        c.host_mut().viewport_width = 1280.0;
        c.refresh();
        assert!(c.is_enabled());
    }

    #[test]
    fn single_page_hides_navigation_and_dots() {
        let host = MockHost::uniform(1000.0, 2, ITEM_WIDTH)
            .with_nav(2, 2)
            .with_dot_containers(1);
        let c = carousel(host, CarouselConfig::default());
        assert_eq!(c.state(), CarouselState::SinglePage);
        assert!(c.is_enabled());
        assert!(c.listeners().is_empty());
        assert!(c.host().prev_visible.iter().all(|v| !v));
        assert!(c.host().next_visible.iter().all(|v| !v));
        assert_eq!(c.host().dot_count(0), 0);
        assert!(!c.host().dots[0].visible);
    }

    #[test]
    fn shrinking_viewport_leaves_single_page_mode() {
        // Two items fit on one page at >= 900px but not below.
        let host = MockHost::uniform(1000.0, 2, ITEM_WIDTH)
            .with_nav(1, 1)
            .with_dot_containers(1);
        let mut c = carousel(host, CarouselConfig::default());
        assert_eq!(c.state(), CarouselState::SinglePage);

        c.host_mut().viewport_width = 600.0;
        c.refresh();
        assert_eq!(c.state(), CarouselState::Listening);
        assert_eq!(c.host().dot_count(0), 2);
        assert!(c.host().prev_visible.iter().all(|v| *v));
        assert!(c.listeners().contains(ListenerTarget::Track));

        c.host_mut().viewport_width = 1000.0;
        c.refresh();
        assert_eq!(c.state(), CarouselState::SinglePage);
        assert!(c.listeners().is_empty());
        assert_eq!(c.host().listener_count(), 0);
    }

    #[test]
    fn redundant_refresh_is_stable() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.go_to(3);
        let binds = c.host().total_binds;
        c.refresh();
        c.refresh();
        assert_eq!(c.host().total_binds, binds, "no rebinding without change");
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.host().active_dot(0), Some(3));
    }

    #[test]
    fn dot_rebuild_does_not_leak_listeners() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        for width in [1000.0, 800.0, 1000.0, 800.0] {
            c.host_mut().viewport_width = width;
            c.refresh();
        }
        // prev + next + 5 dots + track
        assert_eq!(c.host().listener_count(), 8);
        assert_eq!(c.listeners().count_where(ListenerTarget::is_dot), 5);
    }

    #[test]
    fn multiple_dot_containers_stay_in_sync() {
        let host = MockHost::uniform(800.0, 5, ITEM_WIDTH)
            .with_nav(2, 2)
            .with_dot_containers(2);
        let mut c = carousel(host, CarouselConfig::default());
        c.go_to(3);
        assert_eq!(c.host().dots[0], c.host().dots[1]);
        assert_eq!(c.host().active_dot(1), Some(3));
        // 2 prev + 2 next + 2×5 dots + track
        assert_eq!(c.listeners().len(), 15);
    }

    #[test]
    fn clicks_route_to_navigation() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.click(ListenerTarget::Nav(NavControl::next(0)));
        assert_eq!(c.current_index(), 1);
        c.click(ListenerTarget::Dot {
            container: 0,
            page: 4,
        });
        assert_eq!(c.current_index(), 4);
        c.click(ListenerTarget::Nav(NavControl::prev(0)));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn clicks_on_unbound_targets_are_ignored() {
        let mut c = carousel(five_items(800.0), CarouselConfig::default());
        c.click(ListenerTarget::Nav(NavControl::next(5)));
        assert_eq!(c.current_index(), 0);

        c.detach();
        c.click(ListenerTarget::Nav(NavControl::next(0)));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn uneven_items_use_live_offsets() {
        let host = MockHost::with_offsets(800.0, [0.0, 250.0, 610.0, 800.0])
            .with_dot_containers(1);
        let mut c = carousel(host, CarouselConfig::default());
        c.go_to(2);
        assert_eq!(c.host().translate, Some(-610.0));
    }

    #[test]
    fn detach_mid_drag_resets_session() {
        let mut c = carousel(
            MockHost::uniform(1000.0, 6, ITEM_WIDTH),
            CarouselConfig::default(),
        );
        c.pointer_down(&touch(400.0, 200.0));
        c.detach();
        assert!(!c.is_dragging());
        assert_eq!(c.host().captured, None);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn lifecycle_is_traced() {
        use crate::testing::EventLog;
        use alloc::boxed::Box;
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let log = Rc::new(RefCell::new(EventLog::default()));
        let mut c = Carousel::new_traced(
            five_items(800.0),
            CarouselConfig::default(),
            Box::new(Rc::clone(&log)),
        )
        .expect("host has items");
        swipe(&mut c, -80.0);
        c.detach();

        let log = log.borrow();
        assert_eq!(
            log.states,
            [
                (CarouselState::Detached, CarouselState::Listening),
                (CarouselState::Listening, CarouselState::Detached),
            ]
        );
        assert_eq!(log.navigations.last(), Some(&(0, 1, NavCause::Swipe)));
        assert_eq!(log.drags, [DragOutcome::Next]);
    }
}
