// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use carousel_core::CarouselState;
use carousel_core::drag::DragOutcome;
use carousel_core::trace::{
    DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavCause, NavigateEvent, StateEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn state_name(state: CarouselState) -> &'static str {
    match state {
        CarouselState::Detached => "detached",
        CarouselState::SinglePage => "single-page",
        CarouselState::Listening => "listening",
    }
}

fn cause_name(cause: NavCause) -> &'static str {
    match cause {
        NavCause::Api => "api",
        NavCause::Prev => "prev",
        NavCause::Next => "next",
        NavCause::Dot => "dot",
        NavCause::Swipe => "swipe",
    }
}

fn outcome_name(outcome: DragOutcome) -> &'static str {
    match outcome {
        DragOutcome::Next => "next",
        DragOutcome::Prev => "prev",
        DragOutcome::SnapBack => "snap-back",
        DragOutcome::Aborted => "aborted",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        let gate = if e.gate_open { "open" } else { "closed" };
        let _ = writeln!(
            self.writer,
            "[layout] width={:.0}px slides={} pages={} gate={gate}",
            e.viewport_width, e.slides_to_show, e.page_count,
        );
    }

    fn on_state(&mut self, e: &StateEvent) {
        let _ = writeln!(
            self.writer,
            "[state] {} -> {} listeners={}",
            state_name(e.from),
            state_name(e.to),
            e.listeners,
        );
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        let _ = writeln!(
            self.writer,
            "[navigate] {} -> {} of {} via {}",
            e.from,
            e.to,
            e.page_count,
            cause_name(e.cause),
        );
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        let _ = writeln!(
            self.writer,
            "[dots] containers={} pages={}",
            e.containers, e.pages,
        );
    }

    fn on_drag(&mut self, e: &DragEvent) {
        let _ = writeln!(
            self.writer,
            "[drag] pointer={} dx={:.1}px {}",
            e.pointer_id,
            e.dx,
            outcome_name(e.outcome),
        );
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        let _ = writeln!(
            self.writer,
            "[host-error] {:?} pointer={}: {}",
            e.op, e.pointer_id, e.error,
        );
    }
}
