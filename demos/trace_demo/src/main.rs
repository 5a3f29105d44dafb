// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted carousel session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Drives a [`Carousel`] over an in-memory host through resizes, button and
//! dot clicks, swipes, an aborted vertical gesture and a trip through the
//! width gate, recording events to both a
//! [`PrettyPrintSink`](carousel_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](carousel_debug::recorder::RecorderSink), then exports
//! the recording as JSON.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter};
use std::rc::Rc;

use carousel_core::testing::MockHost;
use carousel_core::trace::{
    DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavigateEvent, StateEvent, TraceSink,
};
use carousel_core::{
    Carousel, CarouselConfig, EnableGate, ListenerTarget, NavControl, PointerInput, PointerKind,
};
use kurbo::Point;

use carousel_debug::pretty::PrettyPrintSink;
use carousel_debug::recorder::RecorderSink;

const ITEM_COUNT: usize = 5;
const ITEM_WIDTH: f64 = 320.0;

/// Forwards every event to both sinks.
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.pretty.on_layout(e);
        self.recorder.on_layout(e);
    }

    fn on_state(&mut self, e: &StateEvent) {
        self.pretty.on_state(e);
        self.recorder.on_state(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.pretty.on_navigate(e);
        self.recorder.on_navigate(e);
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        self.pretty.on_dots(e);
        self.recorder.on_dots(e);
    }

    fn on_drag(&mut self, e: &DragEvent) {
        self.pretty.on_drag(e);
        self.recorder.on_drag(e);
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        self.pretty.on_host_error(e);
        self.recorder.on_host_error(e);
    }
}

fn touch(x: f64, y: f64) -> PointerInput {
    PointerInput::primary(1, PointerKind::Touch, Point::new(x, y))
}

/// Drags from (400, 300) by `(dx, dy)` in four steps and releases.
fn drag(carousel: &mut Carousel<MockHost>, dx: f64, dy: f64) {
    carousel.pointer_down(&touch(400.0, 300.0));
    for step in 1..=4 {
        let t = f64::from(step) / 4.0;
        let _ = carousel.pointer_move(&touch(400.0 + dx * t, 300.0 + dy * t));
    }
    carousel.pointer_up(&touch(400.0 + dx, 300.0 + dy));
}

fn resize(carousel: &mut Carousel<MockHost>, width: f64) {
    println!("-- resize to {width}px");
    carousel.host_mut().viewport_width = width;
    carousel.refresh();
}

fn main() -> io::Result<()> {
    let tee = Rc::new(RefCell::new(Tee {
        pretty: PrettyPrintSink::new(Box::new(io::stdout())),
        recorder: RecorderSink::new(),
    }));

    let host = MockHost::uniform(1280.0, ITEM_COUNT, ITEM_WIDTH)
        .with_nav(2, 2)
        .with_dot_containers(1);
    let config = CarouselConfig::new()
        .with_breakpoint(773.0)
        .with_gate(EnableGate::MaxWidth(1024.0));

    println!("-- mount at 1280px");
    let Some(mut carousel) = Carousel::new_traced(host, config, Box::new(Rc::clone(&tee))) else {
        return Ok(());
    };

    resize(&mut carousel, 900.0);

    println!("-- next button, then dot 2");
    carousel.click(ListenerTarget::Nav(NavControl::next(1)));
    carousel.click(ListenerTarget::Dot {
        container: 0,
        page: 2,
    });

    println!("-- swipe left, short drag, vertical scroll");
    drag(&mut carousel, -120.0, 4.0);
    drag(&mut carousel, -30.0, 0.0);
    drag(&mut carousel, 5.0, 80.0);

    resize(&mut carousel, 600.0);

    println!("-- swipe right with capture failing");
    carousel.host_mut().fail_capture = true;
    drag(&mut carousel, 90.0, 0.0);
    carousel.host_mut().fail_capture = false;

    resize(&mut carousel, 1280.0);

    // Release the controller's handle on the sink before reading it back.
    drop(carousel);
    let Ok(tee) = Rc::try_unwrap(tee).map(RefCell::into_inner) else {
        return Ok(());
    };

    let path = "carousel_trace.json";
    let mut writer = BufWriter::new(File::create(path)?);
    carousel_debug::json::export(tee.recorder.as_bytes(), &mut writer)?;

    let events = carousel_debug::recorder::decode(tee.recorder.as_bytes()).count();
    println!("Wrote {path} ({events} events)");
    Ok(())
}
