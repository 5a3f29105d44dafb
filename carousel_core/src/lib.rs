// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive, paginated carousel controller.
//!
//! `carousel_core` turns a horizontal strip of items into a paginated
//! carousel: it decides how many items form a page at the current viewport
//! width, translates the track to the active page, keeps navigation and dot
//! indicators in sync, and interprets pointer drags as swipes. It is `no_std`
//! compatible (with `alloc`) and never touches a presentation tree directly.
//!
//! # Architecture
//!
//! ```text
//!   Host events (click, pointer, resize)
//!       │
//!       ▼
//!   Carousel::click / pointer_* / refresh
//!       │
//!       ├──► pagination (page count, offsets)
//!       ├──► DragSession (dead zone, resistance, swipe)
//!       ▼
//!   CarouselHost (track style, nav, dots, listeners)
//! ```
//!
//! **[`controller`]** — [`Carousel`], the per-instance state machine, and its
//! lifecycle states.
//!
//! **[`host`]** — The [`CarouselHost`] trait that presentation backends
//! implement, plus the pointer input types the controller consumes.
//!
//! **[`config`]** — [`CarouselConfig`] with responsive slide counts and the
//! optional width gate.
//!
//! **[`pagination`]** — Pure page arithmetic.
//!
//! **[`drag`]** — Drag session classification and swipe resolution.
//!
//! **[`registry`]** — Owned table of bound listeners.
//!
//! **[`debounce`]** / **[`time`]** — Trailing-edge debouncing for resize
//! handling, on a host-supplied microsecond clock.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `testing` (disabled by default): Exposes [`testing`], an in-memory host
//!   and event log for downstream tests.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod drag;
pub mod host;
pub mod pagination;
pub mod registry;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod time;
pub mod trace;

pub use config::{CarouselConfig, ConfigError, EnableGate};
pub use controller::{Carousel, CarouselState};
pub use host::{
    CarouselHost, HostError, ListenerTarget, NavControl, NavDirection, PointerInput, PointerKind,
    PointerResponse,
};
pub use registry::ListenerRegistry;
