// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for `carousel_core`.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomHost`]: the [`CarouselHost`] implementation over live DOM elements
//! - [`mount`] / [`mount_traced`]: one controller per track, with a debounced
//!   window resize listener, behind a [`CarouselHandle`]
//! - [`ready`]: runs a callback once the document has been parsed
//! - [`ConsoleSink`]: a trace sink that logs to the browser console

#![no_std]

extern crate alloc;

mod console;
mod host;
mod mount;
mod ready;
mod timer;

pub use carousel_core::host::CarouselHost;
pub use console::ConsoleSink;
pub use host::{DomHost, DomListener, Targets};
pub use mount::{CarouselElements, CarouselHandle, mount, mount_traced};
pub use ready::ready;

use carousel_core::time::HostTime;

/// Returns the current host time from `performance.now()`, in microsecond
/// ticks.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(timer::performance_now())
}
