// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced window resize notifications.
//!
//! [`ResizeWatcher`] listens for `resize` on the window and drives a
//! [`Debouncer`] with `setTimeout`. Each resize clears the pending timeout and
//! arms a new one; when it fires, the debouncer decides whether the quiet
//! period really elapsed or the timer has to be re-armed for the remainder.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use carousel_core::debounce::{DebouncePoll, Debouncer};
use carousel_core::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

// Direct global bindings, like `requestAnimationFrame` in a frame loop:
// no Window lookup per call.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

type TimerClosure = Closure<dyn FnMut()>;

/// Calls a callback once window resizing has been quiet for the debounce
/// delay.
///
/// Removes its listener and cancels any pending timeout when dropped.
pub(crate) struct ResizeWatcher {
    inner: Rc<WatcherInner>,
}

struct WatcherInner {
    window: Window,
    debouncer: RefCell<Debouncer>,
    /// ID of the armed `setTimeout`, if any.
    timer_id: Cell<Option<i32>>,
    on_resize: RefCell<Option<TimerClosure>>,
    on_timeout: RefCell<Option<TimerClosure>>,
    callback: RefCell<Box<dyn FnMut()>>,
}

impl WatcherInner {
    fn disarm(&self) {
        if let Some(id) = self.timer_id.take() {
            clear_timeout(id);
        }
    }

    fn arm(&self, delay: Duration) {
        self.disarm();
        let ms = i32::try_from(delay.as_millis_ceil()).unwrap_or(i32::MAX);
        if let Some(ref closure) = *self.on_timeout.borrow() {
            let id = set_timeout(closure.as_ref().unchecked_ref(), ms);
            self.timer_id.set(Some(id));
        }
    }

    fn resized(&self) {
        let delay = self.debouncer.borrow_mut().reset(crate::now());
        self.arm(delay);
    }

    fn timed_out(&self) {
        self.timer_id.set(None);
        let poll = self.debouncer.borrow_mut().poll(crate::now());
        match poll {
            DebouncePoll::Idle => {}
            DebouncePoll::Wait(remaining) => self.arm(remaining),
            DebouncePoll::Ready => self.callback.borrow_mut()(),
        }
    }
}

impl ResizeWatcher {
    /// Starts listening for window resizes. `callback` runs once per burst of
    /// resize events, after `debouncer`'s delay.
    pub(crate) fn new(
        window: Window,
        debouncer: Debouncer,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let inner = Rc::new(WatcherInner {
            window,
            debouncer: RefCell::new(debouncer),
            timer_id: Cell::new(None),
            on_resize: RefCell::new(None),
            on_timeout: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
        });

        let timeout_inner = Rc::clone(&inner);
        let on_timeout =
            Closure::wrap(Box::new(move || timeout_inner.timed_out()) as Box<dyn FnMut()>);
        *inner.on_timeout.borrow_mut() = Some(on_timeout);

        let resize_inner = Rc::clone(&inner);
        let on_resize =
            Closure::wrap(Box::new(move || resize_inner.resized()) as Box<dyn FnMut()>);
        let _ = inner
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        *inner.on_resize.borrow_mut() = Some(on_resize);

        Self { inner }
    }

    /// Returns `true` while a refresh is scheduled.
    pub(crate) fn is_pending(&self) -> bool {
        self.inner.debouncer.borrow().is_pending()
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.inner.disarm();
        self.inner.debouncer.borrow_mut().cancel();
        if let Some(closure) = self.inner.on_resize.borrow_mut().take() {
            let _ = self
                .inner
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        // Both closures hold the inner state; dropping them breaks the cycle.
        self.inner.on_timeout.borrow_mut().take();
    }
}

impl core::fmt::Debug for ResizeWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResizeWatcher")
            .field("debouncer", &self.inner.debouncer.borrow())
            .field("timer_id", &self.inner.timer_id.get())
            .finish_non_exhaustive()
    }
}
