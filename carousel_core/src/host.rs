// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for presentation backends.
//!
//! The controller never touches a DOM directly. A *host* owns the track, its
//! items, the navigation controls and the dot containers, and exposes them
//! through [`CarouselHost`]:
//!
//! - **Geometry** — viewport width and live item offsets, read on demand.
//! - **Track style** — translation and transition toggling, plus a layout
//!   flush so a non-animated jump is committed before the transition comes
//!   back.
//! - **Controls** — navigation visibility, dot construction, teardown and
//!   highlighting.
//! - **Listeners** — [`bind`](CarouselHost::bind) returns an owned
//!   [`Listener`](CarouselHost::Listener) which the controller keeps in its
//!   [`ListenerRegistry`](crate::ListenerRegistry) until it hands it back to
//!   [`unbind`](CarouselHost::unbind).
//!
//! Events flow the other way: the host forwards clicks and pointer input to
//! [`Carousel::click`](crate::Carousel::click) and the `pointer_*` methods.
//!
//! # Crate boundaries
//!
//! `carousel_core` owns the state machine and this contract. Backend crates
//! (e.g. `carousel_backend_web`) implement it for a concrete presentation
//! tree; [`testing::MockHost`](crate::testing::MockHost) implements it in
//! memory for tests.

use core::fmt;

use kurbo::Point;

/// Which way a navigation control moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDirection {
    /// Goes to the previous page.
    Prev,
    /// Goes to the next page.
    Next,
}

/// One navigation control, addressed by direction and position among the
/// controls of that direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavControl {
    /// Direction of the control.
    pub direction: NavDirection,
    /// Index among the host's controls of the same direction.
    pub index: usize,
}

impl NavControl {
    /// A previous-page control.
    #[must_use]
    pub const fn prev(index: usize) -> Self {
        Self {
            direction: NavDirection::Prev,
            index,
        }
    }

    /// A next-page control.
    #[must_use]
    pub const fn next(index: usize) -> Self {
        Self {
            direction: NavDirection::Next,
            index,
        }
    }
}

/// What a bound listener is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Click on a navigation control.
    Nav(NavControl),
    /// Click on the dot for `page` inside dot container `container`.
    Dot {
        /// Dot container index.
        container: usize,
        /// Page the dot selects.
        page: usize,
    },
    /// Pointer down/move/up/cancel on the track.
    Track,
}

impl ListenerTarget {
    /// Returns `true` for navigation control targets.
    #[must_use]
    pub const fn is_nav(self) -> bool {
        matches!(self, Self::Nav(_))
    }

    /// Returns `true` for dot targets.
    #[must_use]
    pub const fn is_dot(self) -> bool {
        matches!(self, Self::Dot { .. })
    }
}

/// Kind of pointing device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse; only the primary button starts a drag.
    #[default]
    Mouse,
    /// A pen or stylus.
    Pen,
    /// A touch contact.
    Touch,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string. Unknown types are treated as touch,
    /// which places no button restriction on dragging.
    #[must_use]
    pub fn from_pointer_type(kind: &str) -> Self {
        match kind {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            _ => Self::Touch,
        }
    }
}

/// A pointer event as seen by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Host pointer identifier, used for pointer capture.
    pub pointer_id: i32,
    /// Device kind.
    pub kind: PointerKind,
    /// Button that changed state (`0` is the primary button).
    pub button: i16,
    /// Position in viewport coordinates (CSS px).
    pub position: Point,
}

impl PointerInput {
    /// Creates a primary-button pointer input at `position`.
    #[must_use]
    pub const fn primary(pointer_id: i32, kind: PointerKind, position: Point) -> Self {
        Self {
            pointer_id,
            kind,
            button: 0,
            position,
        }
    }
}

/// What the host should do with the native event after the controller saw it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct PointerResponse {
    /// Suppress the default action (page scrolling) for this event.
    pub prevent_default: bool,
}

/// A host operation that failed. The controller treats these as advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// Acquiring pointer capture failed (e.g. unknown pointer id).
    CaptureFailed,
    /// Releasing pointer capture failed.
    ReleaseFailed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaptureFailed => f.write_str("pointer capture could not be acquired"),
            Self::ReleaseFailed => f.write_str("pointer capture could not be released"),
        }
    }
}

impl core::error::Error for HostError {}

/// A presentation tree that a [`Carousel`](crate::Carousel) drives.
///
/// Indices are stable for the host's lifetime: items, navigation controls and
/// dot containers are fixed at construction. Dots are created and destroyed
/// by the controller through [`append_dot`](Self::append_dot) and
/// [`clear_dots`](Self::clear_dots).
pub trait CarouselHost {
    /// An owned handle for one bound event listener.
    type Listener;

    /// Current viewport width in CSS px.
    fn viewport_width(&self) -> f64;

    /// Number of items in the track.
    fn item_count(&self) -> usize;

    /// Horizontal offset of item `index` within the track, or `None` if the
    /// item does not exist.
    fn item_offset(&self, index: usize) -> Option<f64>;

    /// Number of navigation controls for `direction`.
    fn nav_count(&self, direction: NavDirection) -> usize;

    /// Number of dot containers.
    fn dot_container_count(&self) -> usize;

    /// Turns the track's transition on (style default) or off (`none`).
    fn set_track_transition(&mut self, enabled: bool);

    /// Sets the track's horizontal translation, or clears the transform when
    /// `None`.
    fn set_track_translate(&mut self, x: Option<f64>);

    /// Forces a synchronous layout so pending style changes are committed.
    fn flush_layout(&mut self);

    /// Shows (style default) or hides a navigation control.
    fn set_nav_visible(&mut self, control: NavControl, visible: bool);

    /// Shows (style default) or hides a dot container.
    fn set_dots_visible(&mut self, container: usize, visible: bool);

    /// Removes every dot from a container.
    fn clear_dots(&mut self, container: usize);

    /// Appends the dot for `page` to a container, initially inactive.
    fn append_dot(&mut self, container: usize, page: usize);

    /// Sets the active marker of a dot.
    fn set_dot_active(&mut self, container: usize, page: usize, active: bool);

    /// Binds the listener for `target` and returns its handle.
    fn bind(&mut self, target: ListenerTarget) -> Self::Listener;

    /// Removes a listener previously returned by [`bind`](Self::bind).
    fn unbind(&mut self, listener: Self::Listener);

    /// Routes further events of `pointer_id` to the track.
    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError>;

    /// Ends pointer capture for `pointer_id`.
    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), HostError>;
}
