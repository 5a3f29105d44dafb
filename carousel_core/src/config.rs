// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and the viewport enable gate.

use core::fmt;

/// Default items per page at or above the breakpoint.
pub const DEFAULT_SLIDES_LG: usize = 2;
/// Default items per page below the breakpoint.
pub const DEFAULT_SLIDES_SM: usize = 1;
/// Default breakpoint between the small and large slide counts, in CSS px.
pub const DEFAULT_BREAKPOINT: f64 = 900.0;
/// Default net horizontal drag distance that commits a page change, in CSS px.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Viewport range outside of which the carousel is inert.
///
/// A minimum and a maximum width are mutually exclusive, so the gate is an
/// enum rather than a pair of optional thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EnableGate {
    /// Interactive at every width.
    #[default]
    Always,
    /// Interactive when the viewport is at least this wide.
    MinWidth(f64),
    /// Interactive when the viewport is at most this wide.
    MaxWidth(f64),
}

impl EnableGate {
    /// Returns `true` if the carousel should be interactive at `width`.
    #[must_use]
    pub fn is_enabled_for_width(self, width: f64) -> bool {
        match self {
            Self::Always => true,
            Self::MinWidth(min) => width >= min,
            Self::MaxWidth(max) => width <= max,
        }
    }
}

/// Options recognized by [`Carousel`](crate::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Items per page when the viewport is at least `slides_breakpoint` wide.
    pub slides_lg: usize,
    /// Items per page below `slides_breakpoint`.
    pub slides_sm: usize,
    /// Viewport width (CSS px) switching between `slides_sm` and `slides_lg`.
    pub slides_breakpoint: f64,
    /// Width range in which the carousel is interactive.
    pub gate: EnableGate,
    /// Whether pointer dragging is bound on the track.
    pub draggable: bool,
    /// Net horizontal drag distance (CSS px) that commits a page change.
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselConfig {
    /// Returns the default configuration: 2 items per page from 900px up,
    /// 1 below, always enabled, draggable with a 50px swipe threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slides_lg: DEFAULT_SLIDES_LG,
            slides_sm: DEFAULT_SLIDES_SM,
            slides_breakpoint: DEFAULT_BREAKPOINT,
            gate: EnableGate::Always,
            draggable: true,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Sets the small and large slide counts.
    #[must_use]
    pub const fn with_slides(mut self, sm: usize, lg: usize) -> Self {
        self.slides_sm = sm;
        self.slides_lg = lg;
        self
    }

    /// Sets the slide-count breakpoint.
    #[must_use]
    pub const fn with_breakpoint(mut self, px: f64) -> Self {
        self.slides_breakpoint = px;
        self
    }

    /// Sets the enable gate.
    #[must_use]
    pub const fn with_gate(mut self, gate: EnableGate) -> Self {
        self.gate = gate;
        self
    }

    /// Enables or disables pointer dragging.
    #[must_use]
    pub const fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Sets the swipe threshold.
    #[must_use]
    pub const fn with_swipe_threshold(mut self, px: f64) -> Self {
        self.swipe_threshold_px = px;
        self
    }

    /// Returns the number of items per page at the given viewport width.
    #[must_use]
    pub fn slides_for_width(&self, width: f64) -> usize {
        if width >= self.slides_breakpoint {
            self.slides_lg
        } else {
            self.slides_sm
        }
    }

    /// Checks the configuration for values the controller would have to
    /// correct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slides_sm == 0 || self.slides_lg == 0 {
            return Err(ConfigError::ZeroSlides);
        }
        if !self.slides_breakpoint.is_finite() {
            return Err(ConfigError::InvalidBreakpoint);
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(ConfigError::InvalidSwipeThreshold);
        }
        match self.gate {
            EnableGate::MinWidth(w) | EnableGate::MaxWidth(w) if !w.is_finite() => {
                Err(ConfigError::InvalidGate)
            }
            _ => Ok(()),
        }
    }

    /// Returns a copy with every invalid value replaced by something usable.
    ///
    /// Zero slide counts become 1, a bad swipe threshold falls back to the
    /// default, a non-finite breakpoint or gate threshold is dropped.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.slides_sm = self.slides_sm.max(1);
        self.slides_lg = self.slides_lg.max(1);
        if !self.slides_breakpoint.is_finite() {
            self.slides_breakpoint = DEFAULT_BREAKPOINT;
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            self.swipe_threshold_px = DEFAULT_SWIPE_THRESHOLD;
        }
        if let EnableGate::MinWidth(w) | EnableGate::MaxWidth(w) = self.gate
            && !w.is_finite()
        {
            self.gate = EnableGate::Always;
        }
        self
    }
}

/// A configuration value the controller cannot use as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `slides_sm` or `slides_lg` is zero.
    ZeroSlides,
    /// The breakpoint is NaN or infinite.
    InvalidBreakpoint,
    /// The swipe threshold is not a positive finite number.
    InvalidSwipeThreshold,
    /// The enable gate threshold is NaN or infinite.
    InvalidGate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSlides => f.write_str("slides per page must be at least 1"),
            Self::InvalidBreakpoint => f.write_str("slide breakpoint must be finite"),
            Self::InvalidSwipeThreshold => {
                f.write_str("swipe threshold must be a positive finite number")
            }
            Self::InvalidGate => f.write_str("enable gate width must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
