// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time in microsecond ticks.
//!
//! [`HostTime`] is a point on the host's monotonic clock (on the web,
//! `performance.now()` scaled to microseconds). [`Duration`] is a span in the
//! same units. Both are plain `u64` newtypes so that debounce bookkeeping stays
//! `no_std` and platform-agnostic.

use core::fmt;
use core::ops::{Add, Sub};

/// A point in time expressed as microseconds on the host's monotonic clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Creates a host time from fractional milliseconds, as reported by
    /// `performance.now()` and DOM event timestamps.
    ///
    /// Negative and non-finite inputs map to zero.
    #[inline]
    #[must_use]
    pub fn from_millis_f64(ms: f64) -> Self {
        if !ms.is_finite() || ms <= 0.0 {
            return Self(0);
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "positive finite milliseconds; µs fits in u64 for any realistic uptime"
        )]
        let us = (ms * 1000.0) as u64;
        Self(us)
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}µs)", self.0)
    }
}

/// A span of time in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Returns the duration in whole milliseconds, rounded up so that a timer
    /// armed with it never fires early.
    #[inline]
    #[must_use]
    pub const fn as_millis_ceil(self) -> u64 {
        self.0.div_ceil(1000)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}µs)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_conversions() {
        assert_eq!(Duration::from_millis(120), Duration(120_000));
        assert_eq!(Duration(120_000).as_millis_ceil(), 120);
        assert_eq!(Duration(119_001).as_millis_ceil(), 120);
        assert_eq!(Duration(0).as_millis_ceil(), 0);
    }

    #[test]
    fn host_time_from_performance_now() {
        assert_eq!(HostTime::from_millis_f64(16.5), HostTime(16_500));
        assert_eq!(HostTime::from_millis_f64(-3.0), HostTime(0));
        assert_eq!(HostTime::from_millis_f64(f64::NAN), HostTime(0));
    }

    #[test]
    fn host_time_arithmetic_saturates() {
        let t = HostTime(1_000);
        assert_eq!(t + Duration(500), HostTime(1_500));
        assert_eq!(HostTime(1_500) - t, Duration(500));
        assert_eq!(t - HostTime(1_500), Duration(0));
        assert_eq!(HostTime(u64::MAX) + Duration(1), HostTime(u64::MAX));
    }
}
