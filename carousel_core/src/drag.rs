// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-drag session and swipe resolution.
//!
//! A [`DragSession`] lives from pointer-down to the matching pointer-up or
//! cancel. Each move is classified by [`DragSession::step`]: a mostly
//! vertical gesture past the dead zone aborts the drag (the user is
//! scrolling the page), anything else translates the track with rubber-band
//! resistance past the first and last page. [`DragSession::release`] turns
//! the net horizontal displacement into a page change or a snap back.
//!
//! There is no velocity component: only the net distance matters.

use kurbo::{Point, Vec2};

/// Movement (CSS px) below which a gesture is neither a scroll nor a swipe.
pub const DEAD_ZONE_PX: f64 = 6.0;

/// Fraction of the overshoot applied when dragging past either end.
pub const EDGE_RESISTANCE: f64 = 0.25;

/// Allowed track translation range while dragging.
///
/// `max` is the offset of page 0 (normally 0) and `min` the offset of the
/// last page (normally negative).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    /// Offset of the last page.
    pub min: f64,
    /// Offset of the first page.
    pub max: f64,
}

impl DragBounds {
    /// Applies edge resistance to a proposed translation.
    #[must_use]
    pub fn resist(self, proposed: f64) -> f64 {
        if proposed > self.max {
            self.max + (proposed - self.max) * EDGE_RESISTANCE
        } else if proposed < self.min {
            self.min + (proposed - self.min) * EDGE_RESISTANCE
        } else {
            proposed
        }
    }
}

/// Classification of one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragStep {
    /// The gesture turned into a vertical scroll; end the session without
    /// navigating.
    Abort,
    /// Keep dragging.
    Translate {
        /// Track translation to apply, resistance included.
        offset: f64,
        /// Horizontal movement passed the dead zone, so the host should keep
        /// the page from scrolling.
        prevent_default: bool,
    },
}

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragOutcome {
    /// Swiped left past the threshold.
    Next,
    /// Swiped right past the threshold.
    Prev,
    /// Released within the threshold.
    SnapBack,
    /// Aborted by a vertical scroll gesture.
    Aborted,
}

/// State captured at pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer that started the drag.
    pub pointer_id: i32,
    /// Pointer position at pointer-down.
    pub start: Point,
    /// Track translation at pointer-down.
    pub start_offset: f64,
}

impl DragSession {
    /// Starts a session.
    #[must_use]
    pub const fn new(pointer_id: i32, start: Point, start_offset: f64) -> Self {
        Self {
            pointer_id,
            start,
            start_offset,
        }
    }

    /// Displacement of `position` from the start point.
    #[must_use]
    pub fn delta(&self, position: Point) -> Vec2 {
        position - self.start
    }

    /// Classifies a pointer move to `position`.
    #[must_use]
    pub fn step(&self, position: Point, bounds: DragBounds) -> DragStep {
        let d = self.delta(position);
        let (ax, ay) = (d.x.abs(), d.y.abs());
        if ay > ax && ay > DEAD_ZONE_PX {
            return DragStep::Abort;
        }
        DragStep::Translate {
            offset: bounds.resist(self.start_offset + d.x),
            prevent_default: ax > DEAD_ZONE_PX,
        }
    }

    /// Resolves the release at `position` against `threshold`.
    ///
    /// Left-to-right reading order: a leftward swipe (negative `dx`) reveals
    /// the next page.
    #[must_use]
    pub fn release(&self, position: Point, threshold: f64) -> DragOutcome {
        let dx = self.delta(position).x;
        if dx < -threshold {
            DragOutcome::Next
        } else if dx > threshold {
            DragOutcome::Prev
        } else {
            DragOutcome::SnapBack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: DragBounds = DragBounds {
        min: -600.0,
        max: 0.0,
    };

    fn session() -> DragSession {
        DragSession::new(1, Point::new(200.0, 100.0), -300.0)
    }

    #[test]
    fn small_moves_translate_without_preventing_scroll() {
        let step = session().step(Point::new(204.0, 101.0), BOUNDS);
        assert_eq!(
            step,
            DragStep::Translate {
                offset: -296.0,
                prevent_default: false
            }
        );
    }

    #[test]
    fn horizontal_move_past_dead_zone_prevents_default() {
        let step = session().step(Point::new(150.0, 103.0), BOUNDS);
        assert_eq!(
            step,
            DragStep::Translate {
                offset: -350.0,
                prevent_default: true
            }
        );
    }

    #[test]
    fn vertical_move_aborts() {
        assert_eq!(
            session().step(Point::new(203.0, 120.0), BOUNDS),
            DragStep::Abort
        );
        // Vertical but inside the dead zone keeps dragging.
        assert!(matches!(
            session().step(Point::new(201.0, 105.0), BOUNDS),
            DragStep::Translate { .. }
        ));
    }

    #[test]
    fn resistance_applies_past_both_ends() {
        assert_eq!(BOUNDS.resist(40.0), 10.0);
        assert_eq!(BOUNDS.resist(-640.0), -610.0);
        assert_eq!(BOUNDS.resist(-250.0), -250.0);
    }

    #[test]
    fn release_thresholds() {
        let s = DragSession::new(1, Point::new(300.0, 0.0), 0.0);
        assert_eq!(s.release(Point::new(240.0, 0.0), 50.0), DragOutcome::Next);
        assert_eq!(
            s.release(Point::new(260.0, 0.0), 50.0),
            DragOutcome::SnapBack
        );
        assert_eq!(s.release(Point::new(351.0, 0.0), 50.0), DragOutcome::Prev);
        // Exactly at the threshold does not commit.
        assert_eq!(
            s.release(Point::new(250.0, 0.0), 50.0),
            DragOutcome::SnapBack
        );
    }
}
