// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Counts and indices are stored as `u32`, saturating at `u32::MAX`.

use carousel_core::CarouselState;
use carousel_core::drag::DragOutcome;
use carousel_core::host::HostError;
use carousel_core::trace::{
    CaptureOp, DotsEvent, DragEvent, HostErrorEvent, LayoutEvent, NavCause, NavigateEvent,
    StateEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_LAYOUT: u8 = 1;
const TAG_STATE: u8 = 2;
const TAG_NAVIGATE: u8 = 3;
const TAG_DOTS: u8 = 4;
const TAG_DRAG: u8 = 5;
const TAG_HOST_ERROR: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_count(&mut self, v: usize) {
        let v = u32::try_from(v).unwrap_or(u32::MAX);
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_bits().to_le_bytes());
    }

    fn write_state(&mut self, s: CarouselState) {
        self.write_u8(match s {
            CarouselState::Detached => 0,
            CarouselState::SinglePage => 1,
            CarouselState::Listening => 2,
        });
    }

    fn write_cause(&mut self, c: NavCause) {
        self.write_u8(match c {
            NavCause::Api => 0,
            NavCause::Prev => 1,
            NavCause::Next => 2,
            NavCause::Dot => 3,
            NavCause::Swipe => 4,
        });
    }

    fn write_outcome(&mut self, o: DragOutcome) {
        self.write_u8(match o {
            DragOutcome::Next => 0,
            DragOutcome::Prev => 1,
            DragOutcome::SnapBack => 2,
            DragOutcome::Aborted => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.write_u8(TAG_LAYOUT);
        self.write_f64(e.viewport_width);
        self.write_count(e.slides_to_show);
        self.write_count(e.page_count);
        self.write_bool(e.gate_open);
    }

    fn on_state(&mut self, e: &StateEvent) {
        self.write_u8(TAG_STATE);
        self.write_state(e.from);
        self.write_state(e.to);
        self.write_count(e.listeners);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.write_u8(TAG_NAVIGATE);
        self.write_count(e.from);
        self.write_count(e.to);
        self.write_count(e.page_count);
        self.write_cause(e.cause);
    }

    fn on_dots(&mut self, e: &DotsEvent) {
        self.write_u8(TAG_DOTS);
        self.write_count(e.containers);
        self.write_count(e.pages);
    }

    fn on_drag(&mut self, e: &DragEvent) {
        self.write_u8(TAG_DRAG);
        self.write_i32(e.pointer_id);
        self.write_f64(e.dx);
        self.write_outcome(e.outcome);
    }

    fn on_host_error(&mut self, e: &HostErrorEvent) {
        self.write_u8(TAG_HOST_ERROR);
        self.write_u8(match e.op {
            CaptureOp::Acquire => 0,
            CaptureOp::Release => 1,
        });
        self.write_i32(e.pointer_id);
        self.write_u8(match e.error {
            HostError::CaptureFailed => 0,
            HostError::ReleaseFailed => 1,
        });
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`LayoutEvent`].
    Layout(LayoutEvent),
    /// A [`StateEvent`].
    State(StateEvent),
    /// A [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// A [`DotsEvent`].
    Dots(DotsEvent),
    /// A [`DragEvent`].
    Drag(DragEvent),
    /// A [`HostErrorEvent`].
    HostError(HostErrorEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown tag.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        let [v] = self.read_array::<1>()?;
        Some(v)
    }

    fn read_bool(&mut self) -> Option<bool> {
        Some(self.read_u8()? != 0)
    }

    fn read_count(&mut self) -> Option<usize> {
        usize::try_from(u32::from_le_bytes(self.read_array()?)).ok()
    }

    fn read_i32(&mut self) -> Option<i32> {
        Some(i32::from_le_bytes(self.read_array()?))
    }

    fn read_f64(&mut self) -> Option<f64> {
        Some(f64::from_bits(u64::from_le_bytes(self.read_array()?)))
    }

    fn read_state(&mut self) -> Option<CarouselState> {
        Some(match self.read_u8()? {
            0 => CarouselState::Detached,
            1 => CarouselState::SinglePage,
            2 => CarouselState::Listening,
            _ => return None,
        })
    }

    fn read_cause(&mut self) -> Option<NavCause> {
        Some(match self.read_u8()? {
            0 => NavCause::Api,
            1 => NavCause::Prev,
            2 => NavCause::Next,
            3 => NavCause::Dot,
            4 => NavCause::Swipe,
            _ => return None,
        })
    }

    fn read_outcome(&mut self) -> Option<DragOutcome> {
        Some(match self.read_u8()? {
            0 => DragOutcome::Next,
            1 => DragOutcome::Prev,
            2 => DragOutcome::SnapBack,
            3 => DragOutcome::Aborted,
            _ => return None,
        })
    }

    fn decode_layout(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Layout(LayoutEvent {
            viewport_width: self.read_f64()?,
            slides_to_show: self.read_count()?,
            page_count: self.read_count()?,
            gate_open: self.read_bool()?,
        }))
    }

    fn decode_state(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::State(StateEvent {
            from: self.read_state()?,
            to: self.read_state()?,
            listeners: self.read_count()?,
        }))
    }

    fn decode_navigate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Navigate(NavigateEvent {
            from: self.read_count()?,
            to: self.read_count()?,
            page_count: self.read_count()?,
            cause: self.read_cause()?,
        }))
    }

    fn decode_dots(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Dots(DotsEvent {
            containers: self.read_count()?,
            pages: self.read_count()?,
        }))
    }

    fn decode_drag(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Drag(DragEvent {
            pointer_id: self.read_i32()?,
            dx: self.read_f64()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_host_error(&mut self) -> Option<RecordedEvent> {
        let op = match self.read_u8()? {
            0 => CaptureOp::Acquire,
            1 => CaptureOp::Release,
            _ => return None,
        };
        let pointer_id = self.read_i32()?;
        let error = match self.read_u8()? {
            0 => HostError::CaptureFailed,
            1 => HostError::ReleaseFailed,
            _ => return None,
        };
        Some(RecordedEvent::HostError(HostErrorEvent {
            op,
            pointer_id,
            error,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_LAYOUT => self.decode_layout(),
            TAG_STATE => self.decode_state(),
            TAG_NAVIGATE => self.decode_navigate(),
            TAG_DOTS => self.decode_dots(),
            TAG_DRAG => self.decode_drag(),
            TAG_HOST_ERROR => self.decode_host_error(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::testing::MockHost;
    use carousel_core::{Carousel, CarouselConfig, PointerInput, PointerKind};
    use kurbo::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn touch(x: f64, y: f64) -> PointerInput {
        PointerInput::primary(1, PointerKind::Touch, Point::new(x, y))
    }

    #[test]
    fn records_a_controller_session() {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let host = MockHost::uniform(800.0, 4, 300.0).with_dot_containers(1);
        let mut carousel =
            Carousel::new_traced(host, CarouselConfig::default(), Box::new(Rc::clone(&recorder)))
                .expect("host has items");
        carousel.next();
        carousel.pointer_down(&touch(300.0, 50.0));
        let _ = carousel.pointer_move(&touch(200.0, 52.0));
        carousel.pointer_up(&touch(200.0, 52.0));
        carousel.detach();

        let recorder = recorder.borrow();
        let events: Vec<_> = decode(recorder.as_bytes()).collect();

        assert!(matches!(
            events.first(),
            Some(RecordedEvent::Layout(LayoutEvent {
                slides_to_show: 1,
                page_count: 4,
                gate_open: true,
                ..
            }))
        ));
        let navigations: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Navigate(n) => Some((n.to, n.cause)),
                _ => None,
            })
            .collect();
        assert_eq!(navigations, [(1, NavCause::Next), (2, NavCause::Swipe)]);
        assert!(events.contains(&RecordedEvent::State(StateEvent {
            from: CarouselState::Listening,
            to: CarouselState::Detached,
            listeners: 0,
        })));
        assert!(events.iter().any(|e| matches!(
            e,
            RecordedEvent::Drag(DragEvent {
                outcome: DragOutcome::Next,
                ..
            })
        )));
    }

    #[test]
    fn host_errors_and_floats_survive_encoding() {
        let mut rec = RecorderSink::new();
        rec.on_host_error(&HostErrorEvent {
            op: CaptureOp::Release,
            pointer_id: -3,
            error: HostError::ReleaseFailed,
        });
        rec.on_drag(&DragEvent {
            pointer_id: 9,
            dx: -61.25,
            outcome: DragOutcome::Next,
        });

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(events.len(), 2);
        match &events[0] {
            RecordedEvent::HostError(e) => {
                assert_eq!(e.op, CaptureOp::Release);
                assert_eq!(e.pointer_id, -3);
                assert_eq!(e.error, HostError::ReleaseFailed);
            }
            other => panic!("expected HostError, got {other:?}"),
        }
        match &events[1] {
            RecordedEvent::Drag(e) => assert_eq!(e.dx, -61.25),
            other => panic!("expected Drag, got {other:?}"),
        }
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_dots(&DotsEvent {
            containers: 1,
            pages: 3,
        });
        rec.on_dots(&DotsEvent {
            containers: 1,
            pages: 0,
        });
        let bytes = rec.into_bytes();
        let events: Vec<_> = decode(&bytes[..bytes.len() - 2]).collect();
        assert_eq!(events.len(), 1, "partial second record is dropped");
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
