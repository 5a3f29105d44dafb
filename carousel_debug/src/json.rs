// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array with
//! one object per event. Each object carries its position in the recording
//! (`seq`), the event `name` and the event fields under `args`.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a JSON array.
///
/// # Errors
///
/// Returns any error from serializing into `writer`.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes)
        .enumerate()
        .map(|(seq, recorded)| event_json(seq, &recorded))
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &events)?;
    writeln!(writer)
}

fn event_json(seq: usize, recorded: &RecordedEvent) -> Value {
    match recorded {
        RecordedEvent::Layout(e) => json!({
            "seq": seq,
            "name": "Layout",
            "args": {
                "viewport_width": e.viewport_width,
                "slides_to_show": e.slides_to_show,
                "page_count": e.page_count,
                "gate_open": e.gate_open,
            }
        }),
        RecordedEvent::State(e) => json!({
            "seq": seq,
            "name": "State",
            "args": {
                "from": format!("{:?}", e.from),
                "to": format!("{:?}", e.to),
                "listeners": e.listeners,
            }
        }),
        RecordedEvent::Navigate(e) => json!({
            "seq": seq,
            "name": "Navigate",
            "args": {
                "from": e.from,
                "to": e.to,
                "page_count": e.page_count,
                "cause": format!("{:?}", e.cause),
            }
        }),
        RecordedEvent::Dots(e) => json!({
            "seq": seq,
            "name": "Dots",
            "args": {
                "containers": e.containers,
                "pages": e.pages,
            }
        }),
        RecordedEvent::Drag(e) => json!({
            "seq": seq,
            "name": "Drag",
            "args": {
                "pointer_id": e.pointer_id,
                "dx": e.dx,
                "outcome": format!("{:?}", e.outcome),
            }
        }),
        RecordedEvent::HostError(e) => json!({
            "seq": seq,
            "name": "HostError",
            "args": {
                "op": format!("{:?}", e.op),
                "pointer_id": e.pointer_id,
                "error": e.error.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use carousel_core::drag::DragOutcome;
    use carousel_core::trace::{DragEvent, NavCause, NavigateEvent, TraceSink};

    #[test]
    fn export_is_a_json_array() {
        let mut rec = RecorderSink::new();
        rec.on_navigate(&NavigateEvent {
            from: 0,
            to: 1,
            page_count: 3,
            cause: NavCause::Dot,
        });
        rec.on_drag(&DragEvent {
            pointer_id: 2,
            dx: 12.5,
            outcome: DragOutcome::SnapBack,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        let events = parsed.as_array().expect("top level is an array");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["name"], "Navigate");
        assert_eq!(events[0]["args"]["cause"], "Dot");
        assert_eq!(events[1]["seq"], 1);
        assert_eq!(events[1]["args"]["outcome"], "SnapBack");
        assert_eq!(events[1]["args"]["dx"], 12.5);
    }

    #[test]
    fn empty_recording_exports_empty_array() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, json!([]));
    }
}
