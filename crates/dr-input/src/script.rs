//! Scripted input loader.
//!
//! Lets a headless run replay a fixed sequence of host events.
//!
//! # CSV format
//!
//! ```csv
//! frame,kind,value
//! 0,key,Space
//! 5,key,ArrowDown
//! 40,pointer,300 120
//! 90,voice,快一点
//! 120,resize,600
//! ```
//!
//! | `kind`    | `value`                                          |
//! |-----------|--------------------------------------------------|
//! | `key`     | DOM key name (`ArrowUp`, `w`, `Space`, …)        |
//! | `pointer` | `"x y"` in surface coordinates                   |
//! | `voice`   | transcript text                                  |
//! | `resize`  | new surface extent                               |
//!
//! Events are returned sorted by frame; rows sharing a frame keep file order.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dr_core::{Frame, Point};

use crate::{InputError, InputEvent, InputResult, KeyCode};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    frame: u64,
    kind:  String,
    value: String,
}

/// One host event and the frame before which it is delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedEvent {
    pub frame: Frame,
    pub event: InputEvent,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_script_csv(path: &Path) -> InputResult<Vec<ScriptedEvent>> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
pub fn load_script_reader<R: Read>(reader: R) -> InputResult<Vec<ScriptedEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();

    for result in csv_reader.deserialize::<ScriptRecord>() {
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        events.push(ScriptedEvent {
            frame: Frame(row.frame),
            event: parse_event(&row.kind, &row.value)?,
        });
    }

    // Stable: same-frame rows keep file order.
    events.sort_by_key(|e| e.frame);
    tracing::debug!(count = events.len(), "loaded input script");
    Ok(events)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(kind: &str, value: &str) -> InputResult<InputEvent> {
    match kind.trim() {
        "key" => {
            // A bare space would be trimmed by most editors; keep it verbatim.
            let name = if value == " " { value } else { value.trim() };
            Ok(InputEvent::Key(KeyCode::from_name(name)))
        }
        "pointer" => parse_point(value).map(InputEvent::Pointer),
        "voice"   => Ok(InputEvent::Transcript(value.trim().to_owned())),
        "resize"  => value
            .trim()
            .parse::<f32>()
            .map(InputEvent::Resize)
            .map_err(|_| InputError::Parse(format!("invalid resize extent {value:?}"))),
        other => Err(InputError::Parse(format!(
            "unknown event kind {other:?}: expected \"key\", \"pointer\", \"voice\", or \"resize\""
        ))),
    }
}

fn parse_point(value: &str) -> InputResult<Point> {
    let bad = || InputError::Parse(format!("invalid pointer {value:?}: expected \"x y\""));
    let mut parts = value.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };
    let x = x.parse::<f32>().map_err(|_| bad())?;
    let y = y.parse::<f32>().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}
