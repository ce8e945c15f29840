//! Raw input events as delivered by the host.

use dr_core::Point;

/// A key as reported by the host's key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    /// Any printable character, case preserved.
    Char(char),
    /// Anything else (function keys, modifiers, …).
    Unidentified,
}

impl KeyCode {
    /// Parse a DOM-style key name: `"ArrowUp"`, `"w"`, `" "`, `"Space"`, …
    pub fn from_name(name: &str) -> KeyCode {
        match name {
            "ArrowUp"         => KeyCode::ArrowUp,
            "ArrowDown"       => KeyCode::ArrowDown,
            "ArrowLeft"       => KeyCode::ArrowLeft,
            "ArrowRight"      => KeyCode::ArrowRight,
            " " | "Space"     => KeyCode::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _               => KeyCode::Unidentified,
                }
            }
        }
    }
}

/// One event from any input source.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key-down.
    Key(KeyCode),

    /// Pointer or touch start/move, reduced to a surface point.
    Pointer(Point),

    /// Decoded voice transcript.
    Transcript(String),

    /// The host surface changed size; carries the new extent.
    Resize(f32),
}
