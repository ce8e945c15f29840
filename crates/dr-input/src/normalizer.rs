//! Event → intent classification.

use dr_core::{Direction, Point};

use crate::phrases::normalize_transcript;
use crate::{InputContext, InputEvent, Intent, KeyCode};

/// Classify one raw event.  Returns `None` for anything that maps to no
/// intent; such events must leave the session untouched.
pub fn normalize(event: &InputEvent, ctx: &InputContext) -> Option<Intent> {
    match event {
        InputEvent::Key(key)        => normalize_key(*key),
        InputEvent::Pointer(point)  => normalize_pointer(*point, ctx),
        InputEvent::Transcript(txt) => normalize_transcript(txt, ctx.state),
        InputEvent::Resize(_)       => None,
    }
}

/// Arrow keys and WASD (either case) steer; space toggles play.
pub fn normalize_key(key: KeyCode) -> Option<Intent> {
    let dir = match key {
        KeyCode::ArrowUp    => Direction::Up,
        KeyCode::ArrowDown  => Direction::Down,
        KeyCode::ArrowLeft  => Direction::Left,
        KeyCode::ArrowRight => Direction::Right,
        KeyCode::Space      => return Some(Intent::ToggleRun),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Direction::Up,
            's' => Direction::Down,
            'a' => Direction::Left,
            'd' => Direction::Right,
            ' ' => return Some(Intent::ToggleRun),
            _   => return None,
        },
        KeyCode::Unidentified => return None,
    };
    Some(Intent::Move(dir))
}

/// Steer toward a pointer/touch point.  Only meaningful while running.
pub fn normalize_pointer(point: Point, ctx: &InputContext) -> Option<Intent> {
    if !ctx.state.is_running() {
        return None;
    }
    Some(Intent::Move(pointer_direction(point, ctx.agent_position)))
}

/// Direction from `origin` toward `point` along the dominant axis.
///
/// The horizontal axis wins only when `|dx| > |dy|`; otherwise the sign of
/// `dy` decides (zero counts as Up).
pub fn pointer_direction(point: Point, origin: Point) -> Direction {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
