//! Intents — the normalized commands every input source reduces to.

use dr_core::Direction;

/// A command derived from raw input.
///
/// Intents are produced by [`normalize`][crate::normalize] and consumed by
/// the session's apply step (dr-sim).  Whether an intent has any effect
/// depends on the session state at the time it is applied; for example
/// `Move` is dropped outside `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Face `Direction` and start moving.
    Move(Direction),

    /// Play/pause button: start from Idle, pause while Running, resume
    /// while Paused.
    ToggleRun,

    /// Start a session that has not started yet.
    Start,

    /// Pause a running session.
    Pause,

    /// Resume a paused session.
    Resume,

    /// Reset the agent and lay out a fresh field.
    Restart,

    /// One speed step faster.
    SpeedUp,

    /// One speed step slower.
    SpeedDown,

    /// Tighter grid spacing, so more tokens.
    DensityUp,

    /// Wider grid spacing, so fewer tokens.
    DensityDown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Move(d)     => write!(f, "move {d}"),
            Intent::ToggleRun   => f.write_str("toggle"),
            Intent::Start       => f.write_str("start"),
            Intent::Pause       => f.write_str("pause"),
            Intent::Resume      => f.write_str("resume"),
            Intent::Restart     => f.write_str("restart"),
            Intent::SpeedUp     => f.write_str("speed up"),
            Intent::SpeedDown   => f.write_str("speed down"),
            Intent::DensityUp   => f.write_str("density up"),
            Intent::DensityDown => f.write_str("density down"),
        }
    }
}
