//! Plain data row types written by output backends.

use dr_core::GameState;

/// Consumption progress at a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRow {
    pub frame:    u64,
    pub state:    GameState,
    pub consumed: u64,
    pub initial:  u64,
    /// Exact share in `[0, 100]`; writers round for display.
    pub percent:  f64,
}

/// One state-machine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub frame: u64,
    pub from:  GameState,
    pub to:    GameState,
}
