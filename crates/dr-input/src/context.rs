//! Read-only session snapshot passed to the normalizer.

use dr_core::{GameState, Point};

/// The two facts normalization depends on: the session state (pointer and
/// voice direction input only count while running; voice actions are
/// state-guarded) and where the agent is (pointer input is relative to it).
///
/// Built by dr-sim right before normalizing each event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputContext {
    pub state:          GameState,
    pub agent_position: Point,
}

impl InputContext {
    #[inline]
    pub fn new(state: GameState, agent_position: Point) -> Self {
        Self { state, agent_position }
    }
}
