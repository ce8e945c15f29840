//! Session state machine states.

/// Where a session is in its lifecycle.
///
/// ```text
/// Idle ──start──▶ Running ──pause──▶ Paused
///                   ▲  │ ◀──resume──┘
///                   │  └─all tokens consumed──▶ Victory
///                   └──────────restart──────────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Created, no tokens laid out yet.
    #[default]
    Idle,
    /// Ticks integrate the agent and consume tokens.
    Running,
    /// Frozen; the field and agent are untouched until resumed.
    Paused,
    /// Every token consumed.  Terminal until restart.
    Victory,
}

impl GameState {
    /// `true` only while the simulation advances.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, GameState::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Idle    => "idle",
            GameState::Running => "running",
            GameState::Paused  => "paused",
            GameState::Victory => "victory",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
