//! Agent state.

use std::f32::consts::TAU;

use dr_core::{Direction, GameConfig, Point, Speed};

/// Maximum half-opening of the sprite's mouth, in radians.
const MOUTH_OPENING: f32 = 0.2;

/// The single controllable agent.
///
/// An agent is either **moving** (integrated every running frame along
/// `direction`) or **still** (rendered, but never integrated).  Steering
/// always sets it moving; pause and victory stop it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Centre of the sprite.
    pub position: Point,

    /// Sprite radius; also scales the collision range.  Derived from the
    /// surface extent.
    pub size: f32,

    /// Pixels travelled per frame.
    pub speed: f32,

    /// Travel direction, or facing when still.
    pub direction: Direction,

    /// Cyclic animation phase in `[0, π)`.  Has no gameplay effect.
    pub motion_phase: f32,

    /// `true` while the agent should be integrated each running frame.
    pub is_moving: bool,
}

impl Agent {
    /// A still agent at the centre of a surface of side `extent`, facing
    /// right.
    pub fn spawn(extent: f32, speed: Speed) -> Self {
        Self {
            position:     Point::center(extent),
            size:         extent / GameConfig::AGENT_SIZE_DIVISOR,
            speed:        speed.step(),
            direction:    Direction::default(),
            motion_phase: 0.0,
            is_moving:    false,
        }
    }

    /// Face `direction` and start moving.
    #[inline]
    pub fn steer(&mut self, direction: Direction) {
        self.direction = direction;
        self.is_moving = true;
    }

    /// Stop moving; facing is kept.
    #[inline]
    pub fn halt(&mut self) {
        self.is_moving = false;
    }

    #[inline]
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed.step();
    }

    /// Map the agent from a surface of side `from` to one of side `to`.
    /// Size is re-derived from the new extent.
    pub fn rescale(&mut self, from: f32, to: f32) {
        self.position = self.position.rescaled(from, to);
        self.size = to / GameConfig::AGENT_SIZE_DIVISOR;
    }

    /// Current mouth half-opening, in radians.
    #[inline]
    pub fn mouth_opening(&self) -> f32 {
        self.motion_phase.sin() * MOUTH_OPENING
    }

    /// `(start, end)` angles of the sprite wedge: the full circle rotated to
    /// `direction`, minus the mouth.
    pub fn wedge_angles(&self) -> (f32, f32) {
        let base = self.direction.angle();
        let mouth = self.mouth_opening();
        (base + mouth, base + TAU - mouth)
    }
}
