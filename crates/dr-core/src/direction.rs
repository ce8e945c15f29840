//! Travel direction shared by the agent, the normalizer, and the renderer.
//!
//! The discriminants are part of the rendering contract: the agent sprite's
//! wedge is rotated by `index * π/2`, so Right must be 0 and the order must
//! follow the clockwise screen rotation (y grows downward).

use std::f32::consts::FRAC_PI_2;

/// The direction in which the agent is travelling (or facing, when still).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// +x.  Default facing after spawn and restart.
    #[default]
    Right = 0,
    /// +y.
    Down = 1,
    /// −x.
    Left = 2,
    /// −y.
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Numeric index (Right=0, Down=1, Left=2, Up=3).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// `true` for Right and Left, which travel along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Unit step along the travel axis: `+1.0` for Right/Down, `-1.0` for
    /// Left/Up.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Right | Direction::Down => 1.0,
            Direction::Left | Direction::Up => -1.0,
        }
    }

    /// Rotation of the sprite wedge, in radians.
    #[inline]
    pub fn angle(self) -> f32 {
        self.index() as f32 * FRAC_PI_2
    }

    /// Human-readable label, used in logs and telemetry rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Up    => "up",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
