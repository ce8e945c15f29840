//! A single collectible.

use dr_core::Point;

/// A collectible point.  Immutable once laid out.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub position: Point,
}

impl Token {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: Point::new(x, y) }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}
