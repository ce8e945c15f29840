//! Surface coordinates and grid snapping.
//!
//! The playing surface is square; `(0, 0)` is the top-left corner and `y`
//! grows downward, so "Down" means increasing `y`.  Coordinates are `f32`
//! pixels, which is ample for surfaces up to a few thousand pixels wide.

/// A position on the playing surface.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of a square surface with side `extent`.
    #[inline]
    pub fn center(extent: f32) -> Self {
        Self { x: extent / 2.0, y: extent / 2.0 }
    }

    /// Map a position on a surface of side `from` to the same relative
    /// position on a surface of side `to`.
    ///
    /// A degenerate `from` (zero or negative) leaves the point unchanged.
    pub fn rescaled(self, from: f32, to: f32) -> Self {
        if from <= 0.0 {
            return self;
        }
        Self {
            x: self.x / from * to,
            y: self.y / from * to,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Round `value` to the nearest multiple of `grid`.
///
/// Halfway values round away from zero (`f32::round`).  A non-positive
/// `grid` returns `value` unchanged.
#[inline]
pub fn snap_to_grid(value: f32, grid: f32) -> f32 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}
