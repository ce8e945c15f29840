//! Session configuration.

use crate::{CoreError, CoreResult, Density, Speed};

/// How the cross-axis lane snap is applied during movement integration.
///
/// When the agent turns, its cross-axis coordinate is snapped to the
/// nearest grid lane.  The reference update computes a 20 % eased value and
/// then overwrites it with the raw snapped target, so the agent jumps into
/// the lane in one frame.  `Ease` keeps the eased value instead, producing a
/// continuous glide into the lane over several frames.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneSmoothing {
    /// Jump straight to the snapped lane (reference behavior).
    #[default]
    Snap,
    /// Move 20 % of the remaining cross-axis distance per frame.
    Ease,
}

/// Top-level session configuration.
///
/// Constructed by the host (or a demo binary) and handed to
/// `dr_sim::SessionBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square playing surface, in pixels.
    pub surface_extent: f32,

    /// Initial speed slider value.
    pub speed: Speed,

    /// Initial token density.
    pub density: Density,

    /// Lane snapping behavior.
    pub smoothing: LaneSmoothing,

    /// Seed for token placement.  `None` draws from OS entropy, so every
    /// layout differs.
    pub seed: Option<u64>,

    /// Report a progress snapshot to observers every N frames.  `0`
    /// disables periodic snapshots.
    pub snapshot_interval_frames: u64,
}

impl GameConfig {
    /// Agent sprite size as a fraction of the surface.
    pub const AGENT_SIZE_DIVISOR: f32 = 20.0;

    /// Agent size derived from the surface extent.
    #[inline]
    pub fn agent_size(&self) -> f32 {
        self.surface_extent / Self::AGENT_SIZE_DIVISOR
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.surface_extent.is_finite() || self.surface_extent <= 0.0 {
            return Err(CoreError::Config(format!(
                "surface extent must be positive, got {}",
                self.surface_extent
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_extent:           400.0,
            speed:                    Speed::default(),
            density:                  Density::default(),
            smoothing:                LaneSmoothing::default(),
            seed:                     None,
            snapshot_interval_frames: 60,
        }
    }
}
