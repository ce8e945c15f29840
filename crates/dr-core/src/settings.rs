//! Player-adjustable settings: agent speed and token density.
//!
//! Both settings are sliders in the host UI.  They are stored as exact
//! integers (hundredths for speed, pixels for grid spacing) so that repeated
//! step adjustments never accumulate floating-point drift.

use crate::{CoreError, CoreResult};

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Agent speed slider value in hundredths: `Speed(2)` is `0.02`.
///
/// Valid range is `0.01..=0.10` in steps of `0.01`.  The integration step
/// applied per frame is the slider value multiplied by 10.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(1);
    pub const MAX: Speed = Speed(10);

    /// Multiplier from slider value to pixels per frame.
    pub const INTEGRATION_SCALE: f32 = 10.0;

    /// Build from hundredths, clamped into range.
    pub fn from_hundredths(h: u8) -> Self {
        Speed(h.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Build from a slider value such as `0.05`.
    pub fn from_value(value: f32) -> CoreResult<Self> {
        let h = (value * 100.0).round();
        if !(Self::MIN.0 as f32..=Self::MAX.0 as f32).contains(&h) {
            return Err(CoreError::SpeedOutOfRange(value));
        }
        Ok(Speed(h as u8))
    }

    #[inline]
    pub fn hundredths(self) -> u8 {
        self.0
    }

    /// Slider value, e.g. `0.02`.
    #[inline]
    pub fn value(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Distance travelled per frame.
    #[inline]
    pub fn step(self) -> f32 {
        self.value() * Self::INTEGRATION_SCALE
    }

    /// One slider step faster, saturating at `MAX`.
    pub fn faster(self) -> Self {
        Speed(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One slider step slower, saturating at `MIN`.
    pub fn slower(self) -> Self {
        Speed(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(2)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

// ── Density ───────────────────────────────────────────────────────────────────

/// Token grid spacing.  Smaller spacing means more tokens.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Density {
    VeryDense,
    Dense,
    #[default]
    Normal,
    Sparse,
    VerySparse,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Density::VeryDense,
        Density::Dense,
        Density::Normal,
        Density::Sparse,
        Density::VerySparse,
    ];

    /// Grid spacing in pixels.
    pub fn grid_size(self) -> u32 {
        match self {
            Density::VeryDense  => 20,
            Density::Dense      => 30,
            Density::Normal     => 40,
            Density::Sparse     => 50,
            Density::VerySparse => 60,
        }
    }

    pub fn from_grid_size(spacing: u32) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.grid_size() == spacing)
            .ok_or(CoreError::UnknownDensity(spacing))
    }

    pub fn label(self) -> &'static str {
        match self {
            Density::VeryDense  => "very dense",
            Density::Dense      => "dense",
            Density::Normal     => "normal",
            Density::Sparse     => "sparse",
            Density::VerySparse => "very sparse",
        }
    }

    /// Label for a raw slider spacing; unknown spacings read as "normal".
    pub fn label_for(spacing: u32) -> &'static str {
        Self::from_grid_size(spacing).unwrap_or_default().label()
    }

    /// Ten pixels wider spacing, saturating at `VerySparse`.
    pub fn sparser(self) -> Self {
        Self::from_grid_size(self.grid_size() + 10).unwrap_or(Density::VerySparse)
    }

    /// Ten pixels tighter spacing, saturating at `VeryDense`.
    pub fn denser(self) -> Self {
        Self::from_grid_size(self.grid_size().saturating_sub(10)).unwrap_or(Density::VeryDense)
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
