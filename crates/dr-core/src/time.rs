//! Frame-based time model.
//!
//! # Design
//!
//! The simulation advances exactly one tick per rendered frame, so the
//! canonical time unit is a monotonically increasing `Frame` counter.  There
//! is no wall-clock mapping: agent speed is expressed in pixels per frame,
//! which keeps the update deterministic regardless of the host's refresh
//! rate.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Counts frames since the session was built.
///
/// The clock keeps running across pause and restart; it measures scheduler
/// activity, not play time.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// The frame about to be processed.
    pub current_frame: Frame,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_frame = Frame(self.current_frame.0 + 1);
    }

    #[inline]
    pub fn current(&self) -> Frame {
        self.current_frame
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_frame)
    }
}
