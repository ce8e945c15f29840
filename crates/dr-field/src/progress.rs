//! Consumption progress.

/// How much of the field has been consumed.
///
/// `initial` is the denominator snapshotted at the last (re)generation, so
/// `consumed <= initial` always holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub consumed: usize,
    pub initial:  usize,
}

impl Progress {
    /// Consumed share in percent, in `[0, 100]`.
    ///
    /// An empty denominator reads as 0 %.  The value is exact (not rounded),
    /// so it is zero precisely when nothing has been consumed; use
    /// [`Display`](std::fmt::Display) for the one-decimal form.
    pub fn percent(&self) -> f64 {
        if self.initial == 0 {
            return 0.0;
        }
        (self.consumed as f64 / self.initial as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// `true` once every token counted in `initial` is gone.
    pub fn is_complete(&self) -> bool {
        self.initial > 0 && self.consumed >= self.initial
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}% ({}/{})", self.percent(), self.consumed, self.initial)
    }
}
