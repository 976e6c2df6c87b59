//! Hit-result tolerance windows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hit-result tiers, ordered from strictest to most lenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitResult {
    /// The strictest tier.
    Great,
    /// The middle tier.
    Ok,
    /// The most lenient tier; its window is the widest acceptable
    /// interaction interval.
    Meh,
}

/// Symmetric tolerance windows around an object's start time, per tier,
/// in milliseconds.
///
/// For sliders these are the head circle's windows; the slider body itself
/// has no windows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HitWindows {
    great: f64,
    ok: f64,
    meh: f64,
}

impl HitWindows {
    /// Create windows from per-tier half-widths.
    #[must_use]
    pub const fn new(great: f64, ok: f64, meh: f64) -> Self {
        Self { great, ok, meh }
    }

    /// The half-width of the window for the given tier.
    #[must_use]
    pub const fn window_for(&self, result: HitResult) -> f64 {
        match result {
            HitResult::Great => self.great,
            HitResult::Ok => self.ok,
            HitResult::Meh => self.meh,
        }
    }
}

impl Default for HitWindows {
    /// Windows of the ruleset's middling difficulty setting.
    fn default() -> Self {
        Self::new(50.0, 100.0, 150.0)
    }
}
