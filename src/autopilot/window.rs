//! Approach windows and the movement-time budget derived from them.

use crate::tuning::AutopilotTuning;

/// The time interval within which the cursor must arrive at the next
/// object, offset for natural movement.
///
/// Derived fresh every frame from the tracked object; it has no identity
/// beyond the current frame. `start <= end` is not guaranteed when the
/// offsets are large relative to the tolerance window, which is why
/// [`ApproachWindow::movement_budget`] floors its result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachWindow {
    /// Window opening time in milliseconds.
    pub start: f64,
    /// Window closing time in milliseconds.
    pub end: f64,
}

impl ApproachWindow {
    /// Build the window around an object's start time from its most lenient
    /// tolerance half-width.
    #[must_use]
    pub const fn around(start_time: f64, meh_window: f64, tuning: &AutopilotTuning) -> Self {
        Self {
            start: start_time - meh_window - tuning.entry_offset,
            end: start_time + meh_window - tuning.exit_offset,
        }
    }

    /// How many milliseconds of movement to plan from `anchor_time`.
    ///
    /// Inside the window the budget sweeps from `entry_offset` down to 1 as
    /// the anchor advances through it, fast enough that the movement cannot
    /// itself register as a tap but slow enough not to read as a teleport.
    /// Clamp order: scale, then min with the time remaining to the window
    /// end, then floor at 1. Before the window, the budget is the time until
    /// the window opens. A zero, inverted, or non-finite window width skips
    /// the scale term.
    #[must_use]
    pub fn movement_budget(&self, anchor_time: f64, tuning: &AutopilotTuning) -> f64 {
        let width = self.end - self.start;
        let scale = if width.is_finite() && width > 0.0 {
            ((self.end - anchor_time) / width).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let scaled = 1.0 + scale * (tuning.entry_offset - 1.0);
        // Never plan to arrive after the window closes.
        let scaled = scaled.min(self.end - anchor_time);

        let time_left = if anchor_time >= self.start {
            scaled
        } else {
            self.start - anchor_time
        };

        time_left.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> AutopilotTuning {
        AutopilotTuning::default()
    }

    #[test]
    fn window_offsets_from_start_time() {
        let window = ApproachWindow::around(1000.0, 80.0, &tuning());
        assert!((window.start - 880.0).abs() < f64::EPSILON);
        assert!((window.end - 1075.0).abs() < f64::EPSILON);
    }

    #[test]
    fn budget_before_window_is_time_until_open() {
        let window = ApproachWindow::around(1000.0, 80.0, &tuning());
        assert!((window.movement_budget(800.0, &tuning()) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn budget_sweeps_from_entry_offset_to_floor() {
        let window = ApproachWindow::around(1000.0, 80.0, &tuning());
        // Exactly at the window start the scale is 1, so the full entry
        // offset is available (the window is wide enough not to clamp it).
        assert!((window.movement_budget(880.0, &tuning()) - 40.0).abs() < f64::EPSILON);
        // At the window end the budget has decayed to the floor.
        assert!((window.movement_budget(1075.0, &tuning()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn budget_never_exceeds_window_remaining() {
        // A narrow window: halfway through, the scaled value (20.5) exceeds
        // the 5 ms remaining, so the remaining time wins.
        let window = ApproachWindow {
            start: 990.0,
            end: 1000.0,
        };
        let budget = window.movement_budget(995.0, &tuning());
        assert!((budget - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn budget_floor_holds_for_degenerate_windows() {
        let zero_width = ApproachWindow {
            start: 1000.0,
            end: 1000.0,
        };
        assert!((zero_width.movement_budget(1000.0, &tuning()) - 1.0).abs() < f64::EPSILON);
        assert!((zero_width.movement_budget(2000.0, &tuning()) - 1.0).abs() < f64::EPSILON);

        let inverted = ApproachWindow {
            start: 1000.0,
            end: 900.0,
        };
        assert!(inverted.movement_budget(1500.0, &tuning()) >= 1.0);
        // Anchor before an inverted window still gets the time-until-open.
        assert!((inverted.movement_budget(400.0, &tuning()) - 600.0).abs() < f64::EPSILON);
    }
}
