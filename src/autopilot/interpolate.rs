//! Budgeted linear interpolation toward a target.

use super::anchor::Anchor;
use crate::field::Position;

/// Interpolate from the anchor toward `target`, planning to arrive
/// `budget_ms` after the anchor time.
///
/// The interpolation fraction is `(current_time - anchor.time) / budget_ms`
/// clamped to `[0, 1]`, so the result never overshoots the anchor→target
/// segment. Once the fraction reaches 1, or the travelled distance meets the
/// anchor→target distance (tiny budgets relative to the frame rate), the
/// result snaps exactly to the target. A non-positive budget snaps
/// immediately.
#[must_use]
pub fn move_towards(anchor: &Anchor, target: Position, budget_ms: f64, current_time: f64) -> Position {
    let elapsed = current_time - anchor.time();
    let fraction = if budget_ms > 0.0 {
        (elapsed / budget_ms).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let next = anchor.position().lerp(target, fraction as f32);

    let travelled = anchor.position().distance(next);
    let span = anchor.position().distance(target);
    if fraction >= 1.0 || travelled >= span {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fraction_is_clamped_to_segment() {
        let anchor = Anchor::new(Position::ZERO, 1000.0);
        let target = Position::new(100.0, 0.0);

        // Before the anchor time: stays at the anchor.
        assert_eq!(move_towards(&anchor, target, 50.0, 900.0), Position::ZERO);
        // Far past the budget: snaps to the target, never beyond.
        assert_eq!(move_towards(&anchor, target, 50.0, 9000.0), target);
    }

    #[test]
    fn interpolates_proportionally() {
        let anchor = Anchor::new(Position::ZERO, 1000.0);
        let target = Position::new(100.0, 50.0);
        let at_40_percent = move_towards(&anchor, target, 100.0, 1040.0);
        assert_eq!(at_40_percent, Position::new(40.0, 20.0));
    }

    #[test]
    fn snaps_exactly_at_full_fraction() {
        let anchor = Anchor::new(Position::new(3.0, 7.0), 0.0);
        let target = Position::new(13.0, 27.0);
        assert_eq!(move_towards(&anchor, target, 10.0, 10.0), target);
    }

    #[test]
    fn degenerate_budget_snaps() {
        let anchor = Anchor::new(Position::ZERO, 1000.0);
        let target = Position::new(5.0, 5.0);
        assert_eq!(move_towards(&anchor, target, 0.0, 1000.0), target);
    }
}
