//! Slider-following trajectory generation.

use crate::field::Position;
use crate::object::SliderPath;

/// Fold normalized progress `[0, 1]` over a slider's full traversal into a
/// path fraction, accounting for back-and-forth repeats.
///
/// Progress maps onto `repeat_count + 1` spans; odd-numbered spans run the
/// path backwards.
#[must_use]
pub fn span_progress(progress: f64, repeat_count: u32) -> f64 {
    let spans = progress.clamp(0.0, 1.0) * f64::from(repeat_count + 1);
    if spans > 1.0 && spans % 2.0 > 1.0 {
        1.0 - spans % 1.0
    } else {
        spans % 1.0
    }
}

/// Field-space cursor position while following a slider.
///
/// `elapsed` is time since the slider's start; the path supplies continuity,
/// so no budgeted smoothing applies here. Zero or negative durations pin the
/// cursor to the slider origin.
#[must_use]
pub fn follow_position(
    origin: Position,
    path: &SliderPath,
    scale: f32,
    repeat_count: u32,
    duration: f64,
    elapsed: f64,
) -> Position {
    let progress = if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };
    origin + path.position_at(span_progress(progress, repeat_count)) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_repeats_is_identity() {
        for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!((span_progress(p, 0) - p).abs() < 1e-12);
        }
    }

    #[test]
    fn one_repeat_reflects_back() {
        // At three quarters of a single-repeat slider the cursor is halfway
        // back along the path.
        assert!((span_progress(0.75, 1) - 0.5).abs() < 1e-12);
        // Still outbound at one quarter.
        assert!((span_progress(0.25, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn two_repeats_fold_forward_again() {
        // Three spans: [0, 1/3) out, [1/3, 2/3) back, [2/3, 1] out.
        assert!((span_progress(0.5, 2) - 0.5).abs() < 1e-12);
        assert!(span_progress(0.9, 2) > span_progress(0.8, 2));
    }

    #[test]
    fn follow_scales_path_offsets() {
        let path = SliderPath::new(vec![Position::ZERO, Position::new(100.0, 0.0)]);
        let origin = Position::new(50.0, 50.0);
        let half_way = follow_position(origin, &path, 0.5, 0, 1000.0, 500.0);
        assert_eq!(half_way, Position::new(75.0, 50.0));
    }

    #[test]
    fn zero_duration_pins_to_origin() {
        let path = SliderPath::new(vec![Position::ZERO, Position::new(100.0, 0.0)]);
        let origin = Position::new(50.0, 50.0);
        assert_eq!(
            follow_position(origin, &path, 1.0, 0, 0.0, 250.0),
            origin
        );
    }
}
