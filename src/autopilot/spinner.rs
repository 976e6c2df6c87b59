//! Spinner trajectory generation.
//!
//! A spinner produces two independent outputs that must stay mutually
//! consistent: the rotation accumulator (judging progress) advanced in
//! degrees per frame, and the cursor's circular display position at the
//! current elapsed angle.

use crate::field::Position;

/// Rotations per millisecond needed to clear all required and bonus spins
/// over the spinner's duration, normalized by clock playback rate.
///
/// Zero or negative durations and rates yield a zero rate rather than a
/// non-finite one.
#[must_use]
pub fn spin_rate(
    spins_required: u32,
    max_bonus_spins: u32,
    duration: f64,
    clock_rate: f64,
    overshoot: f64,
) -> f64 {
    if duration <= 0.0 || clock_rate <= 0.0 {
        return 0.0;
    }
    overshoot * f64::from(max_bonus_spins + spins_required) / duration / clock_rate
}

/// Rotation-accumulator increment for one frame, in degrees.
#[must_use]
pub fn rotation_increment(elapsed_frame_ms: f64, rate: f64) -> f64 {
    (elapsed_frame_ms * rate * std::f64::consts::TAU).to_degrees()
}

/// Cursor position on the spin circle at `angle` radians around `centre`.
///
/// Angle 0 is the fixed pre-spin target directly above the centre.
#[must_use]
pub fn rim_position(centre: Position, angle: f64, radius: f32) -> Position {
    centre + Position::new(-(angle.sin() as f32) * radius, -(angle.cos() as f32) * radius)
}

/// The display angle in radians after `elapsed` milliseconds of spinning at
/// `rate` rotations per millisecond.
#[must_use]
pub fn spin_angle(elapsed: f64, rate: f64) -> f64 {
    std::f64::consts::TAU * elapsed * rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_gains_360_degrees_per_rotation() {
        // Over elapsed time dt at constant rate r, accumulated rotation is
        // exactly dt * r * 360 degrees.
        let rate = 0.004; // rotations per ms
        let dt = 250.0;
        let increment = rotation_increment(dt, rate);
        assert!((increment - dt * rate * 360.0).abs() < 1e-9);
    }

    #[test]
    fn rate_clears_all_spins_with_overshoot() {
        let rate = spin_rate(10, 5, 3000.0, 1.0, 1.01);
        assert!((rate - 1.01 * 15.0 / 3000.0).abs() < 1e-12);
        // Doubled playback rate halves the per-clock-ms rate.
        let doubled = spin_rate(10, 5, 3000.0, 2.0, 1.01);
        assert!((doubled - rate / 2.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_duration_or_rate_yields_zero() {
        assert_eq!(spin_rate(10, 5, 0.0, 1.0, 1.01), 0.0);
        assert_eq!(spin_rate(10, 5, 3000.0, 0.0, 1.01), 0.0);
    }

    #[test]
    fn rim_angle_zero_is_above_centre() {
        let centre = Position::new(256.0, 192.0);
        let rim = rim_position(centre, 0.0, 50.0);
        assert!((rim.x - 256.0).abs() < 1e-6);
        assert!((rim.y - 142.0).abs() < 1e-6);
    }

    #[test]
    fn rim_stays_on_radius() {
        let centre = Position::new(100.0, 100.0);
        for step in 0..8 {
            let angle = f64::from(step) * std::f64::consts::FRAC_PI_4;
            let rim = rim_position(centre, angle, 50.0);
            assert!((centre.distance(rim) - 50.0).abs() < 1e-3);
        }
    }
}
