//! Geometry and clock primitives shared by playfield mods.
//!
//! All positions are plain 2D vectors; whether a value is in *screen space*
//! or *field space* is a matter of which side of a [`FieldTransform`] it sits
//! on. Times are `f64` milliseconds on the playfield's own clock.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point or vector, in screen or field units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Position {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a position from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation from `self` toward `target`.
    ///
    /// `fraction` is used as given; callers clamp it to `[0, 1]` themselves
    /// when overshoot must be excluded.
    #[must_use]
    pub fn lerp(self, target: Self, fraction: f32) -> Self {
        Self {
            x: self.x + (target.x - self.x) * fraction,
            y: self.y + (target.y - self.y) * fraction,
        }
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Position {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Per-frame clock snapshot provided by the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Current time in milliseconds.
    pub current_time: f64,
    /// Time elapsed since the previous rendered frame, in milliseconds.
    pub elapsed_frame_time: f64,
    /// Playback rate multiplier (1.0 = realtime).
    pub rate: f64,
}

impl FrameClock {
    /// Create a clock snapshot.
    #[must_use]
    pub const fn new(current_time: f64, elapsed_frame_time: f64, rate: f64) -> Self {
        Self {
            current_time,
            elapsed_frame_time,
            rate,
        }
    }
}

/// Uniform scale-and-offset transform between screen space and field space.
///
/// `screen = field * scale + offset`. The scale must be non-zero; the host
/// owns the real transform and supplies this snapshot per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldTransform {
    /// Field-to-screen scale factor.
    pub scale: f32,
    /// Screen-space position of the field origin.
    pub offset: Position,
}

impl FieldTransform {
    /// The identity transform (screen space == field space).
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Position::ZERO,
    };

    /// Create a transform from scale and origin offset.
    #[must_use]
    pub const fn new(scale: f32, offset: Position) -> Self {
        Self { scale, offset }
    }

    /// Map a field-space position to screen space.
    #[must_use]
    pub fn to_screen(&self, field: Position) -> Position {
        field * self.scale + self.offset
    }

    /// Map a screen-space position to field space.
    #[must_use]
    pub fn to_field(&self, screen: Position) -> Position {
        (screen - self.offset) * (1.0 / self.scale)
    }
}

impl Default for FieldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The playing field rectangle, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldBounds {
    /// Field width in field units.
    pub width: f32,
    /// Field height in field units.
    pub height: f32,
}

impl FieldBounds {
    /// Create bounds from width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lerp_endpoints() {
        let a = Position::new(10.0, 20.0);
        let b = Position::new(30.0, -20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Position::new(20.0, 0.0));
    }

    #[test]
    fn transform_round_trip() {
        let transform = FieldTransform::new(2.0, Position::new(64.0, 48.0));
        let field = Position::new(256.0, 192.0);
        let screen = transform.to_screen(field);
        assert_eq!(screen, Position::new(576.0, 432.0));
        assert_eq!(transform.to_field(screen), field);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }
}
