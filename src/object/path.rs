//! Slider path sampling.

use itertools::Itertools;

use crate::field::Position;

/// A slider's path as a polyline, with positions relative to the slider
/// origin (the head sits at the first point, conventionally `(0, 0)`).
///
/// Sampling is distance-proportional: `position_at(0.5)` is the point half
/// the total arc length along the polyline, not the middle control point.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPath {
    points: Vec<Position>,
    cumulative: Vec<f32>,
    total_length: f32,
}

impl SliderPath {
    /// Build a path from polyline points, precomputing cumulative segment
    /// lengths for sampling.
    #[must_use]
    pub fn new(points: Vec<Position>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total_length = 0.0f32;
        if !points.is_empty() {
            cumulative.push(0.0);
        }
        for (a, b) in points.iter().tuple_windows() {
            total_length += a.distance(*b);
            cumulative.push(total_length);
        }
        Self {
            points,
            cumulative,
            total_length,
        }
    }

    /// Total arc length of the path.
    #[must_use]
    pub const fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Sample the path at a normalized fraction of its arc length.
    ///
    /// The fraction is clamped to `[0, 1]`. Degenerate paths (fewer than two
    /// points, or zero total length) sample to the first point, or the
    /// origin when empty.
    #[must_use]
    pub fn position_at(&self, fraction: f64) -> Position {
        let Some(&first) = self.points.first() else {
            return Position::ZERO;
        };
        if self.points.len() < 2 || self.total_length <= 0.0 {
            return first;
        }

        let target = self.total_length * (fraction.clamp(0.0, 1.0) as f32);
        let segment_end = self
            .cumulative
            .partition_point(|&length| length < target)
            .clamp(1, self.points.len() - 1);
        let segment_start = segment_end - 1;

        let span = self.cumulative[segment_end] - self.cumulative[segment_start];
        if span <= 0.0 {
            return self.points[segment_start];
        }
        let along = (target - self.cumulative[segment_start]) / span;
        self.points[segment_start].lerp(self.points[segment_end], along)
    }

    /// The path's endpoint, i.e. `position_at(1.0)`.
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.position_at(1.0)
    }
}
