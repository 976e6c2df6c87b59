//! Hit-object model.
//!
//! Objects are described by a tagged [`HitObjectKind`] rather than an open
//! type hierarchy; per-play mutable state lives in [`DrawableObject`], which
//! wraps the immutable [`HitObject`] the same way the host's drawables wrap
//! chart data.

pub mod hit_windows;
pub mod path;
pub mod spin;

use crate::field::Position;

pub use hit_windows::{HitResult, HitWindows};
pub use path::SliderPath;
pub use spin::RotationTracker;

/// Identifier type which is unique over all objects of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// Create a new `ObjectId`.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the internal usize value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for ObjectId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Type-specific data of a hit object.
#[derive(Debug, Clone, PartialEq)]
pub enum HitObjectKind {
    /// A single tap target.
    Circle,
    /// A path-following target, judged at its head and then traversed for
    /// `duration` milliseconds across `repeat_count + 1` spans.
    Slider {
        /// The path, relative to the object position.
        path: SliderPath,
        /// Number of back-and-forth repeats after the first span.
        repeat_count: u32,
        /// Total traversal duration in milliseconds.
        duration: f64,
    },
    /// A sustained-rotation target.
    Spinner {
        /// Spin duration in milliseconds.
        duration: f64,
        /// Full rotations required before bonus spins start counting.
        spins_required: u32,
        /// Maximum number of bonus spins on top of the required ones.
        max_bonus_spins: u32,
    },
}

/// An immutable hit object as laid out by the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HitObject {
    /// Unique object identifier.
    pub id: ObjectId,
    /// Nominal hit time in milliseconds.
    pub start_time: f64,
    /// Field-space position of the object (head position for sliders,
    /// centre for spinners).
    pub position: Position,
    /// Drawable scale factor applied to path offsets.
    pub scale: f32,
    /// Drawable radius in field units.
    pub radius: f32,
    /// Tolerance windows of the relevant hittable component (the head
    /// circle for sliders).
    pub windows: HitWindows,
    /// Type-specific data.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// The most lenient tolerance half-width, in milliseconds.
    #[must_use]
    pub const fn meh_window(&self) -> f64 {
        self.windows.window_for(HitResult::Meh)
    }
}

/// Per-play state of a visible object.
///
/// The judging system owns the `judged` flags; the mods only read them,
/// except for `handle_user_input` and `rotation` which the cursor controller
/// drives for spinners, and `position` which the gravity field displaces.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableObject {
    /// The underlying chart object.
    pub object: HitObject,
    /// Current field-space position of the drawable. Starts at the object's
    /// chart position; mods may displace it.
    pub position: Position,
    /// Whether the object has received its final judgement.
    pub judged: bool,
    /// Whether a slider's head circle has been judged. Always `false` for
    /// other kinds.
    pub head_judged: bool,
    /// Time at which the drawable became visible, in milliseconds.
    pub lifetime_start: f64,
    /// Whether the drawable still reacts to user input.
    pub handle_user_input: bool,
    /// Accumulated spinner rotation. Unused for other kinds.
    pub rotation: RotationTracker,
}

impl DrawableObject {
    /// Wrap a chart object with fresh play state, visible from
    /// `lifetime_start` milliseconds.
    #[must_use]
    pub const fn new(object: HitObject, lifetime_start: f64) -> Self {
        let position = object.position;
        Self {
            object,
            position,
            judged: false,
            head_judged: false,
            lifetime_start,
            handle_user_input: true,
            rotation: RotationTracker::new(),
        }
    }

    /// Object identifier shorthand.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.object.id
    }

    /// Whether the underlying object is a circle.
    #[must_use]
    pub const fn is_circle(&self) -> bool {
        matches!(self.object.kind, HitObjectKind::Circle)
    }
}
