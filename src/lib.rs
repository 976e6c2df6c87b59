//! Automated playfield mods for rhythm game rulesets.
//!
//! Two independent per-frame components share a single [`playfield`]
//! abstraction supplied by the host:
//!
//! - [`autopilot::AutopilotController`] — computes one absolute cursor
//!   position per frame, reaching each target by the moment it must be
//!   judged without ever exactly matching human input precision.
//! - [`gravity::BoundedGravityField`] — moves visible circles under
//!   constant gravity with inelastic wall collisions.
//!
//! Both implement [`playfield::PlayfieldUpdate`] and are driven once per
//! rendered frame. Everything is single-threaded and frame-synchronous;
//! judgement notifications arrive through a queue drained at the top of
//! each controller update.
//!
//! # Example
//!
//! ```
//! use autopilot_rs::prelude::*;
//! use autopilot_rs::test_helpers::{TestPlayfield, circle};
//!
//! let mut playfield = TestPlayfield::new(FieldBounds::new(512.0, 384.0));
//! playfield.add_object(circle(0, 1000.0, Position::new(256.0, 192.0)), 400.0);
//!
//! let mut controller = AutopilotController::attach(&mut playfield);
//! playfield.set_clock(950.0, 16.0, 1.0);
//! controller.update(&mut playfield);
//! assert!(playfield.last_command().is_some());
//! ```

pub mod autopilot;
pub mod field;
pub mod gravity;
pub mod object;
pub mod playfield;
pub mod test_helpers;
pub mod tuning;

/// Re-exports of commonly used types and traits, allowing users to import
/// all needed items in one go.
pub mod prelude {
    pub use crate::autopilot::AutopilotController;
    pub use crate::field::{FieldBounds, FieldTransform, FrameClock, Position};
    pub use crate::gravity::BoundedGravityField;
    pub use crate::object::{
        DrawableObject, HitObject, HitObjectKind, HitResult, HitWindows, ObjectId,
        RotationTracker, SliderPath,
    };
    pub use crate::playfield::{Judgement, Playfield, PlayfieldUpdate};
    pub use crate::tuning::{AutopilotTuning, GravityTuning, TuningError};
}
