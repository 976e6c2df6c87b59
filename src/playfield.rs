//! The playfield seam between the host ruleset and the mods.
//!
//! The host implements [`Playfield`]; both mods implement
//! [`PlayfieldUpdate`] and are driven once per rendered frame. Judgements
//! reach the mods as a queue drained at the top of each update rather than
//! as callbacks, which keeps ordering deterministic and the crate
//! single-threaded.

use crate::field::{FieldBounds, FieldTransform, FrameClock, Position};
use crate::object::{DrawableObject, ObjectId};

/// A judged-object notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Judgement {
    /// The judged object.
    pub target: ObjectId,
    /// Absolute judgement time in milliseconds.
    pub time: f64,
}

impl Judgement {
    /// Create a judgement record.
    #[must_use]
    pub const fn new(target: ObjectId, time: f64) -> Self {
        Self { target, time }
    }
}

/// Host-side playfield interface consumed by the mods.
///
/// `objects` must be order-stable across a frame; the set membership is the
/// host's object lifecycle decision. All mutation of shared state happens
/// inside the single per-frame update call, so implementations need no
/// internal synchronization.
pub trait Playfield {
    /// Clock snapshot for the current frame.
    fn clock(&self) -> FrameClock;

    /// Screen-to-field coordinate transform for the current frame.
    fn transform(&self) -> FieldTransform;

    /// The playing field rectangle.
    fn bounds(&self) -> FieldBounds;

    /// Whether an external replay is driving input this session.
    fn replay_active(&self) -> bool;

    /// The cursor's current screen-space position.
    fn cursor_screen_position(&self) -> Position;

    /// Currently visible objects.
    fn objects(&self) -> &[DrawableObject];

    /// Currently visible objects, mutable.
    fn objects_mut(&mut self) -> &mut [DrawableObject];

    /// Take all judgements raised since the previous drain, in judgement
    /// order.
    fn drain_judgements(&mut self) -> Vec<Judgement>;

    /// Issue an absolute pointer-position command, in screen space.
    fn command_cursor(&mut self, screen: Position);

    /// Enable or disable user-initiated cursor movement.
    fn set_user_cursor_control(&mut self, enabled: bool);
}

/// Per-frame update contract, invoked once per rendered frame by the host.
pub trait PlayfieldUpdate<P: Playfield> {
    /// Advance this component by one frame against the given playfield.
    fn update(&mut self, playfield: &mut P);
}
