//! Test helpers for driving the mods in integration tests.
//!
//! These are provided for testing purposes only: an in-memory
//! [`Playfield`] implementation plus builders for the model objects, so
//! test code can script frames without a host engine.

use crate::field::{FieldBounds, FieldTransform, FrameClock, Position};
use crate::object::{
    DrawableObject, HitObject, HitObjectKind, HitWindows, ObjectId, SliderPath,
};
use crate::playfield::{Judgement, Playfield};

/// Creates a circle object for testing purposes.
#[must_use]
pub fn circle(id: usize, start_time: f64, position: Position) -> HitObject {
    HitObject {
        id: ObjectId::new(id),
        start_time,
        position,
        scale: 1.0,
        radius: 32.0,
        windows: HitWindows::default(),
        kind: HitObjectKind::Circle,
    }
}

/// Creates a slider object for testing purposes. Path points are relative
/// to `position`.
#[must_use]
pub fn slider(
    id: usize,
    start_time: f64,
    position: Position,
    path_points: Vec<Position>,
    repeat_count: u32,
    duration: f64,
) -> HitObject {
    HitObject {
        id: ObjectId::new(id),
        start_time,
        position,
        scale: 1.0,
        radius: 32.0,
        windows: HitWindows::default(),
        kind: HitObjectKind::Slider {
            path: SliderPath::new(path_points),
            repeat_count,
            duration,
        },
    }
}

/// Creates a spinner object for testing purposes.
#[must_use]
pub fn spinner(
    id: usize,
    start_time: f64,
    position: Position,
    duration: f64,
    spins_required: u32,
    max_bonus_spins: u32,
) -> HitObject {
    HitObject {
        id: ObjectId::new(id),
        start_time,
        position,
        scale: 1.0,
        radius: 32.0,
        windows: HitWindows::default(),
        kind: HitObjectKind::Spinner {
            duration,
            spins_required,
            max_bonus_spins,
        },
    }
}

/// In-memory playfield for scripting frames in tests.
///
/// Objects become drawables immediately; visibility lifetimes default to the
/// time the object was added. Cursor commands are recorded in order.
#[derive(Debug)]
pub struct TestPlayfield {
    clock: FrameClock,
    transform: FieldTransform,
    bounds: FieldBounds,
    replay_active: bool,
    cursor_screen: Position,
    objects: Vec<DrawableObject>,
    judgements: Vec<Judgement>,
    commands: Vec<Position>,
    user_cursor_control: bool,
}

impl TestPlayfield {
    /// Create an empty playfield with an identity transform and the given
    /// bounds.
    #[must_use]
    pub const fn new(bounds: FieldBounds) -> Self {
        Self {
            clock: FrameClock::new(0.0, 0.0, 1.0),
            transform: FieldTransform::IDENTITY,
            bounds,
            replay_active: false,
            cursor_screen: Position::ZERO,
            objects: Vec::new(),
            judgements: Vec::new(),
            commands: Vec::new(),
            user_cursor_control: true,
        }
    }

    /// Use a non-identity coordinate transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: FieldTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Mark the session as replay-driven.
    #[must_use]
    pub const fn with_replay(mut self) -> Self {
        self.replay_active = true;
        self
    }

    /// Set the clock for the next frame.
    pub const fn set_clock(&mut self, current_time: f64, elapsed_frame_time: f64, rate: f64) {
        self.clock = FrameClock::new(current_time, elapsed_frame_time, rate);
    }

    /// Move the real (screen-space) cursor.
    pub const fn set_cursor(&mut self, screen: Position) {
        self.cursor_screen = screen;
    }

    /// Add an object, visible from `lifetime_start`.
    pub fn add_object(&mut self, object: HitObject, lifetime_start: f64) {
        self.objects.push(DrawableObject::new(object, lifetime_start));
    }

    /// Remove an object from visibility.
    pub fn remove_object(&mut self, id: ObjectId) {
        self.objects.retain(|drawable| drawable.id() != id);
    }

    /// Judge an object: flags the drawable and queues the notification the
    /// way the host's judging system would.
    pub fn judge(&mut self, id: ObjectId, time: f64) {
        if let Some(drawable) = self
            .objects
            .iter_mut()
            .find(|drawable| drawable.id() == id)
        {
            drawable.judged = true;
        }
        self.judgements.push(Judgement::new(id, time));
    }

    /// Judge a slider's head circle only.
    pub fn judge_slider_head(&mut self, id: ObjectId) {
        if let Some(drawable) = self
            .objects
            .iter_mut()
            .find(|drawable| drawable.id() == id)
        {
            drawable.head_judged = true;
        }
    }

    /// All cursor commands issued so far, in screen space.
    #[must_use]
    pub fn commands(&self) -> &[Position] {
        &self.commands
    }

    /// The most recent cursor command, if any.
    #[must_use]
    pub fn last_command(&self) -> Option<Position> {
        self.commands.last().copied()
    }

    /// Whether user cursor movement is currently allowed.
    #[must_use]
    pub const fn user_cursor_control(&self) -> bool {
        self.user_cursor_control
    }

    /// Direct access to a drawable by id.
    #[must_use]
    pub fn drawable(&self, id: ObjectId) -> Option<&DrawableObject> {
        self.objects.iter().find(|drawable| drawable.id() == id)
    }

    /// Direct mutable access to a drawable by id.
    pub fn drawable_mut(&mut self, id: ObjectId) -> Option<&mut DrawableObject> {
        self.objects.iter_mut().find(|drawable| drawable.id() == id)
    }
}

impl Playfield for TestPlayfield {
    fn clock(&self) -> FrameClock {
        self.clock
    }

    fn transform(&self) -> FieldTransform {
        self.transform
    }

    fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    fn replay_active(&self) -> bool {
        self.replay_active
    }

    fn cursor_screen_position(&self) -> Position {
        self.cursor_screen
    }

    fn objects(&self) -> &[DrawableObject] {
        &self.objects
    }

    fn objects_mut(&mut self) -> &mut [DrawableObject] {
        &mut self.objects
    }

    fn drain_judgements(&mut self) -> Vec<Judgement> {
        std::mem::take(&mut self.judgements)
    }

    fn command_cursor(&mut self, screen: Position) {
        self.commands.push(screen);
    }

    fn set_user_cursor_control(&mut self, enabled: bool) {
        self.user_cursor_control = enabled;
    }
}
