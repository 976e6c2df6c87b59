//! Gravity-and-bounce physics over visible circles.

use std::collections::BTreeMap;

use log::trace;

use crate::field::Position;
use crate::object::ObjectId;
use crate::playfield::{Playfield, PlayfieldUpdate};
use crate::tuning::GravityTuning;

/// Per-frame gravity simulation for every visible circle drawable.
///
/// Velocity is integrated with gravity, positions advance by semi-implicit
/// Euler, and boundary collisions against the field rectangle are resolved
/// inelastically. The ceiling is unbounded: bodies may leave through the
/// top.
///
/// Velocity state is kept in a map keyed by stable object identifier and
/// pruned as soon as a body leaves the visible set, so the map never
/// outgrows the visible population.
#[derive(Debug, Default)]
pub struct BoundedGravityField {
    tuning: GravityTuning,
    velocities: BTreeMap<ObjectId, Position>,
}

impl BoundedGravityField {
    /// Create a field with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tuning(GravityTuning::default())
    }

    /// Create a field with explicit tuning.
    #[must_use]
    pub const fn with_tuning(tuning: GravityTuning) -> Self {
        Self {
            tuning,
            velocities: BTreeMap::new(),
        }
    }

    /// The active tuning constants.
    #[must_use]
    pub const fn tuning(&self) -> &GravityTuning {
        &self.tuning
    }

    /// Current velocity of a tracked body, if it has one.
    #[must_use]
    pub fn velocity_of(&self, id: ObjectId) -> Option<Position> {
        self.velocities.get(&id).copied()
    }

    /// Add a velocity delta to a body, creating its record if needed.
    pub fn apply_impulse(&mut self, id: ObjectId, delta: Position) {
        let velocity = self.velocities.entry(id).or_insert(Position::ZERO);
        *velocity = *velocity + delta;
    }

    /// Number of bodies currently carrying velocity state.
    #[must_use]
    pub fn tracked_bodies(&self) -> usize {
        self.velocities.len()
    }
}

impl<P: Playfield> PlayfieldUpdate<P> for BoundedGravityField {
    fn update(&mut self, playfield: &mut P) {
        let clock = playfield.clock();
        let bounds = playfield.bounds();
        let dt = (clock.elapsed_frame_time / 1000.0) as f32;
        let gravity = self.tuning.gravity;
        let restitution = self.tuning.restitution;

        for drawable in playfield
            .objects_mut()
            .iter_mut()
            .filter(|drawable| drawable.is_circle())
        {
            let velocity = self
                .velocities
                .entry(drawable.id())
                .or_insert(Position::ZERO);

            velocity.y += gravity * dt;
            drawable.position = drawable.position + *velocity * dt;

            let radius = drawable.object.radius;
            let min_x = radius;
            let max_x = bounds.width - radius;
            let max_y = bounds.height - radius;

            if drawable.position.x < min_x {
                drawable.position.x = min_x;
                velocity.x = -velocity.x * restitution;
            } else if drawable.position.x > max_x {
                drawable.position.x = max_x;
                velocity.x = -velocity.x * restitution;
            }

            if drawable.position.y > max_y {
                drawable.position.y = max_y;
                velocity.y = -velocity.y * restitution;
            }
        }

        // Drop state for bodies that left visibility.
        let before = self.velocities.len();
        let visible: std::collections::BTreeSet<ObjectId> = playfield
            .objects()
            .iter()
            .filter(|drawable| drawable.is_circle())
            .map(|drawable| drawable.id())
            .collect();
        self.velocities.retain(|id, _| visible.contains(id));
        let pruned = before - self.velocities.len();
        if pruned > 0 {
            trace!("pruned {pruned} gravity bodies no longer visible");
        }
    }
}
