//! Automated cursor control.
//!
//! [`AutopilotController`] computes one absolute cursor position per frame,
//! smoothly reaching each target by the moment it must be judged. Movement
//! always originates from the [`anchor::Anchor`]: the point where the
//! previous object was actually resolved, not wherever the simulated cursor
//! happened to be.

pub mod anchor;
pub mod interpolate;
pub mod slider;
pub mod spinner;
pub mod window;

use log::{debug, trace};

use self::anchor::Anchor;
use self::window::ApproachWindow;
use crate::field::Position;
use crate::object::{DrawableObject, HitObjectKind};
use crate::playfield::{Judgement, Playfield, PlayfieldUpdate};
use crate::tuning::AutopilotTuning;

/// The per-frame cursor automation controller.
///
/// Attach it to a playfield once loading has completed, then drive it
/// through [`PlayfieldUpdate::update`] once per rendered frame.
#[derive(Debug)]
pub struct AutopilotController {
    tuning: AutopilotTuning,
    anchor: Anchor,
}

/// One frame's dispatch decision, resolved from the next object's kind
/// before any playfield mutation happens.
enum Dispatch {
    /// Steer to or around a spinner.
    Spinner {
        duration: f64,
        spins_required: u32,
        max_bonus_spins: u32,
        centre: Position,
    },
    /// Track a slider body; `None` while outside its traversal interval.
    Follow(Option<Position>),
    /// Budgeted interpolation toward a target (circles, unjudged slider
    /// heads, anything else).
    Approach(Position),
}

impl AutopilotController {
    /// Attach to a playfield with default tuning.
    ///
    /// Disables user cursor control and captures the cursor's current field
    /// position as the initial movement anchor.
    #[must_use]
    pub fn attach<P: Playfield>(playfield: &mut P) -> Self {
        Self::attach_with_tuning(playfield, AutopilotTuning::default())
    }

    /// Attach to a playfield with explicit tuning.
    #[must_use]
    pub fn attach_with_tuning<P: Playfield>(playfield: &mut P, tuning: AutopilotTuning) -> Self {
        playfield.set_user_cursor_control(false);
        let clock = playfield.clock();
        let cursor = playfield
            .transform()
            .to_field(playfield.cursor_screen_position());
        debug!(
            "autopilot attached at ({:.1}, {:.1}), t={:.1}ms",
            cursor.x, cursor.y, clock.current_time
        );
        Self {
            tuning,
            anchor: Anchor::new(cursor, clock.current_time),
        }
    }

    /// The current movement anchor.
    #[must_use]
    pub const fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    /// The active tuning constants.
    #[must_use]
    pub const fn tuning(&self) -> &AutopilotTuning {
        &self.tuning
    }

    fn consume_judgements<P: Playfield>(&mut self, playfield: &mut P) {
        for judgement in playfield.drain_judgements() {
            self.apply_judgement(playfield, judgement);
        }
    }

    /// Recompute the anchor from a judged object.
    ///
    /// The baseline is the cursor's live field position; sliders override it
    /// with the path endpoint (even repeat counts finish at the tail) or the
    /// head position (odd counts finish back at the head).
    fn apply_judgement<P: Playfield>(&mut self, playfield: &P, judgement: Judgement) {
        let mut position = playfield
            .transform()
            .to_field(playfield.cursor_screen_position());

        if let Some(drawable) = playfield
            .objects()
            .iter()
            .find(|drawable| drawable.id() == judgement.target)
            && let HitObjectKind::Slider {
                path, repeat_count, ..
            } = &drawable.object.kind
        {
            position = if repeat_count % 2 == 0 {
                drawable.position + path.end_position() * drawable.object.scale
            } else {
                drawable.object.position
            };
        }

        trace!(
            "anchor reset to ({:.1}, {:.1}) at t={:.1}ms",
            position.x, position.y, judgement.time
        );
        self.anchor.reset(position, judgement.time);
    }

    fn command<P: Playfield>(playfield: &mut P, field_position: Position) {
        let screen = playfield.transform().to_screen(field_position);
        playfield.command_cursor(screen);
    }
}

/// Index of the next unjudged object in start-time order, ties broken by
/// container order.
fn next_unjudged(objects: &[DrawableObject]) -> Option<usize> {
    objects
        .iter()
        .enumerate()
        .filter(|(_, drawable)| !drawable.judged)
        .min_by(|(left_index, left), (right_index, right)| {
            left.object
                .start_time
                .total_cmp(&right.object.start_time)
                .then(left_index.cmp(right_index))
        })
        .map(|(index, _)| index)
}

impl<P: Playfield> PlayfieldUpdate<P> for AutopilotController {
    fn update(&mut self, playfield: &mut P) {
        self.consume_judgements(playfield);

        let clock = playfield.clock();
        let Some(index) = next_unjudged(playfield.objects()) else {
            return;
        };

        let next = &playfield.objects()[index];
        let start = next.object.start_time;
        let elapsed = clock.current_time - start;

        // An external replay already supplies input; only keep spinners
        // turning, without moving the cursor.
        if playfield.replay_active() {
            if let HitObjectKind::Spinner {
                duration,
                spins_required,
                max_bonus_spins,
            } = next.object.kind
            {
                let rate = spinner::spin_rate(
                    spins_required,
                    max_bonus_spins,
                    duration,
                    clock.rate,
                    self.tuning.spin_overshoot,
                );
                let drawable = &mut playfield.objects_mut()[index];
                drawable.handle_user_input = false;
                // Don't start spinning until the start time is reached.
                if elapsed >= 0.0 {
                    drawable
                        .rotation
                        .add_rotation(spinner::rotation_increment(clock.elapsed_frame_time, rate));
                }
            }
            return;
        }

        let meh_window = next.object.meh_window();
        let window = ApproachWindow::around(start, meh_window, &self.tuning);

        // If the object only became visible after the anchor time, move the
        // anchor forward so interpolation doesn't span time the object
        // wasn't on screen.
        self.anchor.advance_time_to(next.lifetime_start);

        let dispatch = match &next.object.kind {
            HitObjectKind::Spinner {
                duration,
                spins_required,
                max_bonus_spins,
            } => Dispatch::Spinner {
                duration: *duration,
                spins_required: *spins_required,
                max_bonus_spins: *max_bonus_spins,
                centre: next.position,
            },
            HitObjectKind::Slider {
                path,
                repeat_count,
                duration,
            } if next.head_judged => {
                let within = elapsed + meh_window >= 0.0 && elapsed < *duration;
                Dispatch::Follow(within.then(|| {
                    slider::follow_position(
                        next.position,
                        path,
                        next.object.scale,
                        *repeat_count,
                        *duration,
                        elapsed,
                    )
                }))
            }
            // A slider behaves like a circle until its head is judged.
            _ => Dispatch::Approach(next.position),
        };

        match dispatch {
            Dispatch::Spinner {
                duration,
                spins_required,
                max_bonus_spins,
                centre,
            } => {
                playfield.objects_mut()[index].handle_user_input = false;

                if elapsed < 0.0 {
                    // Move to the fixed angle-0 rim point before the spin
                    // starts.
                    let target = spinner::rim_position(centre, 0.0, self.tuning.spinner_radius);
                    let budget = window.movement_budget(self.anchor.time(), &self.tuning);
                    let position =
                        interpolate::move_towards(&self.anchor, target, budget, clock.current_time);
                    Self::command(playfield, position);
                } else {
                    let rate = spinner::spin_rate(
                        spins_required,
                        max_bonus_spins,
                        duration,
                        clock.rate,
                        self.tuning.spin_overshoot,
                    );
                    playfield.objects_mut()[index]
                        .rotation
                        .add_rotation(spinner::rotation_increment(clock.elapsed_frame_time, rate));

                    let angle = spinner::spin_angle(elapsed, rate);
                    let position = spinner::rim_position(centre, angle, self.tuning.spinner_radius);
                    Self::command(playfield, position);
                }
            }
            Dispatch::Follow(Some(position)) => Self::command(playfield, position),
            Dispatch::Follow(None) => {}
            Dispatch::Approach(target) => {
                let budget = window.movement_budget(self.anchor.time(), &self.tuning);
                let position =
                    interpolate::move_towards(&self.anchor, target, budget, clock.current_time);
                Self::command(playfield, position);
            }
        }
    }
}
