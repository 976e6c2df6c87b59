//! Tunable constants for both mods, validated at construction.
//!
//! The frame loops themselves never fail; rejecting a non-finite or
//! out-of-range constant here is the crate's only `Result` surface.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a tuning constant is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TuningError {
    /// The value was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The value was finite but outside its allowed range.
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Name of the offending constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, TuningError> {
    if !value.is_finite() {
        return Err(TuningError::NotFinite { name, value });
    }
    if !(min..=max).contains(&value) {
        return Err(TuningError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Constants governing cursor automation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutopilotTuning {
    /// Headroom before the approach window opens, in milliseconds. Also the
    /// upper end of the scaled movement budget: entering the window late
    /// still leaves room for natural movement.
    pub entry_offset: f64,
    /// Tightening at the end of the approach window, in milliseconds.
    pub exit_offset: f64,
    /// Radius of the circle the cursor traces while spinning, in field
    /// units.
    pub spinner_radius: f32,
    /// Multiplier over the minimum spin rate that would exactly clear all
    /// required and bonus spins.
    pub spin_overshoot: f64,
}

impl AutopilotTuning {
    /// Create a validated tuning set.
    ///
    /// # Errors
    ///
    /// Returns [`TuningError`] when any constant is non-finite,
    /// `entry_offset` is below 1 ms (the movement-budget floor),
    /// `exit_offset` is negative, `spinner_radius` is not positive, or
    /// `spin_overshoot` is below 1.
    pub fn new(
        entry_offset: f64,
        exit_offset: f64,
        spinner_radius: f32,
        spin_overshoot: f64,
    ) -> Result<Self, TuningError> {
        Ok(Self {
            entry_offset: check("entry_offset", entry_offset, 1.0, f64::MAX)?,
            exit_offset: check("exit_offset", exit_offset, 0.0, f64::MAX)?,
            spinner_radius: check("spinner_radius", f64::from(spinner_radius), f64::MIN_POSITIVE, f64::MAX)?
                as f32,
            spin_overshoot: check("spin_overshoot", spin_overshoot, 1.0, f64::MAX)?,
        })
    }
}

impl Default for AutopilotTuning {
    fn default() -> Self {
        Self {
            entry_offset: 40.0,
            exit_offset: 5.0,
            spinner_radius: 50.0,
            spin_overshoot: 1.01,
        }
    }
}

/// Constants governing the gravity field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GravityTuning {
    /// Downward acceleration in field units per second squared.
    pub gravity: f32,
    /// Coefficient of restitution applied on boundary collisions.
    pub restitution: f32,
}

impl GravityTuning {
    /// Create a validated tuning set.
    ///
    /// # Errors
    ///
    /// Returns [`TuningError`] when `gravity` is negative or non-finite, or
    /// `restitution` is outside `[0, 1]`.
    pub fn new(gravity: f32, restitution: f32) -> Result<Self, TuningError> {
        Ok(Self {
            gravity: check("gravity", f64::from(gravity), 0.0, f64::MAX)? as f32,
            restitution: check("restitution", f64::from(restitution), 0.0, 1.0)? as f32,
        })
    }
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            gravity: 150.0,
            restitution: 0.8,
        }
    }
}
