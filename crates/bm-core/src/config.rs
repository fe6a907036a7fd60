//! Trial configuration.
//!
//! # Design
//!
//! One `TrialConfig` fully describes a trial: the heavy particle's initial
//! motion, the light-particle field, the collision tolerance and the
//! [`Model`] deciding how the field evolves.  Region sizes live in the model
//! because each model sizes its region differently:
//!
//! - disk models derive the radius from the tick interval,
//!   `R = (bp_speed + field_speed) × time_interval`;
//! - square models take the half-width `D` directly.
//!
//! The particle count of a region is always `floor(density × area)`.

use std::f64::consts::{FRAC_PI_4, PI};
use std::fmt;

use crate::{BmError, BmResult};

// ── Model ─────────────────────────────────────────────────────────────────────

/// Which event loop a trial runs, with its model-specific parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Model {
    /// Fresh disk of light particles around the heavy particle every tick;
    /// at most one collision per tick.
    Disk { time_interval: f64 },

    /// Fixed-length ticks with several collisions allowed per tick; the disk
    /// is resampled (shrinking) after every collision inside a tick.
    DiskSubstep { time_interval: f64 },

    /// Persistent square field; light particles only hit the heavy one.
    Square { half_width: f64 },

    /// Persistent square field whose particles also collide with each other.
    /// Field-field tolerance is `epsilon / field_tolerance_scale`.
    Interacting { half_width: f64, field_tolerance_scale: f64 },
}

impl Model {
    /// `true` for models that keep a single environment for the whole trial.
    #[inline]
    pub fn is_persistent(self) -> bool {
        matches!(self, Model::Square { .. } | Model::Interacting { .. })
    }

    /// Half-width of the square domain for persistent models.
    #[inline]
    pub fn half_width(self) -> Option<f64> {
        match self {
            Model::Square { half_width } | Model::Interacting { half_width, .. } => Some(half_width),
            Model::Disk { .. } | Model::DiskSubstep { .. } => None,
        }
    }

    /// Tick length for disk models.
    #[inline]
    pub fn time_interval(self) -> Option<f64> {
        match self {
            Model::Disk { time_interval } | Model::DiskSubstep { time_interval } => Some(time_interval),
            Model::Square { .. } | Model::Interacting { .. } => None,
        }
    }

    /// Short label, used for CSV column values and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Disk { .. }        => "disk",
            Model::DiskSubstep { .. } => "disk_substep",
            Model::Square { .. }      => "square",
            Model::Interacting { .. } => "interacting",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TrialConfig ───────────────────────────────────────────────────────────────

/// Configuration of one trial.
///
/// Typically built from a preset ([`TrialConfig::square`], …) or loaded from
/// JSON by the application crate, then passed to the trial builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    /// Number of heavy-particle collisions after which the trial completes.
    pub target_collisions: u64,

    /// Light particles per unit area.
    pub density: f64,

    /// Speed of the heavy particle.  Never changes during a trial.
    pub bp_speed: f64,

    /// Initial heading of the heavy particle, radians.
    pub bp_angle: f64,

    /// Speed of every light particle.
    pub field_speed: f64,

    /// Collision-time tolerance shared by all particles.
    pub epsilon: f64,

    pub model: Model,
}

impl TrialConfig {
    /// Disk model defaults: 100 collisions, tick 0.10, tolerance 0.25.
    pub fn disk() -> Self {
        Self {
            target_collisions: 100,
            density:           1e4,
            bp_speed:          1.0,
            bp_angle:          -FRAC_PI_4,
            field_speed:       1.0,
            epsilon:           0.25,
            model:             Model::Disk { time_interval: 0.10 },
        }
    }

    /// Sub-stepped disk model defaults.
    pub fn disk_substep() -> Self {
        Self {
            model: Model::DiskSubstep { time_interval: 0.10 },
            ..Self::disk()
        }
    }

    /// Square model defaults: 200 collisions, half-width 0.2, tolerance 0.005.
    pub fn square() -> Self {
        Self {
            target_collisions: 200,
            density:           1e4,
            bp_speed:          1.0,
            bp_angle:          -FRAC_PI_4,
            field_speed:       1.0,
            epsilon:           0.005,
            model:             Model::Square { half_width: 0.2 },
        }
    }

    /// Interacting model defaults (square defaults, unscaled field tolerance).
    pub fn interacting() -> Self {
        Self {
            model: Model::Interacting { half_width: 0.2, field_tolerance_scale: 1.0 },
            ..Self::square()
        }
    }

    /// Radius of the per-tick disk for disk models.
    #[inline]
    pub fn disk_radius(&self) -> Option<f64> {
        self.model
            .time_interval()
            .map(|h| (self.bp_speed + self.field_speed) * h)
    }

    /// Tolerance used by light particles among themselves.
    #[inline]
    pub fn field_epsilon(&self) -> f64 {
        match self.model {
            Model::Interacting { field_tolerance_scale, .. } => self.epsilon / field_tolerance_scale,
            _ => self.epsilon,
        }
    }

    /// Area of the region the model samples from (full disk for disk models).
    pub fn region_area(&self) -> f64 {
        match (self.disk_radius(), self.model.half_width()) {
            (Some(r), _) => PI * r * r,
            (None, Some(d)) => 4.0 * d * d,
            (None, None) => 0.0,
        }
    }

    /// `floor(density × area)`.
    #[inline]
    pub fn particle_count(&self) -> usize {
        (self.density * self.region_area()).floor() as usize
    }

    /// Check every parameter.  Call once before running; the drivers assume
    /// a validated configuration.
    pub fn validate(&self) -> BmResult<()> {
        if self.target_collisions == 0 {
            return Err(invalid("target_collisions", "must be > 0"));
        }
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(invalid("density", "must be finite and >= 0"));
        }
        if !self.bp_speed.is_finite() || self.bp_speed <= 0.0 {
            return Err(invalid("bp_speed", "must be finite and > 0"));
        }
        if !self.bp_angle.is_finite() {
            return Err(invalid("bp_angle", "must be finite"));
        }
        if !self.field_speed.is_finite() || self.field_speed < 0.0 {
            return Err(invalid("field_speed", "must be finite and >= 0"));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(invalid("epsilon", "must be finite and > 0"));
        }

        match self.model {
            Model::Disk { time_interval } | Model::DiskSubstep { time_interval } => {
                if !time_interval.is_finite() || time_interval <= 0.0 {
                    return Err(invalid("time_interval", "must be finite and > 0"));
                }
            }
            Model::Square { half_width } => {
                if !half_width.is_finite() || half_width <= 0.0 {
                    return Err(invalid("half_width", "must be finite and > 0"));
                }
            }
            Model::Interacting { half_width, field_tolerance_scale } => {
                if !half_width.is_finite() || half_width <= 0.0 {
                    return Err(invalid("half_width", "must be finite and > 0"));
                }
                if !field_tolerance_scale.is_finite() || field_tolerance_scale <= 0.0 {
                    return Err(invalid("field_tolerance_scale", "must be finite and > 0"));
                }
            }
        }

        let count = self.particle_count();
        if u32::try_from(count).is_err() {
            return Err(BmError::Config(format!(
                "{count} light particles exceed the addressable ParticleId range"
            )));
        }
        // A disk trial only ends by colliding; an empty disk would tick forever.
        if !self.model.is_persistent() && count == 0 {
            return Err(BmError::Config(format!(
                "{} model samples no light particles (density {} over area {:.3e}); \
                 raise density or time_interval",
                self.model,
                self.density,
                self.region_area()
            )));
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::square()
    }
}

fn invalid(name: &'static str, reason: &str) -> BmError {
    BmError::InvalidParam { name, reason: reason.to_owned() }
}
