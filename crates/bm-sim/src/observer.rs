//! Trial observer trait for progress reporting and data collection.

use bm_core::{Particle, ParticleId};
use bm_env::{Environment, PairHit};

use crate::{EventHistory, TrialStatus};

/// Callbacks invoked by [`Trial::run`][crate::Trial::run] at each event.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Times are elapsed trial time *after* the
/// event.
///
/// # Example: field-event counter
///
/// ```rust,ignore
/// struct FieldCounter(usize);
///
/// impl TrialObserver for FieldCounter {
///     fn on_field_collision(&mut self, _time: f64, _pair: PairHit, _env: &Environment) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait TrialObserver {
    /// The heavy particle collided; `bp` already carries its new heading.
    fn on_bp_collision(&mut self, _time: f64, _bp: &Particle) {}

    /// Two light particles collided (interacting model only).
    ///
    /// Called after both directions were randomised and before escaped
    /// particles are regenerated.
    fn on_field_collision(&mut self, _time: f64, _pair: PairHit, _env: &Environment) {}

    /// A disk tick passed without any heavy-particle collision.
    fn on_empty_tick(&mut self, _time: f64) {}

    /// Light particles at `replaced` left the domain and were resampled.
    /// Never called with an empty slice.
    fn on_regenerated(&mut self, _time: f64, _replaced: &[ParticleId]) {}

    /// Called once when the trial stops.
    fn on_trial_end(&mut self, _status: TrialStatus, _history: &EventHistory) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}
