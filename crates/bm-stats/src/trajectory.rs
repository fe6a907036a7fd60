//! Per-trial trajectory measures.

use bm_sim::EventHistory;

use crate::regular_time;

/// Resampled positions per collision used by [`distances`].
pub const SAMPLES_PER_EVENT: usize = 5;

/// Collisions per unit time over the whole history.
///
/// `None` when the history has no collision.
pub fn collision_frequency(history: &EventHistory) -> Option<f64> {
    let t = history.final_time();
    (history.collisions() > 0 && t > 0.0).then(|| history.collisions() as f64 / t)
}

/// Mean length of the straight segments between consecutive snapshots.
pub fn mean_free_path(history: &EventHistory) -> Option<f64> {
    let n = history.collisions();
    if n == 0 {
        return None;
    }
    let total: f64 = history
        .as_slice()
        .windows(2)
        .map(|w| (w[1].x - w[0].x).hypot(w[1].y - w[0].y))
        .sum();
    Some(total / n as f64)
}

/// `(mean, max)` distance from the origin along the trajectory.
///
/// The history is resampled at `collisions × SAMPLES_PER_EVENT + 1` regular
/// times.  The mean divides the summed distances by the number of sampling
/// intervals rather than samples; the time-0 sample sits at the origin and
/// contributes nothing.
pub fn distances(history: &EventHistory) -> Option<(f64, f64)> {
    let n = history.collisions();
    if n == 0 || history.final_time() <= 0.0 {
        return None;
    }
    let samples = regular_time(history, n * SAMPLES_PER_EVENT + 1);
    let (sum, max) = samples
        .iter()
        .map(|s| s.x.hypot(s.y))
        .fold((0.0, 0.0f64), |(sum, max), d| (sum + d, max.max(d)));
    Some((sum / (samples.len() - 1) as f64, max))
}

/// All per-trial measures of one history.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrialStats {
    pub collisions:     usize,
    pub frequency:      f64,
    pub mean_distance:  f64,
    pub max_distance:   f64,
    pub mean_free_path: f64,
}

impl TrialStats {
    /// `None` for histories without a collision at positive time.
    pub fn from_history(history: &EventHistory) -> Option<Self> {
        let frequency = collision_frequency(history)?;
        let (mean_distance, max_distance) = distances(history)?;
        let mean_free_path = mean_free_path(history)?;
        Some(Self {
            collisions: history.collisions(),
            frequency,
            mean_distance,
            max_distance,
            mean_free_path,
        })
    }
}
