//! Plain data row types written by output backends.

use bm_core::TrialId;
use bm_sim::{EventHistory, TrialOutcome};
use bm_stats::TrialStats;

/// One heavy-particle snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRow {
    pub trial: u32,
    /// Position in the history; `0` is the initial state.
    pub event: u32,
    pub time:  f64,
    pub x:     f64,
    pub y:     f64,
    pub speed: f64,
    pub angle: f64,
}

impl HistoryRow {
    pub fn from_history(trial: TrialId, history: &EventHistory) -> Vec<Self> {
        history
            .tuples()
            .enumerate()
            .map(|(event, (time, x, y, speed, angle))| Self {
                trial: trial.0,
                event: event as u32,
                time,
                x,
                y,
                speed,
                angle,
            })
            .collect()
    }
}

/// Terminal status, counters and trajectory statistics of one trial.
///
/// Statistics are `None` for trials that never collided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRow {
    pub trial:              u32,
    pub status:             &'static str,
    pub collisions:         u64,
    pub no_collision_ticks: u64,
    pub field_events:       u64,
    pub frequency:          Option<f64>,
    pub mean_distance:      Option<f64>,
    pub max_distance:       Option<f64>,
    pub mean_free_path:     Option<f64>,
}

impl TrialRow {
    pub fn from_outcome(outcome: &TrialOutcome) -> Self {
        let stats = TrialStats::from_history(&outcome.history);
        Self {
            trial:              outcome.id.0,
            status:             outcome.status.as_str(),
            collisions:         outcome.collisions(),
            no_collision_ticks: outcome.no_collision_ticks,
            field_events:       outcome.field_events,
            frequency:          stats.map(|s| s.frequency),
            mean_distance:      stats.map(|s| s.mean_distance),
            max_distance:       stats.map(|s| s.max_distance),
            mean_free_path:     stats.map(|s| s.mean_free_path),
        }
    }
}
