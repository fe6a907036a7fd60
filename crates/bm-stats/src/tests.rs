//! Unit tests for bm-stats.

use bm_core::TrialId;
use bm_sim::{EventHistory, Snapshot, TrialOutcome, TrialStatus};

use crate::{
    collision_frequency, distances, mean_free_path, regular_time, BatchStats, Summary, TrialStats,
};

fn history(points: &[(f64, f64, f64)]) -> EventHistory {
    let snapshots = points
        .iter()
        .map(|&(time, x, y)| Snapshot { time, x, y, vx: 1.0, vy: 0.0 })
        .collect();
    EventHistory::from_snapshots(snapshots).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ── Resampling ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resample_tests {
    use super::*;

    fn zigzag() -> EventHistory {
        history(&[(0.0, 0.0, 0.0), (2.0, 1.0, 3.0), (4.0, 2.0, 6.0), (5.0, 4.0, 20.0), (6.0, 10.0, 30.0)])
    }

    #[test]
    fn evenly_spaced_times_include_both_ends() {
        let samples = regular_time(&zigzag(), 9);
        assert_eq!(samples.len(), 9);
        for (k, s) in samples.iter().enumerate() {
            assert_eq!(s.time, 0.75 * k as f64);
        }
        assert_eq!((samples[0].x, samples[0].y), (0.0, 0.0));
        assert_eq!((samples[8].x, samples[8].y), (10.0, 30.0));
    }

    #[test]
    fn interpolates_inside_segments() {
        let samples = regular_time(&zigzag(), 9);
        assert!(close(samples[1].x, 0.375) && close(samples[1].y, 1.125));
        assert!(close(samples[4].x, 1.5) && close(samples[4].y, 4.5));
        assert!(close(samples[6].x, 3.0) && close(samples[6].y, 13.0));
    }

    #[test]
    fn sample_on_a_snapshot_time_returns_it() {
        let samples = regular_time(&zigzag(), 4); // t = 0, 2, 4, 6
        assert_eq!((samples[1].x, samples[1].y), (1.0, 3.0));
        assert_eq!((samples[2].x, samples[2].y), (2.0, 6.0));
    }

    #[test]
    fn degenerate_sample_counts() {
        assert!(regular_time(&zigzag(), 0).is_empty());
        let one = regular_time(&zigzag(), 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].time, 0.0);

        let single = history(&[(0.0, 0.5, 0.5)]);
        assert!(regular_time(&single, 3).iter().all(|s| (s.x, s.y) == (0.5, 0.5)));
    }
}

// ── Trajectory measures ───────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory_tests {
    use super::*;

    #[test]
    fn frequency_is_collisions_over_final_time() {
        let h = history(&[(0.0, 0.0, 0.0), (0.5, 1.0, 0.0), (2.0, 1.0, 1.0)]);
        assert_eq!(collision_frequency(&h), Some(1.0));
    }

    #[test]
    fn mean_free_path_averages_segment_lengths() {
        let h = history(&[(0.0, 0.0, 0.0), (1.0, 3.0, 4.0), (2.0, 3.0, 0.0)]);
        assert_eq!(mean_free_path(&h), Some(4.5));
    }

    #[test]
    fn distances_over_a_straight_run() {
        // Six samples at distances 0, 0.2, …, 1.0; the sum is divided by 5.
        let h = history(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)]);
        let (mean, max) = distances(&h).unwrap();
        assert!(close(mean, 0.6));
        assert!(close(max, 1.0));
    }

    #[test]
    fn collision_free_history_has_no_stats() {
        let h = history(&[(0.0, 0.0, 0.0)]);
        assert_eq!(collision_frequency(&h), None);
        assert_eq!(mean_free_path(&h), None);
        assert_eq!(distances(&h), None);
        assert_eq!(TrialStats::from_history(&h), None);
    }

    #[test]
    fn trial_stats_bundle() {
        let h = history(&[(0.0, 0.0, 0.0), (1.0, 3.0, 4.0), (2.0, 3.0, 0.0)]);
        let s = TrialStats::from_history(&h).unwrap();
        assert_eq!(s.collisions, 2);
        assert_eq!(s.frequency, 1.0);
        assert_eq!(s.mean_free_path, 4.5);
        assert!(close(s.max_distance, 5.0));
        assert!(s.mean_distance > 0.0 && s.mean_distance < s.max_distance);
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn describe_matches_hand_computation() {
        let s = Summary::describe(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert!(close(s.std.unwrap(), (5.0f64 / 3.0).sqrt()));
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (1.0, 1.75, 2.5, 3.25, 4.0));
    }

    #[test]
    fn single_value_has_no_spread() {
        let s = Summary::describe(&[7.0]).unwrap();
        assert_eq!(s.std, None);
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (7.0, 7.0, 7.0, 7.0, 7.0));
    }

    #[test]
    fn nans_are_ignored() {
        assert_eq!(Summary::describe(&[]), None);
        assert_eq!(Summary::describe(&[f64::NAN]), None);
        assert_eq!(Summary::describe(&[f64::NAN, 2.0]).unwrap().count, 1);
    }

    #[test]
    fn batch_stats_skip_collision_free_trials() {
        let outcome = |id: u32, history: EventHistory| TrialOutcome {
            id:                 TrialId(id),
            status:             TrialStatus::Completed,
            history,
            no_collision_ticks: 0,
            field_events:       0,
            regenerated:        0,
        };
        let outcomes = vec![
            outcome(0, history(&[(0.0, 0.0, 0.0), (1.0, 3.0, 4.0), (2.0, 3.0, 0.0)])),
            outcome(1, history(&[(0.0, 0.0, 0.0)])),
            outcome(2, history(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)])),
        ];
        let stats = BatchStats::from_outcomes(&outcomes);
        assert_eq!(stats.trials, 2);
        let collisions = stats.collisions.unwrap();
        assert_eq!((collisions.min, collisions.max), (1.0, 2.0));
        assert_eq!(stats.mean_free_path.unwrap().mean, (4.5 + 1.0) / 2.0);
    }
}
