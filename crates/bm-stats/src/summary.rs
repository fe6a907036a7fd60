//! Descriptive statistics across trials.

use std::fmt;

use bm_sim::TrialOutcome;

use crate::TrialStats;

/// Count, mean, spread and quartiles of a sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Summary {
    pub count:  usize,
    pub mean:   f64,
    /// Sample standard deviation (`n - 1` denominator); `None` for one value.
    pub std:    Option<f64>,
    pub min:    f64,
    pub q1:     f64,
    pub median: f64,
    pub q3:     f64,
    pub max:    f64,
}

impl Summary {
    /// Describe `values`, ignoring NaNs.  `None` when nothing is left.
    ///
    /// Quartiles interpolate linearly between the two closest ranks.
    pub fn describe(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = (n > 1).then(|| {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        });

        Some(Self {
            count: n,
            mean,
            std,
            min:    sorted[0],
            q1:     quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.50),
            q3:     quantile(&sorted, 0.75),
            max:    sorted[n - 1],
        })
    }
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} mean={:.6} std=", self.count, self.mean)?;
        match self.std {
            Some(std) => write!(f, "{std:.6}")?,
            None => f.write_str("-")?,
        }
        write!(
            f,
            " min={:.6} 25%={:.6} 50%={:.6} 75%={:.6} max={:.6}",
            self.min, self.q1, self.median, self.q3, self.max
        )
    }
}

/// Summaries of the per-trial measures over a batch.
///
/// Trials without a collision are skipped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatchStats {
    pub trials:         usize,
    pub collisions:     Option<Summary>,
    pub frequency:      Option<Summary>,
    pub mean_distance:  Option<Summary>,
    pub max_distance:   Option<Summary>,
    pub mean_free_path: Option<Summary>,
}

impl BatchStats {
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> Self {
        let stats: Vec<TrialStats> = outcomes
            .iter()
            .filter_map(|o| TrialStats::from_history(&o.history))
            .collect();
        let column = |f: fn(&TrialStats) -> f64| {
            Summary::describe(&stats.iter().map(f).collect::<Vec<_>>())
        };
        Self {
            trials:         stats.len(),
            collisions:     column(|s| s.collisions as f64),
            frequency:      column(|s| s.frequency),
            mean_distance:  column(|s| s.mean_distance),
            max_distance:   column(|s| s.max_distance),
            mean_free_path: column(|s| s.mean_free_path),
        }
    }
}
