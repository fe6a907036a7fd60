//! Independent-trial batches.

use bm_core::{TrialConfig, TrialId};
use tracing::info;

use crate::{NoopObserver, SimError, SimResult, TrialBuilder, TrialOutcome, TrialStatus};

/// Number of trials per terminal status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed:               usize,
    pub no_big_collision:        usize,
    pub no_big_little_collision: usize,
    pub outside_env:             usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: TrialStatus) {
        *self.slot(status) += 1;
    }

    pub fn get(&self, status: TrialStatus) -> usize {
        match status {
            TrialStatus::Completed            => self.completed,
            TrialStatus::NoBigCollision       => self.no_big_collision,
            TrialStatus::NoBigLittleCollision => self.no_big_little_collision,
            TrialStatus::OutsideEnv           => self.outside_env,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.no_big_collision + self.no_big_little_collision + self.outside_env
    }

    fn slot(&mut self, status: TrialStatus) -> &mut usize {
        match status {
            TrialStatus::Completed            => &mut self.completed,
            TrialStatus::NoBigCollision       => &mut self.no_big_collision,
            TrialStatus::NoBigLittleCollision => &mut self.no_big_little_collision,
            TrialStatus::OutsideEnv           => &mut self.outside_env,
        }
    }
}

/// Result of [`run_batch`].
#[derive(Clone, Debug)]
pub struct BatchReport {
    pub config:             TrialConfig,
    pub seed:               u64,
    /// One outcome per trial, ordered by `TrialId`.
    pub outcomes:           Vec<TrialOutcome>,
    pub counts:             StatusCounts,
    /// Sum of `no_collision_ticks` over all trials.
    pub no_collision_ticks: u64,
}

/// Run `trials` independent trials of `config`.
///
/// Trial `i` gets `TrialId(i)` and an RNG derived from `(seed, TrialId(i))`.
/// With the `parallel` feature trials run on Rayon's thread pool; outcomes
/// are collected in id order either way, so both builds return the same
/// report.
pub fn run_batch(config: &TrialConfig, trials: usize, seed: u64) -> SimResult<BatchReport> {
    config.validate()?;
    let n = u32::try_from(trials)
        .ok()
        .filter(|&n| n < TrialId::INVALID.0)
        .ok_or(SimError::TooManyTrials(trials))?;

    info!(model = %config.model, trials, seed, "starting batch");

    let run_one = |i: u32| -> SimResult<TrialOutcome> {
        let trial = TrialBuilder::new(config.clone()).id(TrialId(i)).seed(seed).build()?;
        Ok(trial.run(&mut NoopObserver))
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes = (0..n).map(run_one).collect::<SimResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let outcomes = {
        use rayon::prelude::*;
        (0..n).into_par_iter().map(run_one).collect::<SimResult<Vec<_>>>()?
    };

    let mut counts = StatusCounts::default();
    let mut no_collision_ticks = 0;
    for outcome in &outcomes {
        counts.record(outcome.status);
        no_collision_ticks += outcome.no_collision_ticks;
    }

    info!(
        completed = counts.completed,
        no_big_collision = counts.no_big_collision,
        no_big_little_collision = counts.no_big_little_collision,
        outside_env = counts.outside_env,
        no_collision_ticks,
        "batch finished"
    );

    Ok(BatchReport {
        config: config.clone(),
        seed,
        outcomes,
        counts,
        no_collision_ticks,
    })
}
