//! `bm-stats`: statistics over heavy-particle trajectories.
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`resample`]    | `regular_time`: piecewise-linear resampling at even times |
//! | [`trajectory`]  | per-trial measures and `TrialStats`                    |
//! | [`summary`]     | `Summary::describe` and `BatchStats` across trials     |
//!
//! Everything here is a pure function of an [`EventHistory`]; a history with
//! no collision has no statistics and yields `None`.
//!
//! [`EventHistory`]: bm_sim::EventHistory

pub mod resample;
pub mod summary;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use resample::{regular_time, RegularSample};
pub use summary::{BatchStats, Summary};
pub use trajectory::{
    collision_frequency, distances, mean_free_path, TrialStats, SAMPLES_PER_EVENT,
};
