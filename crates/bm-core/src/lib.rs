//! `bm-core`: foundational types for the `brownian_rs` collision simulator.
//!
//! This crate is a dependency of every other `bm-*` crate.  It intentionally
//! has no `bm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TrialId`, `ParticleId`                               |
//! | [`particle`]    | `Particle` kinematics and the pairwise collision solver |
//! | [`config`]      | `TrialConfig`, `Model`                                |
//! | [`rng`]         | `TrialRng` (one independent stream per trial)         |
//! | [`error`]       | `BmError`, `BmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod particle;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Model, TrialConfig};
pub use error::{BmError, BmResult};
pub use ids::{ParticleId, TrialId};
pub use particle::Particle;
pub use rng::TrialRng;
