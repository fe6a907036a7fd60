//! Earliest-collision scans.
//!
//! Both scans are pure: they read particle state and never mutate it.  The
//! two deliberately use different tie-breaks:
//!
//! | Scan                             | Comparison | Exact tie goes to   |
//! |----------------------------------|------------|---------------------|
//! | [`earliest_against_single`]      | `<=`       | the later index     |
//! | [`earliest_within_collection`]   | `<`        | the earlier pair    |

use bm_core::{Particle, ParticleId};

/// Earliest collision between one target particle and a collection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BpHit {
    /// Index of the struck particle.
    pub index: ParticleId,
    /// Time from now until the collision.
    pub time:  f64,
}

/// Earliest collision between two members of one collection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairHit {
    /// Lower index of the pair.
    pub first:  ParticleId,
    /// Higher index of the pair.
    pub second: ParticleId,
    pub time:   f64,
}

/// Earliest future collision of `target` with any of `particles`.
#[inline]
pub fn earliest_against_single(target: &Particle, particles: &[Particle]) -> Option<BpHit> {
    earliest_against_single_within(target, particles, f64::INFINITY)
}

/// Earliest collision of `target` with any of `particles` no later than
/// `ceiling`.  A hit exactly at `ceiling` is accepted.
pub fn earliest_against_single_within(
    target:    &Particle,
    particles: &[Particle],
    ceiling:   f64,
) -> Option<BpHit> {
    let mut t_min = ceiling;
    let mut best = None;
    for (i, p) in particles.iter().enumerate() {
        if let Some(t) = target.collision_time(p) {
            if t <= t_min {
                t_min = t;
                best = Some(BpHit { index: ParticleId(i as u32), time: t });
            }
        }
    }
    best
}

/// Earliest collision between any two distinct members of `particles`.
///
/// O(n²) over unordered pairs `(i, j)` with `i < j`; the tolerance of the
/// lower-indexed particle applies.
pub fn earliest_within_collection(particles: &[Particle]) -> Option<PairHit> {
    let mut t_min = f64::INFINITY;
    let mut best = None;
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            if let Some(t) = a.collision_time(b) {
                if t < t_min {
                    t_min = t;
                    best = Some(PairHit {
                        first:  ParticleId(i as u32),
                        second: ParticleId(j as u32),
                        time:   t,
                    });
                }
            }
        }
    }
    best
}
