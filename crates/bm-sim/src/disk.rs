//! Disk models: a fresh light-particle disk around the heavy particle.
//!
//! The disk radius `R = (bp_speed + field_speed) × h` is the furthest a light
//! particle can start and still meet the heavy one within a tick of length
//! `h`, so sampling only that disk loses no collision.  Scans run in the
//! disk's frame, with the heavy particle moved to the origin.

use bm_env::scan::earliest_against_single_within;
use bm_env::{Environment, Region};

use crate::{Trial, TrialObserver, TrialStatus};

impl Trial {
    /// At most one collision per tick.
    pub(crate) fn run_disk<O: TrialObserver>(&mut self, h: f64, observer: &mut O) -> TrialStatus {
        let cfg = &self.config;
        let region = Region::Disk { radius: (cfg.bp_speed + cfg.field_speed) * h };
        let count = region.particle_count(cfg.density);
        let (speed, epsilon, target) = (cfg.field_speed, cfg.epsilon, cfg.target_collisions);

        while self.collisions < target {
            let disk = Environment::generate(region, count, speed, epsilon, &mut self.rng);
            let centred = self.bp.relocated(0.0, 0.0);

            match earliest_against_single_within(&centred, disk.particles(), h) {
                None => {
                    self.advance_bp(h);
                    self.no_collision_ticks += 1;
                    observer.on_empty_tick(self.time);
                }
                Some(hit) => {
                    self.advance_bp(hit.time);
                    self.scatter_bp();
                    self.record_bp_collision(observer);
                }
            }
        }
        TrialStatus::Completed
    }

    /// Several collisions per tick.
    ///
    /// After each hit the disk is resampled around the heavy particle with
    /// the radius still reachable in the rest of the tick,
    /// `R - bp_speed × elapsed`, and the search repeats with the remaining
    /// time as ceiling.  Without a further hit the particle drifts to the end
    /// of the tick.
    pub(crate) fn run_disk_substep<O: TrialObserver>(
        &mut self,
        h:        f64,
        observer: &mut O,
    ) -> TrialStatus {
        let cfg = &self.config;
        let radius = (cfg.bp_speed + cfg.field_speed) * h;
        let (bp_speed, density) = (cfg.bp_speed, cfg.density);
        let (speed, epsilon, target) = (cfg.field_speed, cfg.epsilon, cfg.target_collisions);

        while self.collisions < target {
            let mut elapsed = 0.0;
            let mut hit_in_tick = false;

            loop {
                let remaining = h - elapsed;
                let region = Region::Disk { radius: (radius - bp_speed * elapsed).max(0.0) };
                let disk = Environment::with_density(region, density, speed, epsilon, &mut self.rng);
                let centred = self.bp.relocated(0.0, 0.0);

                let Some(hit) = earliest_against_single_within(&centred, disk.particles(), remaining)
                else {
                    self.advance_bp(remaining);
                    break;
                };

                self.advance_bp(hit.time);
                elapsed += hit.time;
                hit_in_tick = true;
                self.scatter_bp();
                self.record_bp_collision(observer);
                if self.collisions >= target {
                    return TrialStatus::Completed;
                }
            }

            if !hit_in_tick {
                self.no_collision_ticks += 1;
                observer.on_empty_tick(self.time);
            }
        }
        TrialStatus::Completed
    }
}
