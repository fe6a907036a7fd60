//! Persistent square models.

use bm_env::scan::{earliest_against_single, earliest_within_collection};
use bm_env::{BpHit, Environment, PairHit};
use tracing::trace;

use crate::{Trial, TrialObserver, TrialStatus};

/// Next event in the interacting model.
enum NextEvent {
    Field(PairHit),
    Bp(BpHit),
}

impl NextEvent {
    /// A field event wins only when strictly earlier than the heavy one.
    fn choose(bp: Option<BpHit>, field: Option<PairHit>) -> Option<Self> {
        match (bp, field) {
            (None, None)                               => None,
            (None, Some(pair))                         => Some(NextEvent::Field(pair)),
            (Some(hit), Some(pair)) if pair.time < hit.time => Some(NextEvent::Field(pair)),
            (Some(hit), _)                             => Some(NextEvent::Bp(hit)),
        }
    }
}

impl Trial {
    /// Light particles only ever hit the heavy one.
    pub(crate) fn run_square<O: TrialObserver>(
        &mut self,
        env:      &mut Environment,
        observer: &mut O,
    ) -> TrialStatus {
        while self.collisions < self.config.target_collisions {
            let Some(hit) = earliest_against_single(&self.bp, env.particles()) else {
                return TrialStatus::NoBigCollision;
            };
            self.apply_bp_hit(env, hit, observer);
            if self.bp_escaped(env) {
                return TrialStatus::OutsideEnv;
            }
        }
        TrialStatus::Completed
    }

    /// Light particles also hit each other.
    ///
    /// Outer loop: one heavy-particle collision per iteration.  Inner loop:
    /// drain the light-light collisions that happen before it, rescanning
    /// after each because every field event changes two velocities.
    pub(crate) fn run_interacting<O: TrialObserver>(
        &mut self,
        env:      &mut Environment,
        observer: &mut O,
    ) -> TrialStatus {
        while self.collisions < self.config.target_collisions {
            loop {
                let bp_hit = earliest_against_single(&self.bp, env.particles());
                let field_hit = earliest_within_collection(env.particles());

                match NextEvent::choose(bp_hit, field_hit) {
                    None => return TrialStatus::NoBigLittleCollision,
                    Some(NextEvent::Field(pair)) => {
                        self.advance_with(env, pair.time);
                        let theta = self.rng.angle();
                        env.particle_mut(pair.first).randomize_direction(theta);
                        let theta = self.rng.angle();
                        env.particle_mut(pair.second).randomize_direction(theta);
                        self.field_events += 1;
                        trace!(trial = %self.id, time = self.time, first = %pair.first, second = %pair.second, "field collision");
                        observer.on_field_collision(self.time, pair, env);

                        self.regenerate(env, observer);
                        if self.bp_escaped(env) {
                            return TrialStatus::OutsideEnv;
                        }
                    }
                    Some(NextEvent::Bp(hit)) => {
                        self.apply_bp_hit(env, hit, observer);
                        if self.bp_escaped(env) {
                            return TrialStatus::OutsideEnv;
                        }
                        break;
                    }
                }
            }
        }
        TrialStatus::Completed
    }

    /// Advance to `hit`, scatter the heavy particle then the struck one,
    /// record, and regenerate escaped light particles.
    fn apply_bp_hit<O: TrialObserver>(&mut self, env: &mut Environment, hit: BpHit, observer: &mut O) {
        self.advance_with(env, hit.time);
        self.scatter_bp();
        let theta = self.rng.angle();
        env.particle_mut(hit.index).randomize_direction(theta);
        self.record_bp_collision(observer);
        self.regenerate(env, observer);
    }
}
