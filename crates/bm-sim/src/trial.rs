//! The `Trial` struct: state shared by every model's event loop.

use bm_core::{Model, Particle, TrialConfig, TrialId, TrialRng};
use bm_env::{Environment, Region};
use tracing::{debug, trace};

use crate::{EventHistory, TrialObserver, TrialStatus};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Everything a finished trial reports.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialOutcome {
    pub id:                 TrialId,
    pub status:             TrialStatus,
    pub history:            EventHistory,
    /// Disk ticks that passed without a heavy-particle collision.
    pub no_collision_ticks: u64,
    /// Light-light collisions (interacting model only).
    pub field_events:       u64,
    /// Light particles resampled after leaving the square domain.
    pub regenerated:        u64,
}

impl TrialOutcome {
    #[inline]
    pub fn collisions(&self) -> u64 {
        self.history.collisions() as u64
    }
}

// ── Trial ─────────────────────────────────────────────────────────────────────

/// One independent trial, ready to run.
///
/// The heavy particle starts at the origin with the configured speed and
/// heading; the history already holds its time-0 snapshot.  Persistent
/// models own their square environment from construction onwards, so the
/// initial field can be inspected before [`run`](Trial::run).
///
/// Create via [`TrialBuilder`][crate::TrialBuilder].
pub struct Trial {
    pub(crate) id:                 TrialId,
    pub(crate) config:             TrialConfig,
    pub(crate) time:               f64,
    pub(crate) bp:                 Particle,
    pub(crate) environment:        Option<Environment>,
    pub(crate) history:            EventHistory,
    pub(crate) collisions:         u64,
    pub(crate) no_collision_ticks: u64,
    pub(crate) field_events:       u64,
    pub(crate) regenerated:        u64,
    pub(crate) rng:                TrialRng,
}

impl Trial {
    pub(crate) fn new(
        id:          TrialId,
        config:      TrialConfig,
        rng:         TrialRng,
        environment: Option<Environment>,
    ) -> Self {
        let bp = Particle::new(0.0, 0.0, config.bp_speed, config.bp_angle, config.epsilon);
        Self {
            id,
            history: EventHistory::start(&bp),
            config,
            time: 0.0,
            bp,
            environment,
            collisions: 0,
            no_collision_ticks: 0,
            field_events: 0,
            regenerated: 0,
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> TrialId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    #[inline]
    pub fn bp(&self) -> &Particle {
        &self.bp
    }

    /// The persistent environment (`None` for disk models).
    #[inline]
    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    // ── Run ───────────────────────────────────────────────────────────────

    /// Run the model's event loop to a terminal status.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: TrialObserver>(mut self, observer: &mut O) -> TrialOutcome {
        let status = match self.config.model {
            Model::Disk { time_interval } => self.run_disk(time_interval, observer),
            Model::DiskSubstep { time_interval } => self.run_disk_substep(time_interval, observer),
            Model::Square { .. } => {
                let mut env = self.take_environment();
                self.run_square(&mut env, observer)
            }
            Model::Interacting { .. } => {
                let mut env = self.take_environment();
                self.run_interacting(&mut env, observer)
            }
        };

        debug!(
            trial = %self.id,
            model = %self.config.model,
            %status,
            collisions = self.collisions,
            time = self.time,
            "trial finished"
        );
        observer.on_trial_end(status, &self.history);

        TrialOutcome {
            id:                 self.id,
            status,
            history:            self.history,
            no_collision_ticks: self.no_collision_ticks,
            field_events:       self.field_events,
            regenerated:        self.regenerated,
        }
    }

    // ── Shared event steps ────────────────────────────────────────────────

    /// Move the heavy particle and the clock by `dt`.
    #[inline]
    pub(crate) fn advance_bp(&mut self, dt: f64) {
        self.bp.advance(dt);
        self.time += dt;
    }

    /// Move the heavy particle, the persistent field and the clock by `dt`.
    #[inline]
    pub(crate) fn advance_with(&mut self, env: &mut Environment, dt: f64) {
        env.advance_all(dt);
        self.advance_bp(dt);
    }

    /// Give the heavy particle a uniform new heading.
    #[inline]
    pub(crate) fn scatter_bp(&mut self) {
        let theta = self.rng.angle();
        self.bp.randomize_direction(theta);
    }

    /// Append the current heavy-particle state and bump the counter.
    pub(crate) fn record_bp_collision<O: TrialObserver>(&mut self, observer: &mut O) {
        self.history.push(self.time, &self.bp);
        self.collisions += 1;
        trace!(trial = %self.id, time = self.time, collisions = self.collisions, "bp collision");
        observer.on_bp_collision(self.time, &self.bp);
    }

    /// Resample escaped light particles.
    pub(crate) fn regenerate<O: TrialObserver>(&mut self, env: &mut Environment, observer: &mut O) {
        let replaced = env.regenerate_outside(&mut self.rng);
        if !replaced.is_empty() {
            self.regenerated += replaced.len() as u64;
            trace!(trial = %self.id, time = self.time, count = replaced.len(), "regenerated");
            observer.on_regenerated(self.time, &replaced);
        }
    }

    /// `true` once the heavy particle is outside the persistent domain.
    #[inline]
    pub(crate) fn bp_escaped(&self, env: &Environment) -> bool {
        !env.region().contains(self.bp.x, self.bp.y)
    }

    fn take_environment(&mut self) -> Environment {
        match self.environment.take() {
            Some(env) => env,
            None => square_field(&self.config, &mut self.rng),
        }
    }
}

/// Sample the persistent square field of a `Square`/`Interacting` config.
///
/// Light particles carry the field tolerance
/// ([`TrialConfig::field_epsilon`]); the heavy particle keeps `epsilon`.
pub(crate) fn square_field(config: &TrialConfig, rng: &mut TrialRng) -> Environment {
    let half_width = config.model.half_width().unwrap_or_default();
    Environment::with_density(
        Region::Square { half_width },
        config.density,
        config.field_speed,
        config.field_epsilon(),
        rng,
    )
}
