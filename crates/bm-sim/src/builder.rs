//! Fluent builder for constructing a [`Trial`].

use bm_core::{TrialConfig, TrialId, TrialRng};
use bm_env::{Environment, Region};

use crate::trial::square_field;
use crate::{SimError, SimResult, Trial};

/// Fluent builder for [`Trial`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                      |
/// |---------------------|----------------------------------------------|
/// | `.id(id)`           | `TrialId(0)`                                 |
/// | `.seed(s)`          | `0`                                          |
/// | `.environment(env)` | Square field sampled from the config (persistent models only) |
///
/// The trial RNG is derived from `(seed, id)`, so a batch can build its
/// trials in any order and on any thread.
///
/// # Example
///
/// ```rust,ignore
/// let trial = TrialBuilder::new(TrialConfig::interacting())
///     .id(TrialId(7))
///     .seed(42)
///     .build()?;
/// let outcome = trial.run(&mut NoopObserver);
/// ```
pub struct TrialBuilder {
    config:      TrialConfig,
    id:          TrialId,
    seed:        u64,
    environment: Option<Environment>,
}

impl TrialBuilder {
    pub fn new(config: TrialConfig) -> Self {
        Self {
            config,
            id:          TrialId(0),
            seed:        0,
            environment: None,
        }
    }

    pub fn id(mut self, id: TrialId) -> Self {
        self.id = id;
        self
    }

    /// Global seed shared by every trial of a batch.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Supply the persistent light-particle field explicitly instead of
    /// sampling it.  Only valid for `Square` and `Interacting` models, and
    /// the field must be a square of the model's half-width.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Validate the configuration, seed the trial RNG, sample the persistent
    /// field if needed, and return a ready-to-run [`Trial`].
    pub fn build(self) -> SimResult<Trial> {
        self.config.validate()?;

        if self.environment.is_some() && !self.config.model.is_persistent() {
            return Err(SimError::Config(format!(
                "{} model resamples its environment every tick; \
                 an explicit environment is not supported",
                self.config.model
            )));
        }

        if let Some(env) = &self.environment {
            let expected = self.config.model.half_width();
            match env.region() {
                Region::Square { half_width } if Some(half_width) == expected => {}
                region => {
                    return Err(SimError::Config(format!(
                        "{} model needs a square field of half-width {:?}, got {:?}",
                        self.config.model,
                        expected.unwrap_or_default(),
                        region
                    )));
                }
            }
        }

        let mut rng = TrialRng::new(self.seed, self.id);
        let environment = match self.environment {
            Some(env) => Some(env),
            None if self.config.model.is_persistent() => Some(square_field(&self.config, &mut rng)),
            None => None,
        };

        Ok(Trial::new(self.id, self.config, rng, environment))
    }
}
