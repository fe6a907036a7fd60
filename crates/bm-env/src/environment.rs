//! The light-particle field.

use bm_core::{Particle, ParticleId, TrialRng};

use crate::Region;

/// A fixed-size, index-addressed collection of light particles living in a
/// [`Region`].
///
/// The particle count never changes after construction: particles leaving
/// the region are overwritten in place by [`regenerate_outside`].
///
/// [`regenerate_outside`]: Environment::regenerate_outside
#[derive(Clone, Debug)]
pub struct Environment {
    region:    Region,
    speed:     f64,
    epsilon:   f64,
    particles: Vec<Particle>,
}

impl Environment {
    /// Sample `count` particles uniformly in `region`, each moving at `speed`
    /// in a uniform direction.
    pub fn generate(
        region:  Region,
        count:   usize,
        speed:   f64,
        epsilon: f64,
        rng:     &mut TrialRng,
    ) -> Self {
        let particles = (0..count)
            .map(|_| region.sample_particle(speed, epsilon, rng))
            .collect();
        Self { region, speed, epsilon, particles }
    }

    /// Like [`generate`](Self::generate) with `count = floor(density × area)`.
    pub fn with_density(
        region:  Region,
        density: f64,
        speed:   f64,
        epsilon: f64,
        rng:     &mut TrialRng,
    ) -> Self {
        Self::generate(region, region.particle_count(density), speed, epsilon, rng)
    }

    /// Wrap an explicit particle list.  `speed` and `epsilon` are used for
    /// particles sampled later by regeneration.
    pub fn from_particles(region: Region, speed: f64, epsilon: f64, particles: Vec<Particle>) -> Self {
        Self { region, speed, epsilon, particles }
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particle(&self, id: ParticleId) -> &Particle {
        &self.particles[id.index()]
    }

    #[inline]
    pub fn particle_mut(&mut self, id: ParticleId) -> &mut Particle {
        &mut self.particles[id.index()]
    }

    /// Move every particle along its velocity for `dt`.
    pub fn advance_all(&mut self, dt: f64) {
        for p in &mut self.particles {
            p.advance(dt);
        }
    }

    /// Replace every particle outside the region with a freshly sampled one.
    ///
    /// Particles are visited in ascending index order, so the RNG draws are
    /// reproducible.  Returns the replaced indices, ascending.
    pub fn regenerate_outside(&mut self, rng: &mut TrialRng) -> Vec<ParticleId> {
        let region = self.region;
        let mut replaced = Vec::new();
        for (i, p) in self.particles.iter_mut().enumerate() {
            if !region.contains(p.x, p.y) {
                *p = region.sample_particle(self.speed, self.epsilon, rng);
                replaced.push(ParticleId(i as u32));
            }
        }
        replaced
    }
}
