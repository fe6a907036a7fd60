//! Sampling regions.

use std::f64::consts::PI;

use bm_core::{Particle, TrialRng};

/// Region light particles are sampled from, centred on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Region {
    /// Disk of the given radius.
    Disk { radius: f64 },
    /// Axis-aligned square `[-half_width, half_width]²`.
    Square { half_width: f64 },
}

impl Region {
    pub fn area(self) -> f64 {
        match self {
            Region::Disk { radius }       => PI * radius * radius,
            Region::Square { half_width } => 4.0 * half_width * half_width,
        }
    }

    /// `floor(density × area)`.
    #[inline]
    pub fn particle_count(self, density: f64) -> usize {
        (density * self.area()).floor() as usize
    }

    /// Closed-boundary membership test.  A particle exactly on the boundary
    /// is still inside.
    #[inline]
    pub fn contains(self, x: f64, y: f64) -> bool {
        match self {
            Region::Disk { radius }       => x * x + y * y <= radius * radius,
            Region::Square { half_width } => x.abs() <= half_width && y.abs() <= half_width,
        }
    }

    /// Uniform point in the region.
    ///
    /// The disk draws `r = R·sqrt(u)`, `θ = 2π·u'`: inverting the radial CDF
    /// `(r/R)²` makes the density uniform in area rather than in radius.
    pub fn sample_point(self, rng: &mut TrialRng) -> (f64, f64) {
        match self {
            Region::Disk { radius } => {
                let r = radius * rng.unit().sqrt();
                let theta = rng.angle();
                (r * theta.cos(), r * theta.sin())
            }
            Region::Square { half_width } => {
                let x = -half_width + 2.0 * half_width * rng.unit();
                let y = -half_width + 2.0 * half_width * rng.unit();
                (x, y)
            }
        }
    }

    /// Uniform position plus a uniform heading at `speed`.
    pub fn sample_particle(self, speed: f64, epsilon: f64, rng: &mut TrialRng) -> Particle {
        let (x, y) = self.sample_point(rng);
        let theta = rng.angle();
        Particle::new(x, y, speed, theta, epsilon)
    }
}
