//! Point-particle kinematics and the pairwise collision-time solver.
//!
//! Particles move at constant velocity between events.  Two particles
//! "collide" when the per-axis meeting times agree within the tolerance
//! `epsilon`; there is no physical radius.

/// A point particle in the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x:       f64,
    pub y:       f64,
    pub vx:      f64,
    pub vy:      f64,
    /// Maximum disagreement between the x- and y-axis meeting times for two
    /// particles to count as colliding.
    pub epsilon: f64,
}

/// Meeting time along one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
enum AxisMeeting {
    /// Relative position on this axis vanishes at the given time.
    At(f64),
    /// Same coordinate and same velocity component: satisfied at all times.
    Always,
    /// Parallel motion at different coordinates: never satisfied.
    Never,
}

impl AxisMeeting {
    #[inline]
    fn solve(gap: f64, closing_speed: f64) -> Self {
        if closing_speed == 0.0 {
            if gap == 0.0 { AxisMeeting::Always } else { AxisMeeting::Never }
        } else {
            AxisMeeting::At(gap / closing_speed)
        }
    }
}

impl Particle {
    /// Build a particle from a position, a speed and a heading angle.
    pub fn new(x: f64, y: f64, speed: f64, theta: f64, epsilon: f64) -> Self {
        Self {
            x,
            y,
            vx: speed * theta.cos(),
            vy: speed * theta.sin(),
            epsilon,
        }
    }

    /// Build a particle from velocity components.
    pub fn with_velocity(x: f64, y: f64, vx: f64, vy: f64, epsilon: f64) -> Self {
        Self { x, y, vx, vy, epsilon }
    }

    /// Copy of this particle moved to `(x, y)`, velocity unchanged.
    #[inline]
    pub fn relocated(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Move along the current velocity for `dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.x += dt * self.vx;
        self.y += dt * self.vy;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Heading angle in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.vy.atan2(self.vx)
    }

    #[inline]
    pub fn distance_to_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Point the velocity along `theta`, keeping the current speed.
    pub fn randomize_direction(&mut self, theta: f64) {
        let speed = self.speed();
        self.vx = speed * theta.cos();
        self.vy = speed * theta.sin();
    }

    /// Time until `self` and `other` occupy the same point, if any.
    ///
    /// Each axis is solved independently:
    ///
    /// ```text
    /// tx = (x2 - x1) / (vx1 - vx2)
    /// ty = (y2 - y1) / (vy1 - vy2)
    /// ```
    ///
    /// The collision is accepted when `|tx - ty| < epsilon` (strict) and both
    /// times are strictly positive; `tx` is returned.
    ///
    /// An axis with zero closing speed gives no finite time.  If the two
    /// coordinates on that axis are also identical the axis holds at every
    /// instant and the other axis alone decides; otherwise the pair can never
    /// meet.  Co-moving particles (both axes degenerate) never collide.
    ///
    /// `epsilon` is taken from `self`.  Swapping the operands negates both
    /// numerator and denominator, so the result is symmetric whenever the
    /// two particles share a tolerance.
    pub fn collision_time(&self, other: &Particle) -> Option<f64> {
        let tx = AxisMeeting::solve(other.x - self.x, self.vx - other.vx);
        let ty = AxisMeeting::solve(other.y - self.y, self.vy - other.vy);

        match (tx, ty) {
            (AxisMeeting::At(tx), AxisMeeting::At(ty)) => {
                ((tx - ty).abs() < self.epsilon && tx > 0.0 && ty > 0.0).then_some(tx)
            }
            (AxisMeeting::At(t), AxisMeeting::Always)
            | (AxisMeeting::Always, AxisMeeting::At(t)) => (t > 0.0).then_some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod solver {
    use super::{AxisMeeting, Particle};

    #[test]
    fn axis_solve_cases() {
        assert_eq!(AxisMeeting::solve(2.0, 2.0), AxisMeeting::At(1.0));
        assert_eq!(AxisMeeting::solve(0.0, 0.0), AxisMeeting::Always);
        assert_eq!(AxisMeeting::solve(1.0, 0.0), AxisMeeting::Never);
    }

    #[test]
    fn head_on_along_x_meets_at_one() {
        let a = Particle::with_velocity(0.0, 0.0, 1.0, 0.0, 1e-6);
        let b = Particle::with_velocity(2.0, 0.0, -1.0, 0.0, 1e-6);
        assert_eq!(a.collision_time(&b), Some(1.0));
        assert_eq!(b.collision_time(&a), Some(1.0));
    }

    #[test]
    fn parallel_on_one_axis_at_different_coordinate_never_meets() {
        let a = Particle::with_velocity(0.0, 0.0, 1.0, 0.0, 1e-6);
        let b = Particle::with_velocity(2.0, 0.5, -1.0, 0.0, 1e-6);
        assert_eq!(a.collision_time(&b), None);
    }

    #[test]
    fn co_moving_particles_never_meet() {
        let a = Particle::with_velocity(0.0, 0.0, 1.0, 1.0, 1e-6);
        let b = Particle::with_velocity(0.0, 0.0, 1.0, 1.0, 1e-6);
        assert_eq!(a.collision_time(&b), None);
    }
}
