//! Heavy-particle trajectory, one snapshot per accepted collision.

use bm_core::Particle;

/// Heavy-particle state at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Elapsed trial time.
    pub time: f64,
    pub x:    f64,
    pub y:    f64,
    pub vx:   f64,
    pub vy:   f64,
}

impl Snapshot {
    #[inline]
    pub fn of(time: f64, bp: &Particle) -> Self {
        Self { time, x: bp.x, y: bp.y, vx: bp.vx, vy: bp.vy }
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

    /// `(time, x, y, speed, angle)`.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.time, self.x, self.y, self.speed(), self.angle())
    }
}

/// Append-only, time-ordered trajectory.
///
/// Always starts with the time-0 snapshot; every later entry is one accepted
/// heavy-particle collision, recorded with the post-collision heading.  Only
/// the trial driver can append, so a finished history is immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct EventHistory {
    snapshots: Vec<Snapshot>,
}

// Never empty: the initial snapshot is always present.
#[allow(clippy::len_without_is_empty)]
impl EventHistory {
    pub(crate) fn start(bp: &Particle) -> Self {
        Self { snapshots: vec![Snapshot::of(0.0, bp)] }
    }

    pub(crate) fn push(&mut self, time: f64, bp: &Particle) {
        self.snapshots.push(Snapshot::of(time, bp));
    }

    /// Rebuild a history from stored snapshots.
    ///
    /// Returns `None` when `snapshots` is empty or its times decrease.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Option<Self> {
        let ordered = snapshots.windows(2).all(|w| w[0].time <= w[1].time);
        (!snapshots.is_empty() && ordered).then_some(Self { snapshots })
    }

    /// Number of snapshots, including the initial one.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Accepted collisions (every snapshot but the first).
    #[inline]
    pub fn collisions(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// `(time, x, y, speed, angle)` per snapshot.
    pub fn tuples(&self) -> impl Iterator<Item = (f64, f64, f64, f64, f64)> + '_ {
        self.snapshots.iter().map(Snapshot::as_tuple)
    }

    #[inline]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Time of the last recorded collision (0 for a collision-free history).
    #[inline]
    pub fn final_time(&self) -> f64 {
        self.last().map_or(0.0, |s| s.time)
    }
}

impl<'a> IntoIterator for &'a EventHistory {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
