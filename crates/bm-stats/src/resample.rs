//! Regular-time resampling.
//!
//! Collisions happen at irregular times.  Averages over "the trajectory"
//! need positions at evenly spaced instants instead, so the history is
//! linearly interpolated between consecutive collision points.

use bm_sim::EventHistory;

/// Interpolated heavy-particle position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegularSample {
    pub time: f64,
    pub x:    f64,
    pub y:    f64,
}

/// `samples` positions at evenly spaced times from the first to the last
/// snapshot, both included.
///
/// With `samples == 1` only the first snapshot is returned; `0` returns an
/// empty vector.  A time that falls exactly on a snapshot returns that
/// snapshot's position.
pub fn regular_time(history: &EventHistory, samples: usize) -> Vec<RegularSample> {
    let points = history.as_slice();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let (t0, t1) = (first.time, last.time);
    let step = if samples > 1 { (t1 - t0) / (samples - 1) as f64 } else { 0.0 };

    let mut out = Vec::with_capacity(samples);
    let mut i = 0;
    for k in 0..samples {
        let time = if k + 1 == samples && samples > 1 { t1 } else { t0 + step * k as f64 };

        while i + 1 < points.len() && time >= points[i + 1].time {
            i += 1;
        }

        let sample = match points.get(i + 1) {
            None => RegularSample { time, x: points[i].x, y: points[i].y },
            Some(next) => {
                let a = &points[i];
                let frac = (time - a.time) / (next.time - a.time);
                RegularSample {
                    time,
                    x: a.x + (next.x - a.x) * frac,
                    y: a.y + (next.y - a.y) * frac,
                }
            }
        };
        out.push(sample);
    }
    out
}
