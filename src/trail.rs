//! Reconstructs where a leader was a fixed lag ago.
//!
//! Each call to [`TrailResolver::resolve`] advances the trail clock, records
//! the leader's current position, and linearly interpolates between the two
//! recorded samples that bracket `clock - lag`.

use glam::Vec3;

use crate::numeric::unit_clamp;
use crate::ring_buffer::{Sample, SampleRingBuffer};
use crate::vector_math::lerp;

/// Interpolates between two samples at `target_time`.
///
/// A zero or negative span collapses to the older sample. The factor is
/// clamped so targets outside the bracket resolve to its nearest end.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use swimmer::ring_buffer::Sample;
/// use swimmer::trail::interpolate;
/// let a = Sample { timestamp: 0.0, position: Vec3::ZERO };
/// let b = Sample { timestamp: 1.0, position: Vec3::new(10.0, 0.0, 0.0) };
/// assert_eq!(interpolate(a, b, 0.5), Vec3::new(5.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn interpolate(older: Sample, newer: Sample, target_time: f32) -> Vec3 {
    let span = newer.timestamp - older.timestamp;
    let factor = if span > 0.0 {
        unit_clamp((target_time - older.timestamp) / span)
    } else {
        0.0
    };
    lerp(older.position, newer.position, factor)
}

/// Time-lagged view over a leader's recent path.
#[derive(Debug, Clone)]
pub struct TrailResolver {
    buffer: SampleRingBuffer,
    lag_seconds: f32,
    clock: f32,
}

impl TrailResolver {
    /// Creates a resolver trailing `lag_seconds` behind with room for
    /// `capacity` samples.
    #[must_use]
    pub fn new(lag_seconds: f32, capacity: usize) -> Self {
        Self {
            buffer: SampleRingBuffer::new(capacity),
            lag_seconds,
            clock: 0.0,
        }
    }

    /// Lag between the leader and the resolved position.
    #[must_use]
    pub const fn lag_seconds(&self) -> f32 {
        self.lag_seconds
    }

    /// Trail clock; advances only while resolving.
    #[must_use]
    pub const fn clock(&self) -> f32 {
        self.clock
    }

    /// Recorded history.
    #[must_use]
    pub const fn buffer(&self) -> &SampleRingBuffer {
        &self.buffer
    }

    /// Forgets earlier history and anchors the trail at `leader_position`.
    pub fn begin(&mut self, leader_position: Vec3) {
        self.buffer.seed(leader_position, self.clock);
    }

    /// Advances the clock by `dt`, records `leader_position`, and returns the
    /// leader's position `lag_seconds` ago.
    ///
    /// With thin history the oldest recorded sample is returned, so right
    /// after [`Self::begin`] this is the position the trail was anchored at.
    pub fn resolve(&mut self, leader_position: Vec3, dt: f32) -> Vec3 {
        self.clock += dt;
        self.buffer.push(leader_position, self.clock);
        self.position_at(self.clock - self.lag_seconds)
    }

    fn position_at(&mut self, target_time: f32) -> Vec3 {
        self.buffer.advance_oldest(target_time);
        match self.buffer.bracket() {
            Some((older, newer)) => interpolate(older, newer, target_time),
            None => self
                .buffer
                .oldest()
                .map_or(Vec3::ZERO, |sample| sample.position),
        }
    }
}
