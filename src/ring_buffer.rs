//! Fixed-capacity history of timestamped leader positions.
//!
//! [`SampleRingBuffer`] keeps two parallel slices of positions and timestamps
//! addressed by an `oldest` and a `newest` cursor. Appends advance `newest`
//! modulo the capacity. When the slot after `newest` is `oldest` the buffer is
//! saturated: `newest` stops advancing and further appends overwrite the
//! newest slot in place, so the retained span never grows past what the
//! configured lag needs.

use glam::Vec3;

use crate::constants::MIN_TRAIL_CAPACITY;

/// A single recorded leader position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Trail clock value when the position was recorded.
    pub timestamp: f32,
    /// Leader position at `timestamp`.
    pub position: Vec3,
}

/// Circular store of `(timestamp, position)` pairs with a fixed capacity.
#[derive(Debug, Clone)]
pub struct SampleRingBuffer {
    positions: Box<[Vec3]>,
    timestamps: Box<[f32]>,
    oldest: usize,
    newest: usize,
    len: usize,
}

impl SampleRingBuffer {
    /// Allocates an empty buffer holding at most `capacity` samples.
    ///
    /// Capacities below two are raised to two so a pair of samples can
    /// always bracket a query.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let slots = capacity.max(MIN_TRAIL_CAPACITY);
        Self {
            positions: vec![Vec3::ZERO; slots].into_boxed_slice(),
            timestamps: vec![0.0; slots].into_boxed_slice(),
            oldest: 0,
            newest: 0,
            len: 0,
        }
    }

    /// Number of slots allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Number of live samples between `oldest` and `newest` inclusive.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no sample has been recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next append will overwrite the newest slot.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.len == self.capacity()
    }

    /// Index of the oldest live sample.
    #[must_use]
    pub const fn oldest_index(&self) -> usize {
        self.oldest
    }

    /// Index of the newest live sample.
    #[must_use]
    pub const fn newest_index(&self) -> usize {
        self.newest
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn sample_at(&self, index: usize) -> Option<Sample> {
        let position = *self.positions.get(index)?;
        let timestamp = *self.timestamps.get(index)?;
        Some(Sample {
            timestamp,
            position,
        })
    }

    fn write(&mut self, index: usize, position: Vec3, timestamp: f32) {
        if let (Some(pos_slot), Some(time_slot)) =
            (self.positions.get_mut(index), self.timestamps.get_mut(index))
        {
            *pos_slot = position;
            *time_slot = timestamp;
        }
    }

    /// Discards all history and seeds the first two slots with `position`.
    ///
    /// Used when a follower latches onto a new leader: the duplicated sample
    /// makes the first query resolve to the leader's current position.
    pub fn seed(&mut self, position: Vec3, timestamp: f32) {
        self.write(0, position, timestamp);
        self.write(1, position, timestamp);
        self.oldest = 0;
        self.newest = 1;
        self.len = 2;
    }

    /// Records `position` at `timestamp`.
    ///
    /// Timestamps are expected to be non-decreasing. When saturated, the
    /// newest sample is overwritten instead of evicting the oldest.
    pub fn push(&mut self, position: Vec3, timestamp: f32) {
        if self.is_empty() {
            self.oldest = 0;
            self.newest = 0;
            self.len = 1;
        } else {
            let candidate = self.next_index(self.newest);
            if candidate != self.oldest {
                self.newest = candidate;
                self.len += 1;
            }
        }
        self.write(self.newest, position, timestamp);
    }

    /// Walks `oldest` forward while the following sample is still before
    /// `target_time`.
    ///
    /// `oldest` stops at the last sample strictly before `target_time` whose
    /// successor is at or after it, and never reaches `newest`.
    pub fn advance_oldest(&mut self, target_time: f32) {
        while self.len > 2 {
            let next = self.next_index(self.oldest);
            let Some(next_time) = self.timestamps.get(next).copied() else {
                break;
            };
            if next_time >= target_time {
                break;
            }
            self.oldest = next;
            self.len -= 1;
        }
        debug_assert!(self.len < 2 || self.oldest != self.newest);
    }

    /// The oldest live sample, if any.
    #[must_use]
    pub fn oldest(&self) -> Option<Sample> {
        if self.is_empty() {
            return None;
        }
        self.sample_at(self.oldest)
    }

    /// The newest live sample, if any.
    #[must_use]
    pub fn newest(&self) -> Option<Sample> {
        if self.is_empty() {
            return None;
        }
        self.sample_at(self.newest)
    }

    /// The oldest sample and its successor, or `None` with fewer than two
    /// live samples.
    #[must_use]
    pub fn bracket(&self) -> Option<(Sample, Sample)> {
        if self.len < 2 {
            return None;
        }
        let older = self.sample_at(self.oldest)?;
        let newer = self.sample_at(self.next_index(self.oldest))?;
        Some((older, newer))
    }

    /// Iterates live samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len)
            .filter_map(move |offset| self.sample_at((self.oldest + offset) % self.capacity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, count: u16) -> SampleRingBuffer {
        let mut buffer = SampleRingBuffer::new(capacity);
        for step in 0..count {
            let t = f32::from(step);
            buffer.push(Vec3::new(t, 0.0, 0.0), t);
        }
        buffer
    }

    #[test]
    fn capacity_has_a_floor_of_two() {
        assert_eq!(SampleRingBuffer::new(0).capacity(), 2);
        assert_eq!(SampleRingBuffer::new(1).capacity(), 2);
    }

    #[test]
    fn empty_buffer_reports_no_bracket() {
        let buffer = SampleRingBuffer::new(4);
        assert!(buffer.bracket().is_none());
        assert!(buffer.oldest().is_none());
        assert!(buffer.newest().is_none());
    }

    #[test]
    fn single_sample_is_insufficient() {
        let buffer = filled(4, 1);
        assert!(buffer.bracket().is_none());
        assert_eq!(buffer.oldest().map(|s| s.timestamp), Some(0.0));
    }

    #[test]
    fn saturation_overwrites_the_newest_slot() {
        let buffer = filled(4, 10);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.is_saturated());
        let times: Vec<f32> = buffer.iter().map(|s| s.timestamp).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0, 9.0]);
        assert_eq!(buffer.newest().map(|s| s.position.x), Some(9.0));
    }

    #[test]
    fn advance_stops_before_target() {
        let mut buffer = filled(8, 6);
        buffer.advance_oldest(2.5);
        let (older, newer) = buffer.bracket().unwrap_or_else(|| panic!("bracket expected"));
        assert!((older.timestamp - 2.0).abs() < f32::EPSILON);
        assert!((newer.timestamp - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn advance_never_overtakes_newest() {
        let mut buffer = filled(8, 5);
        buffer.advance_oldest(100.0);
        assert_eq!(buffer.len(), 2);
        assert_ne!(buffer.oldest_index(), buffer.newest_index());
    }

    #[test]
    fn advance_after_saturation_frees_slots() {
        let mut buffer = filled(4, 4);
        buffer.advance_oldest(2.5);
        assert_eq!(buffer.len(), 2);
        buffer.push(Vec3::new(4.0, 0.0, 0.0), 4.0);
        let times: Vec<f32> = buffer.iter().map(|s| s.timestamp).collect();
        assert_eq!(times, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn seed_resets_history() {
        let mut buffer = filled(4, 4);
        buffer.seed(Vec3::ONE, 7.0);
        assert_eq!(buffer.len(), 2);
        let (older, newer) = buffer.bracket().unwrap_or_else(|| panic!("bracket expected"));
        assert_eq!(older.position, Vec3::ONE);
        assert_eq!(newer.position, Vec3::ONE);
    }
}
