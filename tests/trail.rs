//! Trail history and interpolation behaviour.
//! Covers buffer bounding, bracketing, cold starts, and degenerate spans.
use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use swimmer::ring_buffer::SampleRingBuffer;
use swimmer::trail::{interpolate, TrailResolver};
use test_utils::linear_buffer;

#[rstest]
#[case::under_capacity(8, 5, 5)]
#[case::at_capacity(8, 8, 8)]
#[case::far_beyond(8, 500, 8)]
#[case::minimum(2, 50, 2)]
fn buffer_never_exceeds_capacity(
    #[case] capacity: usize,
    #[case] pushes: u16,
    #[case] expected_len: usize,
) {
    let buffer = linear_buffer(capacity, pushes);
    assert_eq!(buffer.len(), expected_len);
    assert_eq!(buffer.iter().count(), expected_len);
}

#[test]
fn query_older_than_history_returns_oldest_sample() {
    let mut buffer = linear_buffer(8, 6);
    buffer.advance_oldest(-10.0);
    let (older, newer) = buffer
        .bracket()
        .unwrap_or_else(|| panic!("six samples must bracket"));
    let resolved = interpolate(older, newer, -10.0);
    assert_eq!(resolved, Vec3::ZERO);
}

#[test]
fn retained_timestamps_are_non_decreasing() {
    let mut buffer = SampleRingBuffer::new(5);
    for step in 0..40_u16 {
        let t = f32::from(step) * 0.1;
        buffer.push(Vec3::splat(t), t);
        if step % 3 == 0 {
            buffer.advance_oldest(t - 0.25);
        }
        let times: Vec<f32> = buffer.iter().map(|s| s.timestamp).collect();
        assert!(
            times.windows(2).all(|pair| pair[0] <= pair[1]),
            "timestamps out of order: {times:?}"
        );
    }
}

#[test]
fn midpoint_between_two_samples() {
    let mut buffer = SampleRingBuffer::new(4);
    buffer.push(Vec3::ZERO, 0.0);
    buffer.push(Vec3::new(10.0, 0.0, 0.0), 1.0);
    buffer.advance_oldest(0.5);
    let (older, newer) = buffer
        .bracket()
        .unwrap_or_else(|| panic!("two samples must bracket"));
    let resolved = interpolate(older, newer, 0.5);
    assert_relative_eq!(resolved.x, 5.0);
    assert_relative_eq!(resolved.y, 0.0);
    assert_relative_eq!(resolved.z, 0.0);
}

#[test]
fn cold_start_resolves_to_leader() {
    let leader = Vec3::new(-4.0, 0.25, 9.0);
    let mut trail = TrailResolver::new(1.0, 60);
    trail.begin(leader);
    let resolved = trail.resolve(leader, 1.0 / 60.0);
    assert!(resolved.distance(leader) < 1e-6);
}

#[test]
fn identical_timestamps_yield_a_defined_position() {
    let mut buffer = SampleRingBuffer::new(4);
    buffer.push(Vec3::new(1.0, 2.0, 3.0), 5.0);
    buffer.push(Vec3::new(9.0, 9.0, 9.0), 5.0);
    buffer.advance_oldest(5.0);
    let (older, newer) = buffer
        .bracket()
        .unwrap_or_else(|| panic!("two samples must bracket"));
    let resolved = interpolate(older, newer, 5.0);
    assert!(resolved.is_finite());
    assert_eq!(resolved, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn zero_time_step_does_not_fault() {
    let mut trail = TrailResolver::new(0.5, 30);
    trail.begin(Vec3::ONE);
    for _ in 0..10 {
        let resolved = trail.resolve(Vec3::new(2.0, 1.0, 1.0), 0.0);
        assert!(resolved.is_finite());
    }
}

#[test]
fn irregular_frames_follow_the_delayed_path() {
    let frames = [0.01, 0.03, 0.02, 0.05, 0.016, 0.04, 0.033];
    let mut trail = TrailResolver::new(0.25, 30);
    trail.begin(Vec3::ZERO);
    let mut clock = 0.0_f32;
    let mut resolved = Vec3::ZERO;
    for dt in frames.iter().cycle().take(60) {
        clock += dt;
        // Leader moves along Z at 4 units/s.
        resolved = trail.resolve(Vec3::new(0.0, 0.0, 4.0 * clock), *dt);
    }
    assert_relative_eq!(resolved.z, 4.0 * (clock - 0.25), epsilon = 1e-3);
}

#[test]
fn saturated_history_keeps_resolving() {
    // Capacity far below lag / dt: the buffer saturates immediately.
    let mut trail = TrailResolver::new(1.0, 4);
    trail.begin(Vec3::ZERO);
    for step in 1..=200_u16 {
        let t = f32::from(step) * 0.01;
        let resolved = trail.resolve(Vec3::new(t, 0.0, 0.0), 0.01);
        assert!(resolved.is_finite());
        assert!(trail.buffer().len() <= trail.buffer().capacity());
    }
}
