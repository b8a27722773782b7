//! Utility helpers for tests.
//!
//! Fixtures for building swimmer worlds and stepping them with a fixed
//! frame time.

use std::time::Duration;

use bevy::prelude::*;
use glam::Vec3;
use hashbrown::HashMap;
use swimmer::{Collider, Pose, SampleRingBuffer, Swimmer, SwimmerConfig, SwimmerPlugin};

/// Frame time used by the stepping helpers.
pub const FRAME: f32 = 1.0 / 60.0;

/// Creates `count` distinct entity handles.
///
/// # Examples
/// ```
/// use test_utils::entity_handles;
/// let handles = entity_handles(2);
/// assert_ne!(handles[0], handles[1]);
/// ```
pub fn entity_handles(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

/// Builds a position lookup from `(handle, position)` pairs.
pub fn lookup(pairs: &[(Entity, Vec3)]) -> HashMap<Entity, Vec3> {
    pairs.iter().copied().collect()
}

/// A buffer filled with `count` samples one second apart moving along +X.
///
/// Sample `i` sits at `(i, 0, 0)` with timestamp `i`.
pub fn linear_buffer(capacity: usize, count: u16) -> SampleRingBuffer {
    let mut buffer = SampleRingBuffer::new(capacity);
    for step in 0..count {
        let t = f32::from(step);
        buffer.push(Vec3::new(t, 0.0, 0.0), t);
    }
    buffer
}

/// A headless app with [`SwimmerPlugin`] installed.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(SwimmerPlugin);
    app
}

/// Spawns a plain actor at `position` that swimmers may trail.
pub fn spawn_leader(app: &mut App, position: Vec3) -> Entity {
    app.world_mut().spawn(Pose::from_position(position)).id()
}

/// Spawns a swimmer with a unit cube collider at `position`.
pub fn spawn_swimmer(app: &mut App, config: SwimmerConfig, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Swimmer::new(config),
            Pose::from_position(position),
            Collider::default(),
            Transform::default(),
        ))
        .id()
}

/// Advances the app clock by `dt` seconds and runs one frame.
pub fn step(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

/// Runs `frames` frames of [`FRAME`] seconds each.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        step(app, FRAME);
    }
}
