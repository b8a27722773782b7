//! Bevy plugin driving swimmers once per frame.
//!
//! The frame runs three chained systems: every [`Pose`] is snapshotted so
//! followers can trail any actor (including other swimmers), each
//! [`Swimmer`] ticks against that snapshot, and finally poses are mirrored
//! into [`Transform`] for rendering. A swimmer whose tick fails is isolated:
//! the failure is reported through [`SwimmerTickError`] and the frame goes on.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use glam::Vec3;
use hashbrown::HashMap;
use log::warn;

use crate::error::{Precondition, SwimmerError};
use crate::leader::PositionLookup;
use crate::pose::{Collider, Pose};
use crate::swimmer::Swimmer;

/// Positions of every posed entity at the start of the frame.
#[derive(Resource, Default, Debug, Clone)]
pub struct PositionSnapshot(pub HashMap<Entity, Vec3>);

impl PositionLookup for PositionSnapshot {
    fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.0.get(&entity).copied()
    }
}

/// Raised when a swimmer's tick fails and its phase motion was skipped.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwimmerTickError {
    /// The swimmer that failed.
    pub entity: Entity,
    /// Why it failed.
    pub error: SwimmerError,
}

/// Failures observed since startup, newest last.
#[derive(Resource, Default, Debug)]
pub struct TickFailures(pub Vec<SwimmerTickError>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn record_tick_error(event: On<SwimmerTickError>, mut failures: ResMut<TickFailures>) {
    let failure = *event.event();
    warn!(
        "swimmer {:?} skipped its phase update: {}",
        failure.entity, failure.error
    );
    failures.0.push(failure);
}

/// Rebuilds [`PositionSnapshot`] from every [`Pose`].
pub fn snapshot_positions_system(
    mut snapshot: ResMut<PositionSnapshot>,
    poses: Query<(Entity, &Pose)>,
) {
    snapshot.0.clear();
    snapshot
        .0
        .extend(poses.iter().map(|(entity, pose)| (entity, pose.position)));
}

/// Ticks every swimmer with the frame delta.
///
/// Swimmers without a [`Collider`] use the default half-extents.
pub fn tick_swimmers_system(
    mut commands: Commands,
    time: Res<Time>,
    snapshot: Res<PositionSnapshot>,
    mut swimmers: Query<(Entity, &mut Swimmer, &mut Pose, Option<&Collider>)>,
) {
    let dt = time.delta_secs();
    for (entity, mut swimmer, mut pose, collider) in &mut swimmers {
        let half_extents = collider.copied().unwrap_or_default().half_extents;
        if let Err(error) = swimmer.tick(dt, &mut pose, half_extents, &*snapshot) {
            commands.trigger(SwimmerTickError { entity, error });
        }
    }
}

/// Mirrors changed poses into [`Transform`].
pub fn sync_transforms_system(mut query: Query<(&Pose, &mut Transform), Changed<Pose>>) {
    for (pose, mut transform) in &mut query {
        pose.write_to(&mut transform);
    }
}

/// Starts `follower` trailing `leader` using the leader's current pose.
///
/// This is the world-level entry point for gameplay code that does not hold
/// a query over swimmers.
///
/// # Errors
/// Returns [`SwimmerError::PreconditionViolation`] when `follower` is not a
/// swimmer or [`Swimmer::begin_trailing`] rejects the leader.
pub fn begin_trailing(
    world: &mut World,
    follower: Entity,
    leader: Entity,
) -> Result<(), SwimmerError> {
    let mut lookup: HashMap<Entity, Vec3> = HashMap::new();
    if let Some(pose) = world.get::<Pose>(leader) {
        lookup.insert(leader, pose.position);
    }
    let mut swimmer = world
        .get_mut::<Swimmer>(follower)
        .ok_or(Precondition::NotASwimmer(follower))?;
    swimmer.begin_trailing(follower, leader, &lookup)
}

/// Bevy plugin installing the swimmer systems.
#[derive(Default)]
pub struct SwimmerPlugin;

impl Plugin for SwimmerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Time>()
            .init_resource::<PositionSnapshot>()
            .init_resource::<TickFailures>()
            .add_observer(record_tick_error)
            .add_systems(
                Update,
                (
                    snapshot_positions_system,
                    tick_swimmers_system,
                    sync_transforms_system,
                )
                    .chain(),
            );
    }
}
