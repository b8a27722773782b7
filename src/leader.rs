//! Read-only access to the positions of potential leaders.

use bevy::prelude::Entity;
use glam::Vec3;
use hashbrown::HashMap;

/// Resolves an actor handle to its current world position.
///
/// Followers hold only an [`Entity`] handle to their leader and look it up
/// through this trait every tick; they never own or mutate the leader.
pub trait PositionLookup {
    /// Current position of `entity`, or `None` if it no longer exists.
    fn position_of(&self, entity: Entity) -> Option<Vec3>;
}

impl<S: std::hash::BuildHasher> PositionLookup for HashMap<Entity, Vec3, S> {
    fn position_of(&self, entity: Entity) -> Option<Vec3> {
        self.get(&entity).copied()
    }
}

impl<T: PositionLookup + ?Sized> PositionLookup for &T {
    fn position_of(&self, entity: Entity) -> Option<Vec3> {
        (**self).position_of(entity)
    }
}
