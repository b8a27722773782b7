//! Behavioural state machine for a single swimmer.
//!
//! Every tick applies buoyancy first, then the behaviour of the current
//! [`SwimmerPhase`]:
//!
//! | Phase       | Motion                                         | Leaves when                  |
//! |-------------|------------------------------------------------|------------------------------|
//! | `Entering`  | none                                           | first tick → `Floating`      |
//! | `Floating`  | idle spin about X                              | `begin_trailing` → `Joining` |
//! | `Joining`   | fixed-speed steps towards the trail position   | within threshold → `Following` |
//! | `Following` | snaps to the trail position                    | external trigger             |
//! | `Docking`   | none (owned by gameplay)                       | external trigger             |
//! | `Hitting`   | none (owned by gameplay)                       | external trigger             |
//!
//! A trailing swimmer whose leader can no longer be resolved releases it
//! and drops back to `Floating`, so the loss surfaces as a single error.

use bevy::prelude::*;
use glam::Vec3;
use log::debug;

use crate::buoyancy::BuoyancyState;
use crate::config::SwimmerConfig;
use crate::error::{Precondition, SwimmerError};
use crate::leader::PositionLookup;
use crate::pose::Pose;
use crate::trail::TrailResolver;
use crate::vector_math::step_towards;

/// Behavioural phase of a swimmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SwimmerPhase {
    /// Freshly spawned; becomes `Floating` on the first tick.
    #[default]
    Entering,
    /// Bobbing idly in place.
    Floating,
    /// Closing in on the leader's trail.
    Joining,
    /// Locked onto the leader's trail.
    Following,
    /// Being docked by gameplay logic.
    Docking,
    /// Reacting to the leader hitting something.
    Hitting,
}

/// A buoyant actor that can trail a leader along its delayed path.
#[derive(Component, Debug, Clone)]
pub struct Swimmer {
    config: SwimmerConfig,
    phase: SwimmerPhase,
    leader: Option<Entity>,
    trail: TrailResolver,
    buoyancy: BuoyancyState,
    enabled: bool,
}

impl Default for Swimmer {
    fn default() -> Self {
        Self::new(SwimmerConfig::default())
    }
}

impl Swimmer {
    /// Creates an enabled swimmer in the `Entering` phase.
    ///
    /// The trail buffer is sized once from `config` and never grows.
    #[must_use]
    pub fn new(config: SwimmerConfig) -> Self {
        Self {
            trail: TrailResolver::new(config.lag_seconds, config.trail_capacity()),
            config,
            phase: SwimmerPhase::Entering,
            leader: None,
            buoyancy: BuoyancyState::default(),
            enabled: true,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SwimmerPhase {
        self.phase
    }

    /// Handle of the leader being trailed, if any.
    #[must_use]
    pub const fn leader(&self) -> Option<Entity> {
        self.leader
    }

    /// Tuning this swimmer was built with.
    #[must_use]
    pub const fn config(&self) -> &SwimmerConfig {
        &self.config
    }

    /// Vertical velocity from the buoyancy integrator.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.buoyancy.velocity
    }

    /// The trail history and clock.
    #[must_use]
    pub const fn trail(&self) -> &TrailResolver {
        &self.trail
    }

    /// Whether gameplay currently counts this swimmer.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the swimmer for gameplay queries.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True only when enabled and locked onto a trail.
    #[must_use]
    pub fn is_actively_following(&self) -> bool {
        self.enabled && self.phase == SwimmerPhase::Following
    }

    fn transition(&mut self, next: SwimmerPhase) {
        if self.phase != next {
            debug!("swimmer phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    /// Starts trailing `leader`, anchoring the trail at its current position.
    ///
    /// `this` is the swimmer's own handle and guards against self-follow;
    /// pass [`Entity::PLACEHOLDER`] when the swimmer has none.
    ///
    /// # Errors
    /// Returns [`SwimmerError::PreconditionViolation`] for a placeholder or
    /// self leader, or a leader missing from `leaders`. The swimmer is left
    /// unchanged on error.
    pub fn begin_trailing(
        &mut self,
        this: Entity,
        leader: Entity,
        leaders: &impl PositionLookup,
    ) -> Result<(), SwimmerError> {
        if leader == Entity::PLACEHOLDER {
            return Err(Precondition::NullLeader.into());
        }
        if leader == this {
            return Err(Precondition::SelfLeader.into());
        }
        let anchor = leaders
            .position_of(leader)
            .ok_or(Precondition::UnknownLeader(leader))?;
        self.leader = Some(leader);
        self.trail.begin(anchor);
        self.transition(SwimmerPhase::Joining);
        Ok(())
    }

    /// Switches to `Hitting` from any phase.
    pub fn start_hitting(&mut self) {
        self.transition(SwimmerPhase::Hitting);
    }

    /// Switches to `Docking` from any phase.
    pub fn start_docking(&mut self) {
        self.transition(SwimmerPhase::Docking);
    }

    /// Advances the swimmer by `dt` seconds.
    ///
    /// Buoyancy is applied to `pose` before any phase behaviour, so it still
    /// takes effect when this returns an error.
    ///
    /// # Errors
    /// Returns [`SwimmerError::LeaderUnavailable`] when a trailing phase can
    /// no longer resolve its leader. The phase motion is skipped, the leader
    /// is released and the swimmer is back to `Floating` for the next tick.
    pub fn tick(
        &mut self,
        dt: f32,
        pose: &mut Pose,
        half_extents: Vec3,
        leaders: &impl PositionLookup,
    ) -> Result<(), SwimmerError> {
        pose.position.y =
            self.buoyancy
                .integrate(&self.config.buoyancy, pose.position.y, half_extents, dt);

        match self.phase {
            SwimmerPhase::Entering => self.transition(SwimmerPhase::Floating),
            SwimmerPhase::Floating => pose.rotation.x += self.config.idle_spin_rate * dt,
            SwimmerPhase::Joining => {
                let target = self.trail_position(dt, leaders)?;
                self.join(dt, pose, target);
            }
            SwimmerPhase::Following => pose.position = self.trail_position(dt, leaders)?,
            SwimmerPhase::Docking | SwimmerPhase::Hitting => {}
        }
        Ok(())
    }

    fn trail_position(
        &mut self,
        dt: f32,
        leaders: &impl PositionLookup,
    ) -> Result<Vec3, SwimmerError> {
        let leader = self
            .leader
            .ok_or(SwimmerError::PreconditionViolation(Precondition::NullLeader))?;
        let Some(current) = leaders.position_of(leader) else {
            self.release_leader();
            return Err(SwimmerError::LeaderUnavailable(leader));
        };
        Ok(self.trail.resolve(current, dt))
    }

    fn release_leader(&mut self) {
        self.leader = None;
        self.transition(SwimmerPhase::Floating);
    }

    fn join(&mut self, dt: f32, pose: &mut Pose, target: Vec3) {
        if pose.position.distance(target) > self.config.join_threshold {
            pose.position = step_towards(pose.position, target, self.config.join_speed * dt);
        } else {
            self.transition(SwimmerPhase::Following);
        }
    }
}
