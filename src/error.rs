//! Error types surfaced by the swimmer core.
//!
//! Degenerate interpolation spans and thin trail history are recovered inside
//! the resolver and never appear here.

use bevy::prelude::Entity;
use thiserror::Error;

/// Failures raised by the swimmer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwimmerError {
    /// A trigger was called with arguments it cannot accept.
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),
    /// The leader handle no longer resolves to a position.
    #[error("leader {0:?} is unavailable")]
    LeaderUnavailable(Entity),
}

/// Preconditions checked by [`crate::Swimmer::begin_trailing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    /// The leader handle was the null placeholder.
    #[error("leader handle is null")]
    NullLeader,
    /// The swimmer was asked to trail itself.
    #[error("a swimmer cannot trail itself")]
    SelfLeader,
    /// The leader handle could not be resolved when trailing began.
    #[error("leader {0:?} has no position")]
    UnknownLeader(Entity),
    /// The follower handle does not carry a swimmer.
    #[error("{0:?} is not a swimmer")]
    NotASwimmer(Entity),
}

impl From<Precondition> for SwimmerError {
    fn from(value: Precondition) -> Self {
        Self::PreconditionViolation(value)
    }
}

/// Failures raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field is out of its accepted range.
    #[error("invalid `{field}`: {value} ({reason})")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
