#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing buoyant swimmers that trail a leader.
//!
//! A [`Swimmer`] bobs on a fluid surface under buoyancy and drag, idles,
//! and once told to trail a leader follows the exact path the leader took a
//! fixed lag earlier. History is kept in a fixed-capacity ring buffer and
//! interpolated between irregular frame timestamps.
pub mod buoyancy;
pub mod config;
pub mod constants;
pub mod error;
pub mod leader;
pub mod logging;
pub mod numeric;
pub mod plugin;
pub mod pose;
pub mod ring_buffer;
pub mod swimmer;
pub mod trail;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use buoyancy::BuoyancyState;
pub use config::{BuoyancyParams, SwimmerConfig};
pub use error::{ConfigError, Precondition, SwimmerError};
pub use leader::PositionLookup;
pub use logging::init as init_logging;
pub use plugin::{
    begin_trailing, snapshot_positions_system, sync_transforms_system, tick_swimmers_system,
    PositionSnapshot, SwimmerPlugin, SwimmerTickError, TickFailures,
};
pub use pose::{Collider, Pose};
pub use ring_buffer::{Sample, SampleRingBuffer};
pub use swimmer::{Swimmer, SwimmerPhase};
pub use trail::TrailResolver;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use swimmer::prelude::*;
    //! ```

    pub use crate::Collider;
    pub use crate::Pose;
    pub use crate::Swimmer;
    pub use crate::SwimmerConfig;
    pub use crate::SwimmerPhase;
    pub use crate::SwimmerPlugin;
}
