//! Simulation constants shared by the swimmer systems.
//!
//! These values reproduce the tuning of the original boat-rescue game and
//! seed the defaults of [`crate::config::SwimmerConfig`].

/// Mass of a swimmer in kilograms.
pub const MASS: f32 = 0.5;
/// Downward gravitational acceleration in metres per second squared.
pub const GRAVITY: f32 = 9.81;
/// Density of the fluid the swimmers bob in.
pub const FLUID_DENSITY: f32 = 2.0;
/// Density of the air above the waterline.
pub const AIR_DENSITY: f32 = 0.1225;
/// Quadratic drag coefficient.
pub const DRAG_COEFF: f32 = 1.05;
/// Height of the fluid surface.
pub const WATERLINE: f32 = 0.0;

/// Tick rate used to size the trail buffer.
pub const MAX_FPS: f32 = 60.0;
/// Default delay between a leader and its follower, in seconds.
pub const LAG_SECONDS: f32 = 1.0;
/// Smallest trail buffer able to bracket a target time.
pub const MIN_TRAIL_CAPACITY: usize = 2;

/// Speed at which a joining swimmer closes on its trail position.
pub const JOIN_SPEED: f32 = 5.0;
/// Distance under which a joining swimmer snaps onto the trail.
pub const JOIN_THRESHOLD: f32 = 0.1;
/// Idle spin about the X axis while floating, in radians per second.
pub const IDLE_SPIN_RATE: f32 = 5.0;

/// Smallest acceptable mass to avoid numerically unstable accelerations.
pub const MIN_MASS: f32 = 1e-6;
