//! Constants shared by the integrator and collision resolver
//!
//! Values are in simulation units (meters and seconds for the demo scene).

/// Outward offset applied at a collision surface so the particle does not
/// re-penetrate on the next step
pub const COLLISION_EPSILON: f32 = 0.005;

/// Default gravity (y-up)
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

/// Default timestep (one frame at 60 Hz)
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default coefficient of restitution
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Default fraction of full speed kept at end of life
pub const DEFAULT_PERCENTAGE_AT_DEATH: f32 = 0.0;

/// Width of one tile of parallel work, matching a 64-wide compute workgroup
pub const DEFAULT_BATCH_SIZE: usize = 64;
