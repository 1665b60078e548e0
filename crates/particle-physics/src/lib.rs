//! # Particle Physics Kernel
//!
//! Per-particle integration under gravity, collision against static spheres,
//! axis-aligned boxes and the ground plane, and lifetime-based respawn.
//!
//! The kernel reads colliders and frame parameters and writes a single
//! particle in place. It never allocates, logs or fails; input validation is
//! the host's job.

pub mod collider;
pub mod collision;
pub mod constants;
pub mod integrate;
pub mod kernel;
pub mod lifecycle;
pub mod params;
pub mod particle;
pub mod rng;

pub use collider::*;
pub use collision::*;
pub use constants::*;
pub use integrate::*;
pub use kernel::*;
pub use lifecycle::*;
pub use params::*;
pub use particle::*;
pub use rng::*;
