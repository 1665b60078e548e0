//! # Particle Simulation Engine
//!
//! Host side of the particle kernel: owns the particle store and collider
//! registry, validates inputs, and runs one data-parallel pass per frame.

pub mod colliders;
pub mod error;
pub mod params;
pub mod simulation;
pub mod validate;

pub use colliders::*;
pub use error::*;
pub use params::*;
pub use simulation::*;
