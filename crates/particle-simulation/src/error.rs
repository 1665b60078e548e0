//! Errors raised at the host boundary
//!
//! The kernel itself has no error channel; everything here is caught before
//! a dispatch starts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("particle {index}: {reason}")]
    InvalidParticle { index: usize, reason: String },
    #[error("sphere collider {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },
    #[error("box collider {index}: {reason}")]
    InvalidBox { index: usize, reason: String },
    #[error("invalid frame parameters: {0}")]
    InvalidParams(String),
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
    #[error("particle index {index} out of range (count {len})")]
    ParticleOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
