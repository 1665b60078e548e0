//! Aging and respawn

use crate::particle::{LifeState, Particle};

/// Age the particle by `dt` and classify the result.
///
/// Aging happens in every state, so unborn particles count up towards birth.
pub fn advance_age(particle: &mut Particle, dt: f32) -> LifeState {
    particle.age += dt;
    particle.state()
}

/// Restore the spawn state
pub fn respawn(particle: &mut Particle) {
    particle.position = particle.original_position;
    particle.velocity = particle.original_velocity;
    particle.age = 0.0;
}
