//! Gravity integration with an end-of-life speed fade

use crate::params::FrameParams;
use crate::particle::Particle;

/// Speed multiplier for a particle of the given age.
///
/// Falls linearly from 1 at birth to `percentage_at_death` at
/// `age == lifetime`. `lifetime <= 0` yields NaN or inf, which the host is
/// expected to reject before dispatch.
#[inline]
pub fn fade_scale(age: f32, lifetime: f32, percentage_at_death: f32) -> f32 {
    let percent_age_left = (1.0 - age / lifetime).clamp(0.0, 1.0);
    (percent_age_left * (1.0 - percentage_at_death) + percentage_at_death).clamp(0.0, 1.0)
}

/// Advance velocity by gravity, then position by the faded velocity
pub fn integrate(particle: &mut Particle, params: &FrameParams) {
    let dt = params.dt;
    let velocity = particle.velocity() + params.gravity() * dt;
    let scale = fade_scale(particle.age, particle.lifetime, params.percentage_at_death);

    particle.set_velocity(velocity);
    particle.set_position(particle.position() + scale * velocity * dt);
}
