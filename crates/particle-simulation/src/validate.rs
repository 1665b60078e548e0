//! Input checks run before any dispatch
//!
//! A corrupted particle is not isolated once it is inside the kernel: NaN or
//! inf stays until lifecycle expiry resets it. Rejecting bad input here is the
//! only protection.

use particle_physics::{BoxCollider, FrameParams, Particle, SphereCollider};

use crate::error::{Result, SimulationError};

fn finite3(v: &[f32; 3]) -> bool {
    v.iter().all(|c| c.is_finite())
}

fn unit_interval(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Negative age is allowed and means a delayed spawn
pub fn validate_particle(index: usize, particle: &Particle) -> Result<()> {
    let fail = |reason: &str| -> Result<()> {
        Err(SimulationError::InvalidParticle {
            index,
            reason: reason.to_string(),
        })
    };

    if !(particle.lifetime.is_finite() && particle.lifetime > 0.0) {
        return fail("lifetime must be finite and greater than zero");
    }
    if !particle.age.is_finite() {
        return fail("age must be finite");
    }
    if !finite3(&particle.position) || !finite3(&particle.original_position) {
        return fail("position must be finite");
    }
    if !finite3(&particle.velocity) || !finite3(&particle.original_velocity) {
        return fail("velocity must be finite");
    }
    Ok(())
}

pub fn validate_particles(particles: &[Particle]) -> Result<()> {
    particles
        .iter()
        .enumerate()
        .try_for_each(|(index, p)| validate_particle(index, p))
}

pub fn validate_sphere(index: usize, sphere: &SphereCollider) -> Result<()> {
    if !finite3(&sphere.center) {
        return Err(SimulationError::InvalidSphere {
            index,
            reason: "center must be finite".into(),
        });
    }
    if !(sphere.radius.is_finite() && sphere.radius >= 0.0) {
        return Err(SimulationError::InvalidSphere {
            index,
            reason: format!("radius {} must be finite and non-negative", sphere.radius),
        });
    }
    Ok(())
}

pub fn validate_box(index: usize, aabb: &BoxCollider) -> Result<()> {
    if !finite3(&aabb.center) {
        return Err(SimulationError::InvalidBox {
            index,
            reason: "center must be finite".into(),
        });
    }
    if !aabb.extents.iter().all(|e| e.is_finite() && *e >= 0.0) {
        return Err(SimulationError::InvalidBox {
            index,
            reason: format!("extents {:?} must be finite and non-negative", aabb.extents),
        });
    }
    Ok(())
}

pub fn validate_params(params: &FrameParams) -> Result<()> {
    if !(params.dt.is_finite() && params.dt >= 0.0) {
        return Err(SimulationError::InvalidParams(format!(
            "dt {} must be finite and non-negative",
            params.dt
        )));
    }
    if !finite3(&params.gravity) {
        return Err(SimulationError::InvalidParams("gravity must be finite".into()));
    }
    if !unit_interval(params.percentage_at_death) {
        return Err(SimulationError::InvalidParams(format!(
            "percentage_at_death {} outside [0, 1]",
            params.percentage_at_death
        )));
    }
    if !unit_interval(params.coefficient_of_restitution) {
        return Err(SimulationError::InvalidParams(format!(
            "coefficient_of_restitution {} outside [0, 1]",
            params.coefficient_of_restitution
        )));
    }
    Ok(())
}
