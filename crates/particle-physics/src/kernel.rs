//! Per-particle update: aging, integration, collision and respawn
//!
//! `update_particle` touches nothing but its own particle, so a host may run
//! it for every index in any order or in parallel.

use crate::collider::ColliderSet;
use crate::collision::{effective_restitution, resolve_collisions, CollisionReport};
use crate::integrate::integrate;
use crate::lifecycle::{advance_age, respawn};
use crate::params::FrameParams;
use crate::particle::{LifeState, Particle};
use crate::rng::restitution_scale;

/// Outcome of one particle update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleUpdate {
    /// State after aging; `Expired` means the particle was respawned
    pub state: LifeState,
    pub collisions: CollisionReport,
}

/// Restitution for the particle at `index` this frame
#[inline]
pub fn restitution_for(index: u32, params: &FrameParams) -> f32 {
    let cor_scale = if params.randomizes_restitution() {
        restitution_scale(index, params.cor_seed)
    } else {
        1.0
    };
    effective_restitution(params.coefficient_of_restitution, cor_scale)
}

/// Advance one particle by `params.dt`
pub fn update_particle(
    index: u32,
    particle: &mut Particle,
    colliders: &ColliderSet<'_>,
    params: &FrameParams,
) -> ParticleUpdate {
    let state = advance_age(particle, params.dt);

    let collisions = match state {
        LifeState::Unborn => CollisionReport::default(),
        LifeState::Alive => {
            let prev = particle.position();
            integrate(particle, params);
            resolve_collisions(particle, prev, colliders, restitution_for(index, params))
        }
        // Integrating first would be overwritten by the respawn
        LifeState::Expired => {
            respawn(particle);
            CollisionReport::default()
        }
    };

    ParticleUpdate { state, collisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::{BoxCollider, SphereCollider};
    use crate::constants::COLLISION_EPSILON;
    use glam::Vec3;

    #[test]
    fn test_unborn_only_ages() {
        let params = FrameParams::default().with_dt(0.1);
        let mut p = Particle::delayed(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 2.0, 3.0), 1.0, 1.0);

        let update = update_particle(0, &mut p, &ColliderSet::empty(), &params);

        assert_eq!(update.state, LifeState::Unborn);
        assert!((p.age - -0.9).abs() < 1e-6);
        assert_eq!(p.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(p.velocity(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_expired_respawns() {
        let params = FrameParams::default().with_dt(0.1);
        let mut p = Particle::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 1.0);
        p.set_position(Vec3::new(9.0, 9.0, 9.0));
        p.set_velocity(Vec3::new(-3.0, -3.0, -3.0));
        p.age = 0.95;

        let update = update_particle(0, &mut p, &ColliderSet::empty(), &params);

        assert_eq!(update.state, LifeState::Expired);
        assert_eq!(p.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(p.velocity(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn test_alive_falls_and_bounces_on_ground() {
        let params = FrameParams::default()
            .with_dt(0.1)
            .with_gravity(Vec3::ZERO)
            .with_percentage_at_death(1.0)
            .with_restitution(0.5);
        let mut p = Particle::new(Vec3::new(0.0, 0.05, 0.0), Vec3::new(1.0, -1.0, 0.0), 10.0);

        let update = update_particle(3, &mut p, &ColliderSet::empty(), &params);

        assert_eq!(update.state, LifeState::Alive);
        assert!(update.collisions.ground_hit);
        assert_eq!(p.position[1], COLLISION_EPSILON);
        assert_eq!(p.velocity, [1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_spheres_before_boxes() {
        let params = FrameParams::default()
            .with_dt(1.0)
            .with_gravity(Vec3::ZERO)
            .with_percentage_at_death(1.0)
            .with_restitution(1.0);
        let spheres = [SphereCollider::new(Vec3::new(0.0, 5.0, 0.0), 1.0)];
        let boxes = [BoxCollider::new(Vec3::new(0.0, 50.0, 0.0), Vec3::ONE)];
        let colliders = ColliderSet::new(&spheres, &boxes);
        let mut p = Particle::new(Vec3::new(0.0, 7.0, 0.0), Vec3::new(0.0, -2.0, 0.0), 10.0);

        let update = update_particle(0, &mut p, &colliders, &params);

        assert_eq!(update.collisions.sphere_hits, 1);
        assert_eq!(update.collisions.box_hits, 0);
        assert!((p.position[1] - (6.0 + COLLISION_EPSILON)).abs() < 1e-5);
        assert_eq!(p.velocity, [0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_randomized_restitution_is_per_index() {
        let params = FrameParams::default()
            .with_restitution(1.0)
            .with_randomized_restitution(true);

        let first = restitution_for(0, &params);
        assert_eq!(first, restitution_for(0, &params));
        assert!((0.0..1.0).contains(&first));
        assert!((1..64).any(|i| restitution_for(i, &params) != first));

        let fixed = FrameParams::default().with_restitution(0.7);
        assert_eq!(restitution_for(0, &fixed), 0.7);
        assert_eq!(restitution_for(99, &fixed), 0.7);
    }
}
