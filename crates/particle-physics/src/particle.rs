//! Particle record and lifecycle state

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Lifecycle state of a particle, derived from `age` and `lifetime`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    /// `age < 0`: spawn is delayed, the particle only ages
    Unborn,
    /// `0 <= age <= lifetime`: fully simulated
    Alive,
    /// `age > lifetime`: reset to the spawn state this step
    Expired,
}

impl LifeState {
    /// Classify an `(age, lifetime)` pair.
    ///
    /// A NaN age compares false against everything and is treated as alive,
    /// so corruption keeps propagating until the host resets the particle.
    pub fn classify(age: f32, lifetime: f32) -> Self {
        if age < 0.0 {
            LifeState::Unborn
        } else if age > lifetime {
            LifeState::Expired
        } else {
            LifeState::Alive
        }
    }
}

/// Buffer-compatible particle structure
/// Tightly packed `f32` fields so a slice casts straight to bytes for upload
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Current world-space position
    pub position: [f32; 3],
    /// Spawn position, restored on reset
    pub original_position: [f32; 3],
    /// Current world-space velocity
    pub velocity: [f32; 3],
    /// Spawn velocity, restored on reset
    pub original_velocity: [f32; 3],
    /// Age budget before the particle is recycled
    pub lifetime: f32,
    /// Time since the last (re)spawn; negative while the spawn is delayed
    pub age: f32,
}

impl Particle {
    /// Create a particle that is alive immediately
    pub fn new(position: Vec3, velocity: Vec3, lifetime: f32) -> Self {
        Self {
            position: position.to_array(),
            original_position: position.to_array(),
            velocity: velocity.to_array(),
            original_velocity: velocity.to_array(),
            lifetime,
            age: 0.0,
        }
    }

    /// Create a particle whose spawn is delayed by `delay` seconds
    pub fn delayed(position: Vec3, velocity: Vec3, lifetime: f32, delay: f32) -> Self {
        Self {
            age: -delay.max(0.0),
            ..Self::new(position, velocity, lifetime)
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn velocity(&self) -> Vec3 {
        Vec3::from_array(self.velocity)
    }

    pub fn original_position(&self) -> Vec3 {
        Vec3::from_array(self.original_position)
    }

    pub fn original_velocity(&self) -> Vec3 {
        Vec3::from_array(self.original_velocity)
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity.to_array();
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifeState {
        LifeState::classify(self.age, self.lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(LifeState::classify(-0.1, 1.0), LifeState::Unborn);
        assert_eq!(LifeState::classify(0.0, 1.0), LifeState::Alive);
        assert_eq!(LifeState::classify(1.0, 1.0), LifeState::Alive);
        assert_eq!(LifeState::classify(1.01, 1.0), LifeState::Expired);
    }

    #[test]
    fn test_delayed_spawn_is_unborn() {
        let p = Particle::delayed(Vec3::ONE, Vec3::Y, 2.0, 0.5);
        assert_eq!(p.age, -0.5);
        assert_eq!(p.state(), LifeState::Unborn);
        assert_eq!(p.original_position(), Vec3::ONE);
        assert_eq!(p.original_velocity(), Vec3::Y);
    }

    #[test]
    fn test_particle_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Particle>(), 14 * 4);
        let particles = [Particle::new(Vec3::X, Vec3::Y, 1.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&particles);
        assert_eq!(bytes.len(), 56);
    }
}
