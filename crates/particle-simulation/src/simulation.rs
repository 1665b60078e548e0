//! CPU particle simulation manager
//!
//! One `step` is one full dispatch: the particle store is split into
//! fixed-size batches that rayon runs in parallel. Each particle is updated
//! through an exclusive `&mut`, colliders and frame parameters are shared
//! read-only, and the call returns only after every batch is done.

use particle_physics::{update_particle, FrameParams, LifeState, Particle, ParticleUpdate};
use rayon::prelude::*;

use crate::colliders::ColliderRegistry;
use crate::error::{Result, SimulationError};
use crate::params::SimulationConfig;
use crate::validate::{validate_params, validate_particle, validate_particles};

/// Counters gathered over one dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub unborn: usize,
    pub alive: usize,
    pub respawned: usize,
    pub sphere_hits: usize,
    pub box_hits: usize,
    pub ground_hits: usize,
}

impl FrameStats {
    fn record(&mut self, update: &ParticleUpdate) {
        match update.state {
            LifeState::Unborn => self.unborn += 1,
            LifeState::Alive => self.alive += 1,
            LifeState::Expired => self.respawned += 1,
        }
        self.sphere_hits += update.collisions.sphere_hits as usize;
        self.box_hits += update.collisions.box_hits as usize;
        self.ground_hits += update.collisions.ground_hit as usize;
    }

    /// Combine counters from two batches
    pub fn merge(self, other: Self) -> Self {
        Self {
            unborn: self.unborn + other.unborn,
            alive: self.alive + other.alive,
            respawned: self.respawned + other.respawned,
            sphere_hits: self.sphere_hits + other.sphere_hits,
            box_hits: self.box_hits + other.box_hits,
            ground_hits: self.ground_hits + other.ground_hits,
        }
    }

    /// Particles visited
    pub fn total(&self) -> usize {
        self.unborn + self.alive + self.respawned
    }

    pub fn collisions(&self) -> usize {
        self.sphere_hits + self.box_hits + self.ground_hits
    }
}

/// Particle store, colliders and the parameters for the next dispatch
pub struct ParticleSimulation {
    particles: Vec<Particle>,
    colliders: ColliderRegistry,
    params: FrameParams,
    config: SimulationConfig,
    frame: u64,
}

impl ParticleSimulation {
    pub fn new(
        particles: Vec<Particle>,
        colliders: ColliderRegistry,
        params: FrameParams,
        config: SimulationConfig,
    ) -> Result<Self> {
        config.validate()?;
        validate_params(&params)?;
        validate_particles(&particles)?;
        if particles.len() > u32::MAX as usize {
            return Err(SimulationError::InvalidConfig(format!(
                "{} particles exceed the u32 index range",
                particles.len()
            )));
        }

        log::info!(
            "Initialized ParticleSimulation: {} particles, {} spheres, {} boxes, batch size {}",
            particles.len(),
            colliders.sphere_count(),
            colliders.box_count(),
            config.batch_size
        );

        Ok(Self {
            particles,
            colliders,
            params,
            config,
            frame: 0,
        })
    }

    /// Run one dispatch with the current frame parameters
    pub fn step(&mut self) -> Result<FrameStats> {
        if self.config.validate_each_frame {
            if let Err(err) = validate_params(&self.params) {
                log::warn!("Frame {} not dispatched: {}", self.frame, err);
                return Err(err);
            }
        }

        let mut params = self.params;
        if self.config.reseed_cor_per_frame {
            params.cor_seed = self.frame as u32;
        }

        let colliders = self.colliders.as_set();
        let batch_size = self.config.batch_size;

        let stats = self
            .particles
            .par_chunks_mut(batch_size)
            .enumerate()
            .map(|(batch, chunk)| {
                let base = batch * batch_size;
                let mut stats = FrameStats::default();
                for (offset, particle) in chunk.iter_mut().enumerate() {
                    let update =
                        update_particle((base + offset) as u32, particle, &colliders, &params);
                    stats.record(&update);
                }
                stats
            })
            .reduce(FrameStats::default, FrameStats::merge);

        log::debug!(
            "Frame {}: {} alive, {} unborn, {} respawned, {} collisions",
            self.frame,
            stats.alive,
            stats.unborn,
            stats.respawned,
            stats.collisions()
        );

        self.frame += 1;
        Ok(stats)
    }

    /// Run one dispatch with `dt` replacing the stored timestep
    pub fn step_with_dt(&mut self, dt: f32) -> Result<FrameStats> {
        let params = self.params.with_dt(dt);
        validate_params(&params)?;
        self.params = params;
        self.step()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Result<&Particle> {
        self.particles
            .get(index)
            .ok_or(SimulationError::ParticleOutOfRange {
                index,
                len: self.particles.len(),
            })
    }

    /// Overwrite a single slot between frames
    pub fn replace_particle(&mut self, index: usize, particle: Particle) -> Result<()> {
        validate_particle(index, &particle)?;
        let len = self.particles.len();
        let slot = self
            .particles
            .get_mut(index)
            .ok_or(SimulationError::ParticleOutOfRange { index, len })?;
        *slot = particle;
        Ok(())
    }

    /// Particle buffer contents for readback or upload
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn colliders(&self) -> &ColliderRegistry {
        &self.colliders
    }

    /// Colliders can only change between frames
    pub fn colliders_mut(&mut self) -> &mut ColliderRegistry {
        &mut self.colliders
    }

    pub fn params(&self) -> &FrameParams {
        &self.params
    }

    pub fn set_params(&mut self, params: FrameParams) -> Result<()> {
        validate_params(&params)?;
        self.params = params;
        Ok(())
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of completed dispatches
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn column(count: usize) -> Vec<Particle> {
        (0..count)
            .map(|i| Particle::new(Vec3::new(i as f32, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 1.0))
            .collect()
    }

    #[test]
    fn test_rejects_zero_batch_size() {
        let result = ParticleSimulation::new(
            column(4),
            ColliderRegistry::new(),
            FrameParams::default(),
            SimulationConfig::default().with_batch_size(0),
        );
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_stats_cover_every_particle() {
        let mut sim = ParticleSimulation::new(
            column(100),
            ColliderRegistry::new(),
            FrameParams::default(),
            SimulationConfig::default().with_batch_size(7),
        )
        .unwrap();

        let stats = sim.step().unwrap();
        assert_eq!(stats.total(), 100);
        assert_eq!(stats.alive, 100);
        assert_eq!(sim.frame(), 1);
    }

    #[test]
    fn test_invalid_params_not_dispatched() {
        let mut sim = ParticleSimulation::new(
            column(3),
            ColliderRegistry::new(),
            FrameParams::default(),
            SimulationConfig::default(),
        )
        .unwrap();
        let before = sim.particles().to_vec();

        assert!(sim.step_with_dt(f32::NAN).is_err());
        assert!(sim.set_params(FrameParams::default().with_restitution(-1.0)).is_err());
        assert_eq!(sim.particles(), before.as_slice());
        assert_eq!(sim.frame(), 0);
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut sim = ParticleSimulation::new(
            column(2),
            ColliderRegistry::new(),
            FrameParams::default(),
            SimulationConfig::default(),
        )
        .unwrap();

        assert!(sim.particle(1).is_ok());
        assert_eq!(
            sim.particle(2).unwrap_err(),
            SimulationError::ParticleOutOfRange { index: 2, len: 2 }
        );

        let replacement = Particle::new(Vec3::splat(5.0), Vec3::ZERO, 3.0);
        sim.replace_particle(0, replacement).unwrap();
        assert_eq!(*sim.particle(0).unwrap(), replacement);
        assert!(sim.replace_particle(9, replacement).is_err());
        assert_eq!(sim.particle_bytes().len(), 2 * std::mem::size_of::<Particle>());
    }

    #[test]
    fn test_merge_is_additive() {
        let a = FrameStats {
            alive: 3,
            ground_hits: 1,
            ..Default::default()
        };
        let b = FrameStats {
            alive: 2,
            respawned: 4,
            sphere_hits: 2,
            ..Default::default()
        };
        let merged = a.merge(b);
        assert_eq!(merged.total(), 9);
        assert_eq!(merged.collisions(), 3);
    }
}
