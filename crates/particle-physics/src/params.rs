//! Per-dispatch frame parameters

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::*;

/// Parameters shared by every particle in one dispatch
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameParams {
    pub gravity: [f32; 3],
    pub dt: f32,

    /// Fraction of full speed left when `age == lifetime`
    pub percentage_at_death: f32,
    pub coefficient_of_restitution: f32,
    /// Non-zero enables the per-particle restitution scale
    pub randomize_cor: u32,
    /// Mixed into the restitution seed; 0 seeds by particle index alone
    pub cor_seed: u32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            dt: DEFAULT_DT,
            percentage_at_death: DEFAULT_PERCENTAGE_AT_DEATH,
            coefficient_of_restitution: DEFAULT_RESTITUTION,
            randomize_cor: 0,
            cor_seed: 0,
        }
    }
}

impl FrameParams {
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity.to_array();
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_percentage_at_death(mut self, percentage: f32) -> Self {
        self.percentage_at_death = percentage;
        self
    }

    pub fn with_restitution(mut self, coefficient: f32) -> Self {
        self.coefficient_of_restitution = coefficient;
        self
    }

    pub fn with_randomized_restitution(mut self, enabled: bool) -> Self {
        self.randomize_cor = enabled as u32;
        self
    }

    pub fn with_cor_seed(mut self, seed: u32) -> Self {
        self.cor_seed = seed;
        self
    }

    pub fn gravity(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    pub fn randomizes_restitution(&self) -> bool {
        self.randomize_cor != 0
    }
}
