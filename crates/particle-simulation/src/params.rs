//! Host-side dispatch settings

use particle_physics::DEFAULT_BATCH_SIZE;

use crate::error::{Result, SimulationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Particles per unit of parallel work. Only affects throughput.
    pub batch_size: usize,
    /// Write the frame counter into `FrameParams::cor_seed` before each pass,
    /// so randomized restitution changes from frame to frame
    pub reseed_cor_per_frame: bool,
    /// Re-check frame parameters at the start of every step
    pub validate_each_frame: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            reseed_cor_per_frame: false,
            validate_each_frame: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_reseed_per_frame(mut self, enabled: bool) -> Self {
        self.reseed_cor_per_frame = enabled;
        self
    }

    pub fn with_frame_validation(mut self, enabled: bool) -> Self {
        self.validate_each_frame = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SimulationError::InvalidConfig(
                "batch_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
