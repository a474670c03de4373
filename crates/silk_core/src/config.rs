use serde::{Deserialize, Serialize};

use crate::constants;

/// Simulation configuration, fixed at startup and read-only afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Lattice columns
    pub grid_width: u32,
    /// Lattice rows
    pub grid_height: u32,
    /// Distance between neighboring lattice sites
    pub spacing: f32,
    /// Integration step handed to the update kernel each frame
    pub time_step: f32,
    /// Starting age assigned to every particle
    pub initial_age: f32,
    /// Half-range of the per-axis velocity jitter at creation (0 = at rest)
    pub velocity_jitter: f32,
    /// Random seed for deterministic jitter
    pub seed: u64,
}

impl SimConfig {
    /// Total number of lattice sites; fixed after generation
    pub fn particle_count(&self) -> u32 {
        self.grid_width * self.grid_height
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: constants::GRID_WIDTH,
            grid_height: constants::GRID_HEIGHT,
            spacing: constants::SPACING,
            time_step: constants::TIME_STEP,
            initial_age: constants::INITIAL_AGE,
            velocity_jitter: constants::VELOCITY_JITTER,
            seed: constants::DEFAULT_SEED,
        }
    }
}
