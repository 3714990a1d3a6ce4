// config.rs - Simulation settings shared by the front-ends

use std::time::Duration;

pub const GRID_SIZE: usize = 50;                      // Default playing area (50x50)
pub const UPDATE_INTERVAL_MS: u64 = 200;              // Default delay between generations
pub const HISTORY_LEN: usize = 10;                    // Grid hashes kept for cycle detection

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub rows: usize,
    pub columns: usize,
    pub update_interval: Duration,
    pub history_len: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: GRID_SIZE,
            columns: GRID_SIZE,
            update_interval: Duration::from_millis(UPDATE_INTERVAL_MS),
            history_len: HISTORY_LEN,
        }
    }
}

impl SimConfig {
    /// Generations per second implied by `update_interval`.
    pub fn speed(&self) -> f32 {
        1000.0 / self.update_interval.as_millis().max(1) as f32
    }

    pub fn set_speed(&mut self, generations_per_sec: f32) {
        let millis = (1000.0 / generations_per_sec.max(0.001)) as u64;
        self.update_interval = Duration::from_millis(millis.max(1));
    }
}
