// history.rs - Recent grid hashes, used to stop a run that has settled into a cycle

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::config::HISTORY_LEN;
use crate::grid::Grid;

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone)]
pub struct History {
    hashes: Vec<u64>,                   // Circular buffer once full
    capacity: usize,
    count: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_LEN)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { hashes: Vec::with_capacity(capacity), capacity, count: 0 }
    }

    /// Returns true if `grid` matches one of the last `capacity` recorded
    /// grids; otherwise remembers it and returns false.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let current_hash = hash_grid(grid);
        if self.hashes.contains(&current_hash) {
            debug!(recorded = self.count, "cycle detected");
            return true;
        }

        if self.hashes.len() < self.capacity {
            self.hashes.push(current_hash);
        } else {
            self.hashes[self.count % self.capacity] = current_hash;
        }
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.hashes.clear();
        self.count = 0;
    }

    /// Number of grids recorded since the last reset.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_life_repeats_immediately() {
        let mut block: Grid = "----\n-++-\n-++-\n----".parse().unwrap();
        let mut history = History::default();
        assert!(!history.record(&block));
        block.step();
        assert!(history.record(&block));
    }

    #[test]
    fn blinker_repeats_after_two_generations() {
        let mut blinker: Grid = "---\n+++\n---".parse().unwrap();
        let mut history = History::default();
        assert!(!history.record(&blinker));
        blinker.step();
        assert!(!history.record(&blinker));
        blinker.step();
        assert!(history.record(&blinker));
    }

    #[test]
    fn old_hashes_are_forgotten() {
        let mut history = History::new(2);
        let grids: Vec<Grid> = ["+-", "-+", "++"].iter().map(|text| text.parse().unwrap()).collect();
        for grid in &grids {
            assert!(!history.record(grid));
        }
        assert_eq!(history.len(), 3);
        // "+-" was overwritten by "++"
        assert!(!history.record(&grids[0]));
        assert!(history.record(&grids[0]));
    }

    #[test]
    fn reset_forgets_everything() {
        let grid = Grid::new(2, 2).unwrap();
        let mut history = History::default();
        history.record(&grid);
        history.reset();
        assert!(history.is_empty());
        assert!(!history.record(&grid));
    }
}
