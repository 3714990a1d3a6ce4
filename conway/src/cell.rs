// cell.rs - A single cell of the grid and Conway's rules

use std::fmt;

pub const ALIVE_GLYPH: char = '+';
pub const DEAD_GLYPH: char = '-';

// Offsets of the 8 surrounding positions
const NEIGHBORS: [(isize, isize); 8] = [
    (-1,-1),(-1,0),(-1,1),(0,-1),
    (1,-1),(1,0),(1,1),(0,1)
];

/// Read-only view of one generation, queried by coordinate.
///
/// `None` means there is no cell at that coordinate. Neighbor counting treats
/// it as dead, which is what gives the grid its fixed, non-wrapping edges.
pub trait Neighborhood {
    fn is_alive_at(&self, row: isize, column: isize) -> Option<bool>;
}

/// Conway's rule table.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    alive: bool,
    will_be_alive: Option<bool>,        // Set by evolve(), consumed by advance()
    row: usize,
    column: usize,
}

impl Cell {
    /// A new, initially dead cell at (`row`, `column`).
    pub fn new(row: usize, column: usize) -> Self {
        Self { alive: false, will_be_alive: None, row, column }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn make_alive(&mut self) {
        self.alive = true;
    }

    pub fn make_dead(&mut self) {
        self.alive = false;
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Pending state for the next generation, if `evolve` has run since the
    /// last `advance`.
    pub fn will_be_alive(&self) -> Option<bool> {
        self.will_be_alive
    }

    pub fn glyph(&self) -> char {
        if self.alive { ALIVE_GLYPH } else { DEAD_GLYPH }
    }

    /// Number of live cells among the 8 surrounding positions.
    pub fn count_live_neighbors<N: Neighborhood + ?Sized>(&self, neighborhood: &N) -> usize {
        let (row, column) = (self.row as isize, self.column as isize);
        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| neighborhood.is_alive_at(row + dr, column + dc) == Some(true))
            .count()
    }

    /// Computes the next state from the current one. Leaves `is_alive` untouched.
    pub fn evolve<N: Neighborhood + ?Sized>(&mut self, neighborhood: &N) {
        let live_neighbors = self.count_live_neighbors(neighborhood);
        self.will_be_alive = Some(next_state(self.alive, live_neighbors));
    }

    /// Adopts the state computed by the last `evolve`. A cell that was not
    /// evolved keeps its state.
    pub fn advance(&mut self) {
        if let Some(next) = self.will_be_alive.take() {
            self.alive = next;
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
