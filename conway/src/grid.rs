// grid.rs - Fixed-size grid owning every cell, and the two-phase generation step

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::cell::{Cell, Neighborhood, ALIVE_GLYPH, DEAD_GLYPH};
use crate::config::SimConfig;
use crate::error::{LifeError, Result};

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,              // cells[row][column]
}

impl Grid {
    /// Creates a `rows` x `columns` grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::EmptyGrid { rows, columns });
        }

        let cells = (0..rows)
            .map(|row| (0..columns).map(|column| Cell::new(row, column)).collect())
            .collect();

        debug!(rows, columns, "created grid");
        Ok(Self { rows, columns, cells })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        Self::new(config.rows, config.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn position(&self, row: isize, column: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let column = usize::try_from(column).ok().filter(|&c| c < self.columns)?;
        Some((row, column))
    }

    /// The cell at (`row`, `column`), or `None` outside the grid.
    pub fn get_cell(&self, row: isize, column: isize) -> Option<&Cell> {
        let (row, column) = self.position(row, column)?;
        Some(&self.cells[row][column])
    }

    pub fn get_cell_mut(&mut self, row: isize, column: isize) -> Option<&mut Cell> {
        let (row, column) = self.position(row, column)?;
        Some(&mut self.cells[row][column])
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::make_dead);
    }

    /// Flips one cell. Returns false if the coordinate is outside the grid.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        match self.get_cell_mut(row as isize, column as isize) {
            Some(cell) => {
                cell.toggle();
                true
            }
            None => false,
        }
    }

    /// Advances the whole grid by one generation.
    pub fn step(&mut self) {
        self.evolve();
        self.advance();
    }

    // Every cell computes its next state from a frozen copy of this generation.
    fn evolve(&mut self) {
        let generation = self.snapshot();
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.evolve(&generation));
        trace!(population = self.population(), "evolve pass done");
    }

    // Only called once every cell has been evolved.
    pub(crate) fn advance(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::advance);
    }

    pub(crate) fn snapshot(&self) -> Generation {
        Generation {
            rows: self.rows,
            columns: self.columns,
            alive: self.cells().map(Cell::is_alive).collect(),
        }
    }

    pub(crate) fn clone_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.clone()
    }

    /// Installs rows evolved elsewhere. Every row must be present, in order.
    pub(crate) fn replace_rows(&mut self, rows: Vec<Vec<Cell>>) {
        debug_assert_eq!(rows.len(), self.rows);
        debug_assert!(rows.iter().all(|row| row.len() == self.columns));
        self.cells = rows;
    }
}

impl Neighborhood for Grid {
    fn is_alive_at(&self, row: isize, column: isize) -> Option<bool> {
        self.get_cell(row, column).map(Cell::is_alive)
    }
}

/// Liveness of every cell of one generation.
#[derive(Debug, Clone)]
pub(crate) struct Generation {
    rows: usize,
    columns: usize,
    alive: Vec<bool>,                   // Row-major
}

impl Neighborhood for Generation {
    fn is_alive_at(&self, row: isize, column: isize) -> Option<bool> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let column = usize::try_from(column).ok().filter(|&c| c < self.columns)?;
        Some(self.alive[row * self.columns + column])
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.cells().map(Cell::is_alive).eq(other.cells().map(Cell::is_alive))
    }
}

impl Eq for Grid {}

impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.columns.hash(state);
        for cell in self.cells() {
            cell.is_alive().hash(state);
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the glyph matrix written by `Display`. Blank lines are skipped.
impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines: Vec<(usize, Vec<bool>)> = Vec::new();

        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let states = line
                .chars()
                .enumerate()
                .map(|(column, glyph)| match glyph {
                    ALIVE_GLYPH => Ok(true),
                    DEAD_GLYPH => Ok(false),
                    _ => Err(LifeError::UnknownGlyph { line: index + 1, column: column + 1, glyph }),
                })
                .collect::<Result<Vec<bool>>>()?;
            lines.push((index + 1, states));
        }

        let columns = lines.first().map_or(0, |(_, states)| states.len());
        let mut grid = Grid::new(lines.len(), columns)?;

        for (row, (line, states)) in lines.into_iter().enumerate() {
            if states.len() != columns {
                return Err(LifeError::RaggedRows { line, expected: columns, found: states.len() });
            }
            for (column, alive) in states.into_iter().enumerate() {
                if alive {
                    grid.cells[row][column].make_alive();
                }
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (4, 7));
        assert_eq!(grid.cells().count(), 28);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn cells_know_their_coordinates() {
        let grid = Grid::new(3, 5).unwrap();
        for row in 0..3 {
            for column in 0..5 {
                let cell = grid.get_cell(row, column).unwrap();
                assert_eq!((cell.row() as isize, cell.column() as isize), (row, column));
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(Grid::new(0, 5), Err(LifeError::EmptyGrid { rows: 0, columns: 5 })));
        assert!(matches!(Grid::new(5, 0), Err(LifeError::EmptyGrid { .. })));
    }

    #[test]
    fn lookups_outside_the_grid_are_absent() {
        let grid = Grid::new(3, 4).unwrap();
        assert!(grid.get_cell(-1, 0).is_none());
        assert!(grid.get_cell(0, -1).is_none());
        assert!(grid.get_cell(3, 0).is_none());
        assert!(grid.get_cell(0, 4).is_none());
        assert!(grid.get_cell(2, 3).is_some());
    }

    #[test]
    fn blinker_turns_vertical() {
        let mut blinker = grid("---\n+++\n---");
        blinker.step();
        assert_eq!(blinker.to_string(), "-+-\n-+-\n-+-\n");
        blinker.step();
        assert_eq!(blinker.to_string(), "---\n+++\n---\n");
    }

    #[test]
    fn evolve_twice_before_advance_changes_nothing() {
        let mut blinker = grid("---\n+++\n---");
        blinker.evolve();
        let pending: Vec<_> = blinker.cells().map(Cell::will_be_alive).collect();
        blinker.evolve();
        assert_eq!(blinker.cells().map(Cell::will_be_alive).collect::<Vec<_>>(), pending);
        assert_eq!(blinker.to_string(), "---\n+++\n---\n");
        blinker.advance();
        assert_eq!(blinker.to_string(), "-+-\n-+-\n-+-\n");
    }

    #[test]
    fn toggle_and_clear() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.toggle(1, 1));
        assert!(!grid.toggle(2, 0));
        assert_eq!(grid.population(), 1);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn display_round_trips() {
        let text = "+--+\n-++-\n";
        assert_eq!(grid(text).to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("++\n+".parse::<Grid>(), Err(LifeError::RaggedRows { line: 2, expected: 2, found: 1 })));
        assert!(matches!("+x".parse::<Grid>(), Err(LifeError::UnknownGlyph { line: 1, column: 2, glyph: 'x' })));
        assert!(matches!("\n\n".parse::<Grid>(), Err(LifeError::EmptyGrid { .. })));
    }

    #[test]
    fn equality_ignores_pending_state() {
        let mut evolved = grid("+-\n-+");
        evolved.evolve();
        assert_eq!(evolved, grid("+-\n-+"));
        assert_ne!(evolved, grid("-+\n+-"));
    }

    #[test]
    fn snapshot_sees_the_same_cells() {
        let seeded = grid("+-+\n-+-");
        let generation = seeded.snapshot();
        for row in -1..3 {
            for column in -1..4 {
                assert_eq!(generation.is_alive_at(row, column), seeded.is_alive_at(row, column));
            }
        }
    }
}
